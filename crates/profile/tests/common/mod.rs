// crates/profile/tests/common/mod.rs

use chrono::{TimeZone, Utc};
use profile::domain::entities::UserProfile;
use profile::infrastructure::postgres::repositories::PostgresProfileRepository;
use profile::infrastructure::postgres::utils::run_postgres_migrations;
use shared_kernel::domain::value_objects::Login;
use shared_kernel::infrastructure::postgres::utils::setup_test_postgres;
use sqlx::PgPool;
use testcontainers::ContainerAsync;
use testcontainers_modules::postgres::Postgres as PostgresImage;

/// Postgres éphémère avec le schéma appliqué. Le container est renvoyé pour
/// qu'il vive aussi longtemps que le test.
pub async fn setup_repository() -> (
    PostgresProfileRepository,
    PgPool,
    ContainerAsync<PostgresImage>,
) {
    let (pool, container) = setup_test_postgres().await;
    run_postgres_migrations(&pool)
        .await
        .expect("schema migration should succeed");

    (PostgresProfileRepository::new(pool.clone()), pool, container)
}

/// Profil de fixture entièrement renseigné
pub fn profile_fixture(username: &str) -> UserProfile {
    UserProfile {
        username: Login::from_raw(username),
        name: Some(format!("{username} Display")),
        avatar_url: Some(format!("https://avatars.test/{username}.png")),
        location: Some("Lyon".to_string()),
        bio: Some("writes code".to_string()),
        public_repos: 12,
        public_gists: 3,
        followers: 40,
        following: 15,
        created_at: Utc.with_ymd_and_hms(2015, 4, 1, 9, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 11, 20, 16, 30, 0).unwrap(),
        friends: Vec::new(),
        soft_deleted: false,
    }
}
