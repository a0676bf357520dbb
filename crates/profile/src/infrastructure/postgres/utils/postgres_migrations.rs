// crates/profile/src/infrastructure/postgres/utils/postgres_migrations.rs

use shared_kernel::errors::Result;
use shared_kernel::infrastructure::postgres::SqlxErrorExt;
use sqlx::PgPool;

use crate::domain::entities::UserProfile;

/// Applique le schéma au démarrage, idempotent
pub async fn run_postgres_migrations(pool: &PgPool) -> Result<()> {
    let sql = r#"
        CREATE TABLE IF NOT EXISTS user_profiles (
            username      TEXT PRIMARY KEY,
            name          TEXT,
            avatar_url    TEXT,
            location      TEXT,
            bio           TEXT,
            public_repos  BIGINT NOT NULL DEFAULT 0,
            public_gists  BIGINT NOT NULL DEFAULT 0,
            followers     BIGINT NOT NULL DEFAULT 0,
            following     BIGINT NOT NULL DEFAULT 0,
            created_at    TIMESTAMPTZ NOT NULL,
            updated_at    TIMESTAMPTZ NOT NULL,
            friends       TEXT[] NOT NULL DEFAULT '{}',
            soft_deleted  BOOLEAN NOT NULL DEFAULT FALSE
        )
    "#;

    sqlx::query(sql)
        .execute(pool)
        .await
        .map_domain::<UserProfile>()?;

    Ok(())
}
