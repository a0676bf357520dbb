// crates/profile/src/infrastructure/postgres/rows/postgres_profile_row.rs

use chrono::{DateTime, Utc};
use shared_kernel::domain::value_objects::Login;
use sqlx::FromRow;

use crate::domain::entities::UserProfile;

/// Ligne brute de `user_profiles`. Reconstruction via `Login::from_raw` :
/// la donnée a déjà été validée en entrée, on ne re-valide pas à la lecture.
#[derive(Debug, FromRow)]
pub struct PostgresProfileRow {
    pub username: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub public_repos: i64,
    pub public_gists: i64,
    pub followers: i64,
    pub following: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub friends: Vec<String>,
    pub soft_deleted: bool,
}

impl From<PostgresProfileRow> for UserProfile {
    fn from(row: PostgresProfileRow) -> Self {
        UserProfile {
            username: Login::from_raw(row.username),
            name: row.name,
            avatar_url: row.avatar_url,
            location: row.location,
            bio: row.bio,
            public_repos: row.public_repos,
            public_gists: row.public_gists,
            followers: row.followers,
            following: row.following,
            created_at: row.created_at,
            updated_at: row.updated_at,
            friends: row.friends.into_iter().map(Login::from_raw).collect(),
            soft_deleted: row.soft_deleted,
        }
    }
}
