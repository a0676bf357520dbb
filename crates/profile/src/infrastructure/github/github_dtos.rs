// crates/profile/src/infrastructure/github/github_dtos.rs

use chrono::{DateTime, Utc};
use serde::Deserialize;
use shared_kernel::domain::value_objects::Login;

use crate::application::ports::ProfileSnapshot;

/// Réponse de `GET /users/{login}`, réduite aux champs qu'on persiste
#[derive(Debug, Deserialize)]
pub struct GithubUserDto {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    #[serde(default)]
    pub public_repos: i64,
    #[serde(default)]
    pub public_gists: i64,
    #[serde(default)]
    pub followers: i64,
    #[serde(default)]
    pub following: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<GithubUserDto> for ProfileSnapshot {
    fn from(dto: GithubUserDto) -> Self {
        ProfileSnapshot {
            login: Login::from_raw(dto.login),
            name: dto.name,
            avatar_url: dto.avatar_url,
            location: dto.location,
            bio: dto.bio,
            public_repos: dto.public_repos,
            public_gists: dto.public_gists,
            followers: dto.followers,
            following: dto.following,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        }
    }
}

/// Élément des listes followers / following, seul le login nous sert
#[derive(Debug, Deserialize)]
pub struct GithubAccountRefDto {
    pub login: String,
}
