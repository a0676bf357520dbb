// crates/profile/src/infrastructure/api/http/dto.rs

use serde::{Deserialize, Serialize};

use crate::domain::params::ProfilePatch;

#[derive(Debug, Deserialize)]
pub struct AddUserRequest {
    pub username: String,
}

/// Corps du PUT : strictement les champs mutables, tout le reste est rejeté
/// par oubli (les champs inconnus sont ignorés, l'identité n'est pas patchable).
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub public_repos: Option<i64>,
    pub public_gists: Option<i64>,
    pub followers: Option<i64>,
    pub following: Option<i64>,
}

impl From<UpdateUserRequest> for ProfilePatch {
    fn from(body: UpdateUserRequest) -> Self {
        ProfilePatch {
            name: body.name,
            avatar_url: body.avatar_url,
            location: body.location,
            bio: body.bio,
            public_repos: body.public_repos,
            public_gists: body.public_gists,
            followers: body.followers,
            following: body.following,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchUsersQuery {
    pub username: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListUsersQuery {
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
