// crates/profile/src/domain/entities/user_profile.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::domain::value_objects::Login;

use crate::application::ports::ProfileSnapshot;

/// Snapshot persisté d'un profil annuaire.
///
/// Les champs descriptifs et les compteurs sont figés au moment du premier
/// fetch : le workflow ne les resynchronise jamais avec le service amont
/// (compromis de fraîcheur assumé, voir DESIGN.md). Seuls un update explicite
/// et le recalcul des amis mutuels mutent un enregistrement existant.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub username: Login,
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
    /// Références faibles vers d'autres profils stockés (par username).
    /// L'ordre est sans signification.
    pub friends: Vec<Login>,
    /// Tombstone : jamais de suppression physique par ce workflow.
    pub soft_deleted: bool,
}

impl UserProfile {
    /// Mapping direct snapshot -> entité, à la première réussite du fetch
    pub fn from_snapshot(snapshot: ProfileSnapshot) -> Self {
        Self {
            username: snapshot.login,
            name: snapshot.name,
            avatar_url: snapshot.avatar_url,
            location: snapshot.location,
            bio: snapshot.bio,
            public_repos: snapshot.public_repos,
            public_gists: snapshot.public_gists,
            followers: snapshot.followers,
            following: snapshot.following,
            created_at: snapshot.created_at,
            updated_at: snapshot.updated_at,
            friends: Vec::new(),
            soft_deleted: false,
        }
    }
}

impl EntityMetadata for UserProfile {
    fn entity_name() -> &'static str {
        "UserProfile"
    }

    fn map_constraint_to_field(constraint: &str) -> &'static str {
        match constraint {
            "user_profiles_pkey" => "username",
            _ => "unique_constraint",
        }
    }
}
