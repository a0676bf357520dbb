// crates/profile/src/domain/params/profile_patch.rs

use serde::{Deserialize, Serialize};

/// Patch partiel d'un profil : whitelist explicite des champs mutables.
///
/// L'identité (`username`), les timestamps annuaire, la liste d'amis et le
/// tombstone ne passent jamais par ici. Un champ à `None` reste inchangé.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub public_repos: Option<i64>,
    pub public_gists: Option<i64>,
    pub followers: Option<i64>,
    pub following: Option<i64>,
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.avatar_url.is_none()
            && self.location.is_none()
            && self.bio.is_none()
            && self.public_repos.is_none()
            && self.public_gists.is_none()
            && self.followers.is_none()
            && self.following.is_none()
    }
}
