// crates/profile/src/domain/repositories/profile_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::value_objects::Login;
use shared_kernel::errors::Result;

use crate::domain::entities::UserProfile;
use crate::domain::params::{ProfilePatch, SortField};

/// Port de persistance des profils.
///
/// Toutes les lectures filtrent les tombstones (`soft_deleted = false`) :
/// un enregistrement soft-deleted n'est plus jamais visible par ce port.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_active_by_username(&self, username: &Login) -> Result<Option<UserProfile>>;

    /// Insertion initiale. Une violation d'unicité sur `username` remonte en
    /// `DomainError::AlreadyExists` (le perdant d'une course d'insertion la
    /// voit comme une panne de store, jamais comme un crash).
    async fn insert(&self, profile: &UserProfile) -> Result<()>;

    async fn find_active_in(&self, usernames: &[Login]) -> Result<Vec<UserProfile>>;

    /// Remplace intégralement la liste d'amis du profil actif visé.
    async fn replace_friends(&self, username: &Login, friends: &[Login]) -> Result<()>;

    /// Pose le tombstone et renvoie l'enregistrement marqué ; `None` si aucun
    /// profil actif ne correspond (y compris un profil déjà soft-deleted).
    async fn mark_soft_deleted(&self, username: &Login) -> Result<Option<UserProfile>>;

    async fn update_fields(
        &self,
        username: &Login,
        patch: &ProfilePatch,
    ) -> Result<Option<UserProfile>>;

    /// Sous-chaînes insensibles à la casse ; filtre absent = match-all.
    async fn search_active(
        &self,
        username_contains: Option<&str>,
        location_contains: Option<&str>,
    ) -> Result<Vec<UserProfile>>;

    async fn list_active_sorted(&self, sort: SortField) -> Result<Vec<UserProfile>>;
}
