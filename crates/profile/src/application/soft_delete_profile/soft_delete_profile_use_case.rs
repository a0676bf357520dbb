// crates/profile/src/application/soft_delete_profile/soft_delete_profile_use_case.rs

use std::sync::Arc;

use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::errors::Result;

use crate::application::soft_delete_profile::SoftDeleteProfileCommand;
use crate::domain::entities::UserProfile;
use crate::domain::repositories::ProfileRepository;

/// Pose le tombstone sur le profil actif visé. Jamais de suppression physique.
///
/// Idempotent en effet seulement : un second appel échoue en NotFound puisque
/// l'enregistrement n'est plus matchable.
pub struct SoftDeleteProfileUseCase {
    repo: Arc<dyn ProfileRepository>,
}

impl SoftDeleteProfileUseCase {
    pub fn new(repo: Arc<dyn ProfileRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, command: SoftDeleteProfileCommand) -> Result<UserProfile> {
        self.repo
            .mark_soft_deleted(&command.username)
            .await?
            .ok_or_not_found(command.username.as_str())
    }
}
