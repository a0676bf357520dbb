// crates/profile/src/application/update_profile/update_profile_use_case.rs

use std::sync::Arc;

use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::errors::Result;

use crate::application::update_profile::UpdateProfileCommand;
use crate::domain::entities::UserProfile;
use crate::domain::repositories::ProfileRepository;

/// Applique un patch partiel (whitelist `ProfilePatch`) au profil actif visé.
pub struct UpdateProfileUseCase {
    repo: Arc<dyn ProfileRepository>,
}

impl UpdateProfileUseCase {
    pub fn new(repo: Arc<dyn ProfileRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, command: UpdateProfileCommand) -> Result<UserProfile> {
        self.repo
            .update_fields(&command.username, &command.patch)
            .await?
            .ok_or_not_found(command.username.as_str())
    }
}
