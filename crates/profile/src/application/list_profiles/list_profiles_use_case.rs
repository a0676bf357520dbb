// crates/profile/src/application/list_profiles/list_profiles_use_case.rs

use std::sync::Arc;

use shared_kernel::errors::Result;

use crate::application::list_profiles::ListProfilesCommand;
use crate::domain::entities::UserProfile;
use crate::domain::repositories::ProfileRepository;

/// Liste tous les profils actifs, tri ascendant sur le champ demandé.
pub struct ListProfilesUseCase {
    repo: Arc<dyn ProfileRepository>,
}

impl ListProfilesUseCase {
    pub fn new(repo: Arc<dyn ProfileRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, command: ListProfilesCommand) -> Result<Vec<UserProfile>> {
        self.repo.list_active_sorted(command.sort).await
    }
}
