// crates/profile/src/application/search_profiles/search_profiles_use_case.rs

use std::sync::Arc;

use shared_kernel::errors::Result;

use crate::application::search_profiles::SearchProfilesCommand;
use crate::domain::entities::UserProfile;
use crate::domain::repositories::ProfileRepository;

/// Recherche par sous-chaînes insensibles à la casse sur username et/ou
/// location. Chaque exécution ré-interroge le store.
pub struct SearchProfilesUseCase {
    repo: Arc<dyn ProfileRepository>,
}

impl SearchProfilesUseCase {
    pub fn new(repo: Arc<dyn ProfileRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, command: SearchProfilesCommand) -> Result<Vec<UserProfile>> {
        // Une query `?location=` arrive en `Some("")` : filtre vide = filtre
        // absent (match-all), sinon les locations NULL seraient exclues
        let username = command.username.filter(|s| !s.is_empty());
        let location = command.location.filter(|s| !s.is_empty());

        self.repo
            .search_active(username.as_deref(), location.as_deref())
            .await
    }
}
