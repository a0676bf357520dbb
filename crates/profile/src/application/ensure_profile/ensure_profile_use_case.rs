// crates/profile/src/application/ensure_profile/ensure_profile_use_case.rs

use std::sync::Arc;

use shared_kernel::errors::Result;
use shared_kernel::infrastructure::concurrency::KeyedLock;

use crate::application::ensure_profile::EnsureProfileCommand;
use crate::application::ports::DirectoryGateway;
use crate::domain::entities::UserProfile;
use crate::domain::repositories::ProfileRepository;

#[derive(Debug, Clone)]
pub struct EnsureProfileOutcome {
    pub profile: UserProfile,
    /// `true` si le profil vient d'être créé (201), `false` s'il existait (200)
    pub created: bool,
}

/// Upsert-on-fetch : renvoie le profil stocké s'il existe, sinon le récupère
/// une seule fois auprès de l'annuaire et le persiste.
///
/// Un hit ne déclenche AUCUN appel externe et ne rafraîchit aucun champ,
/// même si la donnée amont a changé depuis. Compromis de coût assumé.
pub struct EnsureProfileUseCase {
    repo: Arc<dyn ProfileRepository>,
    directory: Arc<dyn DirectoryGateway>,
    /// Un seul premier fetch en vol par username dans ce process ;
    /// la contrainte d'unicité du store reste la garde inter-process.
    locks: KeyedLock<String>,
}

impl EnsureProfileUseCase {
    pub fn new(repo: Arc<dyn ProfileRepository>, directory: Arc<dyn DirectoryGateway>) -> Self {
        Self {
            repo,
            directory,
            locks: KeyedLock::new(),
        }
    }

    pub async fn execute(&self, command: EnsureProfileCommand) -> Result<EnsureProfileOutcome> {
        let key = command.username.as_str().to_string();

        self.locks
            .run(key, || async move {
                // 1. Lookup hors tombstones
                if let Some(existing) = self.repo.find_active_by_username(&command.username).await? {
                    return Ok(EnsureProfileOutcome {
                        profile: existing,
                        created: false,
                    });
                }

                // 2. Fetch annuaire (tout échec remonte en Upstream)
                let snapshot = self.directory.fetch_profile(&command.username).await?;

                // 3. Mapping direct + persistance
                let profile = UserProfile::from_snapshot(snapshot);
                self.repo.insert(&profile).await?;

                Ok(EnsureProfileOutcome {
                    profile,
                    created: true,
                })
            })
            .await
    }
}
