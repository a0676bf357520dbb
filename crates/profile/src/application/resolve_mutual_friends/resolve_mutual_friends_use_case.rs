// crates/profile/src/application/resolve_mutual_friends/resolve_mutual_friends_use_case.rs

use std::sync::Arc;

use shared_kernel::domain::entities::EntityOptionExt;
use shared_kernel::domain::value_objects::Login;
use shared_kernel::errors::Result;

use crate::application::ports::DirectoryGateway;
use crate::application::resolve_mutual_friends::ResolveMutualFriendsCommand;
use crate::domain::entities::UserProfile;
use crate::domain::repositories::ProfileRepository;

/// Calcule followers ∩ following du sujet, résout l'intersection contre les
/// profils stockés, et écrase la liste d'amis du sujet avec le résultat.
///
/// Pas de semi-réussite : soit fetch + intersection + résolution + persistance
/// aboutissent, soit rien n'est écrit.
pub struct ResolveMutualFriendsUseCase {
    repo: Arc<dyn ProfileRepository>,
    directory: Arc<dyn DirectoryGateway>,
}

impl ResolveMutualFriendsUseCase {
    pub fn new(repo: Arc<dyn ProfileRepository>, directory: Arc<dyn DirectoryGateway>) -> Self {
        Self { repo, directory }
    }

    pub async fn execute(
        &self,
        command: ResolveMutualFriendsCommand,
    ) -> Result<Vec<UserProfile>> {
        // 1. Sujet requis, hors tombstones. Jamais de fetch-and-create ici.
        let subject = self
            .repo
            .find_active_by_username(&command.username)
            .await?
            .ok_or_not_found(command.username.as_str())?;

        // 2. Relations amont (une page par liste)
        let relations = self.directory.fetch_relations(&command.username).await?;

        // 3. Intersection par égalité stricte de logins
        let mutuals = relations.mutuals();

        // 4. Résolution locale : les logins sans profil stocké sont
        //    silencieusement écartés, jamais auto-créés.
        let resolved = self.repo.find_active_in(&mutuals).await?;
        let friend_logins: Vec<Login> = resolved.iter().map(|p| p.username.clone()).collect();

        // 5. Écrasement de la liste d'amis du sujet
        self.repo
            .replace_friends(&subject.username, &friend_logins)
            .await?;

        Ok(resolved)
    }
}
