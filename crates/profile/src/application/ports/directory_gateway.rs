// crates/profile/src/application/ports/directory_gateway.rs

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared_kernel::domain::value_objects::Login;
use shared_kernel::errors::Result;

/// Profil tel que renvoyé par le service annuaire, au moment du fetch.
/// N'est jamais resynchronisé ensuite.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSnapshot {
    pub login: Login,
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
}

/// Relations sociales d'un login : une seule page par liste, pas de
/// boucle de pagination.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelationSnapshot {
    pub followers: HashSet<Login>,
    pub following: HashSet<Login>,
}

impl RelationSnapshot {
    /// Logins présents dans les deux listes (égalité stricte, casse comprise)
    pub fn mutuals(&self) -> Vec<Login> {
        self.followers
            .intersection(&self.following)
            .cloned()
            .collect()
    }
}

/// Port vers le service annuaire externe (l'API publique GitHub).
///
/// Tout échec (transport, statut non-2xx, y compris 404 pour un login
/// inconnu) remonte en `DomainError::Upstream`, jamais avalé.
#[async_trait]
pub trait DirectoryGateway: Send + Sync {
    async fn fetch_profile(&self, username: &Login) -> Result<ProfileSnapshot>;
    async fn fetch_relations(&self, username: &Login) -> Result<RelationSnapshot>;
}
