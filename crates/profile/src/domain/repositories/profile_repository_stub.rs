// crates/profile/src/domain/repositories/profile_repository_stub.rs

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::atomic::AtomicUsize;
use std::sync::Mutex;

use async_trait::async_trait;
use shared_kernel::domain::value_objects::Login;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::UserProfile;
use crate::domain::params::{ProfilePatch, SortField};
use crate::domain::repositories::ProfileRepository;

/// Stub in-memory du port de persistance, avec les vraies sémantiques
/// (filtrage des tombstones, unicité, recherche insensible à la casse).
pub struct ProfileRepositoryStub {
    pub storage: Mutex<HashMap<String, UserProfile>>,
    /// Si renseignée, toutes les opérations échouent avec cette erreur
    pub fail_with: Mutex<Option<DomainError>>,
    pub insert_calls: AtomicUsize,
}

impl Default for ProfileRepositoryStub {
    fn default() -> Self {
        Self {
            storage: Mutex::new(HashMap::new()),
            fail_with: Mutex::new(None),
            insert_calls: AtomicUsize::new(0),
        }
    }
}

impl ProfileRepositoryStub {
    /// Insertion directe pour l'Arrange des tests (ignore l'unicité)
    pub fn seed(&self, profile: UserProfile) {
        self.storage
            .lock()
            .unwrap()
            .insert(profile.username.as_str().to_string(), profile);
    }

    /// Lecture brute, tombstones compris
    pub fn raw_get(&self, username: &str) -> Option<UserProfile> {
        self.storage.lock().unwrap().get(username).cloned()
    }

    fn check_failure(&self) -> Result<()> {
        match self.fail_with.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn compare(a: &UserProfile, b: &UserProfile, sort: SortField) -> Ordering {
        match sort {
            SortField::Username => a.username.as_str().cmp(b.username.as_str()),
            SortField::Name => a.name.cmp(&b.name),
            SortField::Location => a.location.cmp(&b.location),
            SortField::PublicRepos => a.public_repos.cmp(&b.public_repos),
            SortField::PublicGists => a.public_gists.cmp(&b.public_gists),
            SortField::Followers => a.followers.cmp(&b.followers),
            SortField::Following => a.following.cmp(&b.following),
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        }
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryStub {
    async fn find_active_by_username(&self, username: &Login) -> Result<Option<UserProfile>> {
        self.check_failure()?;
        Ok(self
            .storage
            .lock()
            .unwrap()
            .get(username.as_str())
            .filter(|p| !p.soft_deleted)
            .cloned())
    }

    async fn insert(&self, profile: &UserProfile) -> Result<()> {
        self.insert_calls
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        self.check_failure()?;

        let mut storage = self.storage.lock().unwrap();
        if storage.contains_key(profile.username.as_str()) {
            return Err(DomainError::AlreadyExists {
                entity: "UserProfile",
                field: "username",
                value: profile.username.as_str().to_string(),
            });
        }
        storage.insert(profile.username.as_str().to_string(), profile.clone());
        Ok(())
    }

    async fn find_active_in(&self, usernames: &[Login]) -> Result<Vec<UserProfile>> {
        self.check_failure()?;
        let storage = self.storage.lock().unwrap();
        Ok(usernames
            .iter()
            .filter_map(|u| storage.get(u.as_str()))
            .filter(|p| !p.soft_deleted)
            .cloned()
            .collect())
    }

    async fn replace_friends(&self, username: &Login, friends: &[Login]) -> Result<()> {
        self.check_failure()?;
        let mut storage = self.storage.lock().unwrap();
        match storage
            .get_mut(username.as_str())
            .filter(|p| !p.soft_deleted)
        {
            Some(profile) => {
                profile.friends = friends.to_vec();
                Ok(())
            }
            None => Err(DomainError::NotFound {
                entity: "UserProfile",
                id: username.as_str().to_string(),
            }),
        }
    }

    async fn mark_soft_deleted(&self, username: &Login) -> Result<Option<UserProfile>> {
        self.check_failure()?;
        let mut storage = self.storage.lock().unwrap();
        match storage
            .get_mut(username.as_str())
            .filter(|p| !p.soft_deleted)
        {
            Some(profile) => {
                profile.soft_deleted = true;
                Ok(Some(profile.clone()))
            }
            None => Ok(None),
        }
    }

    async fn update_fields(
        &self,
        username: &Login,
        patch: &ProfilePatch,
    ) -> Result<Option<UserProfile>> {
        self.check_failure()?;
        let mut storage = self.storage.lock().unwrap();
        let Some(profile) = storage
            .get_mut(username.as_str())
            .filter(|p| !p.soft_deleted)
        else {
            return Ok(None);
        };

        if let Some(v) = &patch.name {
            profile.name = Some(v.clone());
        }
        if let Some(v) = &patch.avatar_url {
            profile.avatar_url = Some(v.clone());
        }
        if let Some(v) = &patch.location {
            profile.location = Some(v.clone());
        }
        if let Some(v) = &patch.bio {
            profile.bio = Some(v.clone());
        }
        if let Some(v) = patch.public_repos {
            profile.public_repos = v;
        }
        if let Some(v) = patch.public_gists {
            profile.public_gists = v;
        }
        if let Some(v) = patch.followers {
            profile.followers = v;
        }
        if let Some(v) = patch.following {
            profile.following = v;
        }

        Ok(Some(profile.clone()))
    }

    async fn search_active(
        &self,
        username_contains: Option<&str>,
        location_contains: Option<&str>,
    ) -> Result<Vec<UserProfile>> {
        self.check_failure()?;
        let username_needle = username_contains.map(str::to_lowercase);
        let location_needle = location_contains.map(str::to_lowercase);

        let storage = self.storage.lock().unwrap();
        let mut found: Vec<UserProfile> = storage
            .values()
            .filter(|p| !p.soft_deleted)
            .filter(|p| match &username_needle {
                Some(needle) => p.username.as_str().to_lowercase().contains(needle),
                None => true,
            })
            .filter(|p| match &location_needle {
                Some(needle) => p
                    .location
                    .as_deref()
                    .map(|l| l.to_lowercase().contains(needle.as_str()))
                    .unwrap_or(false),
                None => true,
            })
            .cloned()
            .collect();

        found.sort_by(|a, b| Self::compare(a, b, SortField::Username));
        Ok(found)
    }

    async fn list_active_sorted(&self, sort: SortField) -> Result<Vec<UserProfile>> {
        self.check_failure()?;
        let storage = self.storage.lock().unwrap();
        let mut all: Vec<UserProfile> = storage
            .values()
            .filter(|p| !p.soft_deleted)
            .cloned()
            .collect();
        all.sort_by(|a, b| Self::compare(a, b, sort));
        Ok(all)
    }
}
