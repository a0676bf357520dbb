// crates/profile/src/application/ports/directory_gateway_stub.rs

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use shared_kernel::domain::value_objects::Login;
use shared_kernel::errors::{DomainError, Result};

use crate::application::ports::{DirectoryGateway, ProfileSnapshot, RelationSnapshot};

/// Stub du service annuaire, avec compteurs d'appels pour vérifier les
/// propriétés "exactement un fetch" / "zéro fetch" des use cases.
pub struct DirectoryGatewayStub {
    pub snapshot: Mutex<Option<ProfileSnapshot>>,
    pub relations: Mutex<RelationSnapshot>,
    pub fail_with: Mutex<Option<DomainError>>,
    pub fetch_profile_calls: AtomicUsize,
    pub fetch_relations_calls: AtomicUsize,
    /// Latence simulée, pour exercer les courses de premier fetch
    pub latency: Mutex<Option<Duration>>,
}

impl Default for DirectoryGatewayStub {
    fn default() -> Self {
        Self {
            snapshot: Mutex::new(None),
            relations: Mutex::new(RelationSnapshot::default()),
            fail_with: Mutex::new(None),
            fetch_profile_calls: AtomicUsize::new(0),
            fetch_relations_calls: AtomicUsize::new(0),
            latency: Mutex::new(None),
        }
    }
}

impl DirectoryGatewayStub {
    /// Snapshot minimal valide pour un login donné
    pub fn snapshot_for(login: &str) -> ProfileSnapshot {
        ProfileSnapshot {
            login: Login::from_raw(login),
            name: Some(format!("The real {login}")),
            avatar_url: Some(format!("https://avatars.test/{login}.png")),
            location: Some("Wellington".to_string()),
            bio: None,
            public_repos: 12,
            public_gists: 3,
            followers: 10,
            following: 7,
            created_at: Utc.with_ymd_and_hms(2015, 4, 1, 9, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 11, 20, 16, 30, 0).unwrap(),
        }
    }

    pub fn with_snapshot(login: &str) -> Self {
        let stub = Self::default();
        *stub.snapshot.lock().unwrap() = Some(Self::snapshot_for(login));
        stub
    }

    pub fn set_relations(&self, followers: &[&str], following: &[&str]) {
        let to_set = |names: &[&str]| -> HashSet<Login> {
            names.iter().map(|n| Login::from_raw(*n)).collect()
        };
        *self.relations.lock().unwrap() = RelationSnapshot {
            followers: to_set(followers),
            following: to_set(following),
        };
    }

    async fn simulate_latency(&self) {
        let latency = *self.latency.lock().unwrap();
        if let Some(d) = latency {
            tokio::time::sleep(d).await;
        }
    }

    fn check_failure(&self) -> Result<()> {
        match self.fail_with.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DirectoryGateway for DirectoryGatewayStub {
    async fn fetch_profile(&self, username: &Login) -> Result<ProfileSnapshot> {
        self.fetch_profile_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency().await;
        self.check_failure()?;

        self.snapshot
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| DomainError::Upstream {
                service: "github",
                reason: format!("GET /users/{username} returned 404 Not Found"),
            })
    }

    async fn fetch_relations(&self, _username: &Login) -> Result<RelationSnapshot> {
        self.fetch_relations_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency().await;
        self.check_failure()?;

        Ok(self.relations.lock().unwrap().clone())
    }
}
