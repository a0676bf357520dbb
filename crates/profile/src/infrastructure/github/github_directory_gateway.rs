// crates/profile/src/infrastructure/github/github_directory_gateway.rs

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use shared_kernel::domain::value_objects::Login;
use shared_kernel::errors::{DomainError, Result};

use crate::application::ports::{DirectoryGateway, ProfileSnapshot, RelationSnapshot};
use crate::infrastructure::github::github_dtos::{GithubAccountRefDto, GithubUserDto};

const SERVICE: &str = "github";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client REST vers l'API publique GitHub, non authentifié.
pub struct GithubDirectoryGateway {
    http: reqwest::Client,
    base_url: String,
}

impl GithubDirectoryGateway {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        // GitHub rejette les requêtes sans User-Agent
        let http = reqwest::Client::builder()
            .user_agent(concat!("profile-service/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| DomainError::Upstream {
                service: SERVICE,
                reason: format!("client init failed: {e}"),
            })?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| DomainError::Upstream {
                service: SERVICE,
                reason: format!("request to {path} failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::Upstream {
                service: SERVICE,
                reason: format!("{path} returned {status}"),
            });
        }

        response.json::<T>().await.map_err(|e| DomainError::Upstream {
            service: SERVICE,
            reason: format!("{path} returned an unreadable body: {e}"),
        })
    }

    async fn fetch_logins(&self, path: &str) -> Result<HashSet<Login>> {
        let refs: Vec<GithubAccountRefDto> = self.get_json(path).await?;
        Ok(refs.into_iter().map(|r| Login::from_raw(r.login)).collect())
    }
}

#[async_trait]
impl DirectoryGateway for GithubDirectoryGateway {
    async fn fetch_profile(&self, username: &Login) -> Result<ProfileSnapshot> {
        let dto: GithubUserDto = self.get_json(&format!("/users/{username}")).await?;
        Ok(dto.into())
    }

    async fn fetch_relations(&self, username: &Login) -> Result<RelationSnapshot> {
        let followers = self.fetch_logins(&format!("/users/{username}/followers")).await?;
        let following = self.fetch_logins(&format!("/users/{username}/following")).await?;

        Ok(RelationSnapshot {
            followers,
            following,
        })
    }
}
