// crates/shared-kernel/src/domain/value_objects/login.rs

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ValueObject;
use crate::errors::{DomainError, Result};

// Règles GitHub : segments alphanumériques séparés par des tirets simples
static LOGIN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+(-[A-Za-z0-9]+)*$").unwrap());

/// Identifiant de login tel que renvoyé par le service annuaire.
///
/// La casse est préservée exactement (pas de normalisation) : les comparaisons
/// entre logins sont des égalités de chaînes strictes, héritées du service amont.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Login {
    inner: String,
}

impl Login {
    pub const MAX_LEN: usize = 39;

    /// Constructeur sécurisé (API / Domaine)
    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let login = Self::from_raw(value.into().trim().to_string());
        login.validate()?;
        Ok(login)
    }

    /// Reconstruction sans re-validation (lignes du store, payloads annuaire)
    pub fn from_raw(value: impl Into<String>) -> Self {
        Self {
            inner: value.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl ValueObject for Login {
    fn validate(&self) -> Result<()> {
        let len = self.inner.chars().count();

        if len == 0 || len > Self::MAX_LEN {
            return Err(DomainError::Validation {
                field: "username",
                reason: format!("Login must be between 1 and {} characters", Self::MAX_LEN),
            });
        }

        if !LOGIN_REGEX.is_match(&self.inner) {
            return Err(DomainError::Validation {
                field: "username",
                reason: "Invalid format: alphanumeric characters and single hyphens only. \
                         Cannot start or end with a hyphen."
                    .into(),
            });
        }

        Ok(())
    }
}

// --- CONVERSIONS ---

impl TryFrom<String> for Login {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<Login> for String {
    fn from(login: Login) -> Self {
        login.inner
    }
}

impl std::fmt::Display for Login {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.inner)
    }
}
