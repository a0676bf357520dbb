// crates/shared-kernel/src/errors/error.rs

use thiserror::Error;

use crate::errors::AppError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation failed for field '{field}': {reason}")]
    Validation {
        field: &'static str,
        reason: String,
    },

    #[error("{entity} not found with id '{id}'")]
    NotFound { entity: &'static str, id: String },

    #[error("{entity} already exists with {field} = '{value}'")]
    AlreadyExists {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// Panne du service annuaire externe (GitHub down, user inconnu, payload invalide).
    /// Doit remonter jusqu'au boundary HTTP, jamais avalée en route.
    #[error("Upstream service '{service}' failed: {reason}")]
    Upstream {
        service: &'static str,
        reason: String,
    },

    /// Panne de la couche de persistance (connexion, requête, contrainte).
    #[error("Store failure: {0}")]
    Store(String),

    /// Erreur générique du domaine (bug interne, état incohérent)
    #[error("Internal domain error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Utilisé pour distinguer le perdant d'une course d'insertion (contrainte d'unicité)
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }
}

impl From<AppError> for DomainError {
    fn from(err: AppError) -> Self {
        match err.code {
            crate::errors::ErrorCode::NotFound => DomainError::NotFound {
                entity: "Resource",
                id: "unknown".into(),
            },
            _ => DomainError::Internal(err.message),
        }
    }
}
