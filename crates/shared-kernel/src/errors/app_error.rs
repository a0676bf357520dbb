// crates/shared-kernel/src/errors/app_error.rs

use crate::errors::{DomainError, ErrorCode};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Serialize, Clone)]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<DomainError> for AppError {
    fn from(error: DomainError) -> Self {
        match error {
            // 1. Cas : Entité introuvable (404)
            DomainError::NotFound { entity, id } => Self::new(
                ErrorCode::NotFound,
                format!("{entity} with id '{id}' not found"),
            ),

            // 2. Cas : Validation (400)
            DomainError::Validation { field, reason } => Self {
                code: ErrorCode::ValidationFailed,
                message: format!("Validation failed for {field}"),
                details: Some(serde_json::json!({ "field": field, "reason": reason })),
            },

            // 3. Cas : Contrainte du store violée (perdant d'une course d'insertion).
            // On masque le détail au client, le vrai motif part dans les logs.
            DomainError::AlreadyExists { entity, field, .. } => {
                tracing::error!("Store constraint violated: {entity}.{field} already taken");
                Self::new(ErrorCode::StoreFailure, "A store constraint was violated")
            }

            // 4. Cas : Annuaire externe en panne (500 générique côté client)
            DomainError::Upstream { service, reason } => {
                tracing::error!("Upstream '{service}' failure: {reason}");
                Self::new(ErrorCode::UpstreamFailure, "An upstream service failed")
            }

            // 5. Cas : Persistance en panne (500 générique côté client)
            DomainError::Store(reason) => {
                tracing::error!("Store failure: {reason}");
                Self::new(ErrorCode::StoreFailure, "A store error occurred")
            }

            DomainError::Internal(reason) => {
                tracing::error!("Internal domain error: {reason}");
                Self::new(
                    ErrorCode::InternalError,
                    "An unexpected error occurred. Please try again later.",
                )
            }
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}
