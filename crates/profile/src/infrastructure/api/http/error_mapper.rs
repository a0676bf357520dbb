// crates/profile/src/infrastructure/api/http/error_mapper.rs

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use shared_kernel::errors::{AppError, DomainError, ErrorCode};

/// Traduction transport des erreurs applicatives.
///
/// Le client ne voit que trois formes : 404 pour une entité absente, 400 pour
/// une entrée invalide, 500 générique pour tout le reste. Les causes réelles
/// (panne annuaire, panne store) sont déjà tracées côté `AppError`.
pub struct ApiError(pub AppError);

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self(AppError::from(error))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self.0.code {
            ErrorCode::NotFound => (StatusCode::NOT_FOUND, json!({ "error": "User not found" })),
            ErrorCode::ValidationFailed => {
                (StatusCode::BAD_REQUEST, json!({ "error": self.0.message }))
            }
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Internal server error" }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
