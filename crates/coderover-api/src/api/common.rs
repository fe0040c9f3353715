// Common DTOs and errors for the public API
//
// These types are shared across endpoints.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standard error response for API endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message describing what went wrong.
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    /// Convert to axum response tuple
    pub fn into_response(self, status: StatusCode) -> (StatusCode, Json<Self>) {
        (status, Json(self))
    }
}

/// Acknowledgement returned by write endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    #[schema(example = "ok")]
    pub status: String,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Errors surfaced at the request boundary
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request body is malformed or has missing/non-numeric fields
    #[error("{message}")]
    Validation { status: StatusCode, message: String },

    /// Storage could not complete the operation
    #[error("storage unavailable")]
    StorageUnavailable(#[source] anyhow::Error),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { status, .. } => *status,
            Self::StorageUnavailable(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl From<axum::extract::rejection::JsonRejection> for ApiError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        Self::Validation {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::StorageUnavailable(e) => {
                tracing::error!("Storage operation failed: {:#}", e);
            }
            Self::Internal(e) => tracing::error!("Internal error: {}", e),
            Self::Validation { message, .. } => {
                tracing::debug!(%status, "Rejected request: {}", message);
            }
            Self::NotFound(_) => {}
        }
        ErrorResponse::new(self.to_string())
            .into_response(status)
            .into_response()
    }
}
