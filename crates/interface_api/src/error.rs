//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use core_kernel::{ErrorKind, PortError};
use domain_lifecycle::LifecycleError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid request body")]
    InvalidFields(Vec<String>),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message, details) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg, None),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg, None),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "invalid_state", msg, None),
            ApiError::Validation(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "validation_error", msg, None)
            }
            ApiError::InvalidFields(fields) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                "Invalid request body".to_string(),
                Some(fields),
            ),
            ApiError::Internal(msg) => {
                error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<LifecycleError> for ApiError {
    fn from(err: LifecycleError) -> Self {
        let message = err.to_string();
        match err.kind() {
            ErrorKind::Validation => ApiError::Validation(message),
            ErrorKind::InvalidState => ApiError::Conflict(message),
            ErrorKind::NotFound => ApiError::NotFound(message),
            ErrorKind::Internal => ApiError::Internal(message),
        }
    }
}

impl From<PortError> for ApiError {
    fn from(err: PortError) -> Self {
        LifecycleError::from(err).into()
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .iter()
            .map(|(field, errs)| {
                let codes: Vec<&str> = errs.iter().map(|e| e.code.as_ref()).collect();
                format!("{}: {}", field, codes.join(", "))
            })
            .collect();
        fields.sort();
        ApiError::InvalidFields(fields)
    }
}
