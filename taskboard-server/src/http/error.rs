//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Field validation failures keep their itemised shape:
//! `{"errors": [{"field", "tag", "value"}]}`. Everything else is
//! `{"error": "<message>"}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::models::ValidationErrors;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// One or more fields failed validation (400)
    Validation(ValidationErrors),

    /// Malformed body, missing parameter or unknown parent (400)
    BadRequest(String),

    /// Addressed entity does not exist (404)
    NotFound { resource: &'static str },
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "{}", e),
            Self::BadRequest(message) => f.write_str(message),
            Self::NotFound { resource } => write!(f, "{} not found", resource),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::Validation(errors) => json!(errors),
            other => json!({ "error": other.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(e: ValidationErrors) -> Self {
        Self::Validation(e)
    }
}
