//! Error types for the cache service
//!
//! Provides unified error handling using thiserror. The cache store itself
//! never fails; these errors exist at the HTTP edge, where a lookup miss
//! becomes a 404 and malformed input becomes a 400.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Api Error Enum ==
/// Unified error type for the cache service API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Invalid or incomplete request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Key not found in cache (never set, or expired)
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache service.
pub type Result<T> = std::result::Result<T, ApiError>;
