//! API error handling.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use jobscout_core::error::ScoutError;

/// API error type.
///
/// Everything that fails after the cache key is computed collapses to a
/// status-500 response with a flat `{"error": "<message>"}` body; clients
/// see either a JSON array or that object, never a bare framework error.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Internal server error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

/// Error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
        };

        (self.status, Json(body)).into_response()
    }
}

impl From<ScoutError> for ApiError {
    fn from(err: ScoutError) -> Self {
        tracing::error!(error = %err, "request failed");
        ApiError::internal(err.to_string())
    }
}
