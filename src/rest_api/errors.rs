//! # REST API Errors
//!
//! Error types for the trivia REST API and their JSON envelope:
//!
//! ```json
//! {"success": false, "error": 404, "message": "Not Found"}
//! ```
//!
//! The detail carried by each variant is logged, never sent to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

use crate::store::StoreError;

/// Result type for REST operations
pub type ApiResult<T> = Result<T, ApiError>;

/// REST API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Request body absent or structurally malformed
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Referenced question, category, page or route does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Known route, wrong method
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Well-formed request with a semantically invalid payload
    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Store or runtime failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message
    pub fn message(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "Bad Request",
            ApiError::NotFound(_) => "Not Found",
            ApiError::MethodNotAllowed => "Method Not Allowed",
            ApiError::Unprocessable(_) => "Unprocessable",
            ApiError::Internal(_) => "Internal Server Error",
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UnknownCategory(id) => {
                ApiError::Unprocessable(format!("category {} does not exist", id))
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: &'static str,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            success: false,
            error: err.status_code().as_u16(),
            message: err.message(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(status = status.as_u16(), "{}", self);
        } else {
            debug!(status = status.as_u16(), "{}", self);
        }

        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::BadRequest("test".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("test".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Unprocessable("test".to_string()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
    }

    #[test]
    fn test_envelope_hides_detail() {
        let err = ApiError::NotFound("question 17".to_string());
        let body = serde_json::to_value(ErrorResponse::from(&err)).unwrap();

        assert_eq!(
            body,
            serde_json::json!({"success": false, "error": 404, "message": "Not Found"})
        );
    }

    #[test]
    fn test_store_error_mapping() {
        let unknown = ApiError::from(StoreError::UnknownCategory(999));
        assert_eq!(unknown.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        let poisoned = ApiError::from(StoreError::LockPoisoned);
        assert_eq!(poisoned.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(poisoned.message(), "Internal Server Error");
    }
}
