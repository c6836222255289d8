//! API error types and JSON error response formatting.
//!
//! Every error body carries an `error` string; server-side failures add a
//! `message` with detail.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use ppemarts_calc::CalcError;
use ppemarts_chat::ChatError;
use ppemarts_core::PpeError;

/// JSON error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error summary.
    pub error: String,
    /// Optional detail for server-side failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// API error type that maps to HTTP status codes and JSON responses.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request - missing or invalid input.
    BadRequest(String),
    /// 404 Not Found - resource does not exist.
    NotFound(String),
    /// 405 Method Not Allowed.
    MethodNotAllowed,
    /// 429 Too Many Requests.
    TooManyRequests,
    /// 500 - the assistant could not produce a reply.
    GenerationFailed(String),
    /// 500 Internal Server Error - unexpected server error.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method not allowed".to_string(),
                None,
            ),
            ApiError::TooManyRequests => (
                StatusCode::TOO_MANY_REQUESTS,
                "Rate limit exceeded".to_string(),
                None,
            ),
            ApiError::GenerationFailed(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to generate response".to_string(),
                Some(msg),
            ),
            ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
                Some(msg),
            ),
        };

        (status, Json(ErrorBody { error, message })).into_response()
    }
}

impl From<PpeError> for ApiError {
    fn from(err: PpeError) -> Self {
        match err {
            PpeError::InvalidInput(msg) => ApiError::BadRequest(msg),
            PpeError::NotFound(msg) => ApiError::NotFound(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<CalcError> for ApiError {
    fn from(err: CalcError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<ChatError> for ApiError {
    fn from(err: ChatError) -> Self {
        if err.is_invalid_input() {
            ApiError::BadRequest(err.to_string())
        } else {
            ApiError::GenerationFailed(err.to_string())
        }
    }
}
