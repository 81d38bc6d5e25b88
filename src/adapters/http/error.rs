//! DomainError to HTTP response mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};

/// JSON body returned for every failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable error code, e.g. "DOWNSTREAM_FAILURE".
    pub error: String,
    /// Human-readable cause.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: code.into(),
            message: message.into(),
        }
    }
}

/// Maps a domain error onto the boundary status taxonomy: access denied,
/// upstream unavailable, or internal fault.
pub fn domain_error_response(err: DomainError) -> Response {
    let status = match err.code {
        ErrorCode::ValidationFailed | ErrorCode::EmptyField => StatusCode::BAD_REQUEST,
        ErrorCode::ProfileNotFound => StatusCode::NOT_FOUND,
        ErrorCode::ConsentRejected => StatusCode::CONFLICT,
        ErrorCode::Unauthorized | ErrorCode::InvalidToken => StatusCode::UNAUTHORIZED,
        ErrorCode::DownstreamFailure => StatusCode::BAD_GATEWAY,
        ErrorCode::DatabaseError | ErrorCode::InternalError => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    if status.is_server_error() {
        tracing::error!(code = %err.code, message = %err.message, "request failed");
    } else {
        tracing::warn!(code = %err.code, message = %err.message, "request rejected");
    }

    let body = ErrorResponse::new(err.code.to_string(), err.message);
    (status, Json(body)).into_response()
}
