//! API error types with JSON responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use fieldnotes_core::{IdParseError, PolicyError};
use fieldnotes_store::StoreError;
use serde::Serialize;

/// Conflict message for registration. It does not say which field collided.
pub const DUPLICATE_USER_MESSAGE: &str = "A user with this username or email already exists";

/// API error that can be returned from handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed input or a missing required field (400).
    #[error("{0}")]
    Validation(String),

    /// Malformed identifier string (400).
    #[error("{0}")]
    Format(String),

    /// Bad credentials or a missing, invalid or expired token (401).
    #[error("{0}")]
    Unauthorized(String),

    /// Duplicate username or email (409).
    #[error("{0}")]
    Conflict(String),

    /// Not found (404).
    #[error("{0}")]
    NotFound(String),

    /// Internal server error (500).
    #[error("internal error: {0}")]
    Internal(String),

    /// Store error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

impl From<PolicyError> for ApiError {
    fn from(error: PolicyError) -> Self {
        Self::Validation(error.to_string())
    }
}

impl From<IdParseError> for ApiError {
    fn from(error: IdParseError) -> Self {
        Self::Format(error.to_string())
    }
}

impl ApiError {
    /// Get the error code string for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Format(_) => "FORMAT_ERROR",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Conflict(_) => "CONFLICT",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Store(e) => match e {
                StoreError::DuplicateUser { .. } => "CONFLICT",
                StoreError::NoteNotFound(_) | StoreError::UserNotFound(_) => "NOT_FOUND",
                _ => "STORAGE_ERROR",
            },
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Format(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Store(e) => match e {
                StoreError::DuplicateUser { .. } => StatusCode::CONFLICT,
                StoreError::NoteNotFound(_) | StoreError::UserNotFound(_) => StatusCode::NOT_FOUND,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    /// Message sent to the client. Server-side failures are not described.
    pub(crate) fn public_message(&self) -> String {
        match self {
            Self::Store(StoreError::DuplicateUser { .. }) => DUPLICATE_USER_MESSAGE.to_string(),
            Self::Store(e @ (StoreError::NoteNotFound(_) | StoreError::UserNotFound(_))) => {
                e.to_string()
            }
            Self::Store(_) | Self::Internal(_) => "internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

/// JSON error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error details.
    pub error: ErrorDetails,
}

/// Error details within the response.
#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    /// Error code (e.g., "NOT_FOUND", "VALIDATION_ERROR").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.code(), error = %self, "Request failed");
        } else {
            tracing::warn!(code = self.code(), error = %self, "Request rejected");
        }

        let body = ErrorResponse {
            error: ErrorDetails {
                code: self.code().to_string(),
                message: self.public_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
