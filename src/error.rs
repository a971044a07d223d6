//! Application error type and its HTTP rendering.
//!
//! Every failure leaving an HTTP handler is rendered as
//!
//! ```json
//! { "success": false, "message": "..." }
//! ```
//!
//! Missing accounts, wrong passwords and rejected input all share one status
//! and one message, so a caller cannot tell which credential was wrong.
//! Internal failures are logged and replaced by a generic message.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Message returned for every rejected credential pair.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password.";

/// Message returned for every upstream or unanticipated failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    message: &'static str,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// No admin record matches the supplied email.
    #[error("no admin record for the supplied email")]
    NotFound,

    /// A record matched but the password comparison failed.
    #[error("password does not match the stored hash")]
    InvalidCredential,

    /// Request input was rejected before reaching the data store.
    #[error("validation failed: {message}")]
    Validation { message: String },

    /// Data store, hashing, or any other dependency failed.
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound | AppError::InvalidCredential | AppError::Validation { .. } => {
                StatusCode::BAD_REQUEST
            }
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to the client.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::NotFound | AppError::InvalidCredential | AppError::Validation { .. } => {
                INVALID_CREDENTIALS_MESSAGE
            }
            AppError::Internal { .. } => INTERNAL_ERROR_MESSAGE,
        }
    }

    /// Returns true for failures that were not caused by the caller's input.
    pub fn is_internal(&self) -> bool {
        matches!(self, AppError::Internal { .. })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal { message } = &self {
            tracing::error!(error = %message, "Request failed with internal error");
        }

        let body = ErrorBody {
            success: false,
            message: self.public_message(),
        };

        (self.status(), Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::internal(format!("Database error: {e}"))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::validation(e.to_string())
    }
}

/// Generic 500 response used by the catch-all layers.
pub fn internal_error_response() -> Response {
    AppError::internal("unhandled failure").into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_errors_are_indistinguishable() {
        let not_found = AppError::NotFound;
        let mismatch = AppError::InvalidCredential;

        assert_eq!(not_found.status(), mismatch.status());
        assert_eq!(not_found.public_message(), mismatch.public_message());
        assert_eq!(not_found.status(), StatusCode::BAD_REQUEST);
        assert_eq!(not_found.public_message(), "Invalid email or password.");
    }

    #[test]
    fn test_internal_error_hides_details() {
        let err = AppError::internal("connection refused on 10.0.0.5:5432");

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Internal server error");
        assert!(err.is_internal());
    }

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = AppError::validation("email must not be empty");

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), INVALID_CREDENTIALS_MESSAGE);
        assert!(!err.is_internal());
    }

    #[test]
    fn test_into_response_status() {
        assert_eq!(
            AppError::NotFound.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            internal_error_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
