//! Error handling at the HTTP boundary.
//!
//! Domain code reports [`JournalError`]; handlers convert it into an
//! [`ApiError`] carrying a stable machine-readable code, an HTTP status and
//! optional key/value context.
//!
//! # Status Codes
//!
//! | Code | HTTP | Usage |
//! |------|------|-------|
//! | `INVALID_REQUEST` | 400 | Malformed body or parameters |
//! | `INVALID_DATE` | 400 | Trade date is not `YYYY-MM-DD` |
//! | `INVALID_MONTH` | 400 | Calendar month does not exist |
//! | `MISSING_USER` | 400 | Blank user id |
//! | `STORAGE_ERROR` | 503 | Trade store unavailable |
//! | `INTERNAL_ERROR` | 500 | Unexpected server error |

use std::collections::HashMap;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::journal::JournalError;

/// Error codes returned by the journal API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Invalid request format or parameters.
    InvalidRequest,
    /// Unparsable trade date.
    InvalidDate,
    /// Nonexistent calendar month.
    InvalidMonth,
    /// Blank user id.
    MissingUser,
    /// Trade store failure.
    StorageError,
    /// Internal server error.
    InternalError,
}

impl ErrorCode {
    /// HTTP status for this error.
    #[must_use]
    pub const fn http_status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest | Self::InvalidDate | Self::InvalidMonth | Self::MissingUser => {
                StatusCode::BAD_REQUEST
            }
            Self::StorageError => StatusCode::SERVICE_UNAVAILABLE,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable reason string.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::InvalidDate => "INVALID_DATE",
            Self::InvalidMonth => "INVALID_MONTH",
            Self::MissingUser => "MISSING_USER",
            Self::StorageError => "STORAGE_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.reason())
    }
}

/// An API error with context.
#[derive(Debug, Error)]
#[error("[{}] {}", .code.reason(), .message)]
pub struct ApiError {
    code: ErrorCode,
    message: String,
    context: Vec<(String, String)>,
}

impl ApiError {
    /// Create a new API error.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: Vec::new(),
        }
    }

    /// Add context to the error.
    #[must_use]
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.push((key.into(), value.into()));
        self
    }

    /// Get the error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Get the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the context.
    #[must_use]
    pub fn context(&self) -> &[(String, String)] {
        &self.context
    }

    /// Invalid request format.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Convert to the JSON error body.
    #[must_use]
    pub fn to_http_response(&self) -> HttpErrorResponse {
        HttpErrorResponse {
            code: self.code.reason().to_string(),
            message: self.message.clone(),
            status: self.code.http_status().as_u16(),
            details: self.context.iter().cloned().collect(),
        }
    }
}

impl From<JournalError> for ApiError {
    fn from(err: JournalError) -> Self {
        let message = err.to_string();
        match err {
            JournalError::InvalidDate { value } => {
                Self::new(ErrorCode::InvalidDate, message).with_context("date", value)
            }
            JournalError::MissingUser => Self::new(ErrorCode::MissingUser, message),
            JournalError::InvalidMonth { year, month } => {
                Self::new(ErrorCode::InvalidMonth, message)
                    .with_context("year", year.to_string())
                    .with_context("month", month.to_string())
            }
            JournalError::Storage(_) => Self::new(ErrorCode::StorageError, message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.code {
            ErrorCode::StorageError | ErrorCode::InternalError => {
                tracing::error!(code = %self.code, "{}", self.message);
            }
            _ => tracing::debug!(code = %self.code, "{}", self.message),
        }
        (self.code.http_status(), Json(self.to_http_response())).into_response()
    }
}

/// HTTP error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpErrorResponse {
    /// Error code string.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// HTTP status code.
    pub status: u16,
    /// Additional details.
    pub details: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_status_mapping() {
        assert_eq!(ErrorCode::InvalidRequest.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::InvalidMonth.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ErrorCode::StorageError.http_status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ErrorCode::InternalError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_api_error_creation() {
        let error = ApiError::invalid_request("Bad request")
            .with_context("field", "pl")
            .with_context("value", "abc");

        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        assert_eq!(error.message(), "Bad request");
        assert_eq!(error.context().len(), 2);
    }

    #[test]
    fn test_from_journal_error() {
        let error = ApiError::from(JournalError::InvalidDate {
            value: "2025-13-01".to_string(),
        });
        let response = error.to_http_response();

        assert_eq!(response.code, "INVALID_DATE");
        assert_eq!(response.status, 400);
        assert_eq!(response.details.get("date").map(String::as_str), Some("2025-13-01"));
    }

    #[test]
    fn test_storage_error_is_unavailable() {
        let error = ApiError::from(JournalError::Storage("lock poisoned".to_string()));
        assert_eq!(error.code(), ErrorCode::StorageError);
        assert_eq!(error.to_http_response().status, 503);
    }

    #[test]
    fn test_error_display() {
        let error = ApiError::internal("boom");
        assert_eq!(error.to_string(), "[INTERNAL_ERROR] boom");
    }
}
