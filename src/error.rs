//! Error types and handling for the `TripMate` service

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Main error type for the `TripMate` service
#[derive(Error, Debug)]
pub enum TripMateError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Requested resource does not exist
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// Seed data could not be decoded
    #[error("Seed data error: {source}")]
    Seed {
        #[from]
        source: serde_json::Error,
    },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl TripMateError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// HTTP status this error is reported with
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            TripMateError::Validation { .. } => StatusCode::BAD_REQUEST,
            TripMateError::NotFound { .. } => StatusCode::NOT_FOUND,
            TripMateError::Config { .. }
            | TripMateError::Seed { .. }
            | TripMateError::Io { .. }
            | TripMateError::General { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TripMateError::Config { .. } => {
                "Configuration error. Please check your config file and environment.".to_string()
            }
            TripMateError::Validation { message } | TripMateError::NotFound { message } => {
                message.clone()
            }
            TripMateError::Seed { .. } => {
                "Seed data is malformed. Please check the catalog file.".to_string()
            }
            TripMateError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            TripMateError::General { message } => message.clone(),
        }
    }
}

impl IntoResponse for TripMateError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = serde_json::json!({
            "error": self.user_message(),
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = TripMateError::config("missing port");
        assert!(matches!(config_err, TripMateError::Config { .. }));

        let not_found_err = TripMateError::not_found("no such region");
        assert!(matches!(not_found_err, TripMateError::NotFound { .. }));

        let validation_err = TripMateError::validation("missing state");
        assert!(matches!(validation_err, TripMateError::Validation { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = TripMateError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let validation_err = TripMateError::validation("Missing required query param: name");
        assert_eq!(
            validation_err.user_message(),
            "Missing required query param: name"
        );
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            TripMateError::validation("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            TripMateError::not_found("x").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            TripMateError::general("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TripMateError = io_err.into();
        assert!(matches!(err, TripMateError::Io { .. }));
    }

    #[test]
    fn test_into_response_status() {
        let response = TripMateError::validation("bad").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
