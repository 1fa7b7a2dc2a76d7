//! Error types for the feed client.

use std::fmt;

use thiserror::Error;

/// Errors reported by the feed endpoint itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// HTTP-level error with status code.
    Http { status: u16, message: String },
    /// Network/connection error.
    Network { message: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http { status, message } => write!(f, "HTTP error {}: {}", status, message),
            ApiError::Network { message } => write!(f, "Network error: {}", message),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Returns the appropriate CLI exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ApiError::Network { .. } => 3,
            ApiError::Http { .. } => 2,
        }
    }
}

/// Top-level error type for feed operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Error reported by the feed endpoint.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Transport-level failure from the HTTP client.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body was not a valid location array.
    #[error("malformed feed payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns the appropriate CLI exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Api(api) => api.exit_code(),
            Error::Http(_) => 3,
            Error::Json(_) => 2,
        }
    }
}

/// Result type for feed operations.
pub type Result<T> = std::result::Result<T, Error>;
