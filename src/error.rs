//! Error types for the Clash Detection client
//!
//! Every public API returns `Result<T, Error>`. Failures reported by the
//! service (or by the transport underneath it) arrive as [`Error::Api`]
//! carrying a parsed [`ClashDetectionError`].

use crate::api_error::{ClashDetectionError, ErrorCode};
use thiserror::Error;

/// The main error type for the Clash Detection client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // API Errors
    // ============================================================================
    #[error(transparent)]
    Api(#[from] ClashDetectionError),

    // ============================================================================
    // Authentication Errors
    // ============================================================================
    #[error("Access token or callback is required")]
    MissingAccessToken,

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Data Processing Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    /// Failure inside a caller-supplied collaborator, e.g. a token provider
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// The API error code, if this error came from the service
    pub fn api_code(&self) -> Option<ErrorCode> {
        match self {
            Error::Api(err) => Some(err.code),
            _ => None,
        }
    }

    /// Check if the service rejected the request because of throttling
    pub fn is_throttled(&self) -> bool {
        matches!(
            self.api_code(),
            Some(ErrorCode::RateLimitExceeded | ErrorCode::TooManyRequests)
        )
    }
}

/// Result type alias for the Clash Detection client
pub type Result<T> = std::result::Result<T, Error>;
