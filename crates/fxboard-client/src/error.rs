//! Error types for the currency gateway

use fxboard_api::ApiError;
use thiserror::Error;

/// Errors that can occur when talking to the currency service
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Base URL cannot carry a path
    #[error("Invalid base URL: {0}")]
    BaseUrl(String),

    /// Request timeout
    #[error("Request timed out")]
    Timeout,

    /// API returned a non-success status
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// Payload rejected before sending
    #[error("Invalid request: {0}")]
    Invalid(#[from] ApiError),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else {
            ClientError::Http(err)
        }
    }
}

/// Result type for gateway operations
pub type Result<T> = std::result::Result<T, ClientError>;
