//! Error types for the shared API types

use thiserror::Error;

/// Errors raised while parsing or validating API values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Unknown sort field
    #[error("unknown sort field: {0} (expected code, name, exchangeRate or createdAt)")]
    InvalidSortField(String),

    /// Unknown sort direction
    #[error("unknown sort direction: {0} (expected asc or desc)")]
    InvalidSortDirection(String),

    /// A currency payload field failed validation
    #[error("invalid {field}: {reason}")]
    InvalidPayload {
        /// Offending field name (wire spelling)
        field: &'static str,
        /// Human-readable reason
        reason: String,
    },
}
