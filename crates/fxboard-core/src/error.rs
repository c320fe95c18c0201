//! Core error types for fxboard-core

use thiserror::Error;

/// Errors raised by controller operations and settings loading
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Page size must be positive
    #[error("invalid page size: {0} (must be at least 1)")]
    InvalidPageSize(u32),

    /// Configuration could not be loaded or is invalid
    #[error("configuration error: {0}")]
    Config(String),
}
