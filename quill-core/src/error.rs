//! Error types for Quill.

use thiserror::Error;

/// Result type alias using `QuillError`.
pub type Result<T> = std::result::Result<T, QuillError>;

/// Main error type for all Quill operations.
#[derive(Debug, Error)]
pub enum QuillError {
    /// The upstream call failed: network error, non-success status, or a
    /// body that is not a blog collection.
    #[error("Upstream request failed: {0}")]
    Upstream(String),

    /// The search query was missing or blank.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// An operation that needs at least one record received none.
    #[error("Blog collection is empty")]
    EmptyInput,

    /// Missing or malformed configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl QuillError {
    /// Returns true if the caller's input caused this error.
    pub fn is_client_error(&self) -> bool {
        matches!(self, QuillError::InvalidQuery(_))
    }
}
