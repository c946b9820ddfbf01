//! Error types for client operations.

use thiserror::Error;

/// Errors surfaced by client operations.
///
/// Transport failures (`Http`) are normally consumed inside the client's
/// fallback path and never reach callers; the remaining variants are real
/// failures of the local environment and do propagate.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Any transport failure or non-2xx response from the remote API.
    #[error("request to task API failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Local cache store failure.
    #[error("cache store error: {0}")]
    Store(#[from] rusqlite::Error),

    /// Malformed JSON in the cache or a response body.
    #[error("encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),

    /// Create was invoked with empty or whitespace-only text.
    #[error("task text must not be empty")]
    EmptyText,
}

impl ClientError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this error should trigger the local-cache fallback.
    ///
    /// Only remote transport failures do; local store or encoding failures
    /// must propagate to the caller.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Http(_))
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
