//! Core error types.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by the core types.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An instant string is not valid RFC 3339.
    #[error("invalid instant {value:?}: {source}")]
    InvalidInstant {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

impl CoreError {
    /// Creates an invalid instant error.
    pub fn invalid_instant(value: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::InvalidInstant {
            value: value.into(),
            source,
        }
    }
}
