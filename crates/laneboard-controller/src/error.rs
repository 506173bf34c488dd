//! Controller error types.

use thiserror::Error;

/// Result type for controller operations.
pub type ControllerResult<T> = Result<T, ControllerError>;

/// Errors that can occur while setting up a controller.
///
/// Dispatching signals never fails; these only cover configuration.
#[derive(Debug, Error)]
pub enum ControllerError {
    /// Configuration error.
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl ControllerError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
