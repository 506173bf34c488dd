//! CLI error types.

use std::path::PathBuf;

use laneboard_controller::ControllerError;
use laneboard_protocol::ProtocolError;
use thiserror::Error;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// The timeline settings failed validation.
    #[error(transparent)]
    Controller(#[from] ControllerError),

    /// A dataset file could not be parsed.
    #[error("invalid dataset {}: {source}", path.display())]
    Dataset {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// JSON output could not be produced.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A script line could not be decoded, or output could not be encoded.
    #[error("script error: {0}")]
    Protocol(#[from] ProtocolError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
