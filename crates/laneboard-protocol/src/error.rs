//! Protocol error types.

use thiserror::Error;

/// Result type for protocol operations.
pub type ProtocolResult<T> = Result<T, ProtocolError>;

/// Errors that can occur while encoding or decoding messages.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Failed to serialize or deserialize a message.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A line of a signal stream could not be decoded.
    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<ProtocolError>,
    },

    /// The message has no string `type` tag.
    #[error("message has no \"type\" tag")]
    MissingType,

    /// Empty message received.
    #[error("empty message")]
    EmptyMessage,

    /// IO error during read/write.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProtocolError {
    /// Attaches a line number to an error.
    pub fn at_line(line: usize, source: ProtocolError) -> Self {
        Self::Line {
            line,
            source: Box::new(source),
        }
    }
}
