//! Transport error types.

use thiserror::Error;

/// Bridge transport error.
#[derive(Error, Debug)]
pub enum ChannelError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Protocol error
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// Socket error
    #[error("Socket error: {0}")]
    Socket(String),

    /// Runtime path resolution error
    #[error("Path error: {0}")]
    Path(String),

    /// Connection closed before a reply arrived
    #[error("Connection closed")]
    ConnectionClosed,
}

/// Result type alias using ChannelError.
pub type ChannelResult<T> = Result<T, ChannelError>;
