//! Transport error types.

use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Failures that stop a transport from serving.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The listening socket could not be bound.
    #[error("Failed to bind to {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The MCP session could not be established (handshake failed).
    #[error("Failed to start MCP session: {0}")]
    Startup(String),

    /// The MCP session ended abnormally.
    #[error("MCP session error: {0}")]
    Session(String),

    /// The HTTP server stopped with an error.
    #[error("HTTP server error: {0}")]
    Http(String),
}

impl TransportError {
    /// Create a bind error.
    pub fn bind(address: impl Into<String>, source: std::io::Error) -> Self {
        Self::Bind {
            address: address.into(),
            source,
        }
    }

    /// Create a session startup error.
    pub fn startup(msg: impl Into<String>) -> Self {
        Self::Startup(msg.into())
    }

    /// Create a session error.
    pub fn session(msg: impl Into<String>) -> Self {
        Self::Session(msg.into())
    }

    /// Create an HTTP server error.
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }
}
