//! Error types and handling for the MCP server.
//!
//! Tool handlers never surface errors to clients as failures: upstream
//! problems are rendered as text, and protocol problems are answered per
//! request. What ends up here is startup and transport trouble, the things
//! that stop the process.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// The server could not be assembled from its configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A transport failed to start or stopped abnormally.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
