//! API Colombia MCP Server Library
//!
//! This crate exposes the public API Colombia REST service (country, natural
//! regions and departments of Colombia) to MCP clients as a set of tools
//! that answer with human-readable text.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the server handler and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: The six API Colombia lookup tools and their upstream client
//!   - **resources**: Read-only server metadata
//!
//! # Example
//!
//! ```rust,no_run
//! use apicolombia_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
