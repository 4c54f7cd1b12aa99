//! Transports the API Colombia server can be reached over.
//!
//! - `stdio` (default feature): MCP over standard input/output, the mode
//!   desktop MCP clients spawn the binary in
//! - `tcp`: one rmcp session per accepted socket, line-delimited JSON-RPC
//! - `http`: stateless JSON-RPC over `POST`, plus `/health`
//!
//! Selection happens at runtime through `MCP_TRANSPORT`, limited to the
//! transports compiled in.

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;

#[cfg(feature = "http")]
pub use config::HttpConfig;
