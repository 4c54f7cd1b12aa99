//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Each tool wraps one read-only endpoint of the API Colombia REST service
//! and answers with a single block of text.
//!
//! ## Architecture
//!
//! - `definitions/` - Tool implementations, upstream client and formatting
//! - `router.rs` - Dynamic ToolRouter builder for STDIO/TCP transport
//! - `registry.rs` - Ordered tool table and dispatch by name
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Add the tool struct next to the ones sharing its upstream resource
//! 2. Give it `NAME`, `DESCRIPTION`, `execute()`, `call()`, `to_tool()`
//!    and `create_route()`
//! 3. Export it in `definitions/mod.rs`
//! 4. Add its route in `router.rs` and its entries in `registry.rs`

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
