//! Domains module containing business logic organized by bounded contexts.
//!
//! - `tools`: API Colombia lookups exposed as MCP tools
//! - `resources`: read-only server metadata

pub mod resources;
pub mod tools;
