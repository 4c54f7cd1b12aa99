//! STDIO transport: the server speaks MCP on stdin/stdout.
//!
//! Stdout carries protocol frames only; all logging goes to stderr.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

pub struct StdioTransport;

impl StdioTransport {
    /// Serve a single session until the client closes stdin.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!("{} MCP Server running on stdio", server.name());

        let running = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::startup(e.to_string()))?;

        let reason = running
            .waiting()
            .await
            .map_err(|e| TransportError::session(e.to_string()))?;

        info!("STDIO session closed: {:?}", reason);
        Ok(())
    }
}
