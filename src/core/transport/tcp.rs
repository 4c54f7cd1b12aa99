//! TCP transport: every accepted connection gets its own MCP session.
//!
//! Messages are line-delimited JSON-RPC, the same framing as stdio.

use std::net::SocketAddr;
use std::time::Duration;

use rmcp::ServiceExt;
use tokio::net::{TcpListener, TcpStream};
use tracing::{info, instrument, warn};

use super::{TransportError, TransportResult, config::TcpConfig};
use crate::core::McpServer;

/// Pause after a failed `accept` before trying again.
const ACCEPT_RETRY_DELAY: Duration = Duration::from_millis(100);

pub struct TcpTransport {
    config: TcpConfig,
}

impl TcpTransport {
    pub fn new(config: TcpConfig) -> Self {
        Self { config }
    }

    /// `host:port` the listener binds to.
    pub fn address(&self) -> String {
        self.config.address()
    }

    /// Accept connections forever, serving each on its own task.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!("{} MCP Server listening on tcp://{}", server.name(), addr);

        loop {
            let (stream, peer) = match listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    warn!("accept failed: {}", e);
                    tokio::time::sleep(ACCEPT_RETRY_DELAY).await;
                    continue;
                }
            };

            if let Err(e) = stream.set_nodelay(true) {
                warn!("Could not set TCP_NODELAY for {}: {}", peer, e);
            }

            tokio::spawn(serve_connection(server.clone(), stream, peer));
        }
    }
}

#[instrument(skip(server, stream))]
async fn serve_connection(server: McpServer, stream: TcpStream, peer: SocketAddr) {
    info!("Client connected");

    let running = match server.serve(stream).await {
        Ok(running) => running,
        Err(e) => {
            warn!("MCP handshake failed: {}", e);
            return;
        }
    };

    match running.waiting().await {
        Ok(reason) => info!("Client disconnected: {:?}", reason),
        Err(e) => warn!("Session ended with error: {}", e),
    }
}
