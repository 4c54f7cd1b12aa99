//! Country overview tool.
//!
//! Fetches the general profile of Colombia (capital, population, currency,
//! borders, flags...).

use std::sync::Arc;

use rmcp::{
    handler::server::tool::ToolRoute,
    model::{CallToolResult, Tool},
};
use tracing::info;

use super::client::ApiColombiaClient;
use super::common::{NoParams, build_route, parse_arguments, tool_metadata};
use super::format::render_country;
use super::lookup::Lookup;
use crate::domains::tools::ToolError;

/// Country lookup tool implementation.
#[derive(Debug, Clone)]
pub struct GetCountryTool;

impl GetCountryTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "getCountry";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get information about a country";

    /// Upstream path, relative to the API base URL.
    pub const PATH: &'static str = "v1/Country/Colombia";

    /// Execute the tool logic.
    pub async fn execute(client: &ApiColombiaClient) -> CallToolResult {
        info!("Fetching country information");
        Lookup::new(Self::PATH).run(client, render_country).await
    }

    /// Dispatch entry point for callers holding raw JSON arguments.
    pub async fn call(
        client: &ApiColombiaClient,
        arguments: serde_json::Value,
    ) -> Result<CallToolResult, ToolError> {
        let _: NoParams = parse_arguments(arguments)?;
        Ok(Self::execute(client).await)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        tool_metadata::<NoParams>(Self::NAME, Self::DESCRIPTION)
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(client: Arc<ApiColombiaClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        build_route(Self::to_tool(), client, |client, _: NoParams| async move {
            Self::execute(&client).await
        })
    }
}
