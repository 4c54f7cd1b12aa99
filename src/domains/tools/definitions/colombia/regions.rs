//! Region tools.
//!
//! - `getRegions`: every natural region of Colombia
//! - `getRegionById`: one region, with its department names

use std::sync::Arc;

use rmcp::{
    handler::server::tool::ToolRoute,
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::client::ApiColombiaClient;
use super::common::{NoParams, build_route, deserialize_id, parse_arguments, tool_metadata};
use super::format::{render_region_detail, render_region_list};
use super::lookup::Lookup;
use crate::domains::tools::ToolError;

/// Parameters for tools addressing a single region.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegionIdParams {
    /// Region identifier, passed through to the upstream URL as-is.
    #[schemars(with = "String", description = "Region ID (e.g. \"1\")")]
    #[serde(deserialize_with = "deserialize_id")]
    pub region_id: String,
}

/// Region listing tool implementation.
#[derive(Debug, Clone)]
pub struct GetRegionsTool;

impl GetRegionsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "getRegions";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get list of regions in Colombia";

    /// Upstream path, relative to the API base URL.
    pub const PATH: &'static str = "v1/Region";

    /// Execute the tool logic.
    pub async fn execute(client: &ApiColombiaClient) -> CallToolResult {
        info!("Listing regions");
        Lookup::new(Self::PATH)
            .run_list(client, render_region_list)
            .await
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

/// Region detail tool implementation.
#[derive(Debug, Clone)]
pub struct GetRegionByIdTool;

impl GetRegionByIdTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "getRegionById";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get detailed information about a specific region by ID";

    /// Upstream path for a region id.
    pub fn path(region_id: &str) -> String {
        format!("v1/Region/{}", region_id)
    }

    /// Message shown when the upstream has no such region.
    pub fn not_found_message(region_id: &str) -> String {
        format!("❌ No se encontró una región con el ID: {}", region_id)
    }

    /// Execute the tool logic.
    #[instrument(skip(client, params), fields(region_id = %params.region_id))]
    pub async fn execute(client: &ApiColombiaClient, params: &RegionIdParams) -> CallToolResult {
        info!("Fetching region {}", params.region_id);
        Lookup::new(Self::path(&params.region_id))
            .on_not_found(Self::not_found_message(&params.region_id))
            .run(client, render_region_detail)
            .await
    }

    /// Dispatch entry point for callers holding raw JSON arguments.
    pub async fn call(
        client: &ApiColombiaClient,
        arguments: serde_json::Value,
    ) -> Result<CallToolResult, ToolError> {
        let params: RegionIdParams = parse_arguments(arguments)?;
        Ok(Self::execute(client, &params).await)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        tool_metadata::<RegionIdParams>(Self::NAME, Self::DESCRIPTION)
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(client: Arc<ApiColombiaClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        build_route(
            Self::to_tool(),
            client,
            |client, params: RegionIdParams| async move { Self::execute(&client, &params).await },
        )
    }
}
