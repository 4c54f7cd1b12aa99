//! Department tools.
//!
//! - `getDepartmentsByRegion`: departments belonging to one region
//! - `getAllDepartments`: every department in the country
//! - `getDepartmentById`: one department in detail
//!
//! Only the by-region listing distinguishes an empty result from a missing
//! region; the full listing renders a zero count instead.

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
use super::format::{render_all_departments, render_department_detail, render_region_departments};
use super::lookup::Lookup;
use super::regions::RegionIdParams;
use crate::domains::tools::ToolError;

/// Parameters for tools addressing a single department.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentIdParams {
    /// Department identifier, passed through to the upstream URL as-is.
    #[schemars(with = "String", description = "Department ID (e.g. \"5\")")]
    #[serde(deserialize_with = "deserialize_id")]
    pub department_id: String,
}

// ============================================================================
// getDepartmentsByRegion
// ============================================================================

/// Departments-of-a-region tool implementation.
#[derive(Debug, Clone)]
pub struct GetDepartmentsByRegionTool;

impl GetDepartmentsByRegionTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "getDepartmentsByRegion";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get list of departments for a specific region by region ID";

    /// Upstream path listing the departments of a region.
    pub fn path(region_id: &str) -> String {
        format!("v1/Region/{}/departments", region_id)
    }

    /// Message shown when the upstream has no such region.
    pub fn not_found_message(region_id: &str) -> String {
        format!(
            "❌ No se encontraron departamentos para la región con ID: {}",
            region_id
        )
    }

    /// Message shown when the region exists but lists no departments.
    pub fn empty_message(region_id: &str) -> String {
        format!(
            "📍 No hay departamentos registrados para la región con ID: {}",
            region_id
        )
    }

    /// Execute the tool logic.
    #[instrument(skip(client, params), fields(region_id = %params.region_id))]
    pub async fn execute(client: &ApiColombiaClient, params: &RegionIdParams) -> CallToolResult {
        info!("Listing departments of region {}", params.region_id);
        Lookup::new(Self::path(&params.region_id))
            .on_not_found(Self::not_found_message(&params.region_id))
            .on_empty(Self::empty_message(&params.region_id))
            .run_list(client, render_region_departments)
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

// ============================================================================
// getAllDepartments
// ============================================================================

/// Full department listing tool implementation.
#[derive(Debug, Clone)]
pub struct GetAllDepartmentsTool;

impl GetAllDepartmentsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "getAllDepartments";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get list of all departments in Colombia";

    /// Upstream path, relative to the API base URL.
    pub const PATH: &'static str = "v1/Department";

    /// Execute the tool logic.
    pub async fn execute(client: &ApiColombiaClient) -> CallToolResult {
        info!("Listing all departments");
        Lookup::new(Self::PATH)
            .run_list(client, render_all_departments)
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

// ============================================================================
// getDepartmentById
// ============================================================================

/// Department detail tool implementation.
#[derive(Debug, Clone)]
pub struct GetDepartmentByIdTool;

impl GetDepartmentByIdTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "getDepartmentById";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get detailed information about a specific department by ID";

    /// Upstream path for a department id.
    pub fn path(department_id: &str) -> String {
        format!("v1/Department/{}", department_id)
    }

    /// Message shown when the upstream has no such department.
    pub fn not_found_message(department_id: &str) -> String {
        format!("❌ No se encontró un departamento con el ID: {}", department_id)
    }

    /// Execute the tool logic.
    #[instrument(skip(client, params), fields(department_id = %params.department_id))]
    pub async fn execute(
        client: &ApiColombiaClient,
        params: &DepartmentIdParams,
    ) -> CallToolResult {
        info!("Fetching department {}", params.department_id);
        Lookup::new(Self::path(&params.department_id))
            .on_not_found(Self::not_found_message(&params.department_id))
            .run(client, render_department_detail)
            .await
    }

    /// Dispatch entry point for callers holding raw JSON arguments.
    pub async fn call(
        client: &ApiColombiaClient,
        arguments: serde_json::Value,
    ) -> Result<CallToolResult, ToolError> {
        let params: DepartmentIdParams = parse_arguments(arguments)?;
        Ok(Self::execute(client, &params).await)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        tool_metadata::<DepartmentIdParams>(Self::NAME, Self::DESCRIPTION)
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(client: Arc<ApiColombiaClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        build_route(
            Self::to_tool(),
            client,
            |client, params: DepartmentIdParams| async move {
                Self::execute(&client, &params).await
            },
        )
    }
}
