//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The ordered table of available tools (name, description, schema)
//! - Dispatch of tool calls by name (HTTP transport, tests)
//!
//! The table is fixed at compile time; the registry only carries the
//! shared upstream client the handlers run against.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Tool};
use tracing::{info, warn};

use super::ToolError;
use super::definitions::{
    ApiColombiaClient, GetAllDepartmentsTool, GetCountryTool, GetDepartmentByIdTool,
    GetDepartmentsByRegionTool, GetRegionByIdTool, GetRegionsTool,
};
use crate::core::{Config, Result};

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    client: Arc<ApiColombiaClient>,
}

impl ToolRegistry {
    /// Create a new tool registry around an existing client.
    pub fn new(client: Arc<ApiColombiaClient>) -> Self {
        Self { client }
    }

    /// Create a registry with a client built from the configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = ApiColombiaClient::new(&config.api)?;
        info!("Tool registry targeting {}", client.base_url());
        Ok(Self::new(Arc::new(client)))
    }

    /// The shared upstream client.
    pub fn client(&self) -> &Arc<ApiColombiaClient> {
        &self.client
    }

    /// Get all tool names, in registration order.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            GetCountryTool::NAME,
            GetRegionsTool::NAME,
            GetRegionByIdTool::NAME,
            GetDepartmentsByRegionTool::NAME,
            GetAllDepartmentsTool::NAME,
            GetDepartmentByIdTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata), in registration order.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            GetCountryTool::to_tool(),
            GetRegionsTool::to_tool(),
            GetRegionByIdTool::to_tool(),
            GetDepartmentsByRegionTool::to_tool(),
            GetAllDepartmentsTool::to_tool(),
            GetDepartmentByIdTool::to_tool(),
        ]
    }

    /// Dispatch a tool call to the appropriate handler.
    ///
    /// Only an unknown name or malformed arguments fail here; upstream
    /// trouble comes back as a text result.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> std::result::Result<CallToolResult, ToolError> {
        let client = self.client.as_ref();
        match name {
            GetCountryTool::NAME => GetCountryTool::call(client, arguments).await,
            GetRegionsTool::NAME => GetRegionsTool::call(client, arguments).await,
            GetRegionByIdTool::NAME => GetRegionByIdTool::call(client, arguments).await,
            GetDepartmentsByRegionTool::NAME => {
                GetDepartmentsByRegionTool::call(client, arguments).await
            }
            GetAllDepartmentsTool::NAME => GetAllDepartmentsTool::call(client, arguments).await,
            GetDepartmentByIdTool::NAME => GetDepartmentByIdTool::call(client, arguments).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}
