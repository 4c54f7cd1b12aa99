//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! This module builds the ToolRouter for STDIO/TCP transport by delegating
//! to the tool definitions themselves. Each tool knows how to create its own
//! route; all of them share one upstream client.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{
    ApiColombiaClient, GetAllDepartmentsTool, GetCountryTool, GetDepartmentByIdTool,
    GetDepartmentsByRegionTool, GetRegionByIdTool, GetRegionsTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<ApiColombiaClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(GetCountryTool::create_route(client.clone()))
        .with_route(GetRegionsTool::create_route(client.clone()))
        .with_route(GetRegionByIdTool::create_route(client.clone()))
        .with_route(GetDepartmentsByRegionTool::create_route(client.clone()))
        .with_route(GetAllDepartmentsTool::create_route(client.clone()))
        .with_route(GetDepartmentByIdTool::create_route(client))
}
