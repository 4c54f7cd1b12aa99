//! Server info resource definition.

use rmcp::model::ResourceContents;

use super::{DynamicResourceProvider, ResourceDefinition};
use crate::core::Config;
use crate::domains::resources::error::ResourceError;
use crate::domains::resources::service::{DynamicResourceType, ResourceContent};
use crate::domains::tools::ToolRegistry;

/// Server information resource (dynamic).
pub struct ServerInfoResource;

impl ResourceDefinition for ServerInfoResource {
    const URI: &'static str = "apicolombia://server/info";
    const NAME: &'static str = "Server Information";
    const DESCRIPTION: &'static str =
        "Server identity, upstream API Colombia base URL and available tools";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::Dynamic(DynamicResourceType::ServerInfo)
    }
}

impl DynamicResourceProvider for ServerInfoResource {
    fn resolve(uri: &str, config: &Config) -> Result<ResourceContents, ResourceError> {
        let info = serde_json::json!({
            "server": config.server.name,
            "version": config.server.version,
            "api_base_url": config.api.base_url,
            "tools": ToolRegistry::tool_names(),
        });

        Ok(ResourceContents::text(
            serde_json::to_string_pretty(&info).map_err(|e| ResourceError::internal(e.to_string()))?,
            uri,
        ))
    }
}
