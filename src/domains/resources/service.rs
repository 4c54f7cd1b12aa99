//! Resource service implementation.
//!
//! The ResourceService manages resource discovery and access.
//! Resources are defined in `definitions/` and registered via `registry.rs`.

use std::collections::BTreeMap;
use std::sync::Arc;

use rmcp::model::{ReadResourceResult, Resource};
use tracing::info;

use super::definitions::{DynamicResourceProvider, ServerInfoResource};
use super::error::ResourceError;
use super::registry::get_all_resources;
use crate::core::Config;

/// Service for managing and accessing resources.
pub struct ResourceService {
    /// Server configuration, used by dynamic resources.
    config: Arc<Config>,

    /// Registry of available resources, keyed by URI.
    resources: BTreeMap<String, ResourceEntry>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content provider for this resource.
    pub content: ResourceContent,
}

/// How a resource's content is produced.
#[derive(Debug, Clone)]
pub enum ResourceContent {
    /// Computed from the configuration on every read.
    Dynamic(DynamicResourceType),
}

/// Types of dynamic resources.
#[derive(Debug, Clone)]
pub enum DynamicResourceType {
    /// Server identity and tool listing.
    ServerInfo,
}

impl ResourceService {
    /// Create a new ResourceService with the given configuration.
    pub fn new(config: Arc<Config>) -> Self {
        info!("Initializing ResourceService");

        let mut service = Self {
            config,
            resources: BTreeMap::new(),
        };

        for entry in get_all_resources() {
            service.register_resource(entry);
        }

        service
    }

    /// Register a resource.
    fn register_resource(&mut self, entry: ResourceEntry) {
        info!("Registering resource: {}", entry.resource.raw.uri);
        self.resources
            .insert(entry.resource.raw.uri.to_string(), entry);
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .resources
            .get(uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let content = match &entry.content {
            ResourceContent::Dynamic(DynamicResourceType::ServerInfo) => {
                ServerInfoResource::resolve(uri, &self.config)?
            }
        };

        Ok(ReadResourceResult {
            contents: vec![content],
        })
    }
}
