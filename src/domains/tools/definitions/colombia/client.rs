//! HTTP client for the API Colombia REST service.
//!
//! One GET per call, no retries and no timeout. The base URL is taken from
//! [`ApiConfig`] and request paths are appended to it verbatim.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::core::config::ApiConfig;
use crate::core::{Error, Result};

/// Failures of a single upstream fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The upstream answered 404.
    #[error("HTTP error! status: 404")]
    NotFound,

    /// Any other non-2xx status.
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),

    /// The response body was not the expected JSON shape.
    #[error("{0}")]
    Decode(String),
}

/// Client for the API Colombia endpoints.
#[derive(Debug, Clone)]
pub struct ApiColombiaClient {
    http: Client,
    base_url: String,
}

impl ApiColombiaClient {
    /// Build a client for the configured base URL.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| Error::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// The root every request path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a relative path.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `base_url + path` and decode the JSON body.
    #[instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> std::result::Result<T, FetchError> {
        let url = self.url_for(path);
        debug!(url = %url, "GET request");

        let response = self.http.get(&url).send().await.map_err(|e| {
            warn!(url = %url, "Request failed: {}", e);
            FetchError::Transport(e.to_string())
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!(url = %url, "Upstream returned 404");
            return Err(FetchError::NotFound);
        }
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "Upstream returned an error status");
            return Err(FetchError::Status(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        debug!("API response received: {} bytes", bytes.len());

        serde_json::from_slice(&bytes).map_err(|e| {
            warn!(url = %url, "Failed to decode response body: {}", e);
            FetchError::Decode(format!("Invalid JSON response: {}", e))
        })
    }
}
