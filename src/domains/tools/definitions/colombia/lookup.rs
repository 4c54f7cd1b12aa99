//! The fetch → classify → format pipeline shared by every API Colombia tool.
//!
//! A [`Lookup`] describes one upstream call: the path, what to say on a 404
//! (if that endpoint treats 404 specially), and what to say when a list
//! comes back empty (if that endpoint checks). Failures are typed as
//! [`LookupError`] internally and turned into text only at the edge, so the
//! tool contract stays a single text item whatever happens.

use rmcp::model::CallToolResult;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

use super::client::{ApiColombiaClient, FetchError};
use super::common::text_result;

/// Prefix of every fetch failure message, whatever the tool.
pub const FETCH_ERROR_PREFIX: &str = "Error fetching country data";

/// Fallback when a failure carries no message.
pub const UNKNOWN_ERROR: &str = "Unknown error occurred";

/// Why a lookup did not produce a rendered payload.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Upstream 404 on an endpoint that reports it to the user.
    #[error("{0}")]
    NotFound(String),

    /// Upstream 200 with an empty collection on an endpoint that checks.
    #[error("{0}")]
    Empty(String),

    /// Anything else: status, transport or decoding trouble.
    #[error("{}: {}", FETCH_ERROR_PREFIX, fetch_detail(.0))]
    Fetch(FetchError),
}

fn fetch_detail(error: &FetchError) -> String {
    let message = error.to_string();
    if message.trim().is_empty() {
        UNKNOWN_ERROR.to_string()
    } else {
        message
    }
}

/// Description of a single upstream lookup.
#[derive(Debug, Clone)]
pub struct Lookup {
    path: String,
    not_found: Option<String>,
    empty: Option<String>,
}

impl Lookup {
    /// A lookup of `path` (relative to the client's base URL).
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            not_found: None,
            empty: None,
        }
    }

    /// Render `message` instead of an error when the upstream returns 404.
    pub fn on_not_found(mut self, message: impl Into<String>) -> Self {
        self.not_found = Some(message.into());
        self
    }

    /// Render `message` when a list comes back empty.
    pub fn on_empty(mut self, message: impl Into<String>) -> Self {
        self.empty = Some(message.into());
        self
    }

    /// Fetch and classify a single entity.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        client: &ApiColombiaClient,
    ) -> Result<T, LookupError> {
        client
            .get_json::<T>(&self.path)
            .await
            .map_err(|e| self.classify(e))
    }

    /// Fetch and classify a collection, applying the empty-list check.
    pub async fn fetch_list<T: DeserializeOwned>(
        &self,
        client: &ApiColombiaClient,
    ) -> Result<Vec<T>, LookupError> {
        let items = self.fetch::<Vec<T>>(client).await?;
        debug!(path = %self.path, count = items.len(), "List fetched");

        match &self.empty {
            Some(message) if items.is_empty() => Err(LookupError::Empty(message.clone())),
            _ => Ok(items),
        }
    }

    /// Fetch a single entity and render it (or the failure) as a tool result.
    pub async fn run<T, F>(self, client: &ApiColombiaClient, render: F) -> CallToolResult
    where
        T: DeserializeOwned,
        F: FnOnce(&T) -> String,
    {
        let outcome = self.fetch::<T>(client).await.map(|payload| render(&payload));
        text_result(into_text(outcome))
    }

    /// Fetch a collection and render it (or the failure) as a tool result.
    pub async fn run_list<T, F>(self, client: &ApiColombiaClient, render: F) -> CallToolResult
    where
        T: DeserializeOwned,
        F: FnOnce(&[T]) -> String,
    {
        let outcome = self
            .fetch_list::<T>(client)
            .await
            .map(|items| render(&items));
        text_result(into_text(outcome))
    }

    fn classify(&self, error: FetchError) -> LookupError {
        match (error, &self.not_found) {
            (FetchError::NotFound, Some(message)) => {
                debug!(path = %self.path, "Not found upstream");
                LookupError::NotFound(message.clone())
            }
            (error, _) => {
                warn!(path = %self.path, "Lookup failed: {}", error);
                LookupError::Fetch(error)
            }
        }
    }
}

/// Collapse a lookup outcome into the text shown to the client.
pub fn into_text(outcome: Result<String, LookupError>) -> String {
    outcome.unwrap_or_else(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ApiConfig;
    use serde::Deserialize;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, Deserialize)]
    struct Item {
        id: i64,
    }

    async fn mock(server: &MockServer, route: &str, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(response)
            .mount(server)
            .await;
    }

    fn client_for(server: &MockServer) -> ApiColombiaClient {
        ApiColombiaClient::new(&ApiConfig::with_base_url(format!("{}/", server.uri()))).unwrap()
    }

    #[test]
    fn test_fetch_error_text() {
        let err = LookupError::Fetch(FetchError::Status(500));
        assert_eq!(err.to_string(), "Error fetching country data: HTTP error! status: 500");
    }

    #[test]
    fn test_fetch_error_without_message_uses_fallback() {
        let err = LookupError::Fetch(FetchError::Transport(String::new()));
        assert_eq!(err.to_string(), "Error fetching country data: Unknown error occurred");
    }

    #[tokio::test]
    async fn test_not_found_message_when_configured() {
        let server = MockServer::start().await;
        mock(&server, "/v1/Thing/9", ResponseTemplate::new(404)).await;

        let lookup = Lookup::new("v1/Thing/9").on_not_found("no thing 9");
        let result = lookup.fetch::<Item>(&client_for(&server)).await;
        match result {
            Err(LookupError::NotFound(message)) => assert_eq!(message, "no thing 9"),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_not_found_is_generic_without_message() {
        let server = MockServer::start().await;
        mock(&server, "/v1/Thing", ResponseTemplate::new(404)).await;

        let result = Lookup::new("v1/Thing")
            .fetch::<Item>(&client_for(&server))
            .await;
        let text = into_text(result.map(|item| item.id.to_string()));
        assert_eq!(text, "Error fetching country data: HTTP error! status: 404");
    }

    #[tokio::test]
    async fn test_empty_list_message() {
        let server = MockServer::start().await;
        mock(
            &server,
            "/v1/Things",
            ResponseTemplate::new(200).set_body_json(serde_json::json!([])),
        )
        .await;

        let result = Lookup::new("v1/Things")
            .on_empty("nothing here")
            .fetch_list::<Item>(&client_for(&server))
            .await;
        assert!(matches!(result, Err(LookupError::Empty(ref m)) if m == "nothing here"));
    }

    #[tokio::test]
    async fn test_empty_list_passes_without_message() {
        let server = MockServer::start().await;
        mock(
            &server,
            "/v1/Things",
            ResponseTemplate::new(200).set_body_json(serde_json::json!([])),
        )
        .await;

        let items = Lookup::new("v1/Things")
            .fetch_list::<Item>(&client_for(&server))
            .await
            .unwrap();
        assert!(items.is_empty());
    }
}
