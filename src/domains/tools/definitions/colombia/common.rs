//! Common utilities shared across the API Colombia tools.
//!
//! Tool metadata, route construction, argument parsing and the text
//! envelope every tool returns.

use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, de::DeserializeOwned};

use super::client::ApiColombiaClient;
use crate::domains::tools::ToolError;

/// Parameters of tools that take no input.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct NoParams {}

/// Wrap text into the single-item envelope every tool returns.
///
/// Upstream failures are reported through the text as well, so this is
/// always a success result.
pub fn text_result(text: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text)])
}

/// Accept an id given either as a JSON string or a JSON number.
///
/// The value is passed through to the URL untouched.
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}

/// Deserialize tool arguments, reporting failures as invalid params.
pub fn parse_params<P: DeserializeOwned>(args: JsonObject) -> Result<P, McpError> {
    serde_json::from_value(serde_json::Value::Object(args))
        .map_err(|e| McpError::invalid_params(e.to_string(), None))
}

/// Deserialize arguments received outside rmcp (HTTP dispatch, tests).
pub fn parse_arguments<P: DeserializeOwned>(arguments: serde_json::Value) -> Result<P, ToolError> {
    let arguments = match arguments {
        serde_json::Value::Null => serde_json::Value::Object(JsonObject::new()),
        other => other,
    };
    serde_json::from_value(arguments).map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Build the Tool model (metadata) for a tool taking `P`.
pub fn tool_metadata<P: JsonSchema + 'static>(
    name: &'static str,
    description: &'static str,
) -> Tool {
    Tool {
        name: name.into(),
        description: Some(description.into()),
        input_schema: cached_schema_for_type::<P>(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Build a ToolRoute that parses `P` and hands it, with the shared client,
/// to `call`.
pub fn build_route<S, P, F, Fut>(
    tool: Tool,
    client: Arc<ApiColombiaClient>,
    call: F,
) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
    P: DeserializeOwned + Send + 'static,
    F: Fn(Arc<ApiColombiaClient>, P) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = CallToolResult> + Send + 'static,
{
    ToolRoute::new_dyn(tool, move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let client = client.clone();
        let call = call.clone();
        async move {
            let params: P = parse_params(args)?;
            Ok(call(client, params).await)
        }
        .boxed()
    })
}

/// Extract the text of the first content item.
#[cfg(test)]
pub fn result_text(result: &CallToolResult) -> String {
    use rmcp::model::RawContent;

    match &result.content[0].raw {
        RawContent::Text(text) => text.text.clone(),
        other => panic!("Expected text content, got {:?}", other),
    }
}
