//! HTTP transport: stateless JSON-RPC 2.0 over `POST`.
//!
//! Lets plain HTTP clients (curl, browsers) list and call the API Colombia
//! tools without an MCP session. Every request is answered on its own; there
//! is no session to initialize first. `GET /health` reports liveness.

use axum::{
    Json, Router,
    extract::State,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info, instrument, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::McpServer;
use crate::domains::tools::ToolError;

/// MCP protocol revision reported by `initialize`.
const PROTOCOL_VERSION: &str = "2024-11-05";

const INVALID_REQUEST: i32 = -32600;
const METHOD_NOT_FOUND: i32 = -32601;
const INVALID_PARAMS: i32 = -32602;
const INTERNAL_ERROR: i32 = -32603;

pub struct HttpTransport {
    config: HttpConfig,
}

/// Incoming JSON-RPC message. A missing `id` marks a notification.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RpcResponse {
    pub jsonrpc: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
}

impl RpcError {
    fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(INVALID_PARAMS, message)
    }
}

/// Result of one method, before it is framed as a response.
type RpcOutcome = Result<Value, RpcError>;

impl RpcResponse {
    fn reply(id: Option<Value>, outcome: RpcOutcome) -> Self {
        let (result, error) = match outcome {
            Ok(result) => (Some(result), None),
            Err(error) => (None, Some(error)),
        };
        Self {
            jsonrpc: "2.0",
            id,
            result,
            error,
        }
    }
}

#[derive(Clone)]
struct AppState {
    server: McpServer,
    rpc_path: Arc<str>,
}

impl HttpTransport {
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Serve until the listener fails.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.config.address();
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!(
            "{} MCP Server listening on http://{}{} (CORS {})",
            server.name(),
            addr,
            self.config.rpc_path,
            if self.config.enable_cors { "on" } else { "off" }
        );

        axum::serve(listener, app(server, &self.config))
            .await
            .map_err(|e| TransportError::http(e.to_string()))
    }
}

/// The axum application: JSON-RPC endpoint, health check and index.
fn app(server: McpServer, config: &HttpConfig) -> Router {
    let state = AppState {
        server,
        rpc_path: Arc::from(config.rpc_path.as_str()),
    };

    let app = Router::new()
        .route(&config.rpc_path, post(handle_rpc))
        .route("/health", get(health_check))
        .route("/", get(index))
        .with_state(state);

    if config.enable_cors {
        app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        app
    }
}

async fn index(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "name": "API Colombia MCP Server",
        "version": state.server.version(),
        "transport": "HTTP",
        "protocol": "JSON-RPC 2.0",
        "endpoints": {
            "rpc": &*state.rpc_path,
            "health": "/health"
        }
    }))
}

async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

#[instrument(skip_all, fields(method))]
async fn handle_rpc(
    State(state): State<AppState>,
    Json(request): Json<RpcRequest>,
) -> Json<RpcResponse> {
    tracing::Span::current().record("method", request.method.as_str());
    let outcome = dispatch(&state.server, &request).await;
    Json(RpcResponse::reply(request.id, outcome))
}

async fn dispatch(server: &McpServer, request: &RpcRequest) -> RpcOutcome {
    if request.jsonrpc != "2.0" {
        return Err(RpcError::new(INVALID_REQUEST, "Invalid Request"));
    }

    let params = request.params.as_ref();
    match request.method.as_str() {
        "initialize" => Ok(json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": { "tools": {}, "resources": {} },
            "serverInfo": { "name": server.name(), "version": server.version() },
            "instructions": server.instructions()
        })),
        "ping" => Ok(json!({})),
        "tools/list" => Ok(json!({ "tools": server.list_tools() })),
        "tools/call" => call_tool(server, params).await,
        "resources/list" => Ok(json!({ "resources": server.list_resources().await })),
        "resources/read" => {
            let uri = required_str(params, "uri")?;
            server
                .read_resource(uri)
                .await
                .map_err(RpcError::invalid_params)
        }
        method if method.starts_with("notifications/") => {
            debug!("Notification {} acknowledged", method);
            Ok(Value::Null)
        }
        method => {
            warn!("Unknown method: {}", method);
            Err(RpcError::new(METHOD_NOT_FOUND, "Method not found"))
        }
    }
}

async fn call_tool(server: &McpServer, params: Option<&Value>) -> RpcOutcome {
    let name = required_str(params, "name")?;
    let arguments = params
        .and_then(|p| p.get("arguments"))
        .cloned()
        .unwrap_or(Value::Null);

    info!("Calling tool {}", name);
    server.call_tool(name, arguments).await.map_err(|e| match e {
        ToolError::Internal(_) => RpcError::new(INTERNAL_ERROR, e.to_string()),
        _ => RpcError::invalid_params(e.to_string()),
    })
}

fn required_str<'a>(params: Option<&'a Value>, key: &str) -> Result<&'a str, RpcError> {
    params
        .and_then(|p| p.get(key))
        .and_then(Value::as_str)
        .ok_or_else(|| RpcError::invalid_params(format!("Missing '{}' parameter", key)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use crate::domains::tools::ToolRegistry;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn server() -> McpServer {
        McpServer::new(Config::default()).unwrap()
    }

    fn request(method: &str, params: Option<Value>) -> RpcRequest {
        RpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(1)),
            method: method.to_string(),
            params,
        }
    }

    async fn error_code(method: &str, params: Option<Value>) -> i32 {
        dispatch(&server(), &request(method, params))
            .await
            .unwrap_err()
            .code
    }

    #[tokio::test]
    async fn test_initialize_reports_server_info() {
        let result = dispatch(&server(), &request("initialize", None)).await.unwrap();
        assert_eq!(result["serverInfo"]["name"], "apicolombia");
        assert_eq!(result["protocolVersion"], PROTOCOL_VERSION);
        assert!(result["capabilities"]["tools"].is_object());
    }

    #[tokio::test]
    async fn test_tools_list_in_registration_order() {
        let result = dispatch(&server(), &request("tools/list", None)).await.unwrap();
        let names: Vec<&str> = result["tools"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|t| t["name"].as_str())
            .collect();
        assert_eq!(names, ToolRegistry::tool_names());
    }

    #[tokio::test]
    async fn test_tools_call_unknown_tool() {
        let params = json!({"name": "getWeather", "arguments": {}});
        let err = dispatch(&server(), &request("tools/call", Some(params)))
            .await
            .unwrap_err();
        assert_eq!(err.code, INVALID_PARAMS);
        assert!(err.message.contains("getWeather"));
    }

    #[tokio::test]
    async fn test_tools_call_missing_name() {
        assert_eq!(error_code("tools/call", Some(json!({}))).await, INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_wrong_jsonrpc_version() {
        let mut req = request("tools/list", None);
        req.jsonrpc = "1.0".to_string();
        let err = dispatch(&server(), &req).await.unwrap_err();
        assert_eq!(err.code, INVALID_REQUEST);
    }

    #[tokio::test]
    async fn test_prompts_are_not_served() {
        assert_eq!(error_code("prompts/list", None).await, METHOD_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_resources_read_server_info() {
        let params = json!({"uri": "apicolombia://server/info"});
        let result = dispatch(&server(), &request("resources/read", Some(params)))
            .await
            .unwrap();
        assert_eq!(result["contents"][0]["uri"], "apicolombia://server/info");
    }

    #[tokio::test]
    async fn test_resources_read_unknown_uri() {
        let params = json!({"uri": "apicolombia://nope"});
        assert_eq!(error_code("resources/read", Some(params)).await, INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_notification_is_acknowledged() {
        let result = dispatch(&server(), &request("notifications/initialized", None)).await;
        assert_eq!(result.unwrap(), Value::Null);
    }

    #[test]
    fn test_error_response_omits_result() {
        let response = RpcResponse::reply(
            Some(json!(3)),
            Err(RpcError::new(METHOD_NOT_FOUND, "Method not found")),
        );
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["error"]["code"], METHOD_NOT_FOUND);
        assert!(value.get("result").is_none());
    }

    #[tokio::test]
    async fn test_rpc_endpoint_over_http() {
        let body = json!({"jsonrpc": "2.0", "id": 7, "method": "tools/list"}).to_string();
        let req = http::Request::builder()
            .method("POST")
            .uri("/mcp")
            .header("content-type", "application/json")
            .body(axum::body::Body::from(body))
            .unwrap();

        let response = app(server(), &HttpConfig::default())
            .oneshot(req)
            .await
            .unwrap();
        assert_eq!(response.status(), http::StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["result"]["tools"][0]["name"], "getCountry");
    }

    #[tokio::test]
    async fn test_index_reports_rpc_path() {
        let config = HttpConfig {
            rpc_path: "/rpc".to_string(),
            ..HttpConfig::default()
        };
        let req = http::Request::builder()
            .uri("/")
            .body(axum::body::Body::empty())
            .unwrap();

        let response = app(server(), &config).oneshot(req).await.unwrap();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["endpoints"]["rpc"], "/rpc");
    }
}
