//! Transport selection and listener settings.
//!
//! Read from the environment:
//!
//! | Variable          | Transport | Default     |
//! |-------------------|-----------|-------------|
//! | `MCP_TRANSPORT`   | all       | `stdio`     |
//! | `MCP_TCP_HOST`    | tcp       | `127.0.0.1` |
//! | `MCP_TCP_PORT`    | tcp       | `3000`      |
//! | `MCP_HTTP_HOST`   | http      | `127.0.0.1` |
//! | `MCP_HTTP_PORT`   | http      | `8080`      |
//! | `MCP_HTTP_PATH`   | http      | `/mcp`      |
//! | `MCP_HTTP_CORS`   | http      | `true`      |

use serde::{Deserialize, Serialize};
#[cfg(any(feature = "tcp", feature = "http"))]
use tracing::warn;

/// Which transport to serve on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// MCP over stdin/stdout.
    #[cfg(feature = "stdio")]
    Stdio,

    /// One MCP session per TCP connection.
    #[cfg(feature = "tcp")]
    Tcp(TcpConfig),

    /// JSON-RPC over HTTP POST.
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

#[cfg(feature = "tcp")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TcpConfig {
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,
}

#[cfg(feature = "http")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    /// Route the JSON-RPC endpoint is mounted on.
    #[serde(default = "default_rpc_path")]
    pub rpc_path: String,

    /// Allow cross-origin requests from browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

#[cfg(any(feature = "tcp", feature = "http"))]
fn default_host() -> String {
    "127.0.0.1".to_string()
}

#[cfg(feature = "tcp")]
const DEFAULT_TCP_PORT: u16 = 3000;

#[cfg(feature = "http")]
const DEFAULT_HTTP_PORT: u16 = 8080;

#[cfg(feature = "http")]
fn default_rpc_path() -> String {
    "/mcp".to_string()
}

#[cfg(feature = "http")]
fn default_cors() -> bool {
    true
}

/// Parse a port variable, falling back (with a warning) on bad input.
#[cfg(any(feature = "tcp", feature = "http"))]
fn port_from_env(var: &str, default: u16) -> u16 {
    match std::env::var(var) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid {}={:?}, using {}", var, raw, default);
            default
        }),
        Err(_) => default,
    }
}

#[cfg(any(feature = "tcp", feature = "http"))]
fn host_from_env(var: &str) -> String {
    std::env::var(var)
        .ok()
        .filter(|h| !h.trim().is_empty())
        .unwrap_or_else(default_host)
}

impl Default for TransportConfig {
    fn default() -> Self {
        #[cfg(feature = "stdio")]
        {
            Self::Stdio
        }

        #[cfg(all(not(feature = "stdio"), feature = "tcp"))]
        {
            Self::Tcp(TcpConfig::default())
        }

        #[cfg(all(not(feature = "stdio"), not(feature = "tcp"), feature = "http"))]
        {
            Self::Http(HttpConfig::default())
        }

        #[cfg(not(any(feature = "stdio", feature = "tcp", feature = "http")))]
        {
            compile_error!("At least one transport feature must be enabled: stdio, tcp, or http");
        }
    }
}

#[cfg(feature = "tcp")]
impl Default for TcpConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_TCP_PORT,
            host: default_host(),
        }
    }
}

#[cfg(feature = "tcp")]
impl TcpConfig {
    /// `host:port` to bind.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn from_env() -> Self {
        Self {
            port: port_from_env("MCP_TCP_PORT", DEFAULT_TCP_PORT),
            host: host_from_env("MCP_TCP_HOST"),
        }
    }
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_HTTP_PORT,
            host: default_host(),
            rpc_path: default_rpc_path(),
            enable_cors: default_cors(),
        }
    }
}

#[cfg(feature = "http")]
impl HttpConfig {
    /// `host:port` to bind.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn from_env() -> Self {
        let rpc_path = std::env::var("MCP_HTTP_PATH")
            .ok()
            .map(|p| normalize_rpc_path(&p))
            .unwrap_or_else(default_rpc_path);
        let enable_cors = std::env::var("MCP_HTTP_CORS")
            .map(|v| !matches!(v.trim().to_lowercase().as_str(), "false" | "0" | "no"))
            .unwrap_or_else(|_| default_cors());

        Self {
            port: port_from_env("MCP_HTTP_PORT", DEFAULT_HTTP_PORT),
            host: host_from_env("MCP_HTTP_HOST"),
            rpc_path,
            enable_cors,
        }
    }
}

/// axum routes must start with `/`.
#[cfg(feature = "http")]
fn normalize_rpc_path(path: &str) -> String {
    let path = path.trim();
    if path.is_empty() {
        default_rpc_path()
    } else if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

impl TransportConfig {
    #[cfg(feature = "tcp")]
    pub fn tcp(port: u16, host: impl Into<String>) -> Self {
        Self::Tcp(TcpConfig {
            port,
            host: host.into(),
        })
    }

    #[cfg(feature = "http")]
    pub fn http(port: u16, host: impl Into<String>) -> Self {
        Self::Http(HttpConfig {
            port,
            host: host.into(),
            ..Default::default()
        })
    }

    /// Select the transport named by `MCP_TRANSPORT`.
    ///
    /// Unknown or missing values, and transports not compiled in, fall back
    /// to the default transport.
    pub fn from_env() -> Self {
        let transport = std::env::var("MCP_TRANSPORT")
            .unwrap_or_default()
            .trim()
            .to_lowercase();

        match transport.as_str() {
            #[cfg(feature = "tcp")]
            "tcp" => Self::Tcp(TcpConfig::from_env()),
            #[cfg(feature = "http")]
            "http" => Self::Http(HttpConfig::from_env()),
            _ => Self::default(),
        }
    }

    /// Human-readable summary for startup logs.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => "stdio".to_string(),
            #[cfg(feature = "tcp")]
            Self::Tcp(cfg) => format!("tcp://{}", cfg.address()),
            #[cfg(feature = "http")]
            Self::Http(cfg) => format!("http://{}{}", cfg.address(), cfg.rpc_path),
        }
    }
}
