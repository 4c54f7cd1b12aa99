//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that is
//! resolved once at startup from environment variables (and an optional
//! `.env` file), then handed explicitly to the components that need it.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default root of the API Colombia REST service.
///
/// The trailing slash matters: request paths are appended to it directly.
pub const DEFAULT_API_BASE_URL: &str = "https://api-colombia.com/api/";

/// Environment variable overriding [`DEFAULT_API_BASE_URL`].
pub const API_BASE_URL_ENV: &str = "API_COLOMBIA_URL";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Upstream API settings.
    pub api: ApiConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Upstream API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Root URL every request path is appended to.
    pub base_url: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Create an API configuration pointing at the given base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Read `API_COLOMBIA_URL`, falling back to [`DEFAULT_API_BASE_URL`].
    ///
    /// The value is used verbatim; a missing trailing `/` is only warned
    /// about.
    pub fn from_env() -> Self {
        match std::env::var(API_BASE_URL_ENV) {
            Ok(base_url) if !base_url.is_empty() => {
                if !base_url.ends_with('/') {
                    warn!(
                        "{} does not end with '/'; request paths are appended verbatim",
                        API_BASE_URL_ENV
                    );
                }
                info!("Upstream API base URL set to {}", base_url);
                Self::with_base_url(base_url)
            }
            _ => {
                info!("{} not set, using {}", API_BASE_URL_ENV, DEFAULT_API_BASE_URL);
                Self::default()
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            with_timestamps: true,
        }
    }
}

impl LoggingConfig {
    /// Read `MCP_LOG_LEVEL` and `MCP_LOG_TIMESTAMPS`.
    ///
    /// Loads `.env` itself: logging is set up before the rest of the
    /// configuration is read, so that its warnings are not lost.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut logging = Self::default();

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("MCP_LOG_TIMESTAMPS") {
            logging.with_timestamps = timestamps.parse().unwrap_or(true);
        }

        logging
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "apicolombia".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            api: ApiConfig::default(),
            logging: LoggingConfig::default(),
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, ...). The upstream root is read from
    /// `API_COLOMBIA_URL`.
    ///
    /// Emits warnings for suspicious values, so install the tracing
    /// subscriber (from [`LoggingConfig::from_env`]) first.
    pub fn from_env() -> Self {
        let mut config = Self {
            logging: LoggingConfig::from_env(),
            ..Self::default()
        };

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        config.transport = TransportConfig::from_env();
        config.api = ApiConfig::from_env();

        config
    }
}
