//! Configuration management for the MCP server.
//!
//! Configuration is read once from the process environment, which `main`
//! seeds from an optional `.env` file. The upstream API settings are
//! mandatory: a process without them never gets as far as registering tools.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Environment variable holding the upstream API key.
pub const API_KEY_VAR: &str = "API_KEY";

/// Environment variable holding the upstream base URL.
pub const BASE_URL_VAR: &str = "BASE_URL";

/// Environment variable holding the upstream API host identifier.
pub const API_VERSION_VAR: &str = "API_VERSION";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Upstream sports-data API settings.
    pub api: ApiConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Settings for the upstream sports-data provider.
///
/// All three fields are guaranteed non-empty once constructed.
#[derive(Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Credential sent as `x-rapidapi-key`.
    pub api_key: String,

    /// Scheme and host prefix for every outbound request.
    pub base_url: String,

    /// Host identifier sent as `x-rapidapi-host`.
    pub api_version: String,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .finish()
    }
}

impl ApiConfig {
    /// Build an API configuration, rejecting empty values.
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Result<Self> {
        let config = Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            api_version: api_version.into(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that every field is non-empty after trimming.
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<&str> = [
            (API_KEY_VAR, &self.api_key),
            (BASE_URL_VAR, &self.base_url),
            (API_VERSION_VAR, &self.api_version),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

        if missing.is_empty() {
            return Ok(());
        }

        Err(Error::config(format!(
            "API_KEY, BASE_URL, and API_VERSION must be set in environment variables (missing: {})",
            missing.join(", ")
        )))
    }

    /// Load the API configuration from `API_KEY`, `BASE_URL` and `API_VERSION`.
    pub fn from_env() -> Result<Self> {
        let read = |name: &str| std::env::var(name).unwrap_or_default();
        Self::new(read(API_KEY_VAR), read(BASE_URL_VAR), read(API_VERSION_VAR))
    }
}

impl ServerConfig {
    fn default_name() -> String {
        "SoccerAPI".to_string()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: Self::default_name(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Load logging settings from `MCP_LOG_LEVEL`.
    ///
    /// Kept apart from [`Config::from_env`] so logging is up before the
    /// mandatory settings are checked.
    pub fn from_env() -> Self {
        std::env::var("MCP_LOG_LEVEL")
            .map(|level| Self { level })
            .unwrap_or_default()
    }
}

impl Config {
    /// Create a configuration with default server and transport settings
    /// around the given API settings.
    pub fn new(api: ApiConfig) -> Self {
        Self {
            server: ServerConfig::default(),
            transport: TransportConfig::default(),
            api,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Fails if any of `API_KEY`, `BASE_URL` or `API_VERSION` is missing or
    /// empty. Optional settings: `MCP_SERVER_NAME` and the transport
    /// variables read by [`TransportConfig::from_env`].
    pub fn from_env() -> Result<Self> {
        let mut config = Self::new(ApiConfig::from_env()?);

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        config.transport = TransportConfig::from_env();

        info!("Upstream API configured: {}", config.api.base_url);

        Ok(config)
    }
}
