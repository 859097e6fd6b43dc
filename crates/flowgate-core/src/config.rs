//! Layered configuration for the flowgate service.
//!
//! Sources merge lowest to highest precedence: built-in defaults, an
//! optional TOML file, then `FLOWGATE_`-prefixed environment variables.
//! Nested keys use `__` in the environment, e.g. `FLOWGATE_SERVER__PORT=9000`
//! or `FLOWGATE_LIMITS__MAX_NODES=500`.

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A configuration source failed to parse or deserialize.
    #[error("configuration error: {0}")]
    Figment(#[from] Box<figment::Error>),

    /// The merged configuration is structurally valid but unusable.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Root configuration, one section per concern.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FlowgateConfig {
    /// HTTP listener and CORS settings.
    pub server: ServerConfig,
    /// Per-request element budgets.
    pub limits: LimitsConfig,
    /// Log filtering.
    pub logging: LoggingConfig,
}

/// HTTP listener and CORS settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address for the HTTP listener.
    pub host: String,
    /// TCP port for the HTTP listener.
    pub port: u16,
    /// Exact origins allowed by CORS. Empty list means any origin.
    pub cors_origins: Vec<String>,
    /// Upper bound on request body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors_origins: Vec::new(),
            max_body_bytes: 2 * 1024 * 1024,
        }
    }
}

/// Per-request element budgets.
///
/// Budgets bound worst-case validation work per request. They count list
/// entries in the payload, before deduplication or dangling-edge filtering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum node entries accepted in one request.
    pub max_nodes: usize,
    /// Maximum edge entries accepted in one request.
    pub max_edges: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_nodes: 10_000,
            max_edges: 10_000,
        }
    }
}

/// Log filtering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive set, overridable via `RUST_LOG`.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info,tower_http=debug".to_string(),
        }
    }
}

impl FlowgateConfig {
    /// Loads configuration from defaults, an optional TOML file, and the
    /// environment.
    ///
    /// A `path` that does not exist is an error; pass `None` to run on
    /// defaults plus environment only.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source fails to parse and
    /// [`ConfigError::Invalid`] when the merged result fails validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            tracing::debug!(path = %path.display(), "merging configuration file");
            figment = figment.merge(Toml::file_exact(path));
        }
        let config: Self = figment
            .merge(Env::prefixed("FLOWGATE_").split("__"))
            .extract()
            .map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value-level constraints that deserialization cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.max_nodes == 0 {
            return Err(ConfigError::Invalid(
                "limits.max_nodes must be positive".to_string(),
            ));
        }
        if self.limits.max_edges == 0 {
            return Err(ConfigError::Invalid(
                "limits.max_edges must be positive".to_string(),
            ));
        }
        if self.server.max_body_bytes == 0 {
            return Err(ConfigError::Invalid(
                "server.max_body_bytes must be positive".to_string(),
            ));
        }
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "logging.filter must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
