use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Gateway endpoint cannot be empty")]
    EmptyEndpoint,

    #[error("Invalid endpoint '{0}': must start with http:// or https://")]
    InvalidEndpoint(String),

    #[error("Invalid timeout: {0}. Must be at least 1 second")]
    InvalidTimeout(u64),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

/// Client configuration for the fsgateway CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Base URL of the gateway API
    pub endpoint: String,
    /// Auth token sent with every request, if set
    #[serde(default)]
    pub token: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Default log level when RUST_LOG is not set
    pub log_level: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8776/v1".to_string(),
            token: None,
            timeout_secs: 30,
            log_level: "info".to_string(),
        }
    }
}

/// Configuration loader with hierarchical merging.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging.
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .fsgateway/config.yaml (project config)
    /// 3. .fsgateway/local.yaml (local overrides, optional)
    /// 4. Environment variables (FSGATEWAY_* prefix, highest priority)
    pub fn load() -> Result<GatewayConfig> {
        Self::load_with_overrides(None, None)
    }

    /// Load configuration and apply command-line overrides before
    /// validation, so a `--endpoint` flag can stand in for a broken file
    /// or environment value.
    pub fn load_with_overrides(
        endpoint: Option<String>,
        token: Option<String>,
    ) -> Result<GatewayConfig> {
        let mut config: GatewayConfig = Figment::new()
            .merge(Serialized::defaults(GatewayConfig::default()))
            .merge(Yaml::file(".fsgateway/config.yaml"))
            .merge(Yaml::file(".fsgateway/local.yaml"))
            .merge(Env::prefixed("FSGATEWAY_"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        if let Some(endpoint) = endpoint {
            config.endpoint = endpoint;
        }
        if let Some(token) = token {
            config.token = Some(token);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<GatewayConfig> {
        let config: GatewayConfig = Figment::new()
            .merge(Serialized::defaults(GatewayConfig::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading.
    pub fn validate(config: &GatewayConfig) -> Result<(), ConfigError> {
        if config.endpoint.is_empty() {
            return Err(ConfigError::EmptyEndpoint);
        }
        if !config.endpoint.starts_with("http://") && !config.endpoint.starts_with("https://") {
            return Err(ConfigError::InvalidEndpoint(config.endpoint.clone()));
        }
        if config.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(config.timeout_secs));
        }
        match config.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => return Err(ConfigError::InvalidLogLevel(other.to_string())),
        }
        Ok(())
    }
}
