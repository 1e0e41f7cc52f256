//! Configuration management for Showroom
//!
//! This module provides unified configuration management with
//! multi-source loading and zero-config defaults: missing files fall
//! back to built-in values, and the chat endpoint can be overridden
//! through the environment.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::app::{CatalogConfig, ChatConfig};
use crate::constants::{catalog, chat, currency, env, http, logging};
use crate::errors::{AppError, ConfigError, ConfigResult, Result};

/// Unified application configuration for TOML serialization
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Catalog source and simulated latency settings
    pub catalog: CatalogConfigToml,
    /// Chat collaborator endpoint settings
    pub chat: ChatConfigToml,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// TOML-friendly catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfigToml {
    /// Catalog snapshot path (None = embedded snapshot)
    pub source: Option<PathBuf>,
    /// Simulated delay for full loads in milliseconds
    pub load_all_delay_ms: u64,
    /// Simulated delay for single lookups in milliseconds
    pub lookup_delay_ms: u64,
    /// Jitter half-range as a fraction of the base delay
    pub latency_jitter: f64,
    /// Base-to-display currency multiplier
    pub conversion_rate: f64,
}

impl Default for CatalogConfigToml {
    fn default() -> Self {
        Self {
            source: None,
            load_all_delay_ms: catalog::LOAD_ALL_DELAY.as_millis() as u64,
            lookup_delay_ms: catalog::LOOKUP_DELAY.as_millis() as u64,
            latency_jitter: catalog::LATENCY_JITTER,
            conversion_rate: currency::CONVERSION_RATE,
        }
    }
}

/// TOML-friendly chat configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfigToml {
    /// Base endpoint URL
    pub base_url: String,
    /// Request timeout in seconds
    pub request_timeout_secs: u64,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for ChatConfigToml {
    fn default() -> Self {
        Self {
            base_url: chat::DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: http::DEFAULT_TIMEOUT.as_secs(),
            connect_timeout_secs: http::CONNECT_TIMEOUT.as_secs(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log level for the application
    pub level: String,
    /// Enable colored output
    pub colored_output: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: logging::DEFAULT_LOG_LEVEL.to_string(),
            colored_output: true,
        }
    }
}

impl AppConfig {
    /// Convert TOML-friendly configuration to runtime configuration
    pub fn to_runtime_config(&self) -> (CatalogConfig, ChatConfig) {
        (
            self.catalog.to_runtime_config(),
            self.chat.to_runtime_config(),
        )
    }

    /// Load configuration with multi-source precedence:
    /// 1. Default values
    /// 2. Config file (if exists)
    /// 3. Environment variables
    pub async fn load(config_file_override: Option<PathBuf>) -> Result<Self> {
        let mut config = Self::default();

        // Try to load from config file
        let config_path = if let Some(ref path) = config_file_override {
            // Use explicit config file
            Some(path.clone())
        } else {
            // Look for default config file locations
            Self::find_config_file()?
        };

        if let Some(path) = config_path {
            if path.exists() {
                debug!("Loading config from: {}", path.display());
                config = Self::load_from_file(&path).await?;
            } else if config_file_override.is_some() {
                return Err(ConfigError::NotFound { path }.into());
            }
        }

        // Environment wins over file-provided values for the chat endpoint
        if let Ok(url) = std::env::var(env::CHAT_URL) {
            if !url.is_empty() {
                debug!("Chat endpoint overridden from {}", env::CHAT_URL);
                config.chat.base_url = url;
            }
        }

        Ok(config)
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> Result<Option<PathBuf>> {
        let search_paths = vec![
            // Project-local config
            PathBuf::from("./showroom.toml"),
            PathBuf::from("./config.toml"),
            // User config
            Self::get_default_config_path()?,
            // System config (Unix only)
            #[cfg(unix)]
            PathBuf::from("/etc/showroom/config.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                debug!("Found config file: {}", path.display());
                return Ok(Some(path));
            }
        }

        debug!("No config file found in standard locations");
        Ok(None)
    }

    /// Get the default config file path for the current user
    fn get_default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AppError::generic("Could not determine user config directory"))?;

        Ok(config_dir.join("showroom").join("config.toml"))
    }

    /// Load configuration from a TOML file
    async fn load_from_file(path: &PathBuf) -> ConfigResult<Self> {
        let content =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| ConfigError::Io {
                    path: path.clone(),
                    source,
                })?;

        let config: AppConfig = toml::from_str(&content).map_err(ConfigError::from)?;

        info!("Loaded configuration from: {}", path.display());
        Ok(config)
    }
}

impl CatalogConfigToml {
    /// Convert to runtime CatalogConfig
    pub fn to_runtime_config(&self) -> CatalogConfig {
        CatalogConfig {
            source: self.source.clone(),
            load_all_delay: Duration::from_millis(self.load_all_delay_ms),
            lookup_delay: Duration::from_millis(self.lookup_delay_ms),
            latency_jitter: self.latency_jitter,
            conversion_rate: self.conversion_rate,
        }
    }
}

impl ChatConfigToml {
    /// Convert to runtime ChatConfig
    pub fn to_runtime_config(&self) -> ChatConfig {
        ChatConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.request_timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
        }
    }
}
