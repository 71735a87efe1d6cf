//! Configuration module for keto
//!
//! Provides layered configuration loading from files, environment variables, and defaults.
//!
//! # Configuration Precedence
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`KETO_*`)
//! 3. Configuration file (TOML)
//! 4. Default values (lowest priority)
//!
//! # Example
//!
//! ```rust
//! use keto::config::KetoConfig;
//!
//! let toml = r#"
//! [cloud]
//! provider = "fake"
//! "#;
//! let config: KetoConfig = toml::from_str(toml).unwrap();
//! assert_eq!(config.cloud.provider.as_deref(), Some("fake"));
//! ```

pub mod cloud;
pub mod error;
pub mod logging;

pub use cloud::CloudConfig;
pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig, COMPONENTS};

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Unified configuration for the keto CLI.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct KetoConfig {
    /// Cloud provider selection
    pub cloud: CloudConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl KetoConfig {
    /// Load configuration from a TOML file
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse {
                    path: p.to_path_buf(),
                    message: e.to_string(),
                })
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply `KETO_*` environment variable overrides
    ///
    /// Invalid values are ignored and the current setting is kept.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(cloud) = std::env::var("KETO_CLOUD") {
            if !cloud.is_empty() {
                self.cloud.provider = Some(cloud);
            }
        }

        if let Ok(level) = std::env::var("KETO_LOG_LEVEL") {
            if !level.is_empty() {
                self.logging.level = level;
            }
        }
        if let Ok(format) = std::env::var("KETO_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }

        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(provider) = &self.cloud.provider {
            if provider.trim().is_empty() {
                return Err(ConfigError::Validation {
                    field: "cloud.provider".to_string(),
                    message: "provider name cannot be empty".to_string(),
                });
            }
        }

        self.logging.validate()
    }
}
