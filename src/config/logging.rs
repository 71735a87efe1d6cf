//! `[logging]` section of `keto.toml`

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use tracing::level_filters::LevelFilter;

/// Modules whose verbosity can be raised or lowered on their own.
///
/// Each name `x` covers the `keto::x` tracing target and everything below it.
pub const COMPONENTS: &[&str] = &["cli", "cloudprovider", "controller", "providers"];

/// How diagnostics are rendered on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One compact line per event
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("pretty") {
            Ok(LogFormat::Pretty)
        } else if s.eq_ignore_ascii_case("json") {
            Ok(LogFormat::Json)
        } else {
            Err(ConfigError::Validation {
                field: "logging.format".to_string(),
                message: format!("expected pretty or json, got {:?}", s),
            })
        }
    }
}

/// Verbosity and rendering of keto's own diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level applied to every target without an override
    pub level: String,
    pub format: LogFormat,
    /// Overrides keyed by an entry of [`COMPONENTS`], e.g. `cloudprovider = "debug"`
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub component_levels: BTreeMap<String, String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        // Provider chatter stays hidden unless asked for.
        Self {
            level: "warn".to_string(),
            format: LogFormat::Pretty,
            component_levels: BTreeMap::new(),
        }
    }
}

impl LoggingConfig {
    /// Tracing target a component override applies to.
    pub fn target(component: &str) -> String {
        format!("keto::{}", component)
    }

    /// Check the base level and every component override.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_level("logging.level", &self.level)?;

        for (component, level) in &self.component_levels {
            let field = format!("logging.component_levels.{}", component);
            if !COMPONENTS.contains(&component.as_str()) {
                return Err(ConfigError::Validation {
                    field,
                    message: format!("unknown component, expected one of: {}", COMPONENTS.join(", ")),
                });
            }
            check_level(&field, level)?;
        }

        Ok(())
    }
}

fn check_level(field: &str, level: &str) -> Result<(), ConfigError> {
    if level.trim().is_empty() {
        return Err(ConfigError::Validation {
            field: field.to_string(),
            message: "log level cannot be empty".to_string(),
        });
    }

    level
        .parse::<LevelFilter>()
        .map(|_| ())
        .map_err(|_| ConfigError::Validation {
            field: field.to_string(),
            message: format!("{:?} is not a log level (trace, debug, info, warn, error, off)", level),
        })
}
