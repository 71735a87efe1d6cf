//! Tracing setup for the keto binary
//!
//! Diagnostics go to stderr so command output on stdout stays machine-readable.

use crate::config::{LogFormat, LoggingConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build filter directives string from LoggingConfig
///
/// Constructs a tracing filter string that includes the base log level
/// and one `keto::<component>=<level>` directive per override, in
/// component name order.
///
/// # Examples
///
/// ```
/// use keto::config::{LogFormat, LoggingConfig};
/// use keto::logging::build_filter_directives;
/// use std::collections::BTreeMap;
///
/// let mut component_levels = BTreeMap::new();
/// component_levels.insert("cloudprovider".to_string(), "debug".to_string());
///
/// let config = LoggingConfig {
///     level: "warn".to_string(),
///     format: LogFormat::Pretty,
///     component_levels,
/// };
///
/// assert_eq!(build_filter_directives(&config), "warn,keto::cloudprovider=debug");
/// ```
pub fn build_filter_directives(config: &LoggingConfig) -> String {
    let mut filter_str = config.level.clone();

    for (component, level) in &config.component_levels {
        filter_str.push_str(&format!(",{}={}", LoggingConfig::target(component), level));
    }

    filter_str
}

/// Initialize tracing based on configuration
///
/// `RUST_LOG`, when set, takes precedence over the configured levels.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let filter_str = build_filter_directives(config);

    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&filter_str))?;

    match config.format {
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .compact()
                        .with_writer(std::io::stderr),
                )
                .try_init()?;
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .try_init()?;
        }
    }

    Ok(())
}
