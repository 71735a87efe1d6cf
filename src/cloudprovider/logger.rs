//! Logging capability handed to provider factories.

use std::fmt;
use std::sync::Arc;

/// Minimal debug logger injected into cloud provider factories.
///
/// Providers depend only on this shape, never on a concrete logging backend.
/// Call it with `format_args!`:
///
/// ```
/// use keto::cloudprovider::{DiscardLogger, Logger};
///
/// let logger = DiscardLogger;
/// logger.log(format_args!("connecting to region {}", "eu-west-2"));
/// assert!(!logger.enabled());
/// ```
pub trait Logger: Send + Sync {
    /// Write one formatted diagnostic line.
    fn log(&self, args: fmt::Arguments<'_>);

    /// Whether writes are observable. Providers may skip building expensive
    /// diagnostics when this returns `false`.
    fn enabled(&self) -> bool {
        true
    }
}

/// Logger whose writes have no effect.
///
/// Substituted by [`ProviderRegistry::init_provider`](super::ProviderRegistry::init_provider)
/// when the caller supplies no logger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiscardLogger;

impl DiscardLogger {
    /// Shared trait object for the discarding logger.
    pub fn shared() -> Arc<dyn Logger> {
        Arc::new(DiscardLogger)
    }
}

impl Logger for DiscardLogger {
    fn log(&self, _args: fmt::Arguments<'_>) {}

    fn enabled(&self) -> bool {
        false
    }
}

/// Logger that forwards provider diagnostics to `tracing` as debug events.
#[derive(Debug, Clone)]
pub struct TracingLogger {
    provider: String,
}

impl TracingLogger {
    /// Create a logger that tags every event with the provider name.
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
        }
    }

    /// Name attached to emitted events.
    pub fn provider(&self) -> &str {
        &self.provider
    }
}

impl Logger for TracingLogger {
    fn log(&self, args: fmt::Arguments<'_>) {
        tracing::debug!(
            target: "keto::cloudprovider",
            provider = %self.provider,
            "{}",
            args
        );
    }

    fn enabled(&self) -> bool {
        tracing::enabled!(target: "keto::cloudprovider", tracing::Level::DEBUG)
    }
}
