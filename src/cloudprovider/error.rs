//! Error types for the provider registry and cloud provider operations.

use thiserror::Error;

/// Errors that can occur during registry operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No factory is registered under the requested name.
    #[error("unknown cloud provider: {0:?}")]
    UnknownProvider(String),

    /// Two providers compiled into the binary chose the same name.
    #[error("cloud provider {0:?} was registered twice")]
    DuplicateProvider(String),
}

impl RegistryError {
    /// Whether this error means the binary was assembled incorrectly.
    ///
    /// Start-up code must treat these as fatal rather than report them to the
    /// user as a bad argument.
    pub fn is_configuration_defect(&self) -> bool {
        matches!(self, RegistryError::DuplicateProvider(_))
    }
}

/// Errors returned by cloud provider factories and operations.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Registry lookup failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Operation not implemented by this provider.
    #[error("Operation '{0}' not supported by this cloud provider")]
    Unsupported(&'static str),

    /// Provider could not be configured (missing credentials, bad region, ...).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The targeted cloud resource does not exist.
    #[error("{kind} not found: {name}")]
    NotFound { kind: &'static str, name: String },
}
