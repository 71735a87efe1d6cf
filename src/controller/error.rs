//! Error types for controller operations.

use crate::cloudprovider::ProviderError;
use thiserror::Error;

/// Errors that can occur while driving a cloud provider.
#[derive(Error, Debug)]
pub enum ControllerError {
    /// A required argument was empty.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// The provider failed the operation.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}
