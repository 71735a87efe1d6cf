//! Capability surface every cloud backend exposes to the controller.

use super::ProviderError;
use async_trait::async_trait;

/// Interface implemented by each concrete cloud backend.
///
/// The registry is generic over the instance type and never looks inside it;
/// this trait is what the command layer drives once a backend is live.
///
/// # Object Safety
///
/// Object-safe and used as `Box<dyn CloudProvider>`. Async methods go through
/// `async_trait` so they remain callable on trait objects.
#[async_trait]
pub trait CloudProvider: Send + Sync + 'static {
    /// Name the provider was registered under (e.g. "aws").
    fn name(&self) -> &str;

    /// Delete a node pool from a cluster.
    ///
    /// Default implementation returns `Unsupported`.
    async fn delete_node_pool(&self, _cluster: &str, _name: &str) -> Result<(), ProviderError> {
        Err(ProviderError::Unsupported("delete_node_pool"))
    }

    /// Delete a whole cluster.
    ///
    /// Default implementation returns `Unsupported`.
    async fn delete_cluster(&self, _cluster: &str) -> Result<(), ProviderError> {
        Err(ProviderError::Unsupported("delete_cluster"))
    }
}
