//! Controller driving a live cloud provider on behalf of CLI commands.

mod error;

pub use error::ControllerError;

use crate::cloudprovider::{CloudProvider, Logger, ProviderError, ProviderRegistry};
use std::sync::Arc;

/// High-level client over one cloud provider instance.
///
/// Validates arguments before handing them to the provider, so providers can
/// assume non-empty resource names.
pub struct Controller {
    provider: Box<dyn CloudProvider>,
}

impl Controller {
    /// Wrap an already constructed provider.
    pub fn new(provider: Box<dyn CloudProvider>) -> Self {
        Self { provider }
    }

    /// Instantiate the named provider from the registry and wrap it.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Registry` if the name is unknown, or the
    /// provider factory's own error.
    pub fn from_registry(
        registry: &ProviderRegistry,
        name: &str,
        logger: Option<Arc<dyn Logger>>,
    ) -> Result<Self, ProviderError> {
        let provider = registry.init_provider(name, logger)?;
        tracing::debug!(provider = %provider.name(), "Initialised cloud provider");
        Ok(Self::new(provider))
    }

    /// Name of the wrapped provider.
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Delete a node pool from a cluster.
    pub async fn delete_node_pool(&self, cluster: &str, name: &str) -> Result<(), ControllerError> {
        require("cluster", cluster)?;
        require("node pool name", name)?;

        tracing::info!(
            provider = %self.provider.name(),
            cluster = %cluster,
            node_pool = %name,
            "Deleting node pool"
        );
        self.provider.delete_node_pool(cluster, name).await?;
        Ok(())
    }

    /// Delete a cluster.
    pub async fn delete_cluster(&self, cluster: &str) -> Result<(), ControllerError> {
        require("cluster", cluster)?;

        tracing::info!(
            provider = %self.provider.name(),
            cluster = %cluster,
            "Deleting cluster"
        );
        self.provider.delete_cluster(cluster).await?;
        Ok(())
    }
}

fn require(field: &'static str, value: &str) -> Result<(), ControllerError> {
    if value.trim().is_empty() {
        return Err(ControllerError::MissingField(field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloudprovider::{DiscardLogger, RegistryError};
    use crate::providers::fake::{self, FakeProvider};
    use std::sync::Mutex;

    /// Provider that records every call it receives.
    #[derive(Default)]
    struct Recorder {
        calls: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait::async_trait]
    impl CloudProvider for Recorder {
        fn name(&self) -> &str {
            "recorder"
        }

        async fn delete_node_pool(&self, cluster: &str, name: &str) -> Result<(), ProviderError> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("delete_node_pool {} {}", cluster, name));
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_delete_node_pool_delegates() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let controller = Controller::new(Box::new(Recorder {
            calls: Arc::clone(&calls),
        }));

        controller.delete_node_pool("dev", "workers").await.unwrap();

        assert_eq!(*calls.lock().unwrap(), vec!["delete_node_pool dev workers"]);
    }

    #[tokio::test]
    async fn test_delete_node_pool_requires_names() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let controller = Controller::new(Box::new(Recorder {
            calls: Arc::clone(&calls),
        }));

        let err = controller.delete_node_pool("", "workers").await.unwrap_err();
        assert!(matches!(err, ControllerError::MissingField("cluster")));

        let err = controller.delete_node_pool("dev", "  ").await.unwrap_err();
        assert!(matches!(err, ControllerError::MissingField("node pool name")));

        assert!(calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unsupported_operation_surfaces_provider_error() {
        let controller = Controller::new(Box::new(Recorder::default()));

        let err = controller.delete_cluster("dev").await.unwrap_err();
        assert!(matches!(
            err,
            ControllerError::Provider(ProviderError::Unsupported("delete_cluster"))
        ));
    }

    #[tokio::test]
    async fn test_fake_provider_not_found_passes_through() {
        let controller = Controller::new(Box::new(
            FakeProvider::new(DiscardLogger::shared()).with_node_pool("dev", "workers"),
        ));

        controller.delete_node_pool("dev", "workers").await.unwrap();
        let err = controller
            .delete_node_pool("dev", "workers")
            .await
            .unwrap_err();

        assert!(err.to_string().contains("dev/workers"));
    }

    #[test]
    fn test_from_registry_unknown_provider() {
        let registry: ProviderRegistry = ProviderRegistry::new();
        fake::register(&registry).unwrap();

        let err = Controller::from_registry(&registry, "aws", None)
            .err()
            .unwrap();
        assert!(matches!(
            err,
            ProviderError::Registry(RegistryError::UnknownProvider(ref name)) if name == "aws"
        ));
    }

    #[test]
    fn test_from_registry_known_provider() {
        let registry: ProviderRegistry = ProviderRegistry::new();
        fake::register(&registry).unwrap();

        let controller = Controller::from_registry(&registry, fake::NAME, None).unwrap();
        assert_eq!(controller.provider_name(), fake::NAME);
    }
}
