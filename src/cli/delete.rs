//! Delete command implementation

use crate::cli::{DeleteArgs, ResourceType};
use crate::cloudprovider::{
    Logger, ProviderError, ProviderRegistry, RegistryError, TracingLogger,
};
use crate::config::KetoConfig;
use crate::controller::Controller;
use std::sync::Arc;

/// Handle `keto delete <nodepool|cluster> [NAME]`
pub async fn handle_delete(
    args: &DeleteArgs,
    registry: &ProviderRegistry,
    config: &KetoConfig,
) -> Result<String, Box<dyn std::error::Error>> {
    let cloud = resolve_cloud(args, config, registry)?;
    let controller = new_controller(registry, &cloud)?;

    match args.resource {
        ResourceType::Nodepool => {
            let cluster = args
                .cluster
                .as_deref()
                .ok_or("--cluster is required when deleting a nodepool")?;
            let name = args.name.as_deref().unwrap_or_default();

            controller.delete_node_pool(cluster, name).await?;
            Ok(format!(
                "✓ Deleted nodepool {} from cluster {} ({})",
                name, cluster, cloud
            ))
        }
        ResourceType::Cluster => {
            let cluster = args
                .name
                .as_deref()
                .or(args.cluster.as_deref())
                .unwrap_or_default();

            controller.delete_cluster(cluster).await?;
            Ok(format!("✓ Deleted cluster {} ({})", cluster, cloud))
        }
    }
}

/// Pick the provider from `--cloud`, falling back to configuration.
fn resolve_cloud(
    args: &DeleteArgs,
    config: &KetoConfig,
    registry: &ProviderRegistry,
) -> Result<String, String> {
    args.cloud
        .clone()
        .or_else(|| config.cloud.provider.clone())
        .ok_or_else(|| {
            format!(
                "cloud provider not specified. Use --cloud or set cloud.provider. Available providers: {}",
                available(registry)
            )
        })
}

fn new_controller(registry: &ProviderRegistry, cloud: &str) -> Result<Controller, String> {
    let logger: Arc<dyn Logger> = Arc::new(TracingLogger::new(cloud));

    Controller::from_registry(registry, cloud, Some(logger)).map_err(|err| match err {
        ProviderError::Registry(RegistryError::UnknownProvider(_)) => {
            format!("{}. Available providers: {}", err, available(registry))
        }
        other => other.to_string(),
    })
}

fn available(registry: &ProviderRegistry) -> String {
    let names = registry.providers();
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}
