//! In-memory cloud provider for local runs and tests.
//!
//! Holds clusters and their node pools in process memory. Nothing is ever
//! sent over the network.

use crate::cloudprovider::{CloudProvider, Logger, ProviderError, ProviderRegistry, RegistryError};
use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Name the fake provider registers under.
pub const NAME: &str = "fake";

/// Environment variable seeding node pools into instances built by [`factory`].
///
/// Format: comma-separated `cluster/pool` pairs, e.g. `dev/workers,dev/gpu`.
pub const NODE_POOLS_ENV: &str = "KETO_FAKE_NODE_POOLS";

type Clusters = BTreeMap<String, BTreeSet<String>>;

/// Cloud provider backed by an in-memory map of clusters to node pools.
pub struct FakeProvider {
    logger: Arc<dyn Logger>,
    clusters: Mutex<Clusters>,
}

impl FakeProvider {
    /// Create a provider with no clusters.
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self {
            logger,
            clusters: Mutex::new(BTreeMap::new()),
        }
    }

    /// Seed a node pool, creating the cluster if needed.
    pub fn with_node_pool(self, cluster: impl Into<String>, pool: impl Into<String>) -> Self {
        self.lock()
            .entry(cluster.into())
            .or_default()
            .insert(pool.into());
        self
    }

    /// Names of all known clusters.
    pub fn clusters(&self) -> Vec<String> {
        self.lock().keys().cloned().collect()
    }

    /// Node pools of a cluster, empty if the cluster is unknown.
    pub fn node_pools(&self, cluster: &str) -> Vec<String> {
        self.lock()
            .get(cluster)
            .map(|pools| pools.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn lock(&self) -> MutexGuard<'_, Clusters> {
        self.clusters.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl CloudProvider for FakeProvider {
    fn name(&self) -> &str {
        NAME
    }

    async fn delete_node_pool(&self, cluster: &str, name: &str) -> Result<(), ProviderError> {
        let mut clusters = self.lock();
        let pools = clusters.get_mut(cluster).ok_or_else(|| ProviderError::NotFound {
            kind: "cluster",
            name: cluster.to_string(),
        })?;

        if !pools.remove(name) {
            return Err(ProviderError::NotFound {
                kind: "node pool",
                name: format!("{}/{}", cluster, name),
            });
        }

        self.logger
            .log(format_args!("deleted node pool {} from cluster {}", name, cluster));
        Ok(())
    }

    async fn delete_cluster(&self, cluster: &str) -> Result<(), ProviderError> {
        let pools = self
            .lock()
            .remove(cluster)
            .ok_or_else(|| ProviderError::NotFound {
                kind: "cluster",
                name: cluster.to_string(),
            })?;

        self.logger.log(format_args!(
            "deleted cluster {} with {} node pool(s)",
            cluster,
            pools.len()
        ));
        Ok(())
    }
}

/// Factory registered for [`NAME`].
///
/// Seeds node pools from [`NODE_POOLS_ENV`] when it is set.
///
/// # Errors
///
/// Returns `ProviderError::Configuration` if the seed variable is malformed.
pub fn factory(logger: Arc<dyn Logger>) -> Result<Box<dyn CloudProvider>, ProviderError> {
    let seed = std::env::var(NODE_POOLS_ENV).unwrap_or_default();
    let pools = parse_node_pools(&seed)?;

    logger.log(format_args!(
        "initialising fake provider with {} node pool(s)",
        pools.len()
    ));

    let provider = pools
        .into_iter()
        .fold(FakeProvider::new(logger), |provider, (cluster, pool)| {
            provider.with_node_pool(cluster, pool)
        });
    Ok(Box::new(provider))
}

/// Register the fake provider.
///
/// # Errors
///
/// Returns `RegistryError::DuplicateProvider` if [`NAME`] is already taken.
pub fn register(registry: &ProviderRegistry) -> Result<(), RegistryError> {
    registry.try_register(NAME, factory)
}

/// Parse `cluster/pool,cluster/pool` into pairs.
fn parse_node_pools(seed: &str) -> Result<Vec<(String, String)>, ProviderError> {
    seed.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.split_once('/') {
            Some((cluster, pool)) if !cluster.is_empty() && !pool.is_empty() => {
                Ok((cluster.to_string(), pool.to_string()))
            }
            _ => Err(ProviderError::Configuration(format!(
                "invalid {} entry '{}': expected cluster/pool",
                NODE_POOLS_ENV, entry
            ))),
        })
        .collect()
}
