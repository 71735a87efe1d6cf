//! Cloud provider registry.
//!
//! Maps a provider name to the factory that builds it. Concrete backends
//! register during start-up; the command layer later instantiates one by the
//! name the user supplied, without depending on any vendor crate itself.

mod error;
mod interface;
mod logger;

pub use error::*;
pub use interface::*;
pub use logger::*;

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Factory that builds a provider instance from an injected logger.
pub type Factory<P = dyn CloudProvider, E = ProviderError> =
    Arc<dyn Fn(Arc<dyn Logger>) -> Result<Box<P>, E> + Send + Sync>;

/// Registry of cloud provider factories.
///
/// Every operation serializes on a single mutex over the whole mapping.
/// Entries are inserted once and never replaced or removed, so lookups only
/// hold the lock long enough to clone the factory out; the factory itself runs
/// unlocked.
///
/// # Examples
///
/// ```
/// use keto::cloudprovider::{CloudProvider, ProviderRegistry};
///
/// struct Noop;
///
/// impl CloudProvider for Noop {
///     fn name(&self) -> &str {
///         "noop"
///     }
/// }
///
/// let registry: ProviderRegistry = ProviderRegistry::new();
/// registry.register("noop", |_logger| Ok(Box::new(Noop) as Box<dyn CloudProvider>));
///
/// assert!(registry.is_registered("noop"));
/// let provider = registry.init_provider("noop", None).unwrap();
/// assert_eq!(provider.name(), "noop");
/// ```
pub struct ProviderRegistry<P: ?Sized + 'static = dyn CloudProvider, E: 'static = ProviderError> {
    factories: Mutex<HashMap<String, Factory<P, E>>>,
}

impl<P: ?Sized + 'static, E: 'static> ProviderRegistry<P, E> {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            factories: Mutex::new(HashMap::new()),
        }
    }

    /// Register a provider factory by name.
    ///
    /// Expected to be called during start-up, before any lookup.
    ///
    /// # Panics
    ///
    /// Panics if `name` is already registered. Two backends claiming one name
    /// means the binary was assembled incorrectly; continuing would silently
    /// shadow one of them.
    pub fn register<F>(&self, name: impl Into<String>, factory: F)
    where
        F: Fn(Arc<dyn Logger>) -> Result<Box<P>, E> + Send + Sync + 'static,
    {
        if let Err(err) = self.try_register(name, factory) {
            panic!("cloudprovider: {err}");
        }
    }

    /// Register a provider factory by name, reporting a duplicate instead of
    /// panicking.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateProvider` if `name` is already taken.
    /// The existing entry is left untouched. Callers must treat this as a
    /// configuration defect and stop the process.
    pub fn try_register<F>(&self, name: impl Into<String>, factory: F) -> Result<(), RegistryError>
    where
        F: Fn(Arc<dyn Logger>) -> Result<Box<P>, E> + Send + Sync + 'static,
    {
        let name = name.into();
        let mut factories = self.lock();

        if factories.contains_key(&name) {
            return Err(RegistryError::DuplicateProvider(name));
        }

        tracing::debug!(provider = %name, "Registered cloud provider");
        factories.insert(name, Arc::new(factory));
        Ok(())
    }

    /// Create an instance of the named provider.
    ///
    /// A discarding logger is substituted when `logger` is `None`, so
    /// factories always receive a usable logger. The factory's result is
    /// returned unchanged. Every call invokes the factory again; instances are
    /// never cached.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::UnknownProvider` (converted into `E`) if no
    /// factory is registered under `name`, or whatever error the factory
    /// returns.
    pub fn init_provider(&self, name: &str, logger: Option<Arc<dyn Logger>>) -> Result<Box<P>, E>
    where
        E: From<RegistryError>,
    {
        let logger = logger.unwrap_or_else(DiscardLogger::shared);

        // Clone out under the lock; the factory may block on network I/O.
        let factory = self
            .lock()
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::UnknownProvider(name.to_string()))?;

        factory(logger)
    }

    /// Whether a factory is registered under `name`.
    pub fn is_registered(&self, name: &str) -> bool {
        self.lock().contains_key(name)
    }

    /// Names of all registered providers.
    ///
    /// Returned sorted for stable output; callers must not rely on ordering.
    pub fn providers(&self) -> Vec<String> {
        let mut names: Vec<String> = self.lock().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered providers.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no provider has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // Entries are immutable once inserted, so a panic while the lock was held
    // cannot leave the map half-updated.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, Factory<P, E>>> {
        self.factories
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<P: ?Sized + 'static, E: 'static> Default for ProviderRegistry<P, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ?Sized + 'static, E: 'static> fmt::Debug for ProviderRegistry<P, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.providers())
            .finish()
    }
}
