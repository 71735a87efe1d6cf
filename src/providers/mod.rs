//! Cloud providers compiled into the binary.
//!
//! Each provider module exposes a `register` function; [`register_all`] wires
//! every one of them into a registry during start-up.

pub mod fake;

use crate::cloudprovider::{ProviderRegistry, RegistryError};

/// Names of the built-in providers.
pub const BUILTIN: &[&str] = &[fake::NAME];

/// Register every built-in provider.
///
/// # Errors
///
/// Returns `RegistryError::DuplicateProvider` if two providers share a name.
/// This is a configuration defect; `main` exits on it.
pub fn register_all(registry: &ProviderRegistry) -> Result<(), RegistryError> {
    fake::register(registry)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_all_registers_every_builtin() {
        let registry: ProviderRegistry = ProviderRegistry::new();
        register_all(&registry).unwrap();

        let mut expected: Vec<String> = BUILTIN.iter().map(|name| name.to_string()).collect();
        expected.sort();
        assert_eq!(registry.providers(), expected);
    }

    #[test]
    fn test_register_all_twice_reports_duplicate() {
        let registry: ProviderRegistry = ProviderRegistry::new();
        register_all(&registry).unwrap();

        let err = register_all(&registry).unwrap_err();
        assert!(err.is_configuration_defect());
    }
}
