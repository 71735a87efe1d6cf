//! Providers command implementation

use crate::cli::output::{format_providers_json, format_providers_table, ProviderView};
use crate::cli::ProvidersArgs;
use crate::cloudprovider::ProviderRegistry;
use crate::config::KetoConfig;

/// Handle `keto providers`
pub fn handle_providers(
    args: &ProvidersArgs,
    registry: &ProviderRegistry,
    config: &KetoConfig,
) -> Result<String, Box<dyn std::error::Error>> {
    let views = ProviderView::from_names(registry.providers(), config.cloud.provider.as_deref());

    if args.json {
        Ok(format_providers_json(&views)?)
    } else {
        Ok(format_providers_table(&views))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers;

    fn registry() -> ProviderRegistry {
        let registry: ProviderRegistry = ProviderRegistry::new();
        providers::register_all(&registry).unwrap();
        registry
    }

    #[test]
    fn test_providers_table_lists_builtins() {
        let args = ProvidersArgs { json: false };
        let output = handle_providers(&args, &registry(), &KetoConfig::default()).unwrap();

        for name in providers::BUILTIN {
            assert!(output.contains(name));
        }
    }

    #[test]
    fn test_providers_json_marks_configured_default() {
        let mut config = KetoConfig::default();
        config.cloud.provider = Some(providers::fake::NAME.to_string());

        let args = ProvidersArgs { json: true };
        let output = handle_providers(&args, &registry(), &config).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        let fake = parsed["providers"]
            .as_array()
            .unwrap()
            .iter()
            .find(|p| p["name"] == providers::fake::NAME)
            .unwrap();
        assert_eq!(fake["default"], true);
    }
}
