//! Output formatting helpers for CLI commands

use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use serde_json::json;

/// View model for provider display
#[derive(Debug, Clone, serde::Serialize)]
pub struct ProviderView {
    pub name: String,
    /// Whether this is the provider selected by configuration
    pub default: bool,
}

impl ProviderView {
    /// Build views for `names`, marking the configured default.
    pub fn from_names(names: Vec<String>, default: Option<&str>) -> Vec<Self> {
        names
            .into_iter()
            .map(|name| {
                let is_default = default == Some(name.as_str());
                Self {
                    name,
                    default: is_default,
                }
            })
            .collect()
    }
}

/// Format providers as a table
pub fn format_providers_table(providers: &[ProviderView]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Provider", "Default"]);

    for p in providers {
        table.add_row(vec![
            Cell::new(&p.name),
            Cell::new(if p.default { "✓" } else { "" }),
        ]);
    }

    table.to_string()
}

/// Format providers as JSON
pub fn format_providers_json(providers: &[ProviderView]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&json!({
        "providers": providers
    }))
}
