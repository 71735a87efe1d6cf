//! Config command handlers

use crate::cli::ConfigInitArgs;
use std::fs;

const EXAMPLE_CONFIG: &str = include_str!("../../keto.example.toml");

/// Handle `keto config init`
pub fn handle_config_init(args: &ConfigInitArgs) -> Result<String, Box<dyn std::error::Error>> {
    if args.output.exists() && !args.force {
        return Err(format!(
            "File already exists: {}. Use --force to overwrite.",
            args.output.display()
        )
        .into());
    }

    fs::write(&args.output, EXAMPLE_CONFIG)?;

    Ok(format!(
        "✓ Configuration file created: {}\n  Run `keto providers` to see which clouds this build supports.",
        args.output.display()
    ))
}
