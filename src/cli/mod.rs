//! CLI module for keto
//!
//! Command-line interface definitions and handlers.
//!
//! # Commands
//!
//! - `providers` - List the cloud providers compiled into this binary
//! - `delete` - Delete a cluster resource through a cloud provider
//! - `config` - Configuration utilities (init)
//!
//! # Example
//!
//! ```bash
//! # Which clouds can this build talk to?
//! keto providers
//!
//! # Remove a node pool
//! keto delete nodepool workers --cluster dev --cloud fake
//! ```

pub mod config;
pub mod delete;
pub mod output;
pub mod providers;

pub use config::handle_config_init;
pub use delete::handle_delete;
pub use providers::handle_providers;

use crate::config::{ConfigError, KetoConfig};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

/// Default configuration file name
pub const DEFAULT_CONFIG: &str = "keto.toml";

/// keto - Kubernetes cluster lifecycle manager
#[derive(Parser, Debug)]
#[command(
    name = "keto",
    version,
    about = "Kubernetes cluster lifecycle manager with pluggable cloud providers"
)]
pub struct Cli {
    /// Path to configuration file [default: keto.toml, if present]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List available cloud providers
    Providers(ProvidersArgs),
    /// Delete a resource
    #[command(visible_alias = "remove")]
    Delete(DeleteArgs),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Args, Debug)]
pub struct ProvidersArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Resource kinds the delete command understands
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceType {
    /// A node pool inside a cluster
    Nodepool,
    /// A whole cluster
    Cluster,
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceType::Nodepool => write!(f, "nodepool"),
            ResourceType::Cluster => write!(f, "cluster"),
        }
    }
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Type of resource to delete
    #[arg(value_enum)]
    pub resource: ResourceType,

    /// Resource name
    pub name: Option<String>,

    /// Cluster the resource belongs to
    #[arg(long)]
    pub cluster: Option<String>,

    /// Cloud provider to use (see `keto providers`)
    #[arg(long, env = "KETO_CLOUD")]
    pub cloud: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Initialize a new configuration file
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output file path
    #[arg(short, long, default_value = DEFAULT_CONFIG)]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,
}

/// Load configuration with environment and CLI overrides
///
/// Without `--config`, a missing `keto.toml` means defaults. A path given
/// with `--config` must exist.
pub fn load_config(cli: &Cli) -> Result<KetoConfig, Box<dyn std::error::Error>> {
    let mut config = read_config_file(cli.config.as_deref(), Path::new(DEFAULT_CONFIG))?;

    config = config.with_env_overrides();

    if let Some(ref log_level) = cli.log_level {
        config.logging.level = log_level.clone();
    }

    config.validate()?;
    Ok(config)
}

fn read_config_file(explicit: Option<&Path>, fallback: &Path) -> Result<KetoConfig, ConfigError> {
    match explicit {
        Some(path) => KetoConfig::load(Some(path)),
        None if fallback.exists() => KetoConfig::load(Some(fallback)),
        None => Ok(KetoConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_parse_providers() {
        let cli = Cli::try_parse_from(["keto", "providers"]).unwrap();
        assert!(cli.config.is_none());
        match cli.command {
            Commands::Providers(args) => assert!(!args.json),
            _ => panic!("Expected Providers command"),
        }
    }

    #[test]
    fn test_cli_parse_providers_json() {
        let cli = Cli::try_parse_from(["keto", "providers", "--json"]).unwrap();
        match cli.command {
            Commands::Providers(args) => assert!(args.json),
            _ => panic!("Expected Providers command"),
        }
    }

    #[test]
    fn test_cli_parse_delete_nodepool() {
        let cli = Cli::try_parse_from([
            "keto", "delete", "nodepool", "workers", "--cluster", "dev", "--cloud", "aws",
        ])
        .unwrap();
        match cli.command {
            Commands::Delete(args) => {
                assert_eq!(args.resource, ResourceType::Nodepool);
                assert_eq!(args.name.as_deref(), Some("workers"));
                assert_eq!(args.cluster.as_deref(), Some("dev"));
                assert_eq!(args.cloud.as_deref(), Some("aws"));
            }
            _ => panic!("Expected Delete command"),
        }
    }

    #[test]
    fn test_cli_parse_remove_alias() {
        let cli = Cli::try_parse_from(["keto", "remove", "cluster", "dev"]).unwrap();
        match cli.command {
            Commands::Delete(args) => assert_eq!(args.resource, ResourceType::Cluster),
            _ => panic!("Expected Delete command"),
        }
    }

    #[test]
    fn test_cli_parse_delete_invalid_resource() {
        let result = Cli::try_parse_from(["keto", "delete", "volume", "data"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_delete_requires_resource() {
        let result = Cli::try_parse_from(["keto", "delete"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_global_config_after_subcommand() {
        let cli = Cli::try_parse_from(["keto", "providers", "-c", "custom.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn test_delete_cloud_reads_keto_cloud_env() {
        use clap::CommandFactory;

        let command = Cli::command();
        let delete = command.find_subcommand("delete").unwrap();
        let cloud = delete
            .get_arguments()
            .find(|arg| arg.get_id() == "cloud")
            .unwrap();
        assert_eq!(cloud.get_env(), Some(std::ffi::OsStr::new("KETO_CLOUD")));
    }

    #[test]
    fn test_load_config_explicit_missing_file_is_an_error() {
        let cli = Cli::try_parse_from([
            "keto",
            "providers",
            "--config",
            "/nonexistent/typo.toml",
        ])
        .unwrap();

        let err = load_config(&cli).unwrap_err();
        match err.downcast_ref::<ConfigError>() {
            Some(ConfigError::NotFound(path)) => {
                assert_eq!(path, Path::new("/nonexistent/typo.toml"))
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_default_file_uses_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let fallback = dir.path().join(DEFAULT_CONFIG);

        let config = read_config_file(None, &fallback).unwrap();
        assert!(config.cloud.provider.is_none());
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_present_default_file_is_loaded() {
        let dir = tempfile::TempDir::new().unwrap();
        let fallback = dir.path().join(DEFAULT_CONFIG);
        std::fs::write(&fallback, "[cloud]\nprovider = \"fake\"\n").unwrap();

        let config = read_config_file(None, &fallback).unwrap();
        assert_eq!(config.cloud.provider.as_deref(), Some("fake"));
    }

    #[test]
    fn test_explicit_path_wins_over_default_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let fallback = dir.path().join(DEFAULT_CONFIG);
        std::fs::write(&fallback, "[cloud]\nprovider = \"fake\"\n").unwrap();
        let explicit = dir.path().join("other.toml");

        let err = read_config_file(Some(&explicit), &fallback).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(ref path) if *path == explicit));
    }

    #[test]
    fn test_resource_type_display() {
        assert_eq!(ResourceType::Nodepool.to_string(), "nodepool");
        assert_eq!(ResourceType::Cluster.to_string(), "cluster");
    }
}
