//! Errors raised while loading `keto.toml`

use std::path::PathBuf;
use thiserror::Error;

/// Configuration loading and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("invalid value for '{field}': {message}")]
    Validation { field: String, message: String },
}
