use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the catalogue at startup
///
/// There is no recovery path for a corrupt dataset, so every variant is fatal.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read catalogue file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalogue data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid item at index {index}: {reason}")]
    InvalidItem { index: usize, reason: String },
}

/// Errors raised while reading the TOML configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}
