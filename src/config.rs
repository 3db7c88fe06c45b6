//! Server configuration
//!
//! Read from an optional TOML file. Every setting has a default, so a missing
//! `--config` flag and an empty file behave the same:
//!
//! ```toml
//! log_level = "info"
//!
//! [listing]
//! home_page_size = 12
//! options_scope = "page"   # or "catalogue"
//! ```

use crate::error::ConfigError;
use crate::listing::{DEFAULT_HOME_PAGE_SIZE, OptionsScope};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default tracing filter, used when `RUST_LOG` is not set
    pub log_level: String,
    pub listing: ListingSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            listing: ListingSettings::default(),
        }
    }
}

/// How listing pages are assembled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingSettings {
    /// Number of leading catalogue items shown on the home page
    pub home_page_size: usize,
    /// Item set that filter options are derived from
    pub options_scope: OptionsScope,
}

impl Default for ListingSettings {
    fn default() -> Self {
        Self {
            home_page_size: DEFAULT_HOME_PAGE_SIZE,
            options_scope: OptionsScope::Page,
        }
    }
}

impl Config {
    /// Load configuration from `path`, or defaults when no path is given
    ///
    /// # Arguments
    /// * `path` - Optional TOML file; when given it must exist
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}
