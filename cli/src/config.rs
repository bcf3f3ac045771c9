//! Configuration file handling for the CLI.
//!
//! Settings live in `doclist.toml`. An explicit `--config` path must exist;
//! otherwise `./doclist.toml` is read when present and defaults apply when it
//! is not. Command line flags override anything read here.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use doclist_table::DEFAULT_MAX_DEPTH;
use serde::{Deserialize, Serialize};

use crate::cli::Format;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "doclist.toml";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the JSON data modules
    #[serde(default)]
    pub data_root: Option<PathBuf>,
    /// Header used by `render` when `--header` is not given
    #[serde(default)]
    pub default_header: Option<String>,
    /// Output format used when `--format` is not given
    #[serde(default)]
    pub format: Option<Format>,
    /// Deepest level of nested rows followed before failing
    #[serde(default)]
    pub max_depth: Option<usize>,
}

impl Config {
    /// Load configuration, see the module docs for the lookup order.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(CONFIG_FILE_NAME);
                if !default.is_file() {
                    tracing::debug!("No {CONFIG_FILE_NAME} found, using defaults");
                    return Ok(Self::default());
                }
                default
            }
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn data_root(&self) -> PathBuf {
        self.data_root.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn format(&self) -> Format {
        self.format.unwrap_or_default()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH)
    }
}
