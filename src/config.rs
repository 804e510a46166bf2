use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::pager::{DEFAULT_BUTTON_COUNT, DEFAULT_PAGE_SIZE};

/// Deployment defaults for the CLI, read from an optional TOML file.
/// Everything falls back to the library defaults when absent.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub pager: PagerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PagerConfig {
    /// Items per page when --page-size is not given.
    #[serde(default = "default_page_size")]
    pub page_size: i64,
    /// Buttons in the windowed listing when --buttons is not given.
    #[serde(default = "default_button_count")]
    pub button_count: i64,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            button_count: default_button_count(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

// Default value functions

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

fn default_button_count() -> i64 {
    DEFAULT_BUTTON_COUNT
}
