//! soplab.toml configuration

mod model;

pub use model::{Config, DocumentConfig, PathsConfig, RenderConfig};

use std::path::{Path, PathBuf};

use crate::error::{Result, SoplabError};

/// Name of the project configuration file
pub const CONFIG_FILE: &str = "soplab.toml";

impl Config {
    /// Load configuration from an explicit file path
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| SoplabError::ConfigParseError(e.to_string()))
    }

    /// Find the project root by walking up from `start` until a
    /// `soplab.toml` is found
    pub fn find_root(start: &Path) -> Result<PathBuf> {
        let mut current = Some(start);
        while let Some(dir) = current {
            if dir.join(CONFIG_FILE).is_file() {
                return Ok(dir.to_path_buf());
            }
            current = dir.parent();
        }
        Err(SoplabError::ConfigNotFound)
    }

    /// Locate and load the configuration, returning (project root, config)
    pub fn discover(start: &Path) -> Result<(PathBuf, Self)> {
        let root = Self::find_root(start)?;
        let config = Self::from_file(&root.join(CONFIG_FILE))?;
        Ok((root, config))
    }
}
