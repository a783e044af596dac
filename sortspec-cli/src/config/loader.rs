//! Reading profile files from disk

use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::ConfigLoadError;
use super::models::SortConfig;

/// Reads sort profile files from disk.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    /// Loader for the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this loader reads
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read, parse and validate the file.
    pub fn load(&self) -> Result<SortConfig, ConfigLoadError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|source| {
            ConfigLoadError::Read {
                path: self.path.clone(),
                source,
            }
        })?;
        let config = parse_config(&raw, &self.path)?;
        debug!(
            path = %self.path.display(),
            profiles = config.profiles.len(),
            "Loaded sort config"
        );
        Ok(config)
    }
}

/// Parse and validate TOML config text; `path` is only used in errors.
pub fn parse_config(
    raw: &str,
    path: &Path,
) -> Result<SortConfig, ConfigLoadError> {
    let config: SortConfig =
        toml::from_str(raw).map_err(|source| ConfigLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    config.validate()?;
    Ok(config)
}
