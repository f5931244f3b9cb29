//! Default paths and persistent configuration

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::distance::Strategy;
use crate::rank::DEFAULT_LIMIT;

/// Get the configuration directory for wagner-fischer
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::data_local_dir().context("Could not determine local data directory")?;
    Ok(base.join("wagner-fischer"))
}

/// Get the default config file path
pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Get the config file path with optional override
pub fn config_file_path(custom_path: Option<&Path>) -> Result<PathBuf> {
    match custom_path {
        Some(path) => {
            validate_config_path(path)?;
            Ok(path.to_path_buf())
        }
        None => default_config_path(),
    }
}

/// Validate that a config file path has .json extension
pub fn validate_config_path(path: &Path) -> Result<()> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => Ok(()),
        Some(ext) => Err(anyhow::anyhow!(
            "Config file must have .json extension, got .{}. Please use a .json file.",
            ext
        )),
        None => Err(anyhow::anyhow!(
            "Config file must have .json extension. Please add .json to the filename."
        )),
    }
}

/// User configuration stored in config file
///
/// Every field is optional so a partial file only overrides what it names.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PersistentConfig {
    /// Default dictionary path
    pub dict_path: Option<PathBuf>,
    /// Default strategy
    pub strategy: Option<Strategy>,
    /// Default result limit
    pub limit: Option<usize>,
    /// Default show distances
    pub show_distances: Option<bool>,
}

impl PersistentConfig {
    /// Load configuration from the default or a custom path.
    ///
    /// A missing file yields the empty configuration.
    pub fn load_from(custom_path: Option<&Path>) -> Result<Self> {
        let path = config_file_path(custom_path)?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save configuration to the default or a custom path
    pub fn save_to(&self, custom_path: Option<&Path>) -> Result<PathBuf> {
        let path = config_file_path(custom_path)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(path)
    }

    /// Overlay `other` on top of `self`; fields set in `other` win.
    pub fn merge(&self, other: &PersistentConfig) -> Self {
        Self {
            dict_path: other.dict_path.clone().or_else(|| self.dict_path.clone()),
            strategy: other.strategy.or(self.strategy),
            limit: other.limit.or(self.limit),
            show_distances: other.show_distances.or(self.show_distances),
        }
    }

    /// Resolve to concrete settings, filling gaps with built-in defaults.
    pub fn resolve(&self) -> Settings {
        Settings {
            dict_path: self.dict_path.clone(),
            strategy: self.strategy.unwrap_or_default(),
            limit: self.limit.unwrap_or(DEFAULT_LIMIT),
            show_distances: self.show_distances.unwrap_or(false),
        }
    }
}

/// Effective settings for one command, after merging flags, config and defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Dictionary path, if any source provided one
    pub dict_path: Option<PathBuf>,
    /// Distance strategy
    pub strategy: Strategy,
    /// Result limit
    pub limit: usize,
    /// Whether to print distances
    pub show_distances: bool,
}
