//! Configuration for modsettings
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::codec::JsonStyle;
use crate::error::Result;
use crate::root::{DataRootProvider, PlatformDataRoot};

/// Default name of the folder created under the data root
pub const DEFAULT_FOLDER_NAME: &str = "ModSettings";

/// Main configuration for a settings store
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Location Configuration
    // -------------------------------------------------------------------------
    /// Persistent data root supplied by the host
    /// Internal structure:
    ///   {data_root}/
    ///     └── {folder_name}/
    ///           └── {mod_id}/
    ///                 └── {setting_name}.json
    pub data_root: PathBuf,

    /// Subfolder of the data root that holds every mod's settings
    pub folder_name: String,

    // -------------------------------------------------------------------------
    // Codec Configuration
    // -------------------------------------------------------------------------
    /// Layout of written documents
    pub json_style: JsonStyle,
}

impl Default for Config {
    fn default() -> Self {
        let data_root = PlatformDataRoot
            .persistent_data_root()
            .unwrap_or_else(|_| PathBuf::from("."));

        Self {
            data_root,
            folder_name: DEFAULT_FOLDER_NAME.to_string(),
            json_style: JsonStyle::Compact,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Config rooted at whatever the provider reports
    ///
    /// Unlike `Default`, a provider failure is returned instead of falling
    /// back to the working directory.
    pub fn from_provider(provider: &dyn DataRootProvider) -> Result<Self> {
        Ok(Self {
            data_root: provider.persistent_data_root()?,
            folder_name: DEFAULT_FOLDER_NAME.to_string(),
            json_style: JsonStyle::Compact,
        })
    }

    /// Directory holding all mod folders: `{data_root}/{folder_name}`
    pub fn base_dir(&self) -> PathBuf {
        self.data_root.join(&self.folder_name)
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the persistent data root
    pub fn data_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_root = path.into();
        self
    }

    /// Set the settings folder name (default `ModSettings`)
    pub fn folder_name(mut self, name: impl Into<String>) -> Self {
        self.config.folder_name = name.into();
        self
    }

    /// Set the output layout of written documents
    pub fn json_style(mut self, style: JsonStyle) -> Self {
        self.config.json_style = style;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
