//! Persistent data root providers
//!
//! The host decides where writable per-user data lives. The store only asks
//! for that directory once, at construction, and appends its own subfolder.

use std::env;
use std::ffi::OsStr;
use std::path::PathBuf;

use crate::error::{Result, SettingsError};

/// Environment variable that overrides the platform data directory
pub const DATA_ROOT_ENV: &str = "MODSETTINGS_DATA_ROOT";

/// Supplies the directory under which the settings folder is created
pub trait DataRootProvider {
    fn persistent_data_root(&self) -> Result<PathBuf>;
}

/// Platform user data directory
///
/// - Linux:   `$XDG_DATA_HOME` or `~/.local/share`
/// - macOS:   `~/Library/Application Support`
/// - Windows: `%APPDATA%`
///
/// `MODSETTINGS_DATA_ROOT` wins when set to a non-empty value.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformDataRoot;

impl PlatformDataRoot {
    /// Resolve the data root given the value of the override variable
    ///
    /// An empty override counts as unset.
    pub fn resolve(&self, override_root: Option<&OsStr>) -> Result<PathBuf> {
        if let Some(root) = override_root.filter(|v| !v.is_empty()) {
            tracing::trace!("Data root from {}: {:?}", DATA_ROOT_ENV, root);
            return Ok(PathBuf::from(root));
        }

        dirs::data_dir().ok_or(SettingsError::NoDataRoot)
    }
}

impl DataRootProvider for PlatformDataRoot {
    fn persistent_data_root(&self) -> Result<PathBuf> {
        self.resolve(env::var_os(DATA_ROOT_ENV).as_deref())
    }
}

/// A data root chosen by the caller (tests, embedding hosts, `--root`)
#[derive(Debug, Clone)]
pub struct FixedDataRoot(pub PathBuf);

impl FixedDataRoot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }
}

impl DataRootProvider for FixedDataRoot {
    fn persistent_data_root(&self) -> Result<PathBuf> {
        Ok(self.0.clone())
    }
}
