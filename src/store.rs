//! Settings Store
//!
//! Typed load/save of per-mod JSON settings documents.
//!
//! ## Responsibilities
//! - Resolve the base directory once at construction
//! - Derive `{base_dir}/{mod_id}/{setting_name}.json` for every request
//! - Create mod folders on first save
//! - Read and write whole documents; nothing is cached, every read hits disk
//!
//! ## Concurrency
//! None. Two saves of the same setting race at the filesystem level and the
//! last writer wins. Writes go straight to the target file, so a concurrent
//! reader may see a partially written document.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::codec::{self, JsonStyle};
use crate::config::Config;
use crate::error::{Result, SettingsError};
use crate::location::SettingsLocation;
use crate::root::{DataRootProvider, PlatformDataRoot};

/// The store's public contract
///
/// Hosts that keep settings somewhere else can implement this and hand it to
/// mods in place of [`SettingsStore`].
pub trait SettingsManager {
    /// Load a setting; `NotFound` if it was never saved
    fn load<T: DeserializeOwned>(&self, mod_id: &str, setting_name: &str) -> Result<T>;

    /// Load a setting; `Ok(None)` if it was never saved or is stored as `null`
    fn try_load<T: DeserializeOwned>(&self, mod_id: &str, setting_name: &str)
        -> Result<Option<T>>;

    /// Write a setting, replacing whatever was there
    fn save<T: Serialize + ?Sized>(&self, mod_id: &str, setting_name: &str, value: &T)
        -> Result<()>;

    /// Load a setting, persisting `T::default()` first if it was never saved
    fn get_or_initialize<T>(&self, mod_id: &str, setting_name: &str) -> Result<T>
    where
        T: Serialize + DeserializeOwned + Default;
}

/// File-backed settings store
///
/// Holds nothing but the resolved base directory and the output style, so it
/// is cheap to clone and safe to share between threads.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    /// Path derivation under `{data_root}/{folder_name}`
    location: SettingsLocation,

    /// Layout of written documents
    json_style: JsonStyle,
}

impl SettingsStore {
    /// Create a store from a config
    ///
    /// Does not touch the filesystem; folders appear on first save.
    pub fn open(config: Config) -> Self {
        let base_dir = config.base_dir();
        tracing::debug!("Settings base directory: {}", base_dir.display());

        Self {
            location: SettingsLocation::new(base_dir),
            json_style: config.json_style,
        }
    }

    /// Create a store rooted wherever the provider says
    pub fn with_root_provider(provider: &dyn DataRootProvider) -> Result<Self> {
        Ok(Self::open(Config::from_provider(provider)?))
    }

    /// Create a store under the platform data directory
    pub fn open_default() -> Result<Self> {
        Self::with_root_provider(&PlatformDataRoot)
    }

    /// Load and deserialize a setting
    ///
    /// Errors:
    /// - `NotFound` — the setting was never saved
    /// - `Deserialization` / `InvalidUtf8` — the file isn't a valid `T`
    /// - `Io` — the file exists but couldn't be read
    pub fn load<T: DeserializeOwned>(&self, mod_id: &str, setting_name: &str) -> Result<T> {
        let (path, text) = self.read_document(mod_id, setting_name)?;

        codec::decode(&text).map_err(|source| SettingsError::Deserialization { path, source })
    }

    /// Load a setting if it exists
    ///
    /// A missing file, or one holding nothing but JSON `null`, becomes
    /// `Ok(None)`. A file that exists but can't be parsed is still an error,
    /// so corrupted settings are never silently replaced by defaults.
    pub fn try_load<T: DeserializeOwned>(
        &self,
        mod_id: &str,
        setting_name: &str,
    ) -> Result<Option<T>> {
        let (path, text) = match self.read_document(mod_id, setting_name) {
            Ok(document) => document,
            Err(SettingsError::NotFound { .. }) => {
                tracing::trace!("No saved value for {}/{}", mod_id, setting_name);
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let value = codec::decode::<Option<T>>(&text)
            .map_err(|source| SettingsError::Deserialization { path, source })?;

        if value.is_none() {
            tracing::trace!("Saved value for {}/{} is null", mod_id, setting_name);
        }
        Ok(value)
    }

    /// Like [`try_load`](Self::try_load), but as a `(value, found)` pair
    ///
    /// `value` is `T::default()` when `found` is false.
    pub fn try_load_or_default<T>(&self, mod_id: &str, setting_name: &str) -> Result<(T, bool)>
    where
        T: DeserializeOwned + Default,
    {
        Ok(match self.try_load(mod_id, setting_name)? {
            Some(value) => (value, true),
            None => (T::default(), false),
        })
    }

    /// Serialize and write a setting
    ///
    /// Creates the mod folder (and any missing ancestors) if needed, then
    /// overwrites the file in full. Not atomic.
    pub fn save<T: Serialize + ?Sized>(
        &self,
        mod_id: &str,
        setting_name: &str,
        value: &T,
    ) -> Result<()> {
        let mod_dir = self.location.mod_dir(mod_id);
        fs::create_dir_all(&mod_dir).map_err(|e| SettingsError::io(&mod_dir, e))?;

        let text = codec::encode(value, self.json_style)?;

        let path = self.location.setting_path(mod_id, setting_name);
        fs::write(&path, text.as_bytes()).map_err(|e| SettingsError::io(&path, e))?;

        tracing::debug!("Saved {}/{} ({} bytes)", mod_id, setting_name, text.len());
        Ok(())
    }

    /// Load a setting, or save and return `T::default()` if it was never saved
    ///
    /// NOTE: this is a read that may write. On a missing setting (or one
    /// stored as JSON `null`) the default is persisted before it is returned,
    /// so later loads see the same value. Malformed files are reported, not
    /// overwritten.
    pub fn get_or_initialize<T>(&self, mod_id: &str, setting_name: &str) -> Result<T>
    where
        T: Serialize + DeserializeOwned + Default,
    {
        self.get_or_initialize_with(mod_id, setting_name, T::default)
    }

    /// [`get_or_initialize`](Self::get_or_initialize) with a caller-supplied default
    ///
    /// `default` only runs when nothing is stored yet.
    pub fn get_or_initialize_with<T, F>(
        &self,
        mod_id: &str,
        setting_name: &str,
        default: F,
    ) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> T,
    {
        if let Some(value) = self.try_load(mod_id, setting_name)? {
            return Ok(value);
        }

        tracing::debug!("Initializing {}/{} with defaults", mod_id, setting_name);
        let value = default();
        self.save(mod_id, setting_name, &value)?;
        Ok(value)
    }

    /// Whether a settings file exists for the pair
    ///
    /// Anything other than "not there" (permissions, a file where a folder
    /// should be) is reported as `Io`.
    pub fn exists(&self, mod_id: &str, setting_name: &str) -> Result<bool> {
        let path = self.location.setting_path(mod_id, setting_name);

        match fs::metadata(&path) {
            Ok(metadata) => Ok(metadata.is_file()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(SettingsError::io(path, e)),
        }
    }

    /// Delete a setting
    ///
    /// Returns `Ok(false)` if there was nothing to delete. The mod folder is
    /// left in place.
    pub fn remove(&self, mod_id: &str, setting_name: &str) -> Result<bool> {
        let path = self.location.setting_path(mod_id, setting_name);

        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!("Removed {}/{}", mod_id, setting_name);
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(SettingsError::io(path, e)),
        }
    }

    /// Mods that have a settings folder, sorted
    pub fn list_mods(&self) -> Result<Vec<String>> {
        self.location.list_mods()
    }

    /// Settings saved for a mod, sorted
    pub fn list_settings(&self, mod_id: &str) -> Result<Vec<String>> {
        self.location.list_settings(mod_id)
    }

    /// File path a setting is stored at (whether or not it exists)
    pub fn path(&self, mod_id: &str, setting_name: &str) -> PathBuf {
        self.location.setting_path(mod_id, setting_name)
    }

    /// Get the base directory path
    pub fn base_dir(&self) -> &Path {
        self.location.base_dir()
    }

    /// Get the output style used by `save`
    pub fn json_style(&self) -> JsonStyle {
        self.json_style
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Read a settings file as UTF-8 text, keeping its path for error reports
    fn read_document(&self, mod_id: &str, setting_name: &str) -> Result<(PathBuf, String)> {
        let path = self.location.setting_path(mod_id, setting_name);

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(SettingsError::NotFound { path });
            }
            Err(e) => return Err(SettingsError::io(path, e)),
        };

        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(_) => return Err(SettingsError::InvalidUtf8 { path }),
        };

        tracing::debug!("Read {}/{} ({} bytes)", mod_id, setting_name, text.len());
        Ok((path, text))
    }
}

impl SettingsManager for SettingsStore {
    fn load<T: DeserializeOwned>(&self, mod_id: &str, setting_name: &str) -> Result<T> {
        SettingsStore::load(self, mod_id, setting_name)
    }

    fn try_load<T: DeserializeOwned>(
        &self,
        mod_id: &str,
        setting_name: &str,
    ) -> Result<Option<T>> {
        SettingsStore::try_load(self, mod_id, setting_name)
    }

    fn save<T: Serialize + ?Sized>(
        &self,
        mod_id: &str,
        setting_name: &str,
        value: &T,
    ) -> Result<()> {
        SettingsStore::save(self, mod_id, setting_name, value)
    }

    fn get_or_initialize<T>(&self, mod_id: &str, setting_name: &str) -> Result<T>
    where
        T: Serialize + DeserializeOwned + Default,
    {
        SettingsStore::get_or_initialize(self, mod_id, setting_name)
    }
}
