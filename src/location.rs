//! Settings locations
//!
//! Maps a (mod identifier, setting name) pair onto the filesystem and lists
//! what is already there.
//!
//! ## Layout
//! ```text
//! {base_dir}/
//!   ├── WayzCore/
//!   │     ├── graphics.json
//!   │     └── audio.json
//!   └── OtherMod/
//!         └── general.json
//! ```
//!
//! Identifiers are used verbatim as path components and are not checked for
//! separators or `..`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Result, SettingsError};

/// File extension of every settings document
pub const SETTINGS_EXTENSION: &str = "json";

/// Path derivation rooted at a fixed base directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsLocation {
    base_dir: PathBuf,
}

impl SettingsLocation {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Directory holding every mod folder
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// `{base_dir}/{mod_id}`
    pub fn mod_dir(&self, mod_id: &str) -> PathBuf {
        self.base_dir.join(mod_id)
    }

    /// `{base_dir}/{mod_id}/{setting_name}.json`
    pub fn setting_path(&self, mod_id: &str, setting_name: &str) -> PathBuf {
        self.mod_dir(mod_id)
            .join(format!("{}.{}", setting_name, SETTINGS_EXTENSION))
    }

    /// Names of all mod folders, sorted
    ///
    /// A base directory that doesn't exist yet has no mods.
    pub fn list_mods(&self) -> Result<Vec<String>> {
        let mut mods = Vec::new();

        let Some(entries) = read_dir_if_exists(&self.base_dir)? else {
            return Ok(mods);
        };

        for entry in entries {
            let entry = entry.map_err(|e| SettingsError::io(&self.base_dir, e))?;
            let path = entry.path();

            if path.is_dir() {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    mods.push(name.to_string());
                }
            }
        }

        mods.sort();
        Ok(mods)
    }

    /// Setting names stored for a mod, sorted
    ///
    /// Only `*.json` files count; anything else in the folder is ignored.
    pub fn list_settings(&self, mod_id: &str) -> Result<Vec<String>> {
        let dir = self.mod_dir(mod_id);
        let mut settings = Vec::new();

        let Some(entries) = read_dir_if_exists(&dir)? else {
            return Ok(settings);
        };

        for entry in entries {
            let entry = entry.map_err(|e| SettingsError::io(&dir, e))?;
            let path = entry.path();

            if path.is_file() {
                if let Some(name) = Self::parse_setting_name(&path) {
                    settings.push(name);
                }
            }
        }

        settings.sort();
        Ok(settings)
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Parse setting name from filename
    /// "graphics.json" → Some("graphics")
    fn parse_setting_name(path: &Path) -> Option<String> {
        if path.extension()?.to_str()? != SETTINGS_EXTENSION {
            return None;
        }
        path.file_stem()?.to_str().map(str::to_string)
    }
}

fn read_dir_if_exists(dir: &Path) -> Result<Option<fs::ReadDir>> {
    match fs::read_dir(dir) {
        Ok(entries) => Ok(Some(entries)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(SettingsError::io(dir, e)),
    }
}
