//! Tests for Config and data root providers
//!
//! These tests verify:
//! - Builder overrides and base_dir derivation
//! - Fixed and platform data roots (override injected, environment untouched)
//! - Store construction from providers

use std::ffi::OsStr;
use std::path::PathBuf;

use modsettings::config::DEFAULT_FOLDER_NAME;
use modsettings::root::DATA_ROOT_ENV;
use modsettings::{
    Config, DataRootProvider, FixedDataRoot, JsonStyle, PlatformDataRoot, SettingsError,
    SettingsStore,
};

struct MissingRoot;

impl DataRootProvider for MissingRoot {
    fn persistent_data_root(&self) -> modsettings::Result<PathBuf> {
        Err(SettingsError::NoDataRoot)
    }
}

// =============================================================================
// Config Tests
// =============================================================================

#[test]
fn test_default_folder_and_style() {
    let config = Config::default();

    assert_eq!(config.folder_name, DEFAULT_FOLDER_NAME);
    assert_eq!(config.folder_name, "ModSettings");
    assert_eq!(config.json_style, JsonStyle::Compact);
}

#[test]
fn test_builder_overrides() {
    let config = Config::builder()
        .data_root("/games/data")
        .folder_name("Settings")
        .json_style(JsonStyle::Pretty)
        .build();

    assert_eq!(config.data_root, PathBuf::from("/games/data"));
    assert_eq!(config.base_dir(), PathBuf::from("/games/data/Settings"));
    assert_eq!(config.json_style, JsonStyle::Pretty);
}

#[test]
fn test_from_provider() {
    let config = Config::from_provider(&FixedDataRoot::new("/host/persistent")).unwrap();

    assert_eq!(config.base_dir(), PathBuf::from("/host/persistent/ModSettings"));
}

#[test]
fn test_from_provider_propagates_failure() {
    let result = Config::from_provider(&MissingRoot);

    assert!(matches!(result, Err(SettingsError::NoDataRoot)));
}

// =============================================================================
// Provider Tests
// =============================================================================

#[test]
fn test_fixed_data_root() {
    let root = FixedDataRoot::new("/tmp/somewhere");

    assert_eq!(root.persistent_data_root().unwrap(), PathBuf::from("/tmp/somewhere"));
}

#[test]
fn test_platform_data_root_override() {
    let root = PlatformDataRoot
        .resolve(Some(OsStr::new("/override/root")))
        .unwrap();

    assert_eq!(root, PathBuf::from("/override/root"));
}

#[test]
fn test_platform_data_root_empty_override_ignored() {
    let with_empty = PlatformDataRoot.resolve(Some(OsStr::new("")));
    let without = PlatformDataRoot.resolve(None);

    match (with_empty, without) {
        (Ok(a), Ok(b)) => {
            assert_eq!(a, b);
            assert_ne!(a, PathBuf::from(""));
        }
        (Err(a), Err(b)) => {
            assert!(matches!(a, SettingsError::NoDataRoot));
            assert!(matches!(b, SettingsError::NoDataRoot));
        }
        _ => panic!("empty override changed the outcome"),
    }
}

#[test]
fn test_platform_data_root_variable_name() {
    assert_eq!(DATA_ROOT_ENV, "MODSETTINGS_DATA_ROOT");
}

#[test]
fn test_store_with_root_provider() {
    let store = SettingsStore::with_root_provider(&FixedDataRoot::new("/host/persistent")).unwrap();

    assert_eq!(store.base_dir(), PathBuf::from("/host/persistent/ModSettings"));
    assert_eq!(store.json_style(), JsonStyle::Compact);
}
