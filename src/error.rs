//! Error types for modsettings
//!
//! Provides a unified error type for all settings operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using SettingsError
pub type Result<T> = std::result::Result<T, SettingsError>;

/// Unified error type for settings store operations
#[derive(Debug, Error)]
pub enum SettingsError {
    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("Settings file not found at {}", path.display())]
    NotFound { path: PathBuf },

    // -------------------------------------------------------------------------
    // Codec Errors
    // -------------------------------------------------------------------------
    #[error("Failed to deserialize settings at {}: {source}", path.display())]
    Deserialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Settings file at {} is not valid UTF-8", path.display())]
    InvalidUtf8 { path: PathBuf },

    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Environment Errors
    // -------------------------------------------------------------------------
    #[error("Could not determine platform data directory")]
    NoDataRoot,
}

impl SettingsError {
    /// Wrap an I/O error with the path it happened on
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SettingsError::Io {
            path: path.into(),
            source,
        }
    }

    /// True for the one recoverable lookup failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, SettingsError::NotFound { .. })
    }
}
