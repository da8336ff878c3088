//! JSON codec
//!
//! Thin layer over `serde_json` used by the store for every document.
//!
//! ## What round-trips
//! Anything with serde derives: private fields, nested structs, `Vec`,
//! `HashMap`/`BTreeMap` with string or integer keys, `Option`, and enums
//! (externally tagged unless serde attributes say otherwise).
//!
//! ## What doesn't
//! - Trait objects (no runtime polymorphism)
//! - Maps keyed by structs or tuples (fails at save time)
//! - `f64::NAN` / infinities (written as `null`, fail to load back as `f64`)

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Result, SettingsError};

/// UTF-8 byte order mark, as some editors and .NET tooling prepend it
const UTF8_BOM: char = '\u{feff}';

/// Output layout for written documents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonStyle {
    /// Single line, no insignificant whitespace
    #[default]
    Compact,

    /// Indented, one field per line
    Pretty,
}

/// Encode a value as JSON text in the given style
pub fn encode<T: Serialize + ?Sized>(value: &T, style: JsonStyle) -> Result<String> {
    let text = match style {
        JsonStyle::Compact => serde_json::to_string(value),
        JsonStyle::Pretty => serde_json::to_string_pretty(value),
    };
    text.map_err(SettingsError::Serialization)
}

/// Decode JSON text, ignoring a leading byte order mark
///
/// Returns the raw `serde_json` error so callers can attach the file path.
pub fn decode<T: DeserializeOwned>(text: &str) -> serde_json::Result<T> {
    serde_json::from_str(text.strip_prefix(UTF8_BOM).unwrap_or(text))
}
