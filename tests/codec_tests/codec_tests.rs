//! Tests for the JSON codec
//!
//! These tests verify:
//! - Compact vs pretty output
//! - Byte order mark tolerance on decode
//! - Documented capability limits (enums, non-string map keys, NaN)

use std::collections::HashMap;

use modsettings::codec::{decode, encode};
use modsettings::{JsonStyle, SettingsError};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Audio {
    volume: u8,
    muted: bool,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
enum Quality {
    Low,
    Custom { scale: u32 },
}

// =============================================================================
// Encode Tests
// =============================================================================

#[test]
fn test_compact_is_default() {
    assert_eq!(JsonStyle::default(), JsonStyle::Compact);
}

#[test]
fn test_encode_compact() {
    let text = encode(&Audio { volume: 80, muted: false }, JsonStyle::Compact).unwrap();

    assert_eq!(text, r#"{"volume":80,"muted":false}"#);
}

#[test]
fn test_encode_pretty() {
    let text = encode(&Audio { volume: 80, muted: false }, JsonStyle::Pretty).unwrap();

    assert_eq!(text, "{\n  \"volume\": 80,\n  \"muted\": false\n}");
}

#[test]
fn test_encode_struct_map_keys_fails() {
    #[derive(Serialize, PartialEq, Eq, Hash)]
    struct Key {
        x: i32,
    }

    let mut map = HashMap::new();
    map.insert(Key { x: 1 }, "one");

    let result = encode(&map, JsonStyle::Compact);

    assert!(matches!(result, Err(SettingsError::Serialization(_))));
}

// =============================================================================
// Decode Tests
// =============================================================================

#[test]
fn test_decode_plain() {
    let audio: Audio = decode(r#"{"volume":10,"muted":true}"#).unwrap();

    assert_eq!(audio, Audio { volume: 10, muted: true });
}

#[test]
fn test_decode_strips_bom() {
    let audio: Audio = decode("\u{feff}{\"volume\":10,\"muted\":true}").unwrap();

    assert_eq!(audio, Audio { volume: 10, muted: true });
}

#[test]
fn test_decode_rejects_truncated() {
    let result = decode::<Audio>(r#"{"volume":10,"mu"#);

    assert!(result.unwrap_err().is_eof());
}

#[test]
fn test_decode_rejects_missing_field() {
    let result = decode::<Audio>(r#"{"volume":10}"#);

    assert!(result.unwrap_err().is_data());
}

#[test]
fn test_enum_variants() {
    let low = encode(&Quality::Low, JsonStyle::Compact).unwrap();
    let custom = encode(&Quality::Custom { scale: 3 }, JsonStyle::Compact).unwrap();

    assert_eq!(low, r#""Low""#);
    assert_eq!(custom, r#"{"Custom":{"scale":3}}"#);
    assert_eq!(decode::<Quality>(&custom).unwrap(), Quality::Custom { scale: 3 });
}

#[test]
fn test_nan_does_not_roundtrip() {
    let text = encode(&f64::NAN, JsonStyle::Compact).unwrap();

    assert_eq!(text, "null");
    assert!(decode::<f64>(&text).is_err());
}
