//! # modsettings
//!
//! Per-mod persistent settings for game modding frameworks:
//! - One JSON document per (mod identifier, setting name) pair
//! - Predictable on-disk layout under the user's data directory
//! - Typed load/save through serde
//! - Defaults persisted on first access
//!
//! ## Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │              Persistent data root (host/platform)            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     ModSettings/                             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  WayzCore/  │          │  OtherMod/  │
//!   └──────┬──────┘          └──────┬──────┘
//!          │                        │
//!          ▼                        ▼
//!   graphics.json             general.json
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use modsettings::{Config, SettingsStore};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Default, Serialize, Deserialize)]
//! struct Graphics {
//!     resolution: String,
//!     vsync: bool,
//! }
//!
//! let store = SettingsStore::open(Config::default());
//! let graphics: Graphics = store.get_or_initialize("WayzCore", "graphics")?;
//! println!("{:?}", graphics);
//! # Ok::<(), modsettings::SettingsError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod codec;
pub mod root;
pub mod location;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, SettingsError};
pub use config::Config;
pub use codec::JsonStyle;
pub use root::{DataRootProvider, FixedDataRoot, PlatformDataRoot};
pub use location::SettingsLocation;
pub use store::{SettingsManager, SettingsStore};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of modsettings
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
