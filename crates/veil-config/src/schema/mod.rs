//! Preference schema types for the visibility controller.
//!
//! Field names on the wire use the host's camelCase setting names so that
//! export files and share codes stay compatible across versions. All structs
//! use `serde(default)` so partial payloads work correctly.

mod hotbar;
mod overrides;
mod sidebar;
mod snapshot;

pub use hotbar::*;
pub use overrides::*;
pub use sidebar::*;
pub use snapshot::*;

/// Format version written into export files.
pub const EXPORT_FORMAT_VERSION: &str = "2.0.4";
