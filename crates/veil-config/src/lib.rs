//! Hotbar Veil preference layer.
//!
//! Persisted settings live in a world-scoped [`PreferenceStore`] keyed by
//! [`SettingKey`]. Everything above the store goes through [`Settings`],
//! which applies the notification policy and clamps ranged values on write.
//!
//! ```rust,no_run
//! use veil_common::NotificationQueue;
//! use veil_config::{presets, FileStore, Settings};
//!
//! let mut store = FileStore::open("world.toml").expect("open store");
//! let mut queue = NotificationQueue::default();
//! let mut settings = Settings::new(&mut store, &mut queue);
//! presets::load(&mut settings, "Minimal").ok();
//! let snapshot = settings.snapshot();
//! assert_eq!(snapshot.opacity, 60);
//! ```

pub mod codec;
pub mod keys;
pub mod presets;
pub mod schema;
pub mod settings;
pub mod store;
pub mod validation;
pub mod watcher;

pub use codec::{ExportDocument, ImportOutcome, SettingsPayload};
pub use keys::{SettingKey, MODULE_ID};
pub use presets::{Preset, PresetConfig};
pub use schema::{PlayerOverrides, PreferenceSnapshot, SidebarTab, EXPORT_FORMAT_VERSION};
pub use settings::Settings;
pub use store::{default_store_path, FileStore, MemoryStore, PreferenceStore};
pub use watcher::StoreWatcher;

/// Serialize a snapshot to pretty-printed JSON.
pub fn snapshot_to_json(snapshot: &PreferenceSnapshot) -> String {
    serde_json::to_string_pretty(snapshot)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize snapshot: {e}\"}}"))
}
