//! World-scoped preference storage.
//!
//! The store owns persisted state. Everything else reads and writes through
//! the [`PreferenceStore`] trait, one key at a time, and never caches values
//! between calls.

mod file;
mod memory;
mod paths;


pub use file::FileStore;
pub use memory::MemoryStore;
pub use paths::default_store_path;

use serde_json::Value;
use veil_common::ConfigError;

use crate::keys::SettingKey;

/// Key/value storage of registered settings.
///
/// `get` returns the registered default for keys that were never written.
/// A failed `set` must leave the previously stored value in place.
pub trait PreferenceStore {
    fn get(&self, key: SettingKey) -> Result<Value, ConfigError>;
    fn set(&mut self, key: SettingKey, value: Value) -> Result<(), ConfigError>;
}
