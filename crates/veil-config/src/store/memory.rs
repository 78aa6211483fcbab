//! In-memory store, used by tests and as the host cache stand-in.

use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use veil_common::{ConfigError, Event, EventBus};

use super::PreferenceStore;
use crate::keys::SettingKey;

/// A [`PreferenceStore`] backed by a `HashMap`.
#[derive(Default)]
pub struct MemoryStore {
    values: HashMap<SettingKey, Value>,
    events: Option<Arc<EventBus>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a [`Event::SettingChanged`] on `bus` after every write.
    pub fn with_events(mut self, bus: Arc<EventBus>) -> Self {
        self.events = Some(bus);
        self
    }

    /// Whether `key` has an explicitly stored value.
    pub fn contains(&self, key: SettingKey) -> bool {
        self.values.contains_key(&key)
    }

    /// Number of explicitly stored keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: SettingKey) -> Result<Value, ConfigError> {
        Ok(self
            .values
            .get(&key)
            .cloned()
            .unwrap_or_else(|| key.default_value()))
    }

    fn set(&mut self, key: SettingKey, value: Value) -> Result<(), ConfigError> {
        self.values.insert(key, value);
        if let Some(bus) = &self.events {
            bus.publish(Event::SettingChanged(key.as_str().to_owned()));
        }
        Ok(())
    }
}
