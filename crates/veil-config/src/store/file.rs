//! TOML-backed world store.
//!
//! The whole document is rewritten on every `set`. Writes are atomic (write
//! to `.tmp`, then rename) so a crash mid-write cannot corrupt the file.

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};
use veil_common::{ConfigError, Event, EventBus};

use super::PreferenceStore;
use crate::keys::SettingKey;

/// A [`PreferenceStore`] persisted as a TOML document keyed by setting name.
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, Value>,
    events: Option<Arc<EventBus>>,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store; it is
    /// created on the first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let values = if path.exists() {
            read_document(&path)?
        } else {
            info!("no store found at {}, using defaults", path.display());
            BTreeMap::new()
        };

        Ok(Self {
            path,
            values,
            events: None,
        })
    }

    /// Publish a [`Event::SettingChanged`] on `bus` after every write.
    pub fn with_events(mut self, bus: Arc<EventBus>) -> Self {
        self.events = Some(bus);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Re-read the document from disk, replacing the cached values.
    pub fn reload(&mut self) -> Result<(), ConfigError> {
        self.values = if self.path.exists() {
            read_document(&self.path)?
        } else {
            BTreeMap::new()
        };
        if let Some(bus) = &self.events {
            bus.publish(Event::StoreReloaded);
        }
        Ok(())
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: SettingKey) -> Result<Value, ConfigError> {
        Ok(self
            .values
            .get(key.as_str())
            .cloned()
            .unwrap_or_else(|| key.default_value()))
    }

    fn set(&mut self, key: SettingKey, value: Value) -> Result<(), ConfigError> {
        let mut next = self.values.clone();
        match strip_nulls(value) {
            Some(v) => next.insert(key.as_str().to_owned(), v),
            None => next.remove(key.as_str()),
        };

        write_document(&self.path, &next).map_err(|reason| ConfigError::StoreWrite {
            key: key.as_str().to_owned(),
            reason,
        })?;

        self.values = next;
        if let Some(bus) = &self.events {
            bus.publish(Event::SettingChanged(key.as_str().to_owned()));
        }
        Ok(())
    }
}

fn read_document(path: &Path) -> Result<BTreeMap<String, Value>, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let values: BTreeMap<String, Value> = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    for name in values.keys() {
        if SettingKey::from_name(name).is_none() {
            warn!(name = %name, "ignoring unregistered setting in store");
        }
    }

    info!("loaded store from {}", path.display());
    Ok(values)
}

fn write_document(path: &Path, values: &BTreeMap<String, Value>) -> Result<(), String> {
    let toml_str = toml::to_string_pretty(values)
        .map_err(|e| format!("failed to serialize store to TOML: {e}"))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            format!("failed to create store directory {}: {e}", parent.display())
        })?;
    }

    let tmp_path = path.with_extension("toml.tmp");
    std::fs::write(&tmp_path, &toml_str)
        .map_err(|e| format!("failed to write {}: {e}", tmp_path.display()))?;

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        // Rename can fail on Windows; fall back to a direct write
        warn!("atomic rename failed ({}), falling back to direct write", e);
        std::fs::write(path, &toml_str)
            .map_err(|e2| format!("failed to write {}: {e2}", path.display()))?;
    }

    debug!(path = %path.display(), "store saved to disk");
    Ok(())
}

/// TOML has no null. Drop nulls from objects and arrays, and report a
/// top-level null as `None` so the key is removed (reads then fall back to
/// the registered default).
fn strip_nulls(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::Array(items) => Some(Value::Array(
            items.into_iter().filter_map(strip_nulls).collect(),
        )),
        Value::Object(map) => Some(Value::Object(
            map.into_iter()
                .filter_map(|(k, v)| strip_nulls(v).map(|v| (k, v)))
                .collect::<Map<String, Value>>(),
        )),
        other => Some(other),
    }
}
