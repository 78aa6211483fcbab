//! Preset value types.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::schema::{PreferenceSnapshot, DEFAULT_OPACITY};

/// The subset of global settings a preset captures.
///
/// Sidebar tabs and per-player overrides are not part of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PresetConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub hidden_slots: BTreeMap<u32, bool>,
    #[serde(deserialize_with = "null_as_default")]
    pub hide_background: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub hide_left_controls: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub hide_right_controls: bool,
    #[serde(deserialize_with = "null_as_default_opacity")]
    pub opacity: u32,
    /// Missing or null in presets saved by older versions; defaults to empty.
    #[serde(deserialize_with = "null_as_default")]
    pub hidden_pages: Vec<u32>,
}

/// Older exports write `null` where a field was never set.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_default_opacity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(DEFAULT_OPACITY))
}

impl Default for PresetConfig {
    fn default() -> Self {
        Self {
            hidden_slots: BTreeMap::new(),
            hide_background: false,
            hide_left_controls: false,
            hide_right_controls: false,
            opacity: DEFAULT_OPACITY,
            hidden_pages: Vec::new(),
        }
    }
}

impl PresetConfig {
    /// Capture the preset fields of a snapshot.
    pub fn capture(snapshot: &PreferenceSnapshot) -> Self {
        Self {
            hidden_slots: snapshot.hidden_slots.clone(),
            hide_background: snapshot.hide_background,
            hide_left_controls: snapshot.hide_left_controls,
            hide_right_controls: snapshot.hide_right_controls,
            opacity: snapshot.opacity,
            hidden_pages: snapshot.hidden_pages.clone(),
        }
    }
}

/// A named configuration. Built-ins ship with the module and can never be
/// modified or deleted; custom presets live in the store.
#[derive(Debug, Clone, PartialEq)]
pub enum Preset {
    BuiltIn { name: String, config: PresetConfig },
    Custom { name: String, config: PresetConfig },
}

impl Preset {
    pub fn name(&self) -> &str {
        match self {
            Preset::BuiltIn { name, .. } | Preset::Custom { name, .. } => name,
        }
    }

    pub fn config(&self) -> &PresetConfig {
        match self {
            Preset::BuiltIn { config, .. } | Preset::Custom { config, .. } => config,
        }
    }

    pub fn is_built_in(&self) -> bool {
        matches!(self, Preset::BuiltIn { .. })
    }
}

/// On-disk form of a custom preset: `{name, config, builtIn}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredPreset {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub config: PresetConfig,
    #[serde(rename = "builtIn", default)]
    pub built_in: bool,
}

impl From<StoredPreset> for Preset {
    /// Records flagged `builtIn` (only possible through hand-edited or
    /// imported data) stay protected.
    fn from(stored: StoredPreset) -> Self {
        if stored.built_in {
            Preset::BuiltIn {
                name: stored.name,
                config: stored.config,
            }
        } else {
            Preset::Custom {
                name: stored.name,
                config: stored.config,
            }
        }
    }
}

impl From<&Preset> for StoredPreset {
    fn from(preset: &Preset) -> Self {
        Self {
            name: preset.name().to_owned(),
            config: preset.config().clone(),
            built_in: preset.is_built_in(),
        }
    }
}
