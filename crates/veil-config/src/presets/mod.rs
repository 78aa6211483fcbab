//! Named presets: the fixed built-ins plus custom presets persisted in the
//! store's `presets` list.
//!
//! Every operation reports its outcome through the settings' notifier and
//! also returns it, so callers can decide whether to re-render.

mod builtin;
mod types;

pub use builtin::{built_in_config, built_in_presets, is_built_in_name, BUILT_IN_PRESETS};
pub use types::{Preset, PresetConfig, StoredPreset};

use tracing::{info, warn};
use veil_common::PresetError;

use crate::keys::SettingKey;
use crate::settings::Settings;

/// Custom presets in persisted order.
pub fn custom_presets(settings: &mut Settings<'_>) -> Vec<Preset> {
    stored_presets(settings).into_iter().map(Preset::from).collect()
}

/// Built-in presets (fixed order) followed by custom presets (persisted order).
pub fn list_all(settings: &mut Settings<'_>) -> Vec<Preset> {
    let mut all = built_in_presets();
    all.extend(custom_presets(settings));
    all
}

/// Find a preset by exact name. Built-ins shadow custom presets.
pub fn find(settings: &mut Settings<'_>, name: &str) -> Option<Preset> {
    list_all(settings).into_iter().find(|p| p.name() == name)
}

/// Capture the current global settings as a new custom preset.
///
/// The name is trimmed. Blank names and names already used by any preset
/// (built-in or custom) are rejected with a warning.
pub fn save(settings: &mut Settings<'_>, name: &str) -> Result<Preset, PresetError> {
    let name = name.trim();
    if name.is_empty() {
        settings.notifier().warning("Preset name cannot be empty!");
        return Err(PresetError::EmptyName);
    }

    let mut stored = stored_presets(settings);
    if is_built_in_name(name) || stored.iter().any(|p| p.name == name) {
        warn!(preset = %name, "rejected duplicate preset name");
        settings
            .notifier()
            .warning(&format!("Preset \"{name}\" already exists!"));
        return Err(PresetError::DuplicateName(name.to_owned()));
    }

    let preset = Preset::Custom {
        name: name.to_owned(),
        config: PresetConfig::capture(&settings.snapshot()),
    };
    stored.push(StoredPreset::from(&preset));
    settings.set(SettingKey::Presets, &stored)?;

    info!(preset = %name, "preset saved");
    settings.notifier().info(&format!("Preset \"{name}\" saved!"));
    Ok(preset)
}

/// Overwrite the six preset fields with the named preset and record it as
/// the active preset.
pub fn load(settings: &mut Settings<'_>, name: &str) -> Result<Preset, PresetError> {
    let Some(preset) = find(settings, name) else {
        settings.notifier().error(&format!("Preset \"{name}\" not found!"));
        return Err(PresetError::NotFound(name.to_owned()));
    };

    apply(settings, preset.config())?;
    settings.set(SettingKey::ActivePreset, name)?;

    info!(preset = %name, built_in = preset.is_built_in(), "preset loaded");
    settings.notifier().info(&format!("Preset \"{name}\" loaded!"));
    Ok(preset)
}

/// Remove a custom preset. Built-ins are protected.
pub fn delete(settings: &mut Settings<'_>, name: &str) -> Result<Preset, PresetError> {
    let mut stored = stored_presets(settings);
    let index = stored.iter().position(|p| p.name == name);

    let protected = is_built_in_name(name) || index.is_some_and(|i| stored[i].built_in);
    if protected {
        settings.notifier().warning("Cannot delete built-in preset!");
        return Err(PresetError::BuiltInProtected(name.to_owned()));
    }

    let Some(index) = index else {
        settings.notifier().error(&format!("Preset \"{name}\" not found!"));
        return Err(PresetError::NotFound(name.to_owned()));
    };

    let removed = Preset::from(stored.remove(index));
    settings.set(SettingKey::Presets, &stored)?;

    info!(preset = %name, "preset deleted");
    settings.notifier().info(&format!("Preset \"{name}\" deleted!"));
    Ok(removed)
}

fn stored_presets(settings: &mut Settings<'_>) -> Vec<StoredPreset> {
    settings.get(SettingKey::Presets)
}

fn apply(settings: &mut Settings<'_>, config: &PresetConfig) -> Result<(), PresetError> {
    settings.set(SettingKey::HiddenSlots, &config.hidden_slots)?;
    settings.set(SettingKey::HideBackground, &config.hide_background)?;
    settings.set(SettingKey::HideLeftControls, &config.hide_left_controls)?;
    settings.set(SettingKey::HideRightControls, &config.hide_right_controls)?;
    settings.set(SettingKey::Opacity, &config.opacity)?;
    settings.set(SettingKey::HiddenPages, &config.hidden_pages)?;
    Ok(())
}
