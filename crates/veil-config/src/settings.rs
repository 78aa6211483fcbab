//! Typed access to the preference store with the notification policy.
//!
//! Read failures are reported and replaced by the registered default so
//! rendering can proceed. Write failures are reported and then returned to
//! the caller so it can stop (for example, skip the re-render).

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::error;
use veil_common::{ConfigError, Notifier};

use crate::keys::SettingKey;
use crate::schema::PreferenceSnapshot;
use crate::store::PreferenceStore;
use crate::validation;

/// Store plus notification sink, borrowed for one user action.
pub struct Settings<'a> {
    store: &'a mut dyn PreferenceStore,
    notifier: &'a mut dyn Notifier,
}

impl<'a> Settings<'a> {
    pub fn new(store: &'a mut dyn PreferenceStore, notifier: &'a mut dyn Notifier) -> Self {
        Self { store, notifier }
    }

    /// The notification sink, for callers reporting their own outcomes.
    pub fn notifier(&mut self) -> &mut (dyn Notifier + 'a) {
        &mut *self.notifier
    }

    /// Read and deserialize `key`.
    ///
    /// Falls back to the key's registered default (then to `T::default()`)
    /// after notifying if the store fails or the stored value has the wrong
    /// shape.
    pub fn get<T: DeserializeOwned + Default>(&mut self, key: SettingKey) -> T {
        let raw = match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                error!(%key, error = %e, "setting read failed");
                self.notifier
                    .error(&format!("Hotbar Veil: Failed to get setting \"{key}\""));
                return default_for(key);
            }
        };

        match serde_json::from_value(raw) {
            Ok(value) => value,
            Err(e) => {
                error!(%key, error = %e, "stored setting has unexpected shape");
                self.notifier
                    .error(&format!("Hotbar Veil: Failed to get setting \"{key}\""));
                default_for(key)
            }
        }
    }

    /// Serialize and write `value` under `key`, clamping ranged settings.
    pub fn set<T: Serialize + ?Sized>(&mut self, key: SettingKey, value: &T) -> Result<(), ConfigError> {
        let raw = serde_json::to_value(value).map_err(|e| ConfigError::StoreWrite {
            key: key.as_str().to_owned(),
            reason: e.to_string(),
        });
        let result = raw.and_then(|raw| self.store.set(key, validation::clamp_setting(key, raw)));

        if let Err(e) = &result {
            error!(%key, error = %e, "setting write failed");
            self.notifier
                .error(&format!("Hotbar Veil: Failed to set setting \"{key}\""));
        }
        result
    }

    /// A fresh full read of every style-relevant setting.
    pub fn snapshot(&mut self) -> PreferenceSnapshot {
        PreferenceSnapshot {
            hidden_slots: self.get(SettingKey::HiddenSlots),
            hidden_pages: self.get(SettingKey::HiddenPages),
            hide_background: self.get(SettingKey::HideBackground),
            apply_to_gm: self.get(SettingKey::ApplyToGm),
            hide_left_controls: self.get(SettingKey::HideLeftControls),
            hide_right_controls: self.get(SettingKey::HideRightControls),
            hide_sidebar: self.get(SettingKey::HideSidebar),
            hide_scene_controls: self.get(SettingKey::HideSceneControls),
            hide_entire_hotbar: self.get(SettingKey::HideEntireHotbar),
            hide_chat: self.get(SettingKey::HideChat),
            hide_players: self.get(SettingKey::HidePlayers),
            hide_scene_navigation: self.get(SettingKey::HideSceneNavigation),
            hidden_sidebar_tabs: self.get(SettingKey::HiddenSidebarTabs),
            opacity: self.get(SettingKey::Opacity),
            animation_duration: self.get(SettingKey::AnimationDuration),
            per_player_overrides: self.get(SettingKey::PerPlayerSettings),
        }
    }

    /// Name of the most recently loaded preset, if any.
    pub fn active_preset(&mut self) -> Option<String> {
        self.get(SettingKey::ActivePreset)
    }
}

fn default_for<T: DeserializeOwned + Default>(key: SettingKey) -> T {
    serde_json::from_value::<T>(key.default_value()).unwrap_or_default()
}
