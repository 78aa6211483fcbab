//! The `settings` object carried by export files and share codes.

use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::collections::BTreeMap;
use veil_common::ConfigError;

use crate::keys::SettingKey;
use crate::presets::StoredPreset;
use crate::schema::{PlayerOverrides, PreferenceSnapshot, DEFAULT_ANIMATION_DURATION, DEFAULT_OPACITY};
use crate::settings::Settings;

/// Transferable settings. Every field is optional: absent and `null` fields
/// are both `None`. Numbers stay untyped so out-of-range values reach the
/// store's clamp instead of failing the parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SettingsPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_slots: Option<BTreeMap<u32, bool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_background: Option<bool>,
    #[serde(rename = "applyToGM", skip_serializing_if = "Option::is_none")]
    pub apply_to_gm: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_left_controls: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_right_controls: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_sidebar: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_scene_controls: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_entire_hotbar: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_chat: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_players: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_scene_navigation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation_duration: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_pages: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_sidebar_tabs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presets: Option<Vec<StoredPreset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_player_settings: Option<BTreeMap<String, PlayerOverrides>>,
}

impl SettingsPayload {
    /// Every transferable field, taken from `snapshot` and `presets`.
    pub fn capture(snapshot: PreferenceSnapshot, presets: Vec<StoredPreset>) -> Self {
        Self {
            hidden_slots: Some(snapshot.hidden_slots),
            hide_background: Some(snapshot.hide_background),
            apply_to_gm: Some(snapshot.apply_to_gm),
            hide_left_controls: Some(snapshot.hide_left_controls),
            hide_right_controls: Some(snapshot.hide_right_controls),
            hide_sidebar: Some(snapshot.hide_sidebar),
            hide_scene_controls: Some(snapshot.hide_scene_controls),
            hide_entire_hotbar: Some(snapshot.hide_entire_hotbar),
            hide_chat: Some(snapshot.hide_chat),
            hide_players: Some(snapshot.hide_players),
            hide_scene_navigation: Some(snapshot.hide_scene_navigation),
            opacity: Some(snapshot.opacity.into()),
            animation_duration: Some(snapshot.animation_duration.into()),
            hidden_pages: Some(snapshot.hidden_pages),
            hidden_sidebar_tabs: Some(snapshot.hidden_sidebar_tabs),
            presets: Some(presets),
            per_player_settings: Some(snapshot.per_player_overrides),
        }
    }

    /// Write only the fields that are present. Stops at the first failed write.
    pub fn apply_present(&self, settings: &mut Settings<'_>) -> Result<usize, ConfigError> {
        let mut written = 0;
        macro_rules! apply {
            ($field:expr, $key:expr) => {
                if let Some(value) = &$field {
                    settings.set($key, value)?;
                    written += 1;
                }
            };
        }

        apply!(self.hidden_slots, SettingKey::HiddenSlots);
        apply!(self.hide_background, SettingKey::HideBackground);
        apply!(self.apply_to_gm, SettingKey::ApplyToGm);
        apply!(self.hide_left_controls, SettingKey::HideLeftControls);
        apply!(self.hide_right_controls, SettingKey::HideRightControls);
        apply!(self.hide_sidebar, SettingKey::HideSidebar);
        apply!(self.hide_scene_controls, SettingKey::HideSceneControls);
        apply!(self.hide_entire_hotbar, SettingKey::HideEntireHotbar);
        apply!(self.hide_chat, SettingKey::HideChat);
        apply!(self.hide_players, SettingKey::HidePlayers);
        apply!(self.hide_scene_navigation, SettingKey::HideSceneNavigation);
        apply!(self.opacity, SettingKey::Opacity);
        apply!(self.animation_duration, SettingKey::AnimationDuration);
        apply!(self.hidden_pages, SettingKey::HiddenPages);
        apply!(self.hidden_sidebar_tabs, SettingKey::HiddenSidebarTabs);
        apply!(self.presets, SettingKey::Presets);
        apply!(self.per_player_settings, SettingKey::PerPlayerSettings);
        Ok(written)
    }

    /// Write every shared field, substituting defaults for absent ones.
    ///
    /// `applyToGM` is not part of a share code and is left untouched. A
    /// present `0` opacity is kept.
    pub fn apply_with_defaults(self, settings: &mut Settings<'_>) -> Result<(), ConfigError> {
        settings.set(SettingKey::HiddenSlots, &self.hidden_slots.unwrap_or_default())?;
        settings.set(SettingKey::HideBackground, &self.hide_background.unwrap_or_default())?;
        settings.set(SettingKey::HideLeftControls, &self.hide_left_controls.unwrap_or_default())?;
        settings.set(SettingKey::HideRightControls, &self.hide_right_controls.unwrap_or_default())?;
        settings.set(SettingKey::HideSidebar, &self.hide_sidebar.unwrap_or_default())?;
        settings.set(SettingKey::HideSceneControls, &self.hide_scene_controls.unwrap_or_default())?;
        settings.set(SettingKey::HideEntireHotbar, &self.hide_entire_hotbar.unwrap_or_default())?;
        settings.set(SettingKey::HideChat, &self.hide_chat.unwrap_or_default())?;
        settings.set(SettingKey::HidePlayers, &self.hide_players.unwrap_or_default())?;
        settings.set(
            SettingKey::HideSceneNavigation,
            &self.hide_scene_navigation.unwrap_or_default(),
        )?;
        settings.set(
            SettingKey::Opacity,
            &self.opacity.unwrap_or_else(|| DEFAULT_OPACITY.into()),
        )?;
        settings.set(
            SettingKey::AnimationDuration,
            &self
                .animation_duration
                .unwrap_or_else(|| DEFAULT_ANIMATION_DURATION.into()),
        )?;
        settings.set(SettingKey::HiddenPages, &self.hidden_pages.unwrap_or_default())?;
        settings.set(
            SettingKey::HiddenSidebarTabs,
            &self.hidden_sidebar_tabs.unwrap_or_default(),
        )?;
        settings.set(SettingKey::Presets, &self.presets.unwrap_or_default())?;
        settings.set(
            SettingKey::PerPlayerSettings,
            &self.per_player_settings.unwrap_or_default(),
        )?;
        Ok(())
    }
}
