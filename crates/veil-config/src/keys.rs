//! Registered setting keys and their defaults.
//!
//! Each key is persisted under its wire name in the world-scoped store.

use serde_json::{json, Value};
use std::fmt;

use crate::schema::{DEFAULT_ANIMATION_DURATION, DEFAULT_OPACITY};

/// Identifier of the host module that owns these settings.
pub const MODULE_ID: &str = "rnk-hide-em";

/// A persisted setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SettingKey {
    HiddenSlots,
    HideBackground,
    ApplyToGm,
    HideLeftControls,
    HideRightControls,
    HideSidebar,
    HideSceneControls,
    HideEntireHotbar,
    HideChat,
    HidePlayers,
    HideSceneNavigation,
    HiddenSidebarTabs,
    Opacity,
    AnimationDuration,
    Presets,
    ActivePreset,
    HiddenPages,
    PerPlayerSettings,
}

impl SettingKey {
    pub const ALL: [SettingKey; 18] = [
        SettingKey::HiddenSlots,
        SettingKey::HideBackground,
        SettingKey::ApplyToGm,
        SettingKey::HideLeftControls,
        SettingKey::HideRightControls,
        SettingKey::HideSidebar,
        SettingKey::HideSceneControls,
        SettingKey::HideEntireHotbar,
        SettingKey::HideChat,
        SettingKey::HidePlayers,
        SettingKey::HideSceneNavigation,
        SettingKey::HiddenSidebarTabs,
        SettingKey::Opacity,
        SettingKey::AnimationDuration,
        SettingKey::Presets,
        SettingKey::ActivePreset,
        SettingKey::HiddenPages,
        SettingKey::PerPlayerSettings,
    ];

    /// Name the value is stored under.
    pub fn as_str(self) -> &'static str {
        match self {
            SettingKey::HiddenSlots => "hiddenSlots",
            SettingKey::HideBackground => "hideBackground",
            SettingKey::ApplyToGm => "applyToGM",
            SettingKey::HideLeftControls => "hideLeftControls",
            SettingKey::HideRightControls => "hideRightControls",
            SettingKey::HideSidebar => "hideSidebar",
            SettingKey::HideSceneControls => "hideSceneControls",
            SettingKey::HideEntireHotbar => "hideEntireHotbar",
            SettingKey::HideChat => "hideChat",
            SettingKey::HidePlayers => "hidePlayers",
            SettingKey::HideSceneNavigation => "hideSceneNavigation",
            SettingKey::HiddenSidebarTabs => "hiddenSidebarTabs",
            SettingKey::Opacity => "slotOpacity",
            SettingKey::AnimationDuration => "animationDuration",
            SettingKey::Presets => "presets",
            SettingKey::ActivePreset => "activePreset",
            SettingKey::HiddenPages => "hiddenPages",
            SettingKey::PerPlayerSettings => "perPlayerSettings",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }

    /// Value returned when nothing has been stored for this key.
    pub fn default_value(self) -> Value {
        match self {
            SettingKey::HiddenSlots | SettingKey::PerPlayerSettings => json!({}),
            SettingKey::HiddenSidebarTabs | SettingKey::Presets | SettingKey::HiddenPages => {
                json!([])
            }
            SettingKey::Opacity => json!(DEFAULT_OPACITY),
            SettingKey::AnimationDuration => json!(DEFAULT_ANIMATION_DURATION),
            SettingKey::ActivePreset => Value::Null,
            SettingKey::HideBackground
            | SettingKey::ApplyToGm
            | SettingKey::HideLeftControls
            | SettingKey::HideRightControls
            | SettingKey::HideSidebar
            | SettingKey::HideSceneControls
            | SettingKey::HideEntireHotbar
            | SettingKey::HideChat
            | SettingKey::HidePlayers
            | SettingKey::HideSceneNavigation => json!(false),
        }
    }

    /// Whether `value` has the JSON shape of this key's default.
    ///
    /// `activePreset` takes a string or null.
    pub fn accepts(self, value: &Value) -> bool {
        match (self.default_value(), value) {
            (Value::Null, Value::Null | Value::String(_)) => true,
            (Value::Bool(_), Value::Bool(_))
            | (Value::Number(_), Value::Number(_))
            | (Value::Array(_), Value::Array(_))
            | (Value::Object(_), Value::Object(_)) => true,
            _ => false,
        }
    }

    /// Whether a change to this key alters the compiled stylesheet.
    pub fn affects_style(self) -> bool {
        !matches!(self, SettingKey::Presets | SettingKey::ActivePreset)
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
