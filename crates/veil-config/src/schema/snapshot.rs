//! The full set of visibility settings at one instant.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::overrides::PlayerOverrides;

/// Default visible-slot opacity in percent.
pub const DEFAULT_OPACITY: u32 = 100;
/// Default transition duration in milliseconds.
pub const DEFAULT_ANIMATION_DURATION: u32 = 300;

/// Every visibility and appearance setting, read fresh from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PreferenceSnapshot {
    /// Slot number (1-50) to hidden flag.
    pub hidden_slots: BTreeMap<u32, bool>,
    /// Hidden page numbers (1-5); each implies its ten slots.
    pub hidden_pages: Vec<u32>,
    pub hide_background: bool,
    /// Apply slot/control/sidebar rules to the session owner as well.
    #[serde(rename = "applyToGM")]
    pub apply_to_gm: bool,
    pub hide_left_controls: bool,
    pub hide_right_controls: bool,
    pub hide_sidebar: bool,
    pub hide_scene_controls: bool,
    pub hide_entire_hotbar: bool,
    pub hide_chat: bool,
    pub hide_players: bool,
    pub hide_scene_navigation: bool,
    /// Sidebar tab ids; unknown ids are kept but match nothing.
    pub hidden_sidebar_tabs: Vec<String>,
    /// Visible-slot opacity in percent (0-100).
    pub opacity: u32,
    /// Transition duration in milliseconds (0-1000).
    pub animation_duration: u32,
    /// Participant id to that participant's overrides.
    #[serde(rename = "perPlayerSettings")]
    pub per_player_overrides: BTreeMap<String, PlayerOverrides>,
}

impl Default for PreferenceSnapshot {
    fn default() -> Self {
        Self {
            hidden_slots: BTreeMap::new(),
            hidden_pages: Vec::new(),
            hide_background: false,
            apply_to_gm: false,
            hide_left_controls: false,
            hide_right_controls: false,
            hide_sidebar: false,
            hide_scene_controls: false,
            hide_entire_hotbar: false,
            hide_chat: false,
            hide_players: false,
            hide_scene_navigation: false,
            hidden_sidebar_tabs: Vec::new(),
            opacity: DEFAULT_OPACITY,
            animation_duration: DEFAULT_ANIMATION_DURATION,
            per_player_overrides: BTreeMap::new(),
        }
    }
}
