//! Per-participant overrides of the global visibility settings.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A participant's own visibility settings.
///
/// Every field is optional. When a record exists for a participant, missing
/// fields mean "not hidden" rather than "use the global value".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_slots: Option<BTreeMap<u32, bool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_pages: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_background: Option<bool>,
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
    pub hidden_sidebar_tabs: Option<Vec<String>>,
}
