//! Choosing which visibility values apply to a given viewer.

use std::collections::BTreeMap;
use veil_common::Viewer;
use veil_config::{PlayerOverrides, PreferenceSnapshot};

/// The values the compiler renders for one viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPrefs {
    pub hidden_slots: BTreeMap<u32, bool>,
    pub hidden_pages: Vec<u32>,
    pub hide_background: bool,
    pub hide_left_controls: bool,
    pub hide_right_controls: bool,
    pub hide_sidebar: bool,
    pub hide_scene_controls: bool,
    pub hide_entire_hotbar: bool,
    pub hide_chat: bool,
    pub hide_players: bool,
    pub hide_scene_navigation: bool,
    pub hidden_sidebar_tabs: Vec<String>,
    pub opacity: u32,
    pub animation_duration: u32,
    pub apply_to_gm: bool,
    /// Slot, page, opacity, control and sidebar rules apply to this viewer.
    pub slot_scope: bool,
    /// Visibility fields came from the viewer's own override record.
    pub from_override: bool,
}

/// Resolve `snapshot` for `viewer`.
///
/// A non-owner with an override record gets every visibility field from
/// that record, missing fields meaning "shown". Everyone else gets the
/// global values. `applyToGM`, opacity and duration are always global.
pub fn resolve(snapshot: &PreferenceSnapshot, viewer: &Viewer) -> ResolvedPrefs {
    let slot_scope = !viewer.is_owner || snapshot.apply_to_gm;

    let record = snapshot
        .per_player_overrides
        .get(&viewer.user_id)
        .filter(|_| !viewer.is_owner);

    match record {
        Some(overrides) => from_overrides(snapshot, overrides, slot_scope),
        None => ResolvedPrefs {
            hidden_slots: snapshot.hidden_slots.clone(),
            hidden_pages: snapshot.hidden_pages.clone(),
            hide_background: snapshot.hide_background,
            hide_left_controls: snapshot.hide_left_controls,
            hide_right_controls: snapshot.hide_right_controls,
            hide_sidebar: snapshot.hide_sidebar,
            hide_scene_controls: snapshot.hide_scene_controls,
            hide_entire_hotbar: snapshot.hide_entire_hotbar,
            hide_chat: snapshot.hide_chat,
            hide_players: snapshot.hide_players,
            hide_scene_navigation: snapshot.hide_scene_navigation,
            hidden_sidebar_tabs: snapshot.hidden_sidebar_tabs.clone(),
            opacity: snapshot.opacity,
            animation_duration: snapshot.animation_duration,
            apply_to_gm: snapshot.apply_to_gm,
            slot_scope,
            from_override: false,
        },
    }
}

fn from_overrides(
    snapshot: &PreferenceSnapshot,
    overrides: &PlayerOverrides,
    slot_scope: bool,
) -> ResolvedPrefs {
    ResolvedPrefs {
        hidden_slots: overrides.hidden_slots.clone().unwrap_or_default(),
        hidden_pages: overrides.hidden_pages.clone().unwrap_or_default(),
        hide_background: overrides.hide_background.unwrap_or(false),
        hide_left_controls: overrides.hide_left_controls.unwrap_or(false),
        hide_right_controls: overrides.hide_right_controls.unwrap_or(false),
        hide_sidebar: overrides.hide_sidebar.unwrap_or(false),
        hide_scene_controls: overrides.hide_scene_controls.unwrap_or(false),
        hide_entire_hotbar: overrides.hide_entire_hotbar.unwrap_or(false),
        hide_chat: overrides.hide_chat.unwrap_or(false),
        hide_players: overrides.hide_players.unwrap_or(false),
        hide_scene_navigation: overrides.hide_scene_navigation.unwrap_or(false),
        hidden_sidebar_tabs: overrides.hidden_sidebar_tabs.clone().unwrap_or_default(),
        opacity: snapshot.opacity,
        animation_duration: snapshot.animation_duration,
        apply_to_gm: snapshot.apply_to_gm,
        slot_scope,
        from_override: true,
    }
}
