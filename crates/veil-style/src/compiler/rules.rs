//! The individual rule groups, in the order [`super::compile`] emits them.

use veil_config::schema::slots_for_page;

use super::selectors;
use super::{CssWriter, Declaration};
use crate::resolve::ResolvedPrefs;
use crate::sanitize::safe_tab_ids;

fn transition(duration: u32) -> Declaration {
    (
        "transition",
        format!(
            "opacity {duration}ms ease-in-out, transform {duration}ms ease-in-out, \
             visibility {duration}ms ease-in-out"
        ),
    )
}

fn hidden(transform: &str) -> Vec<Declaration> {
    vec![
        ("opacity", "0".into()),
        ("visibility", "hidden".into()),
        ("pointer-events", "none".into()),
        ("transform", transform.into()),
    ]
}

/// `hidden` plus the animated transition.
fn hidden_animated(transform: &str, duration: u32) -> Vec<Declaration> {
    let mut declarations = hidden(transform);
    declarations.push(transition(duration));
    declarations
}

fn shown(transform: &str) -> Vec<Declaration> {
    vec![
        ("opacity", "1".into()),
        ("visibility", "visible".into()),
        ("pointer-events", "all".into()),
        ("transform", transform.into()),
    ]
}

pub(super) fn transitions(css: &mut CssWriter, prefs: &ResolvedPrefs) {
    css.rule(
        selectors::TRANSITION_TARGETS,
        &[transition(prefs.animation_duration)],
    );
}

pub(super) fn whole_hotbar(css: &mut CssWriter, prefs: &ResolvedPrefs) {
    css.rule(
        selectors::HOTBAR,
        &hidden_animated("translateY(20px)", prefs.animation_duration),
    );
}

pub(super) fn background(css: &mut CssWriter) {
    css.rule(
        selectors::HOTBAR_BACKGROUND,
        &[
            ("background", "none".into()),
            ("box-shadow", "none".into()),
            ("border", "none".into()),
            ("background-color", "transparent".into()),
        ],
    );
}

fn hide_slot(css: &mut CssWriter, slot: u32) {
    css.rule(&selectors::slot(slot), &hidden("scale(0.8)"));
}

/// Explicitly hidden slots, ascending.
pub(super) fn slots(css: &mut CssWriter, prefs: &ResolvedPrefs) {
    for (slot, hidden) in &prefs.hidden_slots {
        if *hidden {
            hide_slot(css, *slot);
        }
    }
}

/// Each hidden page expands to its ten slots. Overlap with [`slots`] is not
/// deduplicated.
pub(super) fn pages(css: &mut CssWriter, prefs: &ResolvedPrefs) {
    for page in &prefs.hidden_pages {
        for slot in slots_for_page(*page) {
            hide_slot(css, slot);
        }
    }
}

pub(super) fn opacity(css: &mut CssWriter, prefs: &ResolvedPrefs) {
    if prefs.opacity < 100 {
        let value = f64::from(prefs.opacity) / 100.0;
        css.rule(selectors::VISIBLE_SLOTS, &[("opacity", value.to_string())]);
    }
}

pub(super) fn left_controls(css: &mut CssWriter, prefs: &ResolvedPrefs) {
    if prefs.hide_left_controls {
        css.rule(selectors::LEFT_CONTROLS, &hidden("translateX(-20px)"));
    } else {
        css.rule(selectors::LEFT_CONTROLS, &shown("translateX(0)"));
    }
}

/// Individual tabs only matter while the sidebar itself is shown.
pub(super) fn sidebar(css: &mut CssWriter, prefs: &ResolvedPrefs) {
    if prefs.hide_sidebar {
        css.rule(
            selectors::SIDEBAR,
            &hidden_animated("translateX(20px)", prefs.animation_duration),
        );
        return;
    }

    css.rule(selectors::SIDEBAR, &shown("translateX(0)"));
    for tab in safe_tab_ids(&prefs.hidden_sidebar_tabs) {
        css.rule(&selectors::sidebar_tab(tab), &[("display", "none".into())]);
    }
}

pub(super) fn right_controls(css: &mut CssWriter, prefs: &ResolvedPrefs) {
    if prefs.hide_right_controls {
        css.rule(selectors::RIGHT_CONTROLS, &hidden("translateX(20px)"));
    } else {
        css.rule(selectors::RIGHT_CONTROLS, &shown("translateX(0)"));
    }
}

pub(super) fn chat(css: &mut CssWriter, prefs: &ResolvedPrefs) {
    if prefs.hide_chat {
        css.rule(
            selectors::CHAT,
            &hidden_animated("translateX(20px)", prefs.animation_duration),
        );
    } else {
        css.rule(selectors::CHAT, &shown("translateX(0)"));
    }
}

/// Hide only; a shown player list gets no rule.
pub(super) fn players(css: &mut CssWriter, prefs: &ResolvedPrefs) {
    if prefs.hide_players {
        css.rule(
            selectors::PLAYERS,
            &hidden_animated("translateY(-20px)", prefs.animation_duration),
        );
    }
}

pub(super) fn scene_navigation(css: &mut CssWriter, prefs: &ResolvedPrefs) {
    if prefs.hide_scene_navigation {
        css.rule(
            selectors::SCENE_NAVIGATION,
            &hidden_animated("translateY(-20px)", prefs.animation_duration),
        );
    } else {
        css.rule(selectors::SCENE_NAVIGATION, &shown("translateY(0)"));
    }
}

/// Hide only, and removed from layout entirely.
pub(super) fn scene_controls(css: &mut CssWriter, prefs: &ResolvedPrefs) {
    if prefs.hide_scene_controls {
        let mut declarations = hidden_animated("translateX(-20px)", prefs.animation_duration);
        declarations.push(("display", "none".into()));
        css.rule(selectors::SCENE_CONTROLS, &declarations);
    }
}
