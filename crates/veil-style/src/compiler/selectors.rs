//! Host DOM selectors targeted by the generated rules.

/// Elements that animate between hidden and shown.
pub const TRANSITION_TARGETS: &[&str] = &[
    "#hotbar .macro",
    "#hotbar li[data-slot]",
    "#hotbar .bar-controls",
];

pub const HOTBAR: &[&str] = &["#hotbar"];

pub const HOTBAR_BACKGROUND: &[&str] = &["#hotbar", "#hotbar .macro-container", "#hotbar .macros"];

/// Slots not hidden by an inline style.
pub const VISIBLE_SLOTS: &[&str] = &[
    "#hotbar .macro:not([style*=\"opacity: 0\"])",
    "#hotbar li[data-slot]:not([style*=\"opacity: 0\"])",
];

pub const LEFT_CONTROLS: &[&str] = &[
    "#hotbar-directory-controls",
    "#hotbar .bar-controls:first-child",
    "#hotbar .bar-controls.directory-controls",
];

pub const RIGHT_CONTROLS: &[&str] = &[
    "#hotbar-page-controls",
    "#hotbar .bar-controls:last-child",
    "#hotbar .bar-controls.page-controls",
];

pub const SIDEBAR: &[&str] = &["#sidebar"];

pub const CHAT: &[&str] = &[
    "#chat",
    "#chat-log",
    "#chat-form",
    "#chat-controls",
    "#chat-message",
    ".sidebar-tab[data-tab=\"chat\"]",
    "#sidebar #chat",
];

pub const PLAYERS: &[&str] = &["#players", "#player-list", ".player-list"];

pub const SCENE_NAVIGATION: &[&str] = &[
    "#navigation",
    "#nav",
    ".scene-navigation",
    "nav#scene-navigation",
];

pub const SCENE_CONTROLS: &[&str] = &[
    "#controls",
    ".scene-control",
    "ol#controls",
    "#controls > *",
    ".control-tools",
    "div#controls",
    "#controls-list",
    ".controls-list",
    "#ui-left #controls",
    "#ui-left",
    ".control-tools-list",
    "#controls li",
    "#controls .scene-control",
    ".scene-controls",
    "#scene-controls",
];

/// Both renderings of action-bar slot `slot`.
pub fn slot(slot: u32) -> [String; 2] {
    [
        format!("#hotbar .macro[data-slot=\"{slot}\"]"),
        format!("#hotbar li[data-slot=\"{slot}\"]"),
    ]
}

/// Every place a sidebar tab button or panel for `tab` can appear.
pub fn sidebar_tab(tab: &str) -> [String; 5] {
    [
        format!("#sidebar-tabs [data-tab=\"{tab}\"]"),
        format!("#sidebar-tabs .item[data-tab=\"{tab}\"]"),
        format!("#sidebar-tabs a[data-tab=\"{tab}\"]"),
        format!("#sidebar .sidebar-tab[data-tab=\"{tab}\"]"),
        format!(".tabs .item[data-tab=\"{tab}\"]"),
    ]
}
