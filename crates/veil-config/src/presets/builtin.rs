//! Presets that ship with the module.

use std::collections::BTreeMap;

use super::types::{Preset, PresetConfig};

/// Built-in preset names, in display order.
pub const BUILT_IN_PRESETS: &[&str] = &["Combat Only", "RP Mode", "Minimal", "Clean Slate"];

/// The built-in presets, in display order.
pub fn built_in_presets() -> Vec<Preset> {
    BUILT_IN_PRESETS
        .iter()
        .filter_map(|name| built_in_config(name).map(|config| (name, config)))
        .map(|(name, config)| Preset::BuiltIn {
            name: (*name).to_owned(),
            config,
        })
        .collect()
}

/// Configuration of the built-in preset called `name`.
pub fn built_in_config(name: &str) -> Option<PresetConfig> {
    let (hide_chrome, opacity, hidden_pages) = match name {
        "Combat Only" | "Clean Slate" => (false, 100, vec![]),
        "RP Mode" => (true, 80, vec![]),
        "Minimal" => (true, 60, vec![3, 4, 5]),
        _ => return None,
    };
    Some(PresetConfig {
        hidden_slots: BTreeMap::new(),
        hide_background: hide_chrome,
        hide_left_controls: hide_chrome,
        hide_right_controls: hide_chrome,
        opacity,
        hidden_pages,
    })
}

pub fn is_built_in_name(name: &str) -> bool {
    BUILT_IN_PRESETS.contains(&name)
}
