//! Resolved preferences to stylesheet text.
//!
//! [`compile`] is pure: the same input always yields byte-identical output,
//! and the result is meant to replace the previous stylesheet wholesale.
//! Rules are emitted in a fixed order so later rules win on collisions.

mod rules;
mod selectors;


use tracing::debug;

use crate::resolve::ResolvedPrefs;

/// One `property: value` pair. Every declaration is emitted `!important`.
pub(crate) type Declaration = (&'static str, String);

/// Render the stylesheet for `prefs`.
pub fn compile(prefs: &ResolvedPrefs) -> String {
    debug!(
        slot_scope = prefs.slot_scope,
        apply_to_gm = prefs.apply_to_gm,
        from_override = prefs.from_override,
        hide_scene_controls = prefs.hide_scene_controls,
        hide_entire_hotbar = prefs.hide_entire_hotbar,
        hide_chat = prefs.hide_chat,
        hide_players = prefs.hide_players,
        "compiling stylesheet"
    );

    let mut css = CssWriter::default();

    rules::transitions(&mut css, prefs);
    if prefs.hide_entire_hotbar && prefs.slot_scope {
        rules::whole_hotbar(&mut css, prefs);
    }
    if prefs.hide_background {
        rules::background(&mut css);
    }
    if prefs.slot_scope {
        rules::slots(&mut css, prefs);
        rules::pages(&mut css, prefs);
        rules::opacity(&mut css, prefs);
        rules::left_controls(&mut css, prefs);
        rules::sidebar(&mut css, prefs);
        rules::right_controls(&mut css, prefs);
    }
    rules::chat(&mut css, prefs);
    rules::players(&mut css, prefs);
    rules::scene_navigation(&mut css, prefs);
    rules::scene_controls(&mut css, prefs);

    css.finish()
}

/// Accumulates rules in emission order.
#[derive(Debug, Default)]
pub(crate) struct CssWriter {
    css: String,
    rules: usize,
}

impl CssWriter {
    /// Append one rule. Selectors go one per line, like hand-written CSS.
    pub(crate) fn rule<S: AsRef<str>>(&mut self, selectors: &[S], declarations: &[Declaration]) {
        if self.rules > 0 {
            self.css.push('\n');
        }
        let list: Vec<&str> = selectors.iter().map(AsRef::as_ref).collect();
        self.css.push_str(&list.join(",\n"));
        self.css.push_str(" {\n");
        for (property, value) in declarations {
            self.css.push_str(&format!("  {property}: {value} !important;\n"));
        }
        self.css.push_str("}\n");
        self.rules += 1;
    }

    pub(crate) fn finish(self) -> String {
        self.css
    }
}
