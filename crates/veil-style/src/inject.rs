//! Putting compiled CSS into the host document.
//!
//! There is exactly one style element. It is created on first use and its
//! text replaced on every later update, never appended to.

use std::collections::BTreeMap;
use tracing::debug;
use veil_common::PlatformError;

/// `id` of the style element holding the compiled rules.
pub const STYLE_ELEMENT_ID: &str = "hide-hotbar-buttons-style";

/// A document that can hold `<style>` elements keyed by id.
pub trait StyleTarget {
    /// Create the element `id` if missing, then set its text to `css`.
    fn replace_style(&mut self, id: &str, css: &str) -> Result<(), PlatformError>;
}

/// In-memory document, for hosts without a DOM and for tests.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StyleDocument {
    styles: BTreeMap<String, String>,
    created: usize,
}

impl StyleDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(&self, id: &str) -> Option<&str> {
        self.styles.get(id).map(String::as_str)
    }

    /// Number of style elements ever created.
    pub fn created_count(&self) -> usize {
        self.created
    }
}

impl StyleTarget for StyleDocument {
    fn replace_style(&mut self, id: &str, css: &str) -> Result<(), PlatformError> {
        match self.styles.get_mut(id) {
            Some(existing) => {
                existing.clear();
                existing.push_str(css);
            }
            None => {
                debug!(id, "creating style element");
                self.styles.insert(id.to_owned(), css.to_owned());
                self.created += 1;
            }
        }
        Ok(())
    }
}

/// Write `css` into the well-known style element of `target`.
pub fn apply_stylesheet(target: &mut dyn StyleTarget, css: &str) -> Result<(), PlatformError> {
    target.replace_style(STYLE_ELEMENT_ID, css)
}

/// A self-contained script that does [`apply_stylesheet`] in a live page.
pub fn style_injection_js(css: &str) -> String {
    format!(
        "(function() {{\n  var el = document.getElementById('{id}');\n  \
         if (!el) {{\n    el = document.createElement('style');\n    el.id = '{id}';\n    \
         document.head.appendChild(el);\n  }}\n  el.textContent = '{css}';\n}})();",
        id = STYLE_ELEMENT_ID,
        css = escape_js_string(css),
    )
}

/// Escape for a single-quoted JS string literal.
fn escape_js_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            '<' => out.push_str("\\x3c"),
            _ => out.push(ch),
        }
    }
    out
}
