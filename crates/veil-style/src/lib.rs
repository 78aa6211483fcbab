//! Stylesheet generation for Hotbar Veil.
//!
//! [`resolve`] picks the values that apply to a viewer, [`compile`] turns
//! them into CSS, and [`inject`] places the result in the host document.

pub mod animation;
pub mod compiler;
pub mod inject;
pub mod resolve;
pub mod sanitize;

pub use animation::keyframes_css;
pub use compiler::compile;
pub use inject::{apply_stylesheet, style_injection_js, StyleDocument, StyleTarget, STYLE_ELEMENT_ID};
pub use resolve::{resolve, ResolvedPrefs};

use veil_common::Viewer;
use veil_config::PreferenceSnapshot;

/// Resolve and compile in one step.
pub fn stylesheet_for(snapshot: &PreferenceSnapshot, viewer: &Viewer) -> String {
    compile(&resolve(snapshot, viewer))
}
