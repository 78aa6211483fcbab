//! Guards for values interpolated into selectors.
//!
//! Sidebar tab ids end up inside `[data-tab="..."]`. Real tab ids are plain
//! tokens, so anything else is rejected rather than escaped.

use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

static SELECTOR_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]+$").expect("sanitize: static regex pattern must compile")
});

/// Whether `value` may be placed inside a quoted attribute selector.
pub fn is_selector_token(value: &str) -> bool {
    SELECTOR_TOKEN_RE.is_match(value)
}

/// The tab ids that are safe to emit, in input order. Rejected ids are logged.
pub fn safe_tab_ids(tabs: &[String]) -> Vec<&str> {
    tabs.iter()
        .map(String::as_str)
        .filter(|tab| {
            let ok = is_selector_token(tab);
            if !ok {
                warn!(tab, "sidebar tab id rejected by sanitizer");
            }
            ok
        })
        .collect()
}
