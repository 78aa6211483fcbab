//! Range validation and persistence-time clamping.
//!
//! The style compiler uses numbers verbatim, so keeping `opacity` and
//! `animationDuration` in range is done here, when values are written.

mod helpers;


use serde_json::Value;
use tracing::warn;
use veil_common::ConfigError;

use crate::keys::SettingKey;
use crate::schema::{is_valid_page, is_valid_slot, PreferenceSnapshot, SidebarTab};

use helpers::{clamp_json_number, validate_range};

/// Inclusive opacity range in percent.
pub const OPACITY_RANGE: (u32, u32) = (0, 100);
/// Inclusive animation duration range in milliseconds.
pub const ANIMATION_DURATION_RANGE: (u32, u32) = (0, 1000);

/// Clamp a value about to be persisted under `key` into its documented range.
///
/// Keys without a range, and non-numeric values, pass through unchanged.
pub fn clamp_setting(key: SettingKey, value: Value) -> Value {
    let (min, max) = match key {
        SettingKey::Opacity => OPACITY_RANGE,
        SettingKey::AnimationDuration => ANIMATION_DURATION_RANGE,
        _ => return value,
    };

    match clamp_json_number(&value, i64::from(min), i64::from(max)) {
        Some(clamped) => {
            if value.as_i64() != Some(clamped) {
                warn!(%key, %value, clamped, "setting clamped into range");
            }
            Value::from(clamped)
        }
        None => value,
    }
}

/// Run all validations on a snapshot, collecting all errors.
pub fn validate(snapshot: &PreferenceSnapshot) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_range(
        &mut errors,
        "opacity",
        snapshot.opacity,
        OPACITY_RANGE.0,
        OPACITY_RANGE.1,
    );
    validate_range(
        &mut errors,
        "animationDuration",
        snapshot.animation_duration,
        ANIMATION_DURATION_RANGE.0,
        ANIMATION_DURATION_RANGE.1,
    );

    validate_slots(&mut errors, "hiddenSlots", snapshot.hidden_slots.keys());
    validate_pages(&mut errors, "hiddenPages", &snapshot.hidden_pages);

    for (player, overrides) in &snapshot.per_player_overrides {
        if let Some(slots) = &overrides.hidden_slots {
            validate_slots(
                &mut errors,
                &format!("perPlayerSettings.{player}.hiddenSlots"),
                slots.keys(),
            );
        }
        if let Some(pages) = &overrides.hidden_pages {
            validate_pages(
                &mut errors,
                &format!("perPlayerSettings.{player}.hiddenPages"),
                pages,
            );
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// Hidden sidebar tab ids that the host does not know about.
///
/// These are tolerated everywhere; they simply never match an element.
pub fn unknown_sidebar_tabs(snapshot: &PreferenceSnapshot) -> Vec<&str> {
    snapshot
        .hidden_sidebar_tabs
        .iter()
        .map(String::as_str)
        .filter(|id| SidebarTab::from_id(id).is_none())
        .collect()
}

fn validate_slots<'a>(errors: &mut Vec<String>, name: &str, slots: impl Iterator<Item = &'a u32>) {
    for slot in slots {
        if !is_valid_slot(*slot) {
            errors.push(format!("{name} contains slot {slot}, expected 1-50"));
        }
    }
}

fn validate_pages(errors: &mut Vec<String>, name: &str, pages: &[u32]) {
    for page in pages {
        if !is_valid_page(*page) {
            errors.push(format!("{name} contains page {page}, expected 1-5"));
        }
    }
}
