//! Base64 share codes.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::Value;
use tracing::{error, info, warn};
use veil_common::{ClipboardSink, CodecError};

use super::payload::SettingsPayload;
use crate::keys::SettingKey;
use crate::settings::Settings;

/// Encode the shareable settings (everything but `applyToGM`) as standard
/// Base64 of compact JSON and copy it to the clipboard.
///
/// A clipboard failure is reported but does not fail the share; the code is
/// still returned.
pub fn share_configuration(
    settings: &mut Settings<'_>,
    clipboard: &mut dyn ClipboardSink,
) -> Result<String, CodecError> {
    let code = share_code(settings)?;

    match clipboard.set_text(&code) {
        Ok(()) => settings.notifier().info("Configuration code copied to clipboard!"),
        Err(e) => {
            warn!(error = %e, "failed to copy share code");
            settings.notifier().error("Failed to copy to clipboard");
        }
    }
    Ok(code)
}

/// The share code for the current settings, without touching the clipboard.
pub fn share_code(settings: &mut Settings<'_>) -> Result<String, CodecError> {
    let snapshot = settings.snapshot();
    let presets = settings.get(SettingKey::Presets);
    let payload = SettingsPayload {
        apply_to_gm: None,
        ..SettingsPayload::capture(snapshot, presets)
    };

    let json = serde_json::to_string(&payload)
        .map_err(|e| CodecError::Format(format!("failed to serialize share code: {e}")))?;
    Ok(STANDARD.encode(json))
}

/// Decode a share code and apply it, defaulting every absent field.
///
/// Nothing is written unless the code decodes to a JSON object with a
/// non-null `hiddenSlots`.
pub fn load_shared_configuration(
    settings: &mut Settings<'_>,
    code: &str,
) -> Result<(), CodecError> {
    let result =
        decode_share_code(code).and_then(|payload| Ok(payload.apply_with_defaults(settings)?));

    match &result {
        Ok(()) => {
            info!("shared configuration loaded");
            settings.notifier().info("Shared configuration loaded!");
        }
        Err(e) => {
            error!(error = %e, "error loading shared configuration");
            settings.notifier().error("Invalid configuration code!");
        }
    }
    result
}

/// Decode and validate a share code without applying it.
pub fn decode_share_code(code: &str) -> Result<SettingsPayload, CodecError> {
    let bytes = STANDARD
        .decode(code.trim())
        .map_err(|e| CodecError::InvalidShareCode(format!("not Base64: {e}")))?;
    let value: Value = serde_json::from_slice(&bytes)
        .map_err(|e| CodecError::InvalidShareCode(format!("not JSON: {e}")))?;

    if value.get("hiddenSlots").map_or(true, Value::is_null) {
        return Err(CodecError::InvalidShareCode("missing \"hiddenSlots\"".into()));
    }

    serde_json::from_value(value).map_err(|e| CodecError::InvalidShareCode(e.to_string()))
}
