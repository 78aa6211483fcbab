//! Export file creation and confirmed import.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use veil_common::{CodecError, ConfirmRequest, Dialogs};

use super::payload::SettingsPayload;
use crate::keys::{SettingKey, MODULE_ID};
use crate::schema::EXPORT_FORMAT_VERSION;
use crate::settings::Settings;

const IMPORT_FAILED: &str = "Error importing configuration! Check console for details.";

/// Top-level shape of an export file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub version: String,
    pub export_date: String,
    pub settings: SettingsPayload,
}

/// A rendered export, ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportFile {
    pub file_name: String,
    pub contents: String,
}

/// Result of an import attempt that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    /// Confirmed; this many settings were written.
    Applied(usize),
    /// The user declined; nothing was written.
    Cancelled,
}

/// `rnk-hide-em-config-<epoch millis>.json`
pub fn export_file_name(now: DateTime<Utc>) -> String {
    format!("{MODULE_ID}-config-{}.json", now.timestamp_millis())
}

/// Build the export document for the current settings.
pub fn export_document(settings: &mut Settings<'_>, now: DateTime<Utc>) -> ExportDocument {
    let snapshot = settings.snapshot();
    let presets = settings.get(SettingKey::Presets);
    ExportDocument {
        version: EXPORT_FORMAT_VERSION.to_owned(),
        export_date: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        settings: SettingsPayload::capture(snapshot, presets),
    }
}

/// Render the current settings as a pretty-printed export file.
pub fn export_configuration(
    settings: &mut Settings<'_>,
    now: DateTime<Utc>,
) -> Result<ExportFile, CodecError> {
    let document = export_document(settings, now);
    let contents = serde_json::to_string_pretty(&document)
        .map_err(|e| CodecError::Format(format!("failed to serialize export: {e}")))?;
    Ok(ExportFile {
        file_name: export_file_name(now),
        contents,
    })
}

/// Export into `dir`, returning the path of the written file.
pub fn export_to_dir(
    settings: &mut Settings<'_>,
    dir: &Path,
    now: DateTime<Utc>,
) -> Result<PathBuf, CodecError> {
    let file = export_configuration(settings, now)?;
    let path = dir.join(&file.file_name);
    std::fs::write(&path, &file.contents)?;

    info!(path = %path.display(), "configuration exported");
    settings.notifier().info("Configuration exported successfully!");
    Ok(path)
}

/// Parse an export file, ask for confirmation, then apply every field it
/// carries. Fields it lacks keep their current values.
pub fn import_configuration(
    settings: &mut Settings<'_>,
    dialogs: &mut dyn Dialogs,
    json: &str,
) -> Result<ImportOutcome, CodecError> {
    let result = try_import(settings, dialogs, json);
    match &result {
        Ok(ImportOutcome::Applied(count)) => {
            info!(count, "configuration imported");
            settings.notifier().info("Configuration imported successfully!");
        }
        Ok(ImportOutcome::Cancelled) => info!("configuration import cancelled"),
        Err(e) => {
            error!(error = %e, "error importing configuration");
            settings.notifier().error(IMPORT_FAILED);
        }
    }
    result
}

fn try_import(
    settings: &mut Settings<'_>,
    dialogs: &mut dyn Dialogs,
    json: &str,
) -> Result<ImportOutcome, CodecError> {
    let document: Value = serde_json::from_str(json)
        .map_err(|e| CodecError::Format(format!("not valid JSON: {e}")))?;

    let version = match document.get("version") {
        Some(Value::String(v)) if !v.is_empty() => v.clone(),
        Some(Value::Null) | Some(Value::String(_)) | None => {
            return Err(CodecError::Format("missing \"version\"".into()))
        }
        Some(other) => other.to_string(),
    };
    let payload = match document.get("settings") {
        Some(Value::Null) | None => {
            return Err(CodecError::Format("missing \"settings\"".into()))
        }
        Some(raw) => SettingsPayload::deserialize(raw)
            .map_err(|e| CodecError::Format(format!("bad \"settings\": {e}")))?,
    };

    let exported = document
        .get("exportDate")
        .and_then(Value::as_str)
        .map(display_date)
        .unwrap_or_else(|| "unknown".to_owned());

    let request = ConfirmRequest {
        title: "Import Configuration".to_owned(),
        body: format!(
            "Import configuration?\nVersion: {version}\nExported: {exported}\n\
             This will overwrite your current settings!"
        ),
    };
    if !dialogs.confirm(&request)? {
        return Ok(ImportOutcome::Cancelled);
    }

    let written = payload.apply_present(settings)?;
    Ok(ImportOutcome::Applied(written))
}

/// Calendar date of an RFC 3339 timestamp, or the raw text if it does not parse.
fn display_date(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| raw.to_owned())
}
