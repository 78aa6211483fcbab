
use serde_json::Value;
use tracing::{info, warn};

use veil_common::VeilError;
use veil_config::{snapshot_to_json, validation, SettingKey};

use super::{Ports, Session};

pub(super) fn show(session: &mut Session, ports: &mut Ports<'_>) -> Result<(), VeilError> {
    let snapshot = session.snapshot();
    writeln!(ports.out, "{}", snapshot_to_json(&snapshot))?;
    if let Some(active) = session.settings().active_preset() {
        writeln!(ports.out, "active preset: {active}")?;
    }
    Ok(())
}

/// Values parse as JSON; anything that does not is taken as a plain string.
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_owned()))
}

pub(super) fn set(session: &mut Session, name: &str, raw: &str) -> Result<(), VeilError> {
    let key = SettingKey::from_name(name)
        .ok_or_else(|| VeilError::Other(format!("unknown setting \"{name}\"")))?;
    let value = parse_value(raw);
    if !key.accepts(&value) {
        return Err(VeilError::Other(format!(
            "invalid value {value} for \"{key}\", expected a value shaped like {}",
            key.default_value()
        )));
    }
    session.settings().set(key, &value)?;
    info!(%key, %value, "setting updated");
    Ok(())
}

pub(super) fn check(session: &mut Session, ports: &mut Ports<'_>) -> Result<(), VeilError> {
    let snapshot = session.snapshot();
    for id in validation::unknown_sidebar_tabs(&snapshot) {
        warn!(tab = id, "hidden sidebar tab is not a known tab");
        writeln!(ports.out, "note: unknown sidebar tab \"{id}\"")?;
    }
    validation::validate(&snapshot)?;
    writeln!(ports.out, "settings OK")?;
    Ok(())
}
