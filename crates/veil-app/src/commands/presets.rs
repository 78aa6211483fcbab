
use veil_common::VeilError;
use veil_config::presets;

use super::{Ports, Session};
use crate::cli::PresetCommand;

pub(super) fn run(
    session: &mut Session,
    command: PresetCommand,
    ports: &mut Ports<'_>,
) -> Result<(), VeilError> {
    match command {
        PresetCommand::List => list(session, ports),
        PresetCommand::Save { name } => {
            let name = match name {
                Some(name) => name,
                None => match ports.dialogs.prompt("Save Preset", "Preset name")? {
                    Some(name) => name,
                    None => {
                        tracing::info!("preset save dismissed");
                        return Ok(());
                    }
                },
            };
            presets::save(&mut session.settings(), &name)?;
            Ok(())
        }
        PresetCommand::Load { name } => {
            presets::load(&mut session.settings(), &name)?;
            Ok(())
        }
        PresetCommand::Delete { name } => {
            presets::delete(&mut session.settings(), &name)?;
            Ok(())
        }
    }
}

/// One preset per line; `*` marks the active one.
fn list(session: &mut Session, ports: &mut Ports<'_>) -> Result<(), VeilError> {
    let mut settings = session.settings();
    let active = settings.active_preset();
    for preset in presets::list_all(&mut settings) {
        let marker = if active.as_deref() == Some(preset.name()) { '*' } else { ' ' };
        let kind = if preset.is_built_in() { "built-in" } else { "custom" };
        writeln!(ports.out, "{marker} {} ({kind})", preset.name())?;
    }
    Ok(())
}
