
use std::path::{Path, PathBuf};

use chrono::Utc;
use veil_common::VeilError;
use veil_config::{codec, ImportOutcome};
use veil_platform::export_dir;

use super::{Ports, Session};

pub(super) fn export(
    session: &mut Session,
    dir: Option<PathBuf>,
    ports: &mut Ports<'_>,
) -> Result<(), VeilError> {
    let dir = dir.unwrap_or_else(export_dir);
    let path = codec::export_to_dir(&mut session.settings(), &dir, Utc::now())?;
    writeln!(ports.out, "{}", path.display())?;
    Ok(())
}

pub(super) fn import(session: &mut Session, file: &Path, ports: &mut Ports<'_>) -> Result<(), VeilError> {
    let json = match std::fs::read_to_string(file) {
        Ok(json) => json,
        Err(e) => {
            session
                .settings()
                .notifier()
                .error("Error importing configuration! Check console for details.");
            return Err(e.into());
        }
    };

    match codec::import_configuration(&mut session.settings(), ports.dialogs, &json)? {
        ImportOutcome::Applied(count) => writeln!(ports.out, "imported {count} settings")?,
        ImportOutcome::Cancelled => writeln!(ports.out, "import cancelled")?,
    }
    Ok(())
}

pub(super) fn share(session: &mut Session, ports: &mut Ports<'_>) -> Result<(), VeilError> {
    let code = codec::share_configuration(&mut session.settings(), ports.clipboard)?;
    writeln!(ports.out, "{code}")?;
    Ok(())
}

pub(super) fn load_shared(session: &mut Session, code: &str) -> Result<(), VeilError> {
    codec::load_shared_configuration(&mut session.settings(), code)?;
    Ok(())
}
