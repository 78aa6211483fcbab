//! Subcommand handlers. Each one opens settings through the [`Session`]
//! and reports through its notifier; output meant for pipes goes to
//! [`Ports::out`].

mod presets;
mod settings;
mod style;
mod transfer;

#[cfg(test)]
mod tests;

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use veil_common::{ClipboardSink, Dialogs, EventBus, Notifier, VeilError, Viewer};
use veil_config::{FileStore, PreferenceSnapshot, Settings};

use crate::cli::Command;

/// The world being edited and who is looking at it.
pub struct Session {
    store: FileStore,
    notifier: Box<dyn Notifier>,
    bus: Arc<EventBus>,
    viewer: Viewer,
}

impl Session {
    pub fn open(path: &Path, viewer: Viewer, notifier: Box<dyn Notifier>) -> Result<Self, VeilError> {
        let bus = Arc::new(EventBus::default());
        let store = FileStore::open(path)?.with_events(bus.clone());
        tracing::info!(world = %path.display(), viewer = %viewer, "session opened");
        Ok(Self {
            store,
            notifier,
            bus,
            viewer,
        })
    }

    pub fn settings(&mut self) -> Settings<'_> {
        Settings::new(&mut self.store, self.notifier.as_mut())
    }

    pub fn snapshot(&mut self) -> PreferenceSnapshot {
        self.settings().snapshot()
    }

    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }
}

/// Interactive and output capabilities handed to the handlers.
pub struct Ports<'a> {
    pub out: &'a mut dyn Write,
    pub dialogs: &'a mut dyn Dialogs,
    pub clipboard: &'a mut dyn ClipboardSink,
}

pub fn run(session: &mut Session, command: Command, ports: &mut Ports<'_>) -> Result<(), VeilError> {
    match command {
        Command::Compile(args) => style::compile(session, &args, ports),
        Command::Watch(args) => style::watch(session, &args, ports),
        Command::Show => settings::show(session, ports),
        Command::Set { name, value } => settings::set(session, &name, &value),
        Command::Check => settings::check(session, ports),
        Command::Preset(command) => presets::run(session, command, ports),
        Command::Export { dir } => transfer::export(session, dir, ports),
        Command::Import { file } => transfer::import(session, &file, ports),
        Command::Share => transfer::share(session, ports),
        Command::LoadShared { code } => transfer::load_shared(session, &code),
    }
}
