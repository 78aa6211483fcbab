use std::io::Write;
use tracing::{error, info, warn};
use veil_common::{NotificationLevel, Notifier};

/// Prints notifications as `[level] message` lines and mirrors them to the log.
pub struct TerminalNotifier<W: Write> {
    out: W,
}

impl TerminalNotifier<std::io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }
}

impl<W: Write> TerminalNotifier<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Notifier for TerminalNotifier<W> {
    fn notify(&mut self, level: NotificationLevel, message: &str) {
        match level {
            NotificationLevel::Info => info!(target: "veil::notify", "{message}"),
            NotificationLevel::Warning => warn!(target: "veil::notify", "{message}"),
            NotificationLevel::Error => error!(target: "veil::notify", "{message}"),
        }
        // A closed terminal is not worth failing the operation over.
        let _ = writeln!(self.out, "[{level}] {message}");
    }
}
