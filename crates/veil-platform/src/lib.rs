//! Host adapters for the Hotbar Veil ports: system clipboard, terminal
//! notifications and dialogs, stylesheet files, and platform directories.

pub mod clipboard;
pub mod dialogs;
pub mod notifications;
pub mod paths;
pub mod style_dir;

pub use clipboard::SystemClipboard;
pub use dialogs::TerminalDialogs;
pub use notifications::TerminalNotifier;
pub use paths::export_dir;
pub use style_dir::StyleDir;
