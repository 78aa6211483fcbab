pub mod clipboard;
pub mod dialogs;
pub mod errors;
pub mod events;
pub mod notifications;
pub mod types;

pub use clipboard::{ClipboardSink, MemoryClipboard};
pub use dialogs::{ConfirmRequest, Dialogs, ScriptedDialogs};
pub use errors::{CodecError, ConfigError, PlatformError, PresetError, VeilError};
pub use events::{Event, EventBus};
pub use notifications::{Notification, NotificationLevel, NotificationQueue, Notifier};
pub use types::Viewer;

pub type Result<T> = std::result::Result<T, VeilError>;
