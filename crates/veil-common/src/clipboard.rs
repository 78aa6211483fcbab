use crate::errors::PlatformError;

/// Destination for share codes.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), PlatformError>;
}

/// Clipboard that keeps the last written text in memory.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), PlatformError> {
        self.contents = Some(text.to_owned());
        Ok(())
    }
}
