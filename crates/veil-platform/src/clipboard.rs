use veil_common::{ClipboardSink, PlatformError};

/// System clipboard backed by `arboard`.
///
/// The handle is opened on first use so that headless sessions can still
/// construct one; the failure then surfaces from [`ClipboardSink::set_text`].
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard, PlatformError> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| PlatformError::ClipboardError(e.to_string()))?;
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| PlatformError::ClipboardError("clipboard unavailable".into()))
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), PlatformError> {
        self.handle()?
            .set_text(text.to_owned())
            .map_err(|e| PlatformError::ClipboardError(e.to_string()))
    }
}
