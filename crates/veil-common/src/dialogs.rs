//! Interactive confirmation and text-prompt port.
//!
//! The host application owns the actual dialog windows; business logic only
//! sees this trait so it can be driven by a terminal, a test script, or a UI.

use crate::errors::PlatformError;

/// A yes/no question shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmRequest {
    pub title: String,
    pub body: String,
}

pub trait Dialogs {
    /// Ask the user to confirm an action. `Ok(false)` means declined.
    fn confirm(&mut self, request: &ConfirmRequest) -> Result<bool, PlatformError>;

    /// Ask the user for a line of text. `Ok(None)` means the prompt was dismissed.
    fn prompt(&mut self, title: &str, placeholder: &str) -> Result<Option<String>, PlatformError>;
}

/// Scripted dialogs that answer from fixed values. Records every request.
#[derive(Debug, Default)]
pub struct ScriptedDialogs {
    pub confirm_answer: bool,
    pub prompt_answer: Option<String>,
    pub confirms: Vec<ConfirmRequest>,
}

impl ScriptedDialogs {
    pub fn accepting() -> Self {
        Self {
            confirm_answer: true,
            ..Default::default()
        }
    }

    pub fn declining() -> Self {
        Self::default()
    }
}

impl Dialogs for ScriptedDialogs {
    fn confirm(&mut self, request: &ConfirmRequest) -> Result<bool, PlatformError> {
        self.confirms.push(request.clone());
        Ok(self.confirm_answer)
    }

    fn prompt(&mut self, _title: &str, _placeholder: &str) -> Result<Option<String>, PlatformError> {
        Ok(self.prompt_answer.clone())
    }
}
