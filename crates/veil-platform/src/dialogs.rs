use std::io::{BufRead, Write};
use veil_common::{ConfirmRequest, Dialogs, PlatformError};

/// Line-based dialogs on a terminal.
///
/// With `assume_yes` every confirmation is accepted without reading input.
pub struct TerminalDialogs<R: BufRead, W: Write> {
    input: R,
    output: W,
    assume_yes: bool,
}

impl TerminalDialogs<std::io::StdinLock<'static>, std::io::Stderr> {
    pub fn stdio(assume_yes: bool) -> Self {
        Self::new(std::io::stdin().lock(), std::io::stderr(), assume_yes)
    }
}

impl<R: BufRead, W: Write> TerminalDialogs<R, W> {
    pub fn new(input: R, output: W, assume_yes: bool) -> Self {
        Self {
            input,
            output,
            assume_yes,
        }
    }

    fn read_line(&mut self) -> Result<Option<String>, PlatformError> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| PlatformError::DialogError(format!("failed to read answer: {e}")))?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    fn write(&mut self, text: &str) -> Result<(), PlatformError> {
        write!(self.output, "{text}")
            .and_then(|()| self.output.flush())
            .map_err(|e| PlatformError::DialogError(format!("failed to write prompt: {e}")))
    }
}

impl<R: BufRead, W: Write> Dialogs for TerminalDialogs<R, W> {
    fn confirm(&mut self, request: &ConfirmRequest) -> Result<bool, PlatformError> {
        if self.assume_yes {
            return Ok(true);
        }
        self.write(&format!("{}\n{}\n[y/N] ", request.title, request.body))?;
        let answer = self.read_line()?.unwrap_or_default();
        Ok(matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"))
    }

    fn prompt(&mut self, title: &str, placeholder: &str) -> Result<Option<String>, PlatformError> {
        self.write(&format!("{title} ({placeholder}): "))?;
        Ok(self.read_line()?.filter(|answer| !answer.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn request() -> ConfirmRequest {
        ConfirmRequest {
            title: "Import Configuration".into(),
            body: "Version: 2.0.4".into(),
        }
    }

    #[test]
    fn confirm_accepts_yes() {
        let mut dialogs = TerminalDialogs::new(Cursor::new("Yes\n"), Vec::new(), false);
        assert!(dialogs.confirm(&request()).unwrap());
    }

    #[test]
    fn confirm_defaults_to_no() {
        let mut dialogs = TerminalDialogs::new(Cursor::new("\n"), Vec::new(), false);
        assert!(!dialogs.confirm(&request()).unwrap());

        let mut dialogs = TerminalDialogs::new(Cursor::new(""), Vec::new(), false);
        assert!(!dialogs.confirm(&request()).unwrap());
    }

    #[test]
    fn confirm_shows_title_and_body() {
        let mut out = Vec::new();
        TerminalDialogs::new(Cursor::new("n\n"), &mut out, false)
            .confirm(&request())
            .unwrap();
        let shown = String::from_utf8(out).unwrap();
        assert!(shown.starts_with("Import Configuration\nVersion: 2.0.4\n"));
    }

    #[test]
    fn assume_yes_skips_input() {
        let mut dialogs = TerminalDialogs::new(Cursor::new(""), Vec::new(), true);
        assert!(dialogs.confirm(&request()).unwrap());
    }

    #[test]
    fn prompt_returns_trimmed_text_or_none() {
        let mut dialogs = TerminalDialogs::new(Cursor::new("  Boss Fight \n\n"), Vec::new(), false);
        assert_eq!(
            dialogs.prompt("Save Preset", "Preset name").unwrap().as_deref(),
            Some("Boss Fight")
        );
        assert_eq!(dialogs.prompt("Save Preset", "Preset name").unwrap(), None);
    }
}
