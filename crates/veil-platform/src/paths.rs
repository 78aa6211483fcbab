use std::path::PathBuf;

/// Default directory for exported configuration files.
///
/// The user's download directory when the platform has one, otherwise the
/// current directory.
pub fn export_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_dir_is_never_empty() {
        assert!(!export_dir().as_os_str().is_empty());
    }
}
