use std::path::PathBuf;
use tracing::debug;
use veil_common::PlatformError;
use veil_style::StyleTarget;

/// Writes each style element to `<dir>/<id>.css`, for hosts that load
/// stylesheets from disk.
pub struct StyleDir {
    dir: PathBuf,
}

impl StyleDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.css"))
    }
}

impl StyleTarget for StyleDir {
    fn replace_style(&mut self, id: &str, css: &str) -> Result<(), PlatformError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            PlatformError::PathError(format!("failed to create {}: {e}", self.dir.display()))
        })?;
        let path = self.path_for(id);
        std::fs::write(&path, css)
            .map_err(|e| PlatformError::PathError(format!("failed to write {}: {e}", path.display())))?;
        debug!(path = %path.display(), bytes = css.len(), "stylesheet written");
        Ok(())
    }
}
