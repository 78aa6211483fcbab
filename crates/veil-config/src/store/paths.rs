//! Store path resolution.

use std::path::PathBuf;
use veil_common::ConfigError;

/// Get the platform-specific default world store path.
///
/// On macOS: `~/Library/Application Support/veil/world.toml`
/// On Linux: `~/.config/veil/world.toml`
pub fn default_store_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("veil").join("world.toml"))
}
