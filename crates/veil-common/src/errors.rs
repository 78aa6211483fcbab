#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("failed to read setting \"{key}\": {reason}")]
    StoreRead { key: String, reason: String },

    #[error("failed to write setting \"{key}\": {reason}")]
    StoreWrite { key: String, reason: String },

    #[error("config watch error: {0}")]
    WatchError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PresetError {
    #[error("preset name cannot be empty")]
    EmptyName,

    #[error("preset \"{0}\" already exists")]
    DuplicateName(String),

    #[error("preset \"{0}\" not found")]
    NotFound(String),

    #[error("cannot delete built-in preset \"{0}\"")]
    BuiltInProtected(String),

    #[error(transparent)]
    Store(#[from] ConfigError),
}

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("invalid configuration file format: {0}")]
    Format(String),

    #[error("invalid configuration code: {0}")]
    InvalidShareCode(String),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Store(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("clipboard error: {0}")]
    ClipboardError(String),

    #[error("dialog error: {0}")]
    DialogError(String),

    #[error("path error: {0}")]
    PathError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum VeilError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Preset(#[from] PresetError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
