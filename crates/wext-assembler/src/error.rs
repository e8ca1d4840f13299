//! Error types for plan assembly.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AssembleError>;

#[derive(Debug, Error)]
pub enum AssembleError {
    /// Unknown vendor or invalid option value. Raised before any filesystem
    /// access happens.
    #[error(transparent)]
    Config(#[from] wext_config::ConfigError),

    /// The extension descriptor (`package.json`) is absent or unreadable.
    #[error("missing extension metadata at {path}: {reason}")]
    MissingMetadata { path: PathBuf, reason: String },

    /// An entry or copy-ignore glob did not compile.
    #[error("invalid glob pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        source: globset::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
