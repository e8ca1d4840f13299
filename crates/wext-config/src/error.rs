//! Error types for option parsing and vendor validation.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown vendor: {0} (expected chrome, firefox, opera or edge)")]
    UnknownVendor(String),

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
