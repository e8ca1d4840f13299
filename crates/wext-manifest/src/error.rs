//! Error types for manifest compilation.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ManifestError>;

#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest is not valid JSON (or not a JSON object at the root).
    #[error("manifest parse error: {0}")]
    Parse(String),

    /// A vendor-required structural edit could not be applied without
    /// producing an invalid document.
    #[error("manifest transform error: {0}")]
    Transform(String),
}
