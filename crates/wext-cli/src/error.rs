//! Error handling for the wext CLI.
//!
//! Domain errors convert automatically via `#[from]`; the top of `main`
//! renders them through miette for readable terminal output.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Plan assembly failed (unknown vendor, missing metadata, bad globs).
    #[error(transparent)]
    Assemble(#[from] wext_assembler::AssembleError),

    /// Manifest compilation failed.
    #[error(transparent)]
    Manifest(#[from] wext_manifest::ManifestError),

    /// Option validation failed.
    #[error(transparent)]
    Config(#[from] wext_config::ConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convert a CLI error into a miette report for terminal rendering.
pub fn cli_error_to_miette(err: CliError) -> miette::Report {
    miette::Report::msg(err.to_string())
}
