//! Logging setup for the wext CLI.
//!
//! Structured logging via the `tracing` ecosystem. Verbosity is resolved in
//! order: `--verbose` (debug for wext crates), `--quiet` (errors only), the
//! `RUST_LOG` environment variable, then an info-level default.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
///
/// Call once at startup, before any logging occurs.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("wext_cli=debug,wext_assembler=debug,wext_manifest=debug,wext_config=debug")
    } else if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("wext_cli=info,wext_assembler=info"))
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
