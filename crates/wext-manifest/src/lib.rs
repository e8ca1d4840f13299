//! Vendor-aware `manifest.json` compilation.
//!
//! The compiler is invoked lazily by the copy stage of an assembled build
//! plan, once per (re)build. See [`compile`] for the full algorithm.

pub mod compile;
pub mod error;

pub use compile::{CompileParams, POLYFILL_SCRIPT, RELOAD_SCRIPT, compile};
pub use error::{ManifestError, Result};
