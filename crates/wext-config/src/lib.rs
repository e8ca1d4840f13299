//! Configuration foundation for the wext toolbox.
//!
//! This crate holds the types every other wext crate builds on: the
//! [`BuildOptions`] input struct, the closed [`Vendor`] registry with its
//! per-vendor capability facts, and the `[vendor]` path templater.

pub mod error;
pub mod options;
pub mod paths;
pub mod vendor;

// Re-export main types
pub use error::{ConfigError, Result};
pub use options::{BuildOptions, default_copy_ignore};
pub use paths::resolve_template;
pub use vendor::{Vendor, VendorProfile};
