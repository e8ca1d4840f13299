//! Command implementations.

mod build;
mod manifest;

pub use build::execute as build_execute;
pub use manifest::execute as manifest_execute;
