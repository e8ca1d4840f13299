//! wext CLI library.
//!
//! The binary in `main.rs` is a thin shell over these modules so that
//! argument mapping and command logic stay unit-testable.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;
