//! The auto-reload helper entry.
//!
//! The helper ships as a crate asset and is injected as an additional fixed
//! entry when the build asks for auto-reload and the vendor supports it. The
//! transport itself is opaque to the assembler.

use std::path::{Path, PathBuf};

/// Logical entry name of the helper; the bundler emits it as
/// `auto-reload.js`, which is what the manifest compiler wires up.
pub const ENTRY_NAME: &str = "auto-reload";

/// The helper script source, embedded at build time.
pub const SCRIPT_SOURCE: &str = include_str!("../assets/auto-reload.js");

/// On-disk location of the shipped helper script.
pub fn script_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/auto-reload.js")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_script_exists_and_matches_embedded_source() {
        let on_disk = std::fs::read_to_string(script_path()).unwrap();
        assert_eq!(on_disk, SCRIPT_SOURCE);
    }
}
