//! Extension metadata, read from the project descriptor.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AssembleError, Result};

/// Name of the descriptor file expected under the source directory.
pub const DESCRIPTOR_FILE: &str = "package.json";

/// The descriptor fields the assembler consumes.
///
/// Read exactly once per assembly run; immutable afterwards. `name` and
/// `version` are required (the package stage and the manifest compiler need
/// them), `description` is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtensionInfo {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl ExtensionInfo {
    /// Read `package.json` directly under `source_dir`.
    pub fn read(source_dir: &Path) -> Result<Self> {
        let path = source_dir.join(DESCRIPTOR_FILE);

        let raw = std::fs::read_to_string(&path).map_err(|e| AssembleError::MissingMetadata {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&raw).map_err(|e| AssembleError::MissingMetadata {
            path,
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_descriptor_fields() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("package.json"),
            r#"{"name": "foo", "version": "0.1.0", "description": "bar", "scripts": {}}"#,
        )
        .unwrap();

        let info = ExtensionInfo::read(dir.path()).unwrap();
        assert_eq!(info.name, "foo");
        assert_eq!(info.version, "0.1.0");
        assert_eq!(info.description.as_deref(), Some("bar"));
    }

    #[test]
    fn missing_descriptor_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = ExtensionInfo::read(dir.path()).unwrap_err();
        assert!(matches!(err, AssembleError::MissingMetadata { .. }));
    }

    #[test]
    fn descriptor_without_version_fails() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("package.json"), r#"{"name": "foo"}"#).unwrap();

        let err = ExtensionInfo::read(dir.path()).unwrap_err();
        assert!(matches!(err, AssembleError::MissingMetadata { .. }));
    }
}
