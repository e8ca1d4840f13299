//! Build options: the single input of one assembly run.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::vendor::Vendor;

fn default_source_dir() -> PathBuf {
    PathBuf::from("app")
}

fn default_output_dir() -> String {
    "build/[vendor]".to_string()
}

fn default_package_dir() -> String {
    "packages".to_string()
}

fn default_vendor() -> String {
    "chrome".to_string()
}

/// Default copy-ignore rules: code and manifest files are emitted by the
/// bundler itself, but locale JSON must still be copied verbatim.
pub fn default_copy_ignore() -> Vec<String> {
    vec![
        "**/*.js".to_string(),
        "**/*.json".to_string(),
        "!_locales/**/*.json".to_string(),
    ]
}

/// Options for one assembly run.
///
/// Constructed fresh per invocation (defaults merged with caller overrides)
/// and read-only afterwards. The vendor is kept as the raw user string and
/// validated as the first step of assembly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildOptions {
    /// Root of the extension source tree.
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    /// Output directory template; `[vendor]` expands to the vendor id.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Package directory template, same templating rule.
    #[serde(default = "default_package_dir")]
    pub package_dir: String,

    /// Development mode: gates the debug-naming stage and disables
    /// minification.
    #[serde(default)]
    pub dev_mode: bool,

    /// Ordered copy-ignore globs; a `!` prefix re-includes earlier matches.
    #[serde(default = "default_copy_ignore")]
    pub copy_ignore: Vec<String>,

    /// Inject the reload helper entry when the vendor supports it.
    #[serde(default)]
    pub auto_reload: bool,

    /// Source-map mode, passed through to the bundling engine unmodified.
    #[serde(default)]
    pub source_maps: Option<String>,

    /// Emit a store-ready archive after the build.
    #[serde(default)]
    pub produce_package: bool,

    /// Target vendor id; must name a registered vendor or assembly fails.
    #[serde(default = "default_vendor")]
    pub vendor: String,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            output_dir: default_output_dir(),
            package_dir: default_package_dir(),
            dev_mode: false,
            copy_ignore: default_copy_ignore(),
            auto_reload: false,
            source_maps: None,
            produce_package: false,
            vendor: default_vendor(),
        }
    }
}

impl BuildOptions {
    /// Create from `serde_json::Value` (for programmatic configuration).
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue(e.to_string()))
    }

    /// Convert to `serde_json::Value`.
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue(e.to_string()))
    }

    /// Validate the vendor string against the registry.
    pub fn validate_vendor(&self) -> Result<Vendor> {
        Vendor::parse(&self.vendor)
    }

    pub fn with_vendor(mut self, vendor: impl Into<String>) -> Self {
        self.vendor = vendor.into();
        self
    }

    pub fn with_source_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.source_dir = dir.into();
        self
    }

    pub fn with_dev_mode(mut self, dev: bool) -> Self {
        self.dev_mode = dev;
        self
    }

    pub fn with_auto_reload(mut self, auto_reload: bool) -> Self {
        self.auto_reload = auto_reload;
        self
    }

    pub fn with_package(mut self, produce: bool) -> Self {
        self.produce_package = produce;
        self
    }
}
