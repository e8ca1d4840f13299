//! The assembled build plan handed to the bundling engine.
//!
//! Stages are descriptors, not behavior: each names its external
//! collaborator and carries its fully resolved parameters. Once the plan is
//! returned it is final and owned by the engine.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Serialize;
use wext_config::Vendor;
use wext_manifest::CompileParams;

use crate::entries::EntryMap;

/// A single module-transform rule.
#[derive(Debug, Clone, Serialize)]
pub struct TransformRule {
    /// Glob the rule applies to.
    pub test: String,
    /// Globs excluded from transformation.
    pub exclude: Vec<String>,
    /// Browserslist queries for the transpile target.
    pub browsers: Vec<String>,
    /// Cache transform results across rebuilds.
    pub cache: bool,
}

/// Manifest compilation request bound to the copy stage.
///
/// Compilation runs lazily, at copy-stage execution time; parse errors in
/// the manifest therefore surface there, not during assembly.
#[derive(Debug, Clone, Serialize)]
pub struct ManifestSpec {
    /// Path of the raw `manifest.json`.
    pub source: PathBuf,
    /// Resolved compiler parameters.
    pub params: CompileParams,
}

/// One build-stage descriptor.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "stage", rename_all = "kebab-case")]
pub enum Stage {
    /// Clear the output directory before emitting.
    Clean { dir: PathBuf },
    /// Error on path references whose casing differs from disk.
    CaseSensitivePaths,
    /// Re-run entry discovery when the watched file set changes.
    GlobRewatch,
    /// Name modules for browser profilers (dev aid).
    NamedModules,
    /// Provide the `browser` compatibility shim to every module.
    ProvideShim { binding: String, script: String },
    /// Inject compile-time environment constants.
    DefineEnv { defines: IndexMap<String, String> },
    /// Copy non-code assets and compile the manifest.
    CopyAssets {
        from: PathBuf,
        to: PathBuf,
        ignore: Vec<String>,
        manifest: ManifestSpec,
    },
    /// Minify emitted bundles.
    Minify,
    /// Archive the finished build for the vendor's store.
    Package { dir: PathBuf, filename: String },
}

impl Stage {
    /// Stable stage name, matching the serialized `stage` tag.
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Clean { .. } => "clean",
            Stage::CaseSensitivePaths => "case-sensitive-paths",
            Stage::GlobRewatch => "glob-rewatch",
            Stage::NamedModules => "named-modules",
            Stage::ProvideShim { .. } => "provide-shim",
            Stage::DefineEnv { .. } => "define-env",
            Stage::CopyAssets { .. } => "copy-assets",
            Stage::Minify => "minify",
            Stage::Package { .. } => "package",
        }
    }
}

/// The fully resolved build plan.
#[derive(Debug, Clone, Serialize)]
pub struct BuildPlan {
    pub vendor: Vendor,
    /// Absolute source root.
    pub source_dir: PathBuf,
    /// Resolved output directory (template already expanded).
    pub output_dir: PathBuf,
    /// Resolved package directory.
    pub package_dir: PathBuf,
    /// Source-map mode, passed through unmodified.
    pub source_maps: Option<String>,
    /// Logical entry name -> absolute source path.
    pub entries: EntryMap,
    /// Ordered module-transform rules.
    pub transform_rules: Vec<TransformRule>,
    /// Ordered plugin-stage descriptors.
    pub stages: Vec<Stage>,
}

impl BuildPlan {
    /// Look up a stage descriptor by name.
    pub fn stage(&self, name: &str) -> Option<&Stage> {
        self.stages.iter().find(|stage| stage.name() == name)
    }

    pub fn has_stage(&self, name: &str) -> bool {
        self.stage(name).is_some()
    }
}
