//! The declarative stage registry.
//!
//! Every stage the assembler can emit is listed here once, with its gate as
//! a plain predicate over the options and the vendor profile. The assembler
//! filters this table instead of branching imperatively, so the full stage
//! set stays auditable and each gate is testable in isolation.

use std::path::Path;

use indexmap::IndexMap;
use wext_config::{BuildOptions, Vendor, VendorProfile};
use wext_manifest::{CompileParams, POLYFILL_SCRIPT};

use crate::metadata::ExtensionInfo;
use crate::plan::{ManifestSpec, Stage};

/// Everything a stage builder may need, resolved up front.
pub struct AssemblyContext<'a> {
    pub options: &'a BuildOptions,
    pub vendor: Vendor,
    pub source_dir: &'a Path,
    pub output_dir: &'a Path,
    pub package_dir: &'a Path,
    pub info: &'a ExtensionInfo,
}

/// One row of the registry: a gate plus a builder.
pub struct StageSpec {
    pub name: &'static str,
    pub enabled: fn(&BuildOptions, &VendorProfile) -> bool,
    pub build: fn(&AssemblyContext<'_>) -> Stage,
}

/// The ordered stage table. Order here is emission order.
pub const STAGES: &[StageSpec] = &[
    StageSpec {
        name: "clean",
        enabled: |_, _| true,
        build: |cx| Stage::Clean {
            dir: cx.output_dir.to_path_buf(),
        },
    },
    StageSpec {
        name: "case-sensitive-paths",
        enabled: |_, _| true,
        build: |_| Stage::CaseSensitivePaths,
    },
    StageSpec {
        name: "glob-rewatch",
        enabled: |_, _| true,
        build: |_| Stage::GlobRewatch,
    },
    StageSpec {
        name: "named-modules",
        enabled: |options, _| options.dev_mode,
        build: |_| Stage::NamedModules,
    },
    StageSpec {
        name: "provide-shim",
        enabled: |_, profile| profile.needs_compat_shim,
        build: |_| Stage::ProvideShim {
            binding: "browser".to_string(),
            script: POLYFILL_SCRIPT.to_string(),
        },
    },
    StageSpec {
        name: "define-env",
        enabled: |_, _| true,
        build: |cx| Stage::DefineEnv {
            defines: env_defines(cx),
        },
    },
    StageSpec {
        name: "copy-assets",
        enabled: |_, _| true,
        build: |cx| Stage::CopyAssets {
            from: cx.source_dir.to_path_buf(),
            to: cx.output_dir.to_path_buf(),
            ignore: cx.options.copy_ignore.clone(),
            manifest: ManifestSpec {
                source: cx.source_dir.join("manifest.json"),
                params: CompileParams {
                    vendor: cx.vendor,
                    auto_reload: cx.options.auto_reload,
                    name: cx.info.name.clone(),
                    version: cx.info.version.clone(),
                    description: cx.info.description.clone(),
                },
            },
        },
    },
    StageSpec {
        name: "minify",
        enabled: |options, _| !options.dev_mode,
        build: |_| Stage::Minify,
    },
    StageSpec {
        name: "package",
        enabled: |options, _| options.produce_package,
        build: |cx| Stage::Package {
            dir: cx.package_dir.to_path_buf(),
            filename: archive_filename(cx.info, cx.vendor),
        },
    },
];

/// Compile-time constants injected into every module.
fn env_defines(cx: &AssemblyContext<'_>) -> IndexMap<String, String> {
    let mut defines = IndexMap::new();
    defines.insert(
        "NODE_ENV".to_string(),
        if cx.options.dev_mode {
            "development".to_string()
        } else {
            "production".to_string()
        },
    );
    defines.insert("VENDOR".to_string(), cx.vendor.id().to_string());
    defines.insert(
        "WEXT_VERSION".to_string(),
        env!("CARGO_PKG_VERSION").to_string(),
    );
    defines
}

/// Archive name: `{name}.v{version}.{vendor}.{archive_ext}`.
pub fn archive_filename(info: &ExtensionInfo, vendor: Vendor) -> String {
    format!(
        "{}.v{}.{}.{}",
        info.name,
        info.version,
        vendor.id(),
        vendor.profile().archive_ext
    )
}
