//! The orchestrator: options in, build plan out.

use std::path::{Path, PathBuf};

use path_clean::PathClean;
use tracing::{debug, info};
use wext_config::{BuildOptions, Vendor, resolve_template};

use crate::entries::EntryDiscoverer;
use crate::error::Result;
use crate::ignore::IgnoreRules;
use crate::metadata::ExtensionInfo;
use crate::plan::{BuildPlan, TransformRule};
use crate::reload;
use crate::stages::{AssemblyContext, STAGES};

/// Globs the main entries are discovered with, relative to the source root.
/// Scripts live either at the top level or under `scripts/`.
pub const MAIN_ENTRY_GLOBS: &[&str] = &["*.js", "scripts/*.js"];

/// Build the entry discoverer for one assembly.
///
/// The reload helper entry is added only when auto-reload is requested and
/// the vendor supports injection; vendors without support silently skip it,
/// since auto-reload is a developer convenience rather than a requirement.
/// The same discoverer is re-invoked by the glob-rewatch stage in watch
/// mode.
pub fn discoverer(options: &BuildOptions, vendor: Vendor) -> EntryDiscoverer {
    let patterns = MAIN_ENTRY_GLOBS.iter().map(|g| (*g).to_string()).collect();

    let mut extra_entries = Vec::new();
    if options.auto_reload && vendor.profile().supports_auto_reload {
        extra_entries.push((reload::ENTRY_NAME.to_string(), reload::script_path()));
    }

    EntryDiscoverer::new(patterns, extra_entries)
}

/// Assemble a complete build plan from one set of options.
///
/// Steps run in a fixed order and any failure aborts the whole assembly; a
/// partial plan is never returned. The vendor gate runs first, before any
/// filesystem access.
pub fn assemble(options: &BuildOptions) -> Result<BuildPlan> {
    let vendor = options.validate_vendor()?;
    let profile = vendor.profile();

    let output_dir = resolve_template(&options.output_dir, vendor)?;
    let package_dir = resolve_template(&options.package_dir, vendor)?;
    let source_dir = absolutize(&options.source_dir)?;
    debug!(source = %source_dir.display(), output = %output_dir.display(), "resolved paths");

    let info = ExtensionInfo::read(&source_dir)?;

    // compile the ignore rules now so a bad glob fails the assembly, not
    // the copy stage later
    IgnoreRules::new(&options.copy_ignore)?;

    let entries = discoverer(options, vendor).discover(&source_dir)?;

    let transform_rules = vec![script_transform_rule(vendor)];

    let cx = AssemblyContext {
        options,
        vendor,
        source_dir: &source_dir,
        output_dir: &output_dir,
        package_dir: &package_dir,
        info: &info,
    };
    let stages = STAGES
        .iter()
        .filter(|spec| (spec.enabled)(options, profile))
        .map(|spec| (spec.build)(&cx))
        .collect();

    info!(
        vendor = %vendor,
        entries = entries.len(),
        dev = options.dev_mode,
        "assembled build plan"
    );

    Ok(BuildPlan {
        vendor,
        source_dir,
        output_dir,
        package_dir,
        source_maps: options.source_maps.clone(),
        entries,
        transform_rules,
        stages,
    })
}

/// The single transform rule: transpile scripts for the vendor's last two
/// releases, leaving third-party dependencies alone.
fn script_transform_rule(vendor: Vendor) -> TransformRule {
    TransformRule {
        test: "**/*.{js,jsx,mjs}".to_string(),
        exclude: vec!["node_modules/**".to_string()],
        browsers: vec![format!("last 2 {} versions", vendor.display_name())],
        cache: true,
    }
}

fn absolutize(path: &Path) -> Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };
    Ok(absolute.clean())
}
