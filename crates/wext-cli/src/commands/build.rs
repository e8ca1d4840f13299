//! The `wext build` command.
//!
//! Assembles the build plan and either prints it as JSON (`--json`) or as a
//! readable summary. Executing the plan is the bundling engine's job; this
//! command is the decision procedure in front of it.

use tracing::debug;
use wext_assembler::{Stage, assemble};
use wext_config::{BuildOptions, default_copy_ignore};

use crate::cli::BuildArgs;
use crate::error::Result;
use crate::ui;

pub fn execute(args: BuildArgs) -> Result<()> {
    let options = options_from_args(&args);
    debug!(vendor = %options.vendor, dev = options.dev_mode, "assembling build plan");

    let plan = assemble(&options)?;

    if options.auto_reload && !plan.vendor.profile().supports_auto_reload {
        ui::warning(&format!(
            "{} does not support auto-reload injection, skipping",
            plan.vendor
        ));
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    ui::info(&format!("Vendor: {}", plan.vendor));
    ui::info(&format!("Output: {}", plan.output_dir.display()));
    ui::info(&format!("Entries ({}):", plan.entries.len()));
    for (name, path) in &plan.entries {
        ui::info(&format!("  {} <- {}", name, path.display()));
    }
    ui::info(&format!(
        "Stages: {}",
        plan.stages
            .iter()
            .map(Stage::name)
            .collect::<Vec<_>>()
            .join(" -> ")
    ));
    if let Some(Stage::Package { filename, .. }) = plan.stage("package") {
        ui::info(&format!("Package: {}", filename));
    }
    ui::success("Build plan assembled");

    Ok(())
}

fn options_from_args(args: &BuildArgs) -> BuildOptions {
    let copy_ignore = if args.copy_ignore.is_empty() {
        default_copy_ignore()
    } else {
        args.copy_ignore.clone()
    };

    BuildOptions {
        source_dir: args.source_dir.clone(),
        output_dir: args.output_dir.clone(),
        package_dir: args.package_dir.clone(),
        dev_mode: args.dev,
        copy_ignore,
        auto_reload: args.auto_reload,
        source_maps: args.source_maps.clone(),
        produce_package: args.pack,
        vendor: args.vendor.clone(),
    }
}
