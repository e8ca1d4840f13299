//! The `wext manifest` command.
//!
//! Compiles one manifest document for one vendor and prints the result to
//! stdout. Metadata defaults come from the `package.json` next to the
//! manifest, matching what the copy stage binds during a full build.

use std::path::Path;

use wext_assembler::ExtensionInfo;
use wext_config::Vendor;
use wext_manifest::CompileParams;

use crate::cli::ManifestArgs;
use crate::error::Result;

pub fn execute(args: ManifestArgs) -> Result<()> {
    let vendor = Vendor::parse(&args.vendor)?;

    let raw = std::fs::read_to_string(&args.manifest)?;
    let source_dir = args.manifest.parent().unwrap_or_else(|| Path::new("."));
    let info = ExtensionInfo::read(source_dir)?;

    let compiled = wext_manifest::compile(
        &raw,
        &CompileParams {
            vendor,
            auto_reload: args.auto_reload,
            name: info.name,
            version: info.version,
            description: info.description,
        },
    )?;

    println!("{compiled}");
    Ok(())
}
