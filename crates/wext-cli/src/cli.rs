//! Command-line interface definition.
//!
//! Defined with clap v4 derive macros, mirroring the options table of the
//! assembler: `wext build` assembles (and prints) a build plan, `wext
//! manifest` compiles a single manifest document standalone.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// wext - build-configuration assembler for browser extensions
#[derive(Parser, Debug)]
#[command(
    name = "wext",
    version,
    about = "Assemble vendor-aware build plans for browser extensions",
    long_about = "wext turns an extension source directory and a handful of flags\n\
                  into a complete, vendor-correct bundler configuration: entry\n\
                  points, transform rules, ordered build stages and a compiled\n\
                  manifest."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Assemble the build plan for an extension source tree
    Build(BuildArgs),
    /// Compile a manifest document for one vendor
    Manifest(ManifestArgs),
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Extension source directory
    #[arg(default_value = "app")]
    pub source_dir: PathBuf,

    /// Target vendor (chrome, firefox, opera, edge)
    #[arg(long, default_value = "chrome")]
    pub vendor: String,

    /// Output directory template; `[vendor]` expands to the vendor id
    #[arg(long, default_value = "build/[vendor]")]
    pub output_dir: String,

    /// Package directory template
    #[arg(long, default_value = "packages")]
    pub package_dir: String,

    /// Development mode (debug naming on, minification off)
    #[arg(long)]
    pub dev: bool,

    /// Inject the auto-reload helper (vendors that support it only)
    #[arg(long)]
    pub auto_reload: bool,

    /// Source-map mode passed through to the bundling engine
    #[arg(long)]
    pub source_maps: Option<String>,

    /// Produce a store-ready archive
    #[arg(long)]
    pub pack: bool,

    /// Copy-ignore globs; prefix with `!` to re-include
    #[arg(long = "copy-ignore")]
    pub copy_ignore: Vec<String>,

    /// Print the assembled plan as JSON to stdout
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ManifestArgs {
    /// Path to the raw manifest.json
    pub manifest: PathBuf,

    /// Target vendor (chrome, firefox, opera, edge)
    #[arg(long, default_value = "chrome")]
    pub vendor: String,

    /// Wire up the auto-reload helper script
    #[arg(long)]
    pub auto_reload: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_defaults_match_options_table() {
        let cli = Cli::parse_from(["wext", "build"]);
        let Command::Build(args) = cli.command else {
            panic!("expected build command");
        };
        assert_eq!(args.source_dir, PathBuf::from("app"));
        assert_eq!(args.vendor, "chrome");
        assert_eq!(args.output_dir, "build/[vendor]");
        assert_eq!(args.package_dir, "packages");
        assert!(!args.dev);
        assert!(!args.auto_reload);
        assert!(!args.pack);
        assert!(args.copy_ignore.is_empty());
    }

    #[test]
    fn build_flags_parse() {
        let cli = Cli::parse_from([
            "wext",
            "build",
            "src",
            "--vendor",
            "firefox",
            "--dev",
            "--pack",
            "--copy-ignore",
            "**/*.json",
            "--copy-ignore",
            "!_locales/**/*.json",
        ]);
        let Command::Build(args) = cli.command else {
            panic!("expected build command");
        };
        assert_eq!(args.source_dir, PathBuf::from("src"));
        assert_eq!(args.vendor, "firefox");
        assert!(args.dev);
        assert!(args.pack);
        assert_eq!(args.copy_ignore.len(), 2);
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["wext", "-v", "-q", "build"]).is_err());
    }

    #[test]
    fn manifest_command_parses() {
        let cli = Cli::parse_from(["wext", "manifest", "app/manifest.json", "--vendor", "opera"]);
        let Command::Manifest(args) = cli.command else {
            panic!("expected manifest command");
        };
        assert_eq!(args.manifest, PathBuf::from("app/manifest.json"));
        assert_eq!(args.vendor, "opera");
    }
}
