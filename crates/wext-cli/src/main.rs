//! wext - build-configuration assembler for browser extensions.
//!
//! Entry point: argument parsing, logging setup, command dispatch.

use clap::Parser;
use miette::Result;
use wext_cli::{cli, commands, error, logger};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);

    let result = match args.command {
        cli::Command::Build(build_args) => commands::build_execute(build_args),
        cli::Command::Manifest(manifest_args) => commands::manifest_execute(manifest_args),
    };

    result.map_err(error::cli_error_to_miette)
}
