//! lod-gen - Level-Of-Detail generator driving Blender headless

use std::process::ExitCode;

use clap::Parser;

use assetkit_cli::cli_args::LodCli;
use assetkit_cli::commands;

fn main() -> ExitCode {
    let cli = LodCli::parse();

    match commands::lod::run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
