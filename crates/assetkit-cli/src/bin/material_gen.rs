//! material-gen - StandardPBR material generator for TIFF texture sets
//!
//! Texture files are expected as `{name}_{map}.tiff`, where `{map}` is one of
//! `ao`, `cavity`, `albedo`, `displacement`, `emissive`, `metalness`,
//! `normal` or `roughness`.

use std::process::ExitCode;

use assetkit_cli::commands;

fn main() -> ExitCode {
    match commands::material::run(std::env::args_os()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
