//! Material command implementation
//!
//! Builds a StandardPBR `.material` file from a texture set, optionally
//! renaming the texture set first.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use colored::Colorize;

use assetkit_material::naming::texture_file_name;
use assetkit_material::{build, BuildConfig, BuildReport, MaterialError, RenameOutcome};

use crate::cli_args::{has_options, MaterialCli};
use crate::console::Console;

const BANNER: &str = "AssetKit Material Generator";

/// How a material command invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Usage was printed.
    Help,
    /// The arguments were rejected.
    InvalidArguments,
    /// The material file was written.
    Built,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Help | Outcome::Built => ExitCode::SUCCESS,
            Outcome::InvalidArguments => ExitCode::from(1),
        }
    }
}

/// Run the material command
///
/// # Arguments
/// * `args` - Full argument list, program name first
///
/// # Returns
/// Exit code: 0 success or help, 1 invalid arguments
pub fn run<I, T>(args: I) -> Result<ExitCode>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    execute(args).map(Outcome::exit_code)
}

/// Parses the arguments and builds the material.
pub fn execute<I, T>(args: I) -> Result<Outcome>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    if !has_options(&args) {
        print_usage(true);
        return Ok(Outcome::Help);
    }

    let cli = match MaterialCli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) => {
            return match e.kind() {
                ErrorKind::DisplayHelp => {
                    print_usage(true);
                    Ok(Outcome::Help)
                }
                ErrorKind::DisplayVersion => {
                    print!("{}", e);
                    Ok(Outcome::Help)
                }
                _ => {
                    print_invalid_arguments();
                    eprint!("{}", e.render());
                    Ok(Outcome::InvalidArguments)
                }
            };
        }
    };

    let input = match cli.input.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => {
            print_invalid_arguments();
            eprintln!("The input texture base name (-f) is required.\n");
            print_usage(false);
            return Ok(Outcome::InvalidArguments);
        }
    };

    let textures_dir = match cli.textures_dir.as_deref() {
        Some(dir) => PathBuf::from(dir),
        None => std::env::current_dir().context("Failed to resolve the current directory")?,
    };

    let config = BuildConfig::builder(input)
        .output_name(cli.output.clone())
        .textures_dir(textures_dir)
        .assets_root(cli.assets_root.clone())
        .maps(cli.selection())
        .build()?;

    let console = Console::new(cli.verbose);
    console.verbose(0, "Building material file...");

    let report = build(&config).map_err(|e| build_error(e, &config))?;

    print_report(&console, &report, &config);
    console.verbose(0, "Material file build process complete.");

    if console.is_verbose() {
        println!(
            "{} {} ({} map(s))",
            "Wrote".green().bold(),
            report.material_path.display(),
            report.document.property_values.len()
        );
    }

    Ok(Outcome::Built)
}

/// Wraps a build failure with its stable code, e.g. `[MATERIAL_002]`.
fn build_error(err: MaterialError, config: &BuildConfig) -> anyhow::Error {
    let code = err.code();
    anyhow::Error::new(err).context(format!(
        "[{}] Failed to build material for '{}'",
        code,
        config.input_name()
    ))
}

fn print_report(console: &Console, report: &BuildReport, config: &BuildConfig) {
    match &report.rename {
        RenameOutcome::Skipped => console.verbose(1, "Skipping texture files renaming."),
        RenameOutcome::Renamed {
            renamed,
            diagnostics,
        } => {
            console.verbose(1, "Renaming texture files...");
            for diagnostic in diagnostics {
                console.error(1, diagnostic);
            }
            for kind in renamed {
                let suffix = kind.entry().suffix;
                console.verbose(
                    2,
                    format!(
                        "{} -> {}",
                        texture_file_name(config.input_name(), suffix),
                        texture_file_name(config.output_name(), suffix)
                    ),
                );
            }
            console.verbose(1, "Texture files renamed.");
        }
    }

    for diagnostic in &report.assembly_diagnostics {
        console.error(1, diagnostic);
    }
}

fn print_usage(with_banner: bool) {
    if with_banner {
        println!("{}\n", BANNER.cyan().bold());
    }
    println!("{}", MaterialCli::command().render_help());
}

fn print_invalid_arguments() {
    eprintln!("{}\n", "Invalid arguments passed to the script.".red().bold());
}
