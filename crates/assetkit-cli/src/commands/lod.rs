//! LOD command implementation
//!
//! Generates a decimated Level-Of-Detail copy of a mesh object in a Blender
//! scene by running Blender headless.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;

use assetkit_blender::{
    generate, lod_object_name, plan_job, BlenderResult, DecimateRatio, LodJob, LodLevel,
    LodReport, LodRequest, OrchestratorConfig,
};

use crate::cli_args::LodCli;

/// Run the LOD command
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(cli: &LodCli) -> Result<ExitCode> {
    if cli.json {
        return run_json(cli);
    }

    let request = request_from_args(cli)?;

    if cli.dry_run {
        let job = plan_job(&request)?;
        println!("{}", job.to_json()?);
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{} {} from {} in {}",
        "Generating:".cyan().bold(),
        lod_object_name(&request.object, request.level),
        request.object,
        request.scene.display()
    );

    let result = generate(&request, orchestrator_config(cli))
        .with_context(|| format!("Failed to generate LOD for '{}'", request.object))?;

    print_summary(&result.report);
    Ok(ExitCode::SUCCESS)
}

/// Machine-readable mode: every outcome, including argument errors, is a
/// JSON report on stdout.
fn run_json(cli: &LodCli) -> Result<ExitCode> {
    let outcome = validate(cli).and_then(|request| {
        if cli.dry_run {
            return plan_job(&request).map(JsonOutput::Job);
        }
        generate(&request, orchestrator_config(cli)).map(|result| JsonOutput::Report(result.report))
    });

    let (json, code) = match outcome {
        Ok(JsonOutput::Job(job)) => (job.to_json()?, ExitCode::SUCCESS),
        Ok(JsonOutput::Report(report)) => (to_pretty(&report)?, ExitCode::SUCCESS),
        Err(e) => (to_pretty(&LodReport::from_error(&e))?, ExitCode::from(1)),
    };

    println!("{}", json);
    Ok(code)
}

enum JsonOutput {
    Job(LodJob),
    Report(LodReport),
}

fn to_pretty(report: &LodReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize report")
}

fn orchestrator_config(cli: &LodCli) -> OrchestratorConfig {
    let config = OrchestratorConfig::default().timeout_secs(cli.timeout);
    match cli.blender {
        Some(ref blender) => config.blender_path(blender),
        None => config,
    }
}

fn validate(cli: &LodCli) -> BlenderResult<LodRequest> {
    let mut request = LodRequest::new(&cli.scene, &cli.object);
    request.level = LodLevel::try_from(cli.level)?;
    request.ratio = DecimateRatio::try_from(cli.ratio)?;
    request.output = cli.output.as_ref().map(PathBuf::from);
    Ok(request)
}

/// Validates the LOD arguments into a request.
pub fn request_from_args(cli: &LodCli) -> Result<LodRequest> {
    Ok(validate(cli)?)
}

fn print_summary(report: &LodReport) {
    println!(
        "{} {}",
        "SUCCESS".green().bold(),
        report.lod_object.as_deref().unwrap_or("LOD generated")
    );

    if let (Some(source), Some(lod)) = (report.source_triangles, report.lod_triangles) {
        let kept = report.reduction().unwrap_or(1.0) * 100.0;
        println!("  Triangles: {} -> {} ({:.1}%)", source, lod, kept);
    }

    if let Some(ref path) = report.output_path {
        println!("  Saved to: {}", path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> LodCli {
        let mut argv = vec!["lod-gen"];
        argv.extend_from_slice(args);
        LodCli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_request_from_args() {
        let cli = parse(&["-s", "rock.blend", "-o", "Rock", "-l", "2", "-r", "0.5"]);
        let request = request_from_args(&cli).unwrap();

        assert_eq!(request.level.get(), 2);
        assert_eq!(request.ratio.get(), 0.5);
        assert_eq!(request.output_path(), PathBuf::from("rock_lod2.blend"));
    }

    #[test]
    fn test_request_rejects_out_of_range_values() {
        let cli = parse(&["-s", "rock.blend", "-o", "Rock", "-l", "5"]);
        assert!(request_from_args(&cli).is_err());

        let cli = parse(&["-s", "rock.blend", "-o", "Rock", "-r", "-0.5"]);
        assert!(request_from_args(&cli).is_err());
    }

    #[test]
    fn test_missing_scene_is_an_error() {
        let cli = parse(&["-s", "does/not/exist.blend", "-o", "Rock"]);
        assert!(run(&cli).is_err());
    }
}
