//! AssetKit Blender Backend
//!
//! This crate generates Level-Of-Detail (LOD) variants of meshes using
//! Blender as a subprocess.
//!
//! # Overview
//!
//! A LOD is a duplicate of a source object with a Decimate modifier
//! (collapse mode, triangulated) applied, named `{source}_lod{level}` and
//! tagged with the `o3de.default.lod` custom property.
//!
//! # Architecture
//!
//! The generation logic is written against the [`SceneHost`] trait, the
//! handful of scene operations it needs from a host application:
//!
//! 1. **Rust planner** - Runs [`generate_lod`] against a [`ScriptedScene`],
//!    which records each operation into a [`LodJob`]
//! 2. **Python entrypoint** - Runs inside Blender, opens the scene, selects
//!    the source object and replays the recorded operations
//!
//! Communication happens via JSON files:
//! - The job JSON is written to a temp file and passed to Blender
//! - Blender writes a report JSON with triangle counts and the output path
//!
//! # Example
//!
//! ```ignore
//! use assetkit_blender::{generate, LodLevel, LodRequest, OrchestratorConfig};
//!
//! let mut request = LodRequest::new("rock.blend", "Rock");
//! request.level = LodLevel::try_from(2)?;
//!
//! let result = generate(&request, OrchestratorConfig::default())?;
//! println!("Generated: {:?}", result.report.lod_object);
//! ```
//!
//! # Blender Requirements
//!
//! The orchestrator searches for Blender in:
//!
//! 1. The configured path
//! 2. `BLENDER_PATH` environment variable
//! 3. System PATH
//! 4. Common installation locations (platform-specific)

pub mod error;
pub mod host;
pub mod lod;
pub mod orchestrator;
pub mod report;
pub mod script;

pub use error::{BlenderError, BlenderResult};
pub use host::{SceneHost, DECIMATE_MODIFIER_NAME};
pub use lod::{generate_lod, lod_object_name, DecimateRatio, LodLevel, LOD_PROPERTY_KEY};
pub use orchestrator::{locate_blender, Orchestrator, OrchestratorConfig};
pub use report::LodReport;
pub use script::{plan_job, HostOp, LodJob, LodRequest, ScriptedScene};

/// Result of generating a LOD in Blender.
#[derive(Debug, Clone)]
pub struct LodResult {
    /// The job that was run.
    pub job: LodJob,
    /// The Blender report.
    pub report: LodReport,
}

/// Plans and runs a LOD job in Blender.
pub fn generate(request: &LodRequest, config: OrchestratorConfig) -> BlenderResult<LodResult> {
    let job = plan_job(request)?;
    let report = Orchestrator::with_config(config).run_job(&job)?;

    Ok(LodResult { job, report })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_fails_before_spawning_for_missing_scene() {
        let request = LodRequest::new("missing/rock.blend", "Rock");
        let err = generate(&request, OrchestratorConfig::default()).unwrap_err();
        assert!(matches!(err, BlenderError::SceneNotFound { .. }));
    }
}
