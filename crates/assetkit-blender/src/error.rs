//! Error types for LOD generation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for LOD generation.
pub type BlenderResult<T> = Result<T, BlenderError>;

/// Errors raised while validating, planning or running a LOD job.
#[derive(Debug, Error)]
pub enum BlenderError {
    // Request validation
    #[error("LOD level {level} is out of range (expected 1..=4)")]
    InvalidLodLevel { level: i64 },

    #[error("Decimate ratio {ratio} is out of range (expected 0.0..=1.0)")]
    InvalidRatio { ratio: f64 },

    #[error("Scene file not found: {path}")]
    SceneNotFound { path: PathBuf },

    /// Nothing is active, so there is no source object to copy.
    #[error("No source object selected")]
    NoActiveObject,

    // Environment
    #[error("Blender executable not found; install Blender, add it to PATH or set BLENDER_PATH")]
    BlenderNotFound,

    #[error("LOD entrypoint script not found at {path}")]
    EntrypointNotFound { path: PathBuf },

    // Job exchange
    #[error("Failed to serialize LOD job: {0}")]
    SerializeFailed(#[source] serde_json::Error),

    #[error("Failed to write LOD job: {0}")]
    WriteJobFailed(#[source] io::Error),

    #[error("Failed to read LOD report {path}: {source}")]
    ReadReportFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed LOD report: {0}")]
    ParseReportFailed(#[source] serde_json::Error),

    // Blender process
    #[error("Could not start Blender: {0}")]
    SpawnFailed(#[source] io::Error),

    #[error("Blender did not finish within {timeout_secs} seconds")]
    Timeout { timeout_secs: u64 },

    #[error("Blender exited with status {exit_code}: {stderr}")]
    ProcessFailed { exit_code: i32, stderr: String },

    /// The entrypoint ran but reported a failure.
    #[error("LOD generation failed: {message}")]
    GenerationFailed { message: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl BlenderError {
    pub fn process_failed(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self::ProcessFailed {
            exit_code,
            stderr: stderr.into(),
        }
    }

    pub fn generation_failed(message: impl Into<String>) -> Self {
        Self::GenerationFailed {
            message: message.into(),
        }
    }

    /// Stable code for this error, grouped by stage.
    pub fn code(&self) -> &'static str {
        use BlenderError::*;
        match self {
            InvalidLodLevel { .. } => "LOD_001",
            InvalidRatio { .. } => "LOD_002",
            SceneNotFound { .. } => "LOD_003",
            NoActiveObject => "LOD_004",
            BlenderNotFound => "LOD_101",
            EntrypointNotFound { .. } => "LOD_102",
            SerializeFailed(_) => "LOD_201",
            WriteJobFailed(_) => "LOD_202",
            ReadReportFailed { .. } => "LOD_203",
            ParseReportFailed(_) => "LOD_204",
            SpawnFailed(_) => "LOD_301",
            Timeout { .. } => "LOD_302",
            ProcessFailed { .. } => "LOD_303",
            GenerationFailed { .. } => "LOD_304",
            Io(_) => "LOD_901",
        }
    }
}
