//! Report written by the Blender entrypoint.

use serde::{Deserialize, Serialize};

use crate::error::BlenderError;

/// Outcome of a LOD job, as reported by Blender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LodReport {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Stable error code, set for failures raised outside Blender.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Name of the generated LOD object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lod_object: Option<String>,
    /// Triangle count of the source object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_triangles: Option<u64>,
    /// Triangle count of the LOD object after decimation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lod_triangles: Option<u64>,
    /// Path the scene was saved to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,
}

impl LodReport {
    /// Creates a successful report.
    pub fn success(lod_object: impl Into<String>, output_path: impl Into<String>) -> Self {
        Self {
            ok: true,
            error: None,
            code: None,
            lod_object: Some(lod_object.into()),
            source_triangles: None,
            lod_triangles: None,
            output_path: Some(output_path.into()),
        }
    }

    /// Creates a failed report.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(error.into()),
            code: None,
            lod_object: None,
            source_triangles: None,
            lod_triangles: None,
            output_path: None,
        }
    }

    /// Creates a failed report from an error, carrying its code.
    pub fn from_error(err: &BlenderError) -> Self {
        Self {
            code: Some(err.code().to_string()),
            ..Self::failure(err.to_string())
        }
    }

    /// Fraction of source triangles kept, when both counts are known.
    pub fn reduction(&self) -> Option<f64> {
        match (self.source_triangles, self.lod_triangles) {
            (Some(source), Some(lod)) if source > 0 => Some(lod as f64 / source as f64),
            _ => None,
        }
    }
}
