//! Recording host operations into a job Blender can replay.
//!
//! [`ScriptedScene`] implements [`SceneHost`] by recording each call as a
//! [`HostOp`]. The recorded [`LodJob`] is handed to the Python entrypoint,
//! which selects the source object and performs the operations in order.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BlenderError, BlenderResult};
use crate::host::SceneHost;
use crate::lod::{generate_lod, DecimateRatio, LodLevel};

/// One recorded scene operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum HostOp {
    DuplicateActive,
    RenameActive { name: String },
    /// `name` is how later ops refer to the modifier; the entrypoint maps it
    /// to whatever name Blender actually assigns.
    AddDecimateModifier {
        name: String,
        ratio: f64,
        collapse_triangulate: bool,
    },
    ApplyModifier { name: String },
    SetCustomProperty { key: String, value: i64 },
}

/// A job for the Blender entrypoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LodJob {
    /// The `.blend` file to open.
    pub scene: PathBuf,
    /// Object made active before the operations run.
    pub object: String,
    /// Operations to perform, in order.
    pub ops: Vec<HostOp>,
    /// Where the modified scene is saved.
    pub output: PathBuf,
}

impl LodJob {
    /// Serializes the job to pretty JSON.
    pub fn to_json(&self) -> BlenderResult<String> {
        serde_json::to_string_pretty(self).map_err(BlenderError::SerializeFailed)
    }
}

/// A [`SceneHost`] that records operations instead of performing them.
#[derive(Debug, Clone)]
pub struct ScriptedScene {
    active: Option<String>,
    ops: Vec<HostOp>,
}

impl ScriptedScene {
    /// Creates a scene whose active object is `object`.
    pub fn with_active(object: impl Into<String>) -> Self {
        Self {
            active: Some(object.into()),
            ops: Vec::new(),
        }
    }

    /// The operations recorded so far.
    pub fn ops(&self) -> &[HostOp] {
        &self.ops
    }

    /// Consumes the scene, returning the recorded operations.
    pub fn into_ops(self) -> Vec<HostOp> {
        self.ops
    }
}

impl SceneHost for ScriptedScene {
    fn active_object_name(&self) -> Option<String> {
        self.active.clone()
    }

    fn duplicate_active(&mut self) -> BlenderResult<()> {
        self.ops.push(HostOp::DuplicateActive);
        Ok(())
    }

    fn rename_active(&mut self, name: &str) -> BlenderResult<()> {
        self.active = Some(name.to_string());
        self.ops.push(HostOp::RenameActive {
            name: name.to_string(),
        });
        Ok(())
    }

    fn add_decimate_modifier(
        &mut self,
        name: &str,
        ratio: f64,
        collapse_triangulate: bool,
    ) -> BlenderResult<String> {
        self.ops.push(HostOp::AddDecimateModifier {
            name: name.to_string(),
            ratio,
            collapse_triangulate,
        });
        Ok(name.to_string())
    }

    fn apply_modifier(&mut self, name: &str) -> BlenderResult<()> {
        self.ops.push(HostOp::ApplyModifier {
            name: name.to_string(),
        });
        Ok(())
    }

    fn set_custom_property(&mut self, key: &str, value: i64) -> BlenderResult<()> {
        self.ops.push(HostOp::SetCustomProperty {
            key: key.to_string(),
            value,
        });
        Ok(())
    }
}

/// A request to generate one LOD in a scene file.
#[derive(Debug, Clone, PartialEq)]
pub struct LodRequest {
    pub scene: PathBuf,
    pub object: String,
    pub level: LodLevel,
    pub ratio: DecimateRatio,
    /// Defaults to `{scene_stem}_lod{level}.blend` next to the scene.
    pub output: Option<PathBuf>,
}

impl LodRequest {
    /// Creates a request with the default level and ratio.
    pub fn new(scene: impl Into<PathBuf>, object: impl Into<String>) -> Self {
        Self {
            scene: scene.into(),
            object: object.into(),
            level: LodLevel::default(),
            ratio: DecimateRatio::default(),
            output: None,
        }
    }

    /// Where the modified scene will be saved.
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => default_output_path(&self.scene, self.level),
        }
    }
}

fn default_output_path(scene: &Path, level: LodLevel) -> PathBuf {
    let stem = scene
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "scene".to_string());
    scene.with_file_name(format!("{}_lod{}.blend", stem, level))
}

/// Records the LOD operations for a request into a job.
pub fn plan_job(request: &LodRequest) -> BlenderResult<LodJob> {
    if request.object.is_empty() {
        return Err(BlenderError::NoActiveObject);
    }

    let mut scene = ScriptedScene::with_active(request.object.clone());
    generate_lod(&mut scene, request.level, request.ratio)?;

    Ok(LodJob {
        scene: request.scene.clone(),
        object: request.object.clone(),
        ops: scene.into_ops(),
        output: request.output_path(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lod::LOD_PROPERTY_KEY;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plan_job_records_lod_operations() {
        let mut request = LodRequest::new("scenes/rock.blend", "Rock");
        request.level = LodLevel::try_from(2).unwrap();
        request.ratio = DecimateRatio::try_from(0.25).unwrap();

        let job = plan_job(&request).unwrap();

        assert_eq!(job.object, "Rock");
        assert_eq!(job.output, PathBuf::from("scenes/rock_lod2.blend"));
        assert_eq!(
            job.ops,
            vec![
                HostOp::DuplicateActive,
                HostOp::RenameActive {
                    name: "Rock_lod2".to_string()
                },
                HostOp::AddDecimateModifier {
                    name: "Decimate".to_string(),
                    ratio: 0.25,
                    collapse_triangulate: true
                },
                HostOp::ApplyModifier {
                    name: "Decimate".to_string()
                },
                HostOp::SetCustomProperty {
                    key: LOD_PROPERTY_KEY.to_string(),
                    value: 2
                },
            ]
        );
    }

    #[test]
    fn test_plan_job_requires_object() {
        let request = LodRequest::new("rock.blend", "");
        assert!(matches!(
            plan_job(&request),
            Err(BlenderError::NoActiveObject)
        ));
    }

    #[test]
    fn test_applied_modifier_is_the_added_one() {
        let job = plan_job(&LodRequest::new("rock.blend", "Rock")).unwrap();

        let added = job.ops.iter().find_map(|op| match op {
            HostOp::AddDecimateModifier { name, .. } => Some(name),
            _ => None,
        });
        let applied = job.ops.iter().find_map(|op| match op {
            HostOp::ApplyModifier { name } => Some(name),
            _ => None,
        });

        assert!(added.is_some());
        assert_eq!(added, applied);
    }

    #[test]
    fn test_explicit_output_path() {
        let mut request = LodRequest::new("rock.blend", "Rock");
        request.output = Some(PathBuf::from("out/rock_low.blend"));
        assert_eq!(request.output_path(), PathBuf::from("out/rock_low.blend"));
    }

    #[test]
    fn test_job_json_shape() {
        let job = plan_job(&LodRequest::new("rock.blend", "Rock")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&job.to_json().unwrap()).unwrap();

        assert_eq!(value["object"], "Rock");
        assert_eq!(value["ops"][0]["op"], "duplicate_active");
        assert_eq!(value["ops"][2]["op"], "add_decimate_modifier");
        assert_eq!(value["ops"][2]["ratio"], 0.8);
        assert_eq!(value["ops"][4]["key"], "o3de.default.lod");
        assert_eq!(value["ops"][4]["value"], 1);
    }
}
