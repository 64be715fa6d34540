//! Material document assembly and serialization.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::BuildConfig;
use crate::error::{Diagnostic, MaterialError, MaterialResult};
use crate::naming::{asset_reference, texture_file_name, texture_path};

/// Material type every generated document uses.
pub const MATERIAL_TYPE: &str = "Materials/Types/StandardPBR.materialtype";

/// Version of [`MATERIAL_TYPE`] the documents target.
pub const MATERIAL_TYPE_VERSION: u32 = 4;

/// A StandardPBR material document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialDocument {
    pub material_type: String,
    pub material_type_version: u32,
    /// Property key to asset reference, in map table order.
    pub property_values: IndexMap<String, String>,
}

impl MaterialDocument {
    /// Creates a document with no property values.
    pub fn new() -> Self {
        Self {
            material_type: MATERIAL_TYPE.to_string(),
            material_type_version: MATERIAL_TYPE_VERSION,
            property_values: IndexMap::new(),
        }
    }

    /// Serializes the document to compact JSON.
    pub fn to_json(&self) -> MaterialResult<String> {
        serde_json::to_string(self).map_err(MaterialError::Serialize)
    }
}

impl Default for MaterialDocument {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of assembling a material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembly {
    pub document: MaterialDocument,
    pub diagnostics: Vec<Diagnostic>,
}

/// Builds the material for every enabled map whose output-named file exists.
pub fn assemble_material(config: &BuildConfig) -> Assembly {
    let mut document = MaterialDocument::new();
    let mut diagnostics = Vec::new();

    for entry in config.maps().enabled_entries() {
        let path = texture_path(config.textures_dir(), config.output_name(), entry.suffix);
        if path.exists() {
            document.property_values.insert(
                entry.property_key.to_string(),
                asset_reference(config.assets_root(), config.output_name(), entry.suffix),
            );
        } else {
            diagnostics.push(Diagnostic::NotAdded {
                kind: entry.kind,
                file: texture_file_name(config.output_name(), entry.suffix),
            });
        }
    }

    Assembly {
        document,
        diagnostics,
    }
}

/// Writes the document as JSON, replacing any existing file.
pub fn write_material(document: &MaterialDocument, path: &Path) -> MaterialResult<()> {
    let json = document.to_json()?;
    fs::write(path, json).map_err(|source| MaterialError::Write {
        path: path.to_path_buf(),
        source,
    })
}
