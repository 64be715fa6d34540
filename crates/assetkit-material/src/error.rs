//! Error and diagnostic types for material builds.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::maps::MapKind;

/// Result type for material build operations.
pub type MaterialResult<T> = Result<T, MaterialError>;

/// Errors that abort a material build.
///
/// A missing texture file is not an error; see [`Diagnostic`].
#[derive(Debug, Error)]
pub enum MaterialError {
    /// No input base name was given.
    #[error("Input texture base name must not be empty")]
    EmptyInputName,

    /// Renaming a texture file failed.
    #[error("Failed to rename {from} to {to}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serializing the material document failed.
    #[error("Failed to serialize material: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Writing the material file failed.
    #[error("Failed to write material file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MaterialError {
    /// Returns the stable error code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            MaterialError::EmptyInputName => "MATERIAL_001",
            MaterialError::Rename { .. } => "MATERIAL_002",
            MaterialError::Serialize(_) => "MATERIAL_003",
            MaterialError::Write { .. } => "MATERIAL_004",
        }
    }
}

/// A non-fatal problem found while processing one map category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The map was enabled but its source file was missing, so it was not renamed.
    NotRenamed { kind: MapKind, file: String },
    /// The map was enabled but its file was missing, so it is absent from the material.
    NotAdded { kind: MapKind, file: String },
}

impl Diagnostic {
    /// The map category the diagnostic is about.
    pub fn kind(&self) -> MapKind {
        match self {
            Diagnostic::NotRenamed { kind, .. } | Diagnostic::NotAdded { kind, .. } => *kind,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::NotRenamed { kind, file } => write!(
                f,
                "The {} Map was enabled, but the file {} does not exist. The file was not renamed.",
                kind, file
            ),
            Diagnostic::NotAdded { kind, file } => write!(
                f,
                "The {} Map was enabled, but the file {} does not exist. The file was not added in the material.",
                kind, file
            ),
        }
    }
}
