//! Renaming a texture set to a new base name.

use std::fs;

use crate::config::BuildConfig;
use crate::error::{Diagnostic, MaterialError, MaterialResult};
use crate::maps::MapKind;
use crate::naming::{texture_file_name, texture_path};

/// What the rename step did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// No distinct output name was configured; nothing was touched.
    Skipped,
    /// Enabled maps were renamed where their source file existed.
    Renamed {
        /// Categories whose file was moved, in table order.
        renamed: Vec<MapKind>,
        /// Categories whose source file was missing.
        diagnostics: Vec<Diagnostic>,
    },
}

impl RenameOutcome {
    /// Diagnostics produced by the step.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            RenameOutcome::Skipped => &[],
            RenameOutcome::Renamed { diagnostics, .. } => diagnostics,
        }
    }

    /// Returns true if the step was skipped.
    pub fn is_skipped(&self) -> bool {
        matches!(self, RenameOutcome::Skipped)
    }
}

/// Renames `{input}_{suffix}.tiff` to `{output}_{suffix}.tiff` for every
/// enabled map.
///
/// A missing source file is reported and skipped. Renames already done are
/// not rolled back when a later rename fails.
pub fn rename_texture_files(config: &BuildConfig) -> MaterialResult<RenameOutcome> {
    if !config.renames() {
        return Ok(RenameOutcome::Skipped);
    }

    let mut renamed = Vec::new();
    let mut diagnostics = Vec::new();

    for entry in config.maps().enabled_entries() {
        let from = texture_path(config.textures_dir(), config.input_name(), entry.suffix);
        if !from.exists() {
            diagnostics.push(Diagnostic::NotRenamed {
                kind: entry.kind,
                file: texture_file_name(config.input_name(), entry.suffix),
            });
            continue;
        }

        let to = texture_path(config.textures_dir(), config.output_name(), entry.suffix);
        fs::rename(&from, &to).map_err(|source| MaterialError::Rename {
            from: from.clone(),
            to: to.clone(),
            source,
        })?;
        renamed.push(entry.kind);
    }

    Ok(RenameOutcome::Renamed {
        renamed,
        diagnostics,
    })
}
