//! Build configuration.

use std::path::{Path, PathBuf};

use crate::error::{MaterialError, MaterialResult};
use crate::maps::MapSelection;

/// Default root prefix for asset references written into the material.
pub const DEFAULT_ASSETS_ROOT: &str = "Assets";

/// Immutable configuration for one material build.
///
/// The output base name is resolved when the config is built, so it is never
/// empty by the time any file operation runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    maps: MapSelection,
    input_name: String,
    output_name: String,
    textures_dir: PathBuf,
    assets_root: String,
}

impl BuildConfig {
    /// Creates a builder for the given input base name.
    pub fn builder(input_name: impl Into<String>) -> BuildConfigBuilder {
        BuildConfigBuilder::new(input_name)
    }

    /// The enabled map categories.
    pub fn maps(&self) -> &MapSelection {
        &self.maps
    }

    /// Base name of the texture files on disk before the build.
    pub fn input_name(&self) -> &str {
        &self.input_name
    }

    /// Base name of the texture files after the build and of the material file.
    pub fn output_name(&self) -> &str {
        &self.output_name
    }

    /// Directory holding the texture files.
    pub fn textures_dir(&self) -> &Path {
        &self.textures_dir
    }

    /// Root prefix for asset references.
    pub fn assets_root(&self) -> &str {
        &self.assets_root
    }

    /// Returns true if the texture set is renamed to a distinct output name.
    pub fn renames(&self) -> bool {
        self.output_name != self.input_name
    }
}

/// Builder for [`BuildConfig`].
#[derive(Debug, Clone)]
pub struct BuildConfigBuilder {
    maps: MapSelection,
    input_name: String,
    output_name: Option<String>,
    textures_dir: PathBuf,
    assets_root: String,
}

impl BuildConfigBuilder {
    /// Creates a builder with nothing enabled, the textures directory set to
    /// `.` and the assets root set to [`DEFAULT_ASSETS_ROOT`].
    pub fn new(input_name: impl Into<String>) -> Self {
        Self {
            maps: MapSelection::none(),
            input_name: input_name.into(),
            output_name: None,
            textures_dir: PathBuf::from("."),
            assets_root: DEFAULT_ASSETS_ROOT.to_string(),
        }
    }

    /// Sets the enabled map categories.
    pub fn maps(mut self, maps: MapSelection) -> Self {
        self.maps = maps;
        self
    }

    /// Sets the output base name. `None` or an empty name keeps the input name.
    pub fn output_name(mut self, output_name: Option<String>) -> Self {
        self.output_name = output_name;
        self
    }

    /// Sets the directory holding the texture files.
    pub fn textures_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.textures_dir = dir.into();
        self
    }

    /// Sets the root prefix for asset references.
    pub fn assets_root(mut self, root: impl Into<String>) -> Self {
        self.assets_root = root.into();
        self
    }

    /// Validates the input name and resolves the output name.
    pub fn build(self) -> MaterialResult<BuildConfig> {
        if self.input_name.is_empty() {
            return Err(MaterialError::EmptyInputName);
        }

        let output_name = match self.output_name {
            Some(name) if !name.is_empty() => name,
            _ => self.input_name.clone(),
        };

        Ok(BuildConfig {
            maps: self.maps,
            input_name: self.input_name,
            output_name,
            textures_dir: self.textures_dir,
            assets_root: self.assets_root,
        })
    }
}
