//! AssetKit Material Library
//!
//! This crate builds StandardPBR material descriptors from a directory of
//! conventionally-named texture files.
//!
//! # Overview
//!
//! A texture set shares one base name, and every map category is stored as
//! `{base}_{suffix}.tiff` next to the others:
//!
//! | Category | Suffix | Material property |
//! |----------|--------|-------------------|
//! | Ambient Occlusion | `ao` | `occlusion.diffuseTextureMap` |
//! | Specular Cavity | `cavity` | `occlusion.specularTextureMap` |
//! | Diffuse Color | `albedo` | `baseColor.textureMap` |
//! | Height | `displacement` | `parallax.textureMap` |
//! | Emissive | `emissive` | `emissive.textureMap` |
//! | Metallic | `metalness` | `metallic.textureMap` |
//! | Normal | `normal` | `normal.textureMap` |
//! | Roughness | `roughness` | `roughness.textureMap` |
//!
//! A build optionally renames the texture set to a new base name, then
//! writes `{output_base}.material` referencing every enabled map whose file
//! exists. Missing files never abort a build; they are reported as
//! [`Diagnostic`]s.
//!
//! # Example
//!
//! ```no_run
//! use assetkit_material::{build, BuildConfig, MapSelection};
//!
//! let mut maps = MapSelection::none();
//! maps.enable_default();
//!
//! let config = BuildConfig::builder("rock")
//!     .textures_dir("textures")
//!     .maps(maps)
//!     .build()?;
//!
//! let report = build(&config)?;
//! println!("Wrote {}", report.material_path.display());
//! # Ok::<(), assetkit_material::MaterialError>(())
//! ```
//!
//! # Modules
//!
//! - [`maps`]: The fixed map table and the per-category enable flags
//! - [`config`]: Build configuration
//! - [`naming`]: File and asset-reference naming rules
//! - [`rename`]: Texture set renaming
//! - [`document`]: Material document assembly and serialization
//! - [`pipeline`]: The full rename, assemble and write pipeline
//! - [`error`]: Error and diagnostic types

pub mod config;
pub mod document;
pub mod error;
pub mod maps;
pub mod naming;
pub mod pipeline;
pub mod rename;

// Re-export commonly used types at the crate root
pub use config::{BuildConfig, BuildConfigBuilder, DEFAULT_ASSETS_ROOT};
pub use document::{
    assemble_material, write_material, Assembly, MaterialDocument, MATERIAL_TYPE,
    MATERIAL_TYPE_VERSION,
};
pub use error::{Diagnostic, MaterialError, MaterialResult};
pub use maps::{MapEntry, MapKind, MapSelection, MAP_TABLE};
pub use pipeline::{build, BuildReport};
pub use rename::{rename_texture_files, RenameOutcome};
