//! The rename, assemble and write pipeline.

use std::path::PathBuf;

use crate::config::BuildConfig;
use crate::document::{assemble_material, write_material, MaterialDocument};
use crate::error::{Diagnostic, MaterialResult};
use crate::naming::material_path;
use crate::rename::{rename_texture_files, RenameOutcome};

/// Everything a build did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub rename: RenameOutcome,
    pub document: MaterialDocument,
    /// Maps left out of the material because their file was missing.
    pub assembly_diagnostics: Vec<Diagnostic>,
    pub material_path: PathBuf,
}

impl BuildReport {
    /// Rename diagnostics followed by assembly diagnostics.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.rename
            .diagnostics()
            .iter()
            .chain(self.assembly_diagnostics.iter())
    }
}

/// Renames the texture set if requested, assembles the material and writes
/// it to `{textures_dir}/{output_name}.material`.
pub fn build(config: &BuildConfig) -> MaterialResult<BuildReport> {
    let rename = rename_texture_files(config)?;
    let assembly = assemble_material(config);

    let material_path = material_path(config.textures_dir(), config.output_name());
    write_material(&assembly.document, &material_path)?;

    Ok(BuildReport {
        rename,
        document: assembly.document,
        assembly_diagnostics: assembly.diagnostics,
        material_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MaterialError;
    use crate::maps::{MapKind, MapSelection};
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_build_without_rename() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("base_albedo.tiff"), b"").unwrap();
        fs::write(dir.path().join("base_metalness.tiff"), b"").unwrap();

        let mut maps = MapSelection::none();
        maps.enable(MapKind::Diffuse);
        maps.enable(MapKind::Metalness);

        let config = BuildConfig::builder("base")
            .textures_dir(dir.path())
            .maps(maps)
            .build()
            .unwrap();

        let report = build(&config).unwrap();

        assert!(report.rename.is_skipped());
        assert_eq!(report.diagnostics().count(), 0);
        assert_eq!(report.material_path, dir.path().join("base.material"));
        assert_eq!(
            fs::read_to_string(&report.material_path).unwrap(),
            r#"{"materialType":"Materials/Types/StandardPBR.materialtype","materialTypeVersion":4,"propertyValues":{"baseColor.textureMap":"Assets/base_albedo.tiff","metallic.textureMap":"Assets/base_metalness.tiff"}}"#
        );
    }

    #[test]
    fn test_build_with_rename_references_new_names() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("scan_normal.tiff"), b"").unwrap();

        let mut maps = MapSelection::none();
        maps.enable(MapKind::Normal);
        maps.enable(MapKind::Cavity);

        let config = BuildConfig::builder("scan")
            .output_name(Some("boulder".to_string()))
            .textures_dir(dir.path())
            .maps(maps)
            .build()
            .unwrap();

        let report = build(&config).unwrap();

        assert!(dir.path().join("boulder_normal.tiff").exists());
        assert!(!dir.path().join("scan_normal.tiff").exists());
        assert_eq!(report.material_path, dir.path().join("boulder.material"));
        assert_eq!(
            report.document.property_values.get("normal.textureMap"),
            Some(&"Assets/boulder_normal.tiff".to_string())
        );

        let diagnostics: Vec<_> = report.diagnostics().collect();
        assert_eq!(diagnostics.len(), 2);
        assert!(matches!(diagnostics[0], Diagnostic::NotRenamed { kind: MapKind::Cavity, .. }));
        assert!(matches!(diagnostics[1], Diagnostic::NotAdded { kind: MapKind::Cavity, .. }));
    }

    #[test]
    fn test_build_with_nothing_found_still_writes() {
        let dir = TempDir::new().unwrap();

        let config = BuildConfig::builder("ghost")
            .textures_dir(dir.path())
            .maps(MapSelection::all())
            .build()
            .unwrap();

        let report = build(&config).unwrap();

        assert_eq!(report.diagnostics().count(), 8);
        assert!(report.document.property_values.is_empty());
        assert!(report.material_path.exists());
    }

    #[test]
    fn test_rename_failure_writes_no_material() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("rock_albedo.tiff"), b"").unwrap();
        fs::write(dir.path().join("rock_roughness.tiff"), b"").unwrap();
        fs::create_dir(dir.path().join("cliff_roughness.tiff")).unwrap();
        fs::write(dir.path().join("cliff_roughness.tiff").join("keep"), b"").unwrap();

        let mut maps = MapSelection::none();
        maps.enable(MapKind::Diffuse);
        maps.enable(MapKind::Roughness);

        let config = BuildConfig::builder("rock")
            .output_name(Some("cliff".to_string()))
            .textures_dir(dir.path())
            .maps(maps)
            .build()
            .unwrap();

        let err = build(&config).unwrap_err();

        assert!(matches!(err, MaterialError::Rename { .. }));
        assert!(dir.path().join("cliff_albedo.tiff").exists());
        assert!(!dir.path().join("cliff.material").exists());
        assert!(!dir.path().join("rock.material").exists());
    }
}
