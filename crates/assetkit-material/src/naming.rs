//! File and asset-reference naming rules.

use std::path::{Path, PathBuf};

/// Extension shared by every texture file.
pub const TEXTURE_EXTENSION: &str = "tiff";

/// Extension of the material file.
pub const MATERIAL_EXTENSION: &str = "material";

/// Returns `{base}_{suffix}.tiff`.
pub fn texture_file_name(base: &str, suffix: &str) -> String {
    format!("{}_{}.{}", base, suffix, TEXTURE_EXTENSION)
}

/// Returns the on-disk path of a texture file.
pub fn texture_path(textures_dir: &Path, base: &str, suffix: &str) -> PathBuf {
    textures_dir.join(texture_file_name(base, suffix))
}

/// Returns the asset reference written into the material.
///
/// Always uses `/` separators, whatever the host path convention.
pub fn asset_reference(assets_root: &str, base: &str, suffix: &str) -> String {
    let mut reference = assets_root.replace('\\', "/");
    if !reference.is_empty() && !reference.ends_with('/') {
        reference.push('/');
    }
    reference.push_str(&texture_file_name(base, suffix).replace('\\', "/"));
    reference
}

/// Returns `{textures_dir}/{base}.material`.
pub fn material_path(textures_dir: &Path, base: &str) -> PathBuf {
    textures_dir.join(format!("{}.{}", base, MATERIAL_EXTENSION))
}
