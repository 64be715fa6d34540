//! The fixed texture map table.
//!
//! Every supported map category is described by one [`MapEntry`] in
//! [`MAP_TABLE`]. The table order is the order maps are renamed, added to the
//! material and reported in.

use std::fmt;

/// A texture map category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapKind {
    /// Ambient occlusion (`--occ`).
    Occlusion,
    /// Specular cavity (`--cav`).
    Cavity,
    /// Diffuse color (`--dif`).
    Diffuse,
    /// Height / parallax (`--dis`).
    Displacement,
    /// Emissive (`--emi`).
    Emissive,
    /// Metalness (`--met`).
    Metalness,
    /// Normal (`--ddn`).
    Normal,
    /// Roughness (`--rou`).
    Roughness,
}

impl MapKind {
    /// All map kinds, in table order.
    pub const ALL: [MapKind; 8] = [
        MapKind::Occlusion,
        MapKind::Cavity,
        MapKind::Diffuse,
        MapKind::Displacement,
        MapKind::Emissive,
        MapKind::Metalness,
        MapKind::Normal,
        MapKind::Roughness,
    ];

    /// Returns the table entry describing this kind.
    pub fn entry(self) -> &'static MapEntry {
        &MAP_TABLE[self as usize]
    }
}

impl fmt::Display for MapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.entry().display_name)
    }
}

/// One row of the map table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapEntry {
    /// The category this row describes.
    pub kind: MapKind,
    /// Human-readable name used in diagnostics.
    pub display_name: &'static str,
    /// File name suffix (`{base}_{suffix}.tiff`).
    pub suffix: &'static str,
    /// StandardPBR property the texture is bound to.
    pub property_key: &'static str,
}

/// The supported map categories, indexed by `MapKind as usize`.
pub const MAP_TABLE: [MapEntry; 8] = [
    MapEntry {
        kind: MapKind::Occlusion,
        display_name: "Ambient Occlusion",
        suffix: "ao",
        property_key: "occlusion.diffuseTextureMap",
    },
    MapEntry {
        kind: MapKind::Cavity,
        display_name: "Specular Cavity",
        suffix: "cavity",
        property_key: "occlusion.specularTextureMap",
    },
    MapEntry {
        kind: MapKind::Diffuse,
        display_name: "Diffuse Color",
        suffix: "albedo",
        property_key: "baseColor.textureMap",
    },
    MapEntry {
        kind: MapKind::Displacement,
        display_name: "Height",
        suffix: "displacement",
        property_key: "parallax.textureMap",
    },
    MapEntry {
        kind: MapKind::Emissive,
        display_name: "Emissive",
        suffix: "emissive",
        property_key: "emissive.textureMap",
    },
    MapEntry {
        kind: MapKind::Metalness,
        display_name: "Metallic",
        suffix: "metalness",
        property_key: "metallic.textureMap",
    },
    MapEntry {
        kind: MapKind::Normal,
        display_name: "Normal",
        suffix: "normal",
        property_key: "normal.textureMap",
    },
    MapEntry {
        kind: MapKind::Roughness,
        display_name: "Roughness",
        suffix: "roughness",
        property_key: "roughness.textureMap",
    },
];

/// Which map categories a build includes.
///
/// Flags are only ever switched on; the preset helpers never clear a flag
/// that was set before them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MapSelection {
    pub occlusion: bool,
    pub cavity: bool,
    pub diffuse: bool,
    pub displacement: bool,
    pub emissive: bool,
    pub metalness: bool,
    pub normal: bool,
    pub roughness: bool,
}

impl MapSelection {
    /// A selection with every category disabled.
    pub fn none() -> Self {
        Self::default()
    }

    /// A selection with every category enabled.
    pub fn all() -> Self {
        let mut selection = Self::none();
        selection.enable_all();
        selection
    }

    /// Enables one category.
    pub fn enable(&mut self, kind: MapKind) {
        *self.flag_mut(kind) = true;
    }

    /// Enables diffuse, normal, occlusion, metalness and roughness.
    pub fn enable_default(&mut self) {
        self.diffuse = true;
        self.normal = true;
        self.occlusion = true;
        self.metalness = true;
        self.roughness = true;
    }

    /// Enables the default set plus emissive, cavity and displacement.
    pub fn enable_all(&mut self) {
        self.enable_default();
        self.emissive = true;
        self.cavity = true;
        self.displacement = true;
    }

    /// Returns true if the category is enabled.
    pub fn is_enabled(&self, kind: MapKind) -> bool {
        match kind {
            MapKind::Occlusion => self.occlusion,
            MapKind::Cavity => self.cavity,
            MapKind::Diffuse => self.diffuse,
            MapKind::Displacement => self.displacement,
            MapKind::Emissive => self.emissive,
            MapKind::Metalness => self.metalness,
            MapKind::Normal => self.normal,
            MapKind::Roughness => self.roughness,
        }
    }

    /// Returns true if no category is enabled.
    pub fn is_empty(&self) -> bool {
        MapKind::ALL.iter().all(|kind| !self.is_enabled(*kind))
    }

    /// Iterates the enabled table entries in table order.
    pub fn enabled_entries(&self) -> impl Iterator<Item = &'static MapEntry> + '_ {
        MAP_TABLE
            .iter()
            .filter(move |entry| self.is_enabled(entry.kind))
    }

    fn flag_mut(&mut self, kind: MapKind) -> &mut bool {
        match kind {
            MapKind::Occlusion => &mut self.occlusion,
            MapKind::Cavity => &mut self.cavity,
            MapKind::Diffuse => &mut self.diffuse,
            MapKind::Displacement => &mut self.displacement,
            MapKind::Emissive => &mut self.emissive,
            MapKind::Metalness => &mut self.metalness,
            MapKind::Normal => &mut self.normal,
            MapKind::Roughness => &mut self.roughness,
        }
    }
}
