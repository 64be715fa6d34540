//! CLI argument definitions for the AssetKit binaries.
//!
//! All `#[derive(Parser)]` types are defined here, keeping the binaries
//! focused on dispatch logic.

use std::ffi::OsString;

use assetkit_blender::orchestrator::DEFAULT_TIMEOUT_SECS;
use assetkit_material::{MapKind, MapSelection, DEFAULT_ASSETS_ROOT};
use clap::Parser;

/// Material generator for StandardPBR materials built from TIFF texture sets
#[derive(Parser, Debug)]
#[command(name = "material-gen")]
#[command(author, version, about, long_about = None)]
#[command(args_override_self = true, infer_long_args = true)]
pub struct MaterialCli {
    /// Print verbose progress messages
    #[arg(short = 'v')]
    pub verbose: bool,

    /// Base name of the input texture files ({name}_{map}.tiff)
    #[arg(short = 'f', value_name = "NAME", allow_hyphen_values = true)]
    pub input: Option<String>,

    /// Base name to rename the texture files to, also used for the material file
    #[arg(short = 'o', value_name = "NAME", allow_hyphen_values = true)]
    pub output: Option<String>,

    /// Directory containing the texture files (default: current directory)
    #[arg(short = 'd', value_name = "PATH", allow_hyphen_values = true)]
    pub textures_dir: Option<String>,

    /// Root path prefixed to texture references in the material
    #[arg(
        short = 'a',
        value_name = "PATH",
        default_value = DEFAULT_ASSETS_ROOT,
        allow_hyphen_values = true
    )]
    pub assets_root: String,

    /// Include the ambient occlusion map (_ao)
    #[arg(long)]
    pub occ: bool,

    /// Include the specular cavity map (_cavity)
    #[arg(long)]
    pub cav: bool,

    /// Include the diffuse color map (_albedo)
    #[arg(long)]
    pub dif: bool,

    /// Include the height map (_displacement)
    #[arg(long)]
    pub dis: bool,

    /// Include the emissive map (_emissive)
    #[arg(long)]
    pub emi: bool,

    /// Include the metalness map (_metalness)
    #[arg(long)]
    pub met: bool,

    /// Include the normal map (_normal)
    #[arg(long)]
    pub ddn: bool,

    /// Include the roughness map (_roughness)
    #[arg(long)]
    pub rou: bool,

    /// Include the diffuse, normal, occlusion, metalness and roughness maps
    #[arg(long = "default")]
    pub default_maps: bool,

    /// Include every map
    #[arg(long = "all")]
    pub all_maps: bool,
}

impl MaterialCli {
    /// Combines the individual flags and presets into one selection.
    pub fn selection(&self) -> MapSelection {
        let mut selection = MapSelection::none();

        let flags = [
            (self.occ, MapKind::Occlusion),
            (self.cav, MapKind::Cavity),
            (self.dif, MapKind::Diffuse),
            (self.dis, MapKind::Displacement),
            (self.emi, MapKind::Emissive),
            (self.met, MapKind::Metalness),
            (self.ddn, MapKind::Normal),
            (self.rou, MapKind::Roughness),
        ];
        for (enabled, kind) in flags {
            if enabled {
                selection.enable(kind);
            }
        }

        if self.default_maps {
            selection.enable_default();
        }
        if self.all_maps {
            selection.enable_all();
        }

        selection
    }
}

/// Returns true if the first argument after the program name is an option.
///
/// Option parsing stops at the first plain argument, so an invocation like
/// `material-gen rock --dif` carries no options at all.
pub fn has_options(args: &[OsString]) -> bool {
    match args.get(1) {
        Some(first) => {
            let first = first.to_string_lossy();
            first.starts_with('-') && first != "-" && first != "--"
        }
        None => false,
    }
}

/// Generates a Level-Of-Detail variant of a mesh in a Blender scene
#[derive(Parser, Debug)]
#[command(name = "lod-gen")]
#[command(author, version, about, long_about = None)]
pub struct LodCli {
    /// Blender scene (.blend) containing the source object
    #[arg(short, long)]
    pub scene: String,

    /// Name of the mesh object to generate the LOD from (required; the LOD is
    /// named after it)
    #[arg(short, long)]
    pub object: String,

    /// Level of detail index in the range [1..4]
    #[arg(short, long, default_value_t = 1, allow_hyphen_values = true)]
    pub level: i64,

    /// Ratio of the applied Decimate modifier in the range [0..1]
    #[arg(short, long, default_value_t = 0.8, allow_hyphen_values = true)]
    pub ratio: f64,

    /// Scene file to save the result to (default: {scene}_lod{level}.blend)
    #[arg(long)]
    pub output: Option<String>,

    /// Path to the Blender executable (default: BLENDER_PATH, then PATH)
    #[arg(long)]
    pub blender: Option<String>,

    /// Seconds to wait for Blender before giving up
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Print the job Blender would run without running it
    #[arg(long)]
    pub dry_run: bool,

    /// Output machine-readable JSON (no colored output)
    #[arg(long)]
    pub json: bool,
}
