//! The scene operations LOD generation needs from a host application.

use crate::error::BlenderResult;

/// Name requested for the Decimate modifier. The host may pick another one
/// (`Decimate.001`) when the object already carries a modifier by that name.
pub const DECIMATE_MODIFIER_NAME: &str = "Decimate";

/// A host application scene that LODs can be generated in.
///
/// Every operation acts on the active object, matching how the host's own
/// operators behave.
pub trait SceneHost {
    /// Name of the active object, or `None` if nothing is active.
    fn active_object_name(&self) -> Option<String>;

    /// Duplicates the active object; the duplicate becomes active.
    fn duplicate_active(&mut self) -> BlenderResult<()>;

    /// Renames the active object.
    fn rename_active(&mut self, name: &str) -> BlenderResult<()>;

    /// Adds a Decimate modifier in collapse mode to the active object,
    /// asking for `name`. Returns the name the modifier actually got.
    fn add_decimate_modifier(
        &mut self,
        name: &str,
        ratio: f64,
        collapse_triangulate: bool,
    ) -> BlenderResult<String>;

    /// Applies the named modifier to the active object's mesh.
    fn apply_modifier(&mut self, name: &str) -> BlenderResult<()>;

    /// Sets an integer custom property on the active object.
    fn set_custom_property(&mut self, key: &str, value: i64) -> BlenderResult<()>;
}
