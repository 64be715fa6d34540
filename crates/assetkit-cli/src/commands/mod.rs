//! CLI command implementations

pub mod lod;
pub mod material;
