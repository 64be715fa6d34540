//! AssetKit CLI library.
//!
//! This crate provides the argument parsing and command implementations
//! behind the `material-gen` and `lod-gen` binaries.

pub mod cli_args;
pub mod commands;
pub mod console;
