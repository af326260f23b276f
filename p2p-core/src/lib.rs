//! Core types and utilities for project2plugin.
//!
//! This crate resolves the source project, prepares the output directory
//! and provides the filesystem primitives the conversion steps share.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
pub mod fs;
mod project;
mod workspace;

pub use error::{Error, Result};
// File operations
pub use file::{GeneratedFile, write_file};
// Source project
pub use project::{BINARIES_DIR, Project, SOURCE_DIR, THIRD_PARTY_DIR};
// Output directory
pub use workspace::{DEFAULT_BASE_DIR, DIR_TIMESTAMP_FORMAT, OverwritePolicy, Workspace};
