//! Plugin generation for project2plugin.
//!
//! Renders the module boilerplate, lays out `Source/<name>/{Public,Private,Classes}`
//! and migrates the project's sources into it.

mod code_builder;
pub mod files;
mod generator;
mod layout;

pub use code_builder::{CodeBuilder, INDENT, include_directive};
pub use generator::{
    BINARY_EXTENSIONS, CreatedFile, FileKind, GenerateResult, Generator, GeneratorOptions,
    MODULE_MANIFEST_EXTENSION, PreviewFile,
};
pub use layout::{CLASSES_DIR, PRIVATE_DIR, PUBLIC_DIR, PluginLayout};
