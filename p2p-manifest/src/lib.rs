//! Plugin descriptor model and configuration for project2plugin.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod descriptor;
mod error;

pub use config::{CONFIG_FILE_NAME, Config, DEFAULT_BINARIES_PLATFORM};
pub use descriptor::{
    DESCRIPTOR_EXTENSION, FILE_VERSION, ModuleDescriptor, ModuleType, PluginDescriptor,
    VERSION_NAME_FORMAT,
};
pub use error::{Error, Result};
