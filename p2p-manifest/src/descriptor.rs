//! The `.uplugin` plugin descriptor.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use project2plugin_core::GeneratedFile;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Descriptor format version written to every plugin.
pub const FILE_VERSION: u32 = 3;

/// Extension of plugin descriptor files, without the dot.
pub const DESCRIPTOR_EXTENSION: &str = "uplugin";

/// ISO-8601 format used for `VersionName`.
pub const VERSION_NAME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Plugin metadata and its module list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PluginDescriptor {
    pub file_version: u32,
    /// Build timestamp, omitted when not stamped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_name: Option<String>,
    pub friendly_name: String,
    pub enabled_by_default: bool,
    pub modules: Vec<ModuleDescriptor>,
}

impl PluginDescriptor {
    /// Descriptor for a plugin with a single runtime module named after the project.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            file_version: FILE_VERSION,
            version_name: None,
            friendly_name: name.clone(),
            enabled_by_default: true,
            modules: vec![ModuleDescriptor::runtime(name)],
        }
    }

    /// Stamp the descriptor with the generation time.
    pub fn with_version_name(mut self, now: DateTime<Utc>) -> Self {
        self.version_name = Some(now.format(VERSION_NAME_FORMAT).to_string());
        self
    }

    /// Descriptor file name, `<FriendlyName>.uplugin`.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.friendly_name, DESCRIPTOR_EXTENSION)
    }

    /// Render as JSON with 4-space indentation and a trailing newline.
    pub fn to_json(&self) -> String {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)
            .expect("serialization cannot fail for a plugin descriptor");
        let mut json = String::from_utf8(buf).expect("serde_json always writes UTF-8");
        json.push('\n');
        json
    }

    /// Parse a descriptor from JSON.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(Error::json)
    }

    /// Read and parse a descriptor file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_json(&content)
    }
}

impl GeneratedFile for PluginDescriptor {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.file_name())
    }

    fn render(&self) -> String {
        self.to_json()
    }
}

/// A module the engine loads from the plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModuleDescriptor {
    pub name: String,
    #[serde(rename = "Type")]
    pub module_type: ModuleType,
}

impl ModuleDescriptor {
    pub fn runtime(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            module_type: ModuleType::Runtime,
        }
    }
}

/// When and where a module is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModuleType {
    Runtime,
    Editor,
    Developer,
}
