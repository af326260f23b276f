//! Directory convention of a generated plugin.
//!
//! ```text
//! <root>/
//!   <name>.uplugin
//!   Source/<name>/
//!     <name>.Build.cs
//!     Public/I<name>.h
//!     Private/<name>PrivatePCH.h
//!     Private/<name>.cpp
//!     Private/*.cpp        (migrated)
//!     Classes/*.h          (migrated)
//!   ThirdParty/**          (optional)
//!   Binaries/<platform>/*  (optional)
//! ```

use std::path::{Path, PathBuf};

use project2plugin_core::{BINARIES_DIR, SOURCE_DIR, THIRD_PARTY_DIR};

pub const PUBLIC_DIR: &str = "Public";
pub const PRIVATE_DIR: &str = "Private";
pub const CLASSES_DIR: &str = "Classes";

/// Paths inside a plugin rooted at `root` for module `name`.
#[derive(Debug, Clone)]
pub struct PluginLayout<'a> {
    root: &'a Path,
    name: &'a str,
}

impl<'a> PluginLayout<'a> {
    pub fn new(root: &'a Path, name: &'a str) -> Self {
        Self { root, name }
    }

    /// `Source/<name>`
    pub fn module_dir(&self) -> PathBuf {
        self.root.join(SOURCE_DIR).join(self.name)
    }

    pub fn public_dir(&self) -> PathBuf {
        self.module_dir().join(PUBLIC_DIR)
    }

    pub fn private_dir(&self) -> PathBuf {
        self.module_dir().join(PRIVATE_DIR)
    }

    pub fn classes_dir(&self) -> PathBuf {
        self.module_dir().join(CLASSES_DIR)
    }

    pub fn build_descriptor(&self) -> PathBuf {
        self.module_dir().join(format!("{}.Build.cs", self.name))
    }

    pub fn third_party_dir(&self) -> PathBuf {
        self.root.join(THIRD_PARTY_DIR)
    }

    pub fn binaries_dir(&self, platform: &str) -> PathBuf {
        self.root.join(BINARIES_DIR).join(platform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_paths() {
        let layout = PluginLayout::new(Path::new("/out/Foo"), "Foo");

        assert_eq!(layout.module_dir(), PathBuf::from("/out/Foo/Source/Foo"));
        assert_eq!(
            layout.public_dir(),
            PathBuf::from("/out/Foo/Source/Foo/Public")
        );
        assert_eq!(
            layout.private_dir(),
            PathBuf::from("/out/Foo/Source/Foo/Private")
        );
        assert_eq!(
            layout.classes_dir(),
            PathBuf::from("/out/Foo/Source/Foo/Classes")
        );
        assert_eq!(
            layout.build_descriptor(),
            PathBuf::from("/out/Foo/Source/Foo/Foo.Build.cs")
        );
        assert_eq!(
            layout.binaries_dir("Win64"),
            PathBuf::from("/out/Foo/Binaries/Win64")
        );
    }
}
