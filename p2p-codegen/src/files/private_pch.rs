use std::path::{Path, PathBuf};

use project2plugin_core::GeneratedFile;

use crate::{PluginLayout, code_builder::include_directive};

/// `<name>PrivatePCH.h`
pub fn pch_file_name(name: &str) -> String {
    format!("{}PrivatePCH.h", name)
}

/// The line prepended to every migrated implementation file, newline included.
pub fn pch_include_line(name: &str) -> String {
    format!("{}\n", include_directive(&pch_file_name(name)))
}

/// The precompiled header, generated empty.
pub struct PrivatePch {
    pub name: String,
}

impl PrivatePch {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl GeneratedFile for PrivatePch {
    fn path(&self, base: &Path) -> PathBuf {
        PluginLayout::new(base, &self.name)
            .private_dir()
            .join(pch_file_name(&self.name))
    }

    fn render(&self) -> String {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pch_include_line() {
        assert_eq!(pch_include_line("Foo"), "#include \"FooPrivatePCH.h\"\n");
    }

    #[test]
    fn test_pch_is_empty() {
        let pch = PrivatePch::new("Foo");
        assert_eq!(pch.render(), "");
        assert_eq!(
            pch.path(Path::new("out")),
            PathBuf::from("out/Source/Foo/Private/FooPrivatePCH.h")
        );
    }
}
