use std::path::{Path, PathBuf};

use project2plugin_core::GeneratedFile;

use crate::{CodeBuilder, PluginLayout};

/// `Public/I<name>.h`: the module interface with `Get()` and `IsAvailable()` accessors
pub struct ModuleInterface {
    pub name: String,
}

impl ModuleInterface {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// `I<name>`
    pub fn class_name(&self) -> String {
        format!("I{}", self.name)
    }

    /// `I<name>.h`
    pub fn file_name(&self) -> String {
        format!("{}.h", self.class_name())
    }
}

impl GeneratedFile for ModuleInterface {
    fn path(&self, base: &Path) -> PathBuf {
        PluginLayout::new(base, &self.name)
            .public_dir()
            .join(self.file_name())
    }

    fn render(&self) -> String {
        let class = self.class_name();
        let name = &self.name;

        CodeBuilder::new()
            .pragma_once()
            .blank()
            .include("ModuleManager.h")
            .blank()
            .block_with_close(
                &format!("class {class} : public IModuleInterface {{"),
                "};",
                |b| {
                    b.line("public:")
                        .indent()
                        .block_with_close(
                            &format!("static inline {class}& Get() {{"),
                            "}",
                            |b| {
                                b.line(&format!(
                                    "return FModuleManager::LoadModuleChecked<{class}>(\"{name}\");"
                                ))
                            },
                        )
                        .blank()
                        .block_with_close("static inline bool IsAvailable() {", "}", |b| {
                            b.line(&format!(
                                "return FModuleManager::Get().IsModuleLoaded(\"{name}\");"
                            ))
                        })
                        .dedent()
                },
            )
            .build()
    }
}
