use std::path::{Path, PathBuf};

use project2plugin_core::GeneratedFile;

use crate::{CodeBuilder, PluginLayout, files::pch_file_name};

/// `Private/<name>.cpp`: module implementation with empty startup/shutdown and registration
pub struct ModuleImpl {
    pub name: String,
}

impl ModuleImpl {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// `F<name>`
    pub fn class_name(&self) -> String {
        format!("F{}", self.name)
    }
}

impl GeneratedFile for ModuleImpl {
    fn path(&self, base: &Path) -> PathBuf {
        PluginLayout::new(base, &self.name)
            .private_dir()
            .join(format!("{}.cpp", self.name))
    }

    fn render(&self) -> String {
        let class = self.class_name();
        let name = &self.name;

        CodeBuilder::new()
            .include(&pch_file_name(name))
            .include(&format!("I{name}.h"))
            .blank()
            .block_with_close(
                &format!("class {class} : public I{name} {{"),
                "};",
                |b| {
                    b.line("virtual void StartupModule() override;")
                        .line("virtual void ShutdownModule() override;")
                        .blank()
                },
            )
            .blank()
            .line(&format!("IMPLEMENT_MODULE({class}, {name})"))
            .blank()
            .line(&format!("void {class}::StartupModule() {{}}"))
            .blank()
            .line(&format!("void {class}::ShutdownModule() {{}}"))
            .build()
    }
}
