//! Plugin generation: descriptor, module boilerplate, source migration and asset copies.

use std::path::{Path, PathBuf};

use project2plugin_core::{Error, GeneratedFile, Project, Result, fs, write_file};
use project2plugin_manifest::PluginDescriptor;

use crate::{
    PluginLayout,
    files::{ModuleImpl, ModuleInterface, PrivatePch, pch_include_line},
};

/// Module manifest extension listed by the engine next to compiled modules.
pub const MODULE_MANIFEST_EXTENSION: &str = "modules";

/// Extensions of compiled artifacts copied from `Binaries/<platform>`.
pub const BINARY_EXTENSIONS: &[&str] = &["dll", "pdb", "lib", "exp", "so", "dylib"];

/// Optional steps of a conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Copy `ThirdParty/` when the project has one
    pub third_party: bool,
    /// Copy compiled artifacts from `Binaries/<platform>`
    pub binaries: Option<String>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            third_party: true,
            binaries: None,
        }
    }
}

/// How an output file came to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Rendered from a template
    Generated,
    /// Copied with the precompiled-header include prepended
    Migrated,
    /// Copied verbatim
    Copied,
}

/// A file written into the plugin, relative to the output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedFile {
    pub path: String,
    pub kind: FileKind,
}

/// Result of writing a plugin.
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files in creation order
    pub files: Vec<CreatedFile>,
}

impl GenerateResult {
    pub fn count(&self, kind: FileKind) -> usize {
        self.files.iter().filter(|f| f.kind == kind).count()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.iter().any(|f| f.path == path)
    }
}

/// A planned output file, for dry runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Path relative to the output root
    pub path: String,
    pub kind: FileKind,
    /// Rendered content of generated files
    pub content: Option<String>,
    /// Input file of copied and migrated files
    pub source: Option<PathBuf>,
}

enum Step {
    Dir(PathBuf),
    Write { dest: PathBuf, content: String },
    Copy { source: PathBuf, dest: PathBuf },
    Migrate { source: PathBuf, dest: PathBuf },
    CopyTree { source: PathBuf, dest: PathBuf },
}

/// Turns a validated project into a plugin tree.
pub struct Generator<'a> {
    project: &'a Project,
    descriptor: PluginDescriptor,
    options: GeneratorOptions,
}

impl<'a> Generator<'a> {
    pub fn new(project: &'a Project, descriptor: PluginDescriptor) -> Self {
        Self {
            project,
            descriptor,
            options: GeneratorOptions::default(),
        }
    }

    pub fn with_options(mut self, options: GeneratorOptions) -> Self {
        self.options = options;
        self
    }

    /// List the files a run would create, without writing anything.
    ///
    /// Directory copies are expanded so the list matches what
    /// [`Generator::generate`] reports.
    pub fn preview(&self) -> Result<Vec<PreviewFile>> {
        let root = Path::new("");
        let mut files = Vec::new();

        for step in self.steps(root)? {
            match step {
                Step::Dir(_) => {}
                Step::Write { dest, content } => files.push(PreviewFile {
                    path: fs::relative_display(root, &dest),
                    kind: FileKind::Generated,
                    content: Some(content),
                    source: None,
                }),
                Step::Copy { source, dest } => files.push(PreviewFile {
                    path: fs::relative_display(root, &dest),
                    kind: FileKind::Copied,
                    content: None,
                    source: Some(source),
                }),
                Step::Migrate { source, dest } => files.push(PreviewFile {
                    path: fs::relative_display(root, &dest),
                    kind: FileKind::Migrated,
                    content: None,
                    source: Some(source),
                }),
                Step::CopyTree { source, dest } => {
                    for relative in fs::list_tree(&source)? {
                        files.push(PreviewFile {
                            path: fs::relative_display(root, &dest.join(&relative)),
                            kind: FileKind::Copied,
                            content: None,
                            source: Some(source.join(relative)),
                        });
                    }
                }
            }
        }

        Ok(files)
    }

    /// Write the plugin under `root`.
    ///
    /// Stops at the first failure; files written so far are left in place.
    pub fn generate(&self, root: &Path) -> Result<GenerateResult> {
        let pch_include = pch_include_line(self.project.name());
        let mut result = GenerateResult::default();

        for step in self.steps(root)? {
            match step {
                Step::Dir(dir) => {
                    std::fs::create_dir_all(&dir)
                        .map_err(|e| Error::io("create directory", &dir, e))?;
                }
                Step::Write { dest, content } => {
                    write_file(&dest, content.as_bytes())?;
                    result.push(root, &dest, FileKind::Generated);
                }
                Step::Copy { source, dest } => {
                    fs::copy_file(&source, &dest)?;
                    result.push(root, &dest, FileKind::Copied);
                }
                Step::Migrate { source, dest } => {
                    fs::copy_with_prefix(&source, &dest, pch_include.as_bytes())?;
                    result.push(root, &dest, FileKind::Migrated);
                }
                Step::CopyTree { source, dest } => {
                    for copied in fs::copy_dir_recursive(&source, &dest)? {
                        result.push(root, &copied, FileKind::Copied);
                    }
                }
            }
        }

        tracing::debug!(
            root = %root.display(),
            generated = result.count(FileKind::Generated),
            migrated = result.count(FileKind::Migrated),
            copied = result.count(FileKind::Copied),
            "generated plugin"
        );

        Ok(result)
    }

    fn steps(&self, root: &Path) -> Result<Vec<Step>> {
        let name = self.project.name();
        let layout = PluginLayout::new(root, name);
        let mut steps = Vec::new();

        // Descriptor
        steps.push(write(&self.descriptor, root));

        // Module directory and build rules
        steps.push(Step::Dir(layout.module_dir()));
        steps.push(Step::Copy {
            source: self.project.build_descriptor(),
            dest: layout.build_descriptor(),
        });

        // Public interface
        steps.push(Step::Dir(layout.public_dir()));
        steps.push(write(&ModuleInterface::new(name), root));

        // Private implementation; the PCH goes first since migrated files include it
        steps.push(Step::Dir(layout.private_dir()));
        steps.push(write(&PrivatePch::new(name), root));
        steps.push(write(&ModuleImpl::new(name), root));
        let sources = self.project.migrated_sources()?;
        tracing::debug!(count = sources.len(), "migrating implementation files");
        for source in sources {
            let dest = layout.private_dir().join(file_name(&source)?);
            steps.push(Step::Migrate { source, dest });
        }

        // Headers, unfiltered
        steps.push(Step::Dir(layout.classes_dir()));
        let headers = self.project.headers()?;
        tracing::debug!(count = headers.len(), "copying headers");
        for source in headers {
            let dest = layout.classes_dir().join(file_name(&source)?);
            steps.push(Step::Copy { source, dest });
        }

        if self.options.third_party {
            let source = self.project.third_party_dir();
            if source.is_dir() {
                steps.push(Step::CopyTree {
                    source,
                    dest: layout.third_party_dir(),
                });
            } else {
                tracing::debug!("no ThirdParty directory, skipping");
            }
        }

        if let Some(platform) = &self.options.binaries {
            let source_dir = self.project.binaries_dir(platform);
            let binaries = binary_artifacts(&source_dir)?;
            tracing::debug!(count = binaries.len(), platform = %platform, "copying binaries");
            if !binaries.is_empty() {
                steps.push(Step::Dir(layout.binaries_dir(platform)));
            }
            for source in binaries {
                let dest = layout.binaries_dir(platform).join(file_name(&source)?);
                steps.push(Step::Copy { source, dest });
            }
        }

        Ok(steps)
    }
}

impl GenerateResult {
    fn push(&mut self, root: &Path, path: &Path, kind: FileKind) {
        let path = fs::relative_display(root, path);
        tracing::trace!(path = %path, ?kind, "created");
        self.files.push(CreatedFile { path, kind });
    }
}

fn write(file: &dyn GeneratedFile, root: &Path) -> Step {
    Step::Write {
        dest: file.path(root),
        content: file.render(),
    }
}

fn file_name(path: &Path) -> Result<&std::ffi::OsStr> {
    path.file_name().ok_or_else(|| {
        Error::io(
            "name",
            path,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"),
        )
    })
}

/// Module manifests and compiled artifacts in `dir`, sorted by name.
fn binary_artifacts(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = fs::list_files(dir, MODULE_MANIFEST_EXTENSION)?;
    for extension in BINARY_EXTENSIONS {
        files.extend(fs::list_files(dir, extension)?);
    }
    files.sort();
    Ok(files)
}
