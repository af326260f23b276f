//! Source project resolution.

use std::path::{Path, PathBuf};

use crate::{Error, Result, fs};

/// Directory holding the project's module sources, relative to the project root.
pub const SOURCE_DIR: &str = "Source";
/// Optional directory of vendored dependencies, relative to the project root.
pub const THIRD_PARTY_DIR: &str = "ThirdParty";
/// Directory of compiled artifacts, relative to the project root.
pub const BINARIES_DIR: &str = "Binaries";

/// An engine project on disk, identified by its absolute root and name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    root: PathBuf,
    name: String,
}

impl Project {
    /// Resolve a user-supplied path into an absolute project root.
    ///
    /// The name is the final path segment. No filesystem checks happen here;
    /// see [`Project::validate`].
    pub fn resolve(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let absolute =
            std::path::absolute(path).map_err(|e| Error::io("resolve", path, e))?;
        let root = fs::normalize(&absolute);

        let name = root
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                Box::new(Error::InvalidProjectName {
                    path: path.to_path_buf(),
                })
            })?
            .to_string();

        Ok(Self { root, name })
    }

    /// Absolute project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Project name, which is also the plugin and module name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `<root>/Source/<name>`
    pub fn source_dir(&self) -> PathBuf {
        self.root.join(SOURCE_DIR).join(&self.name)
    }

    /// `<root>/Source/<name>/<name>.Build.cs`
    pub fn build_descriptor(&self) -> PathBuf {
        self.source_dir().join(self.build_descriptor_name())
    }

    /// File name of the build descriptor.
    pub fn build_descriptor_name(&self) -> String {
        format!("{}.Build.cs", self.name)
    }

    /// `<root>/ThirdParty`
    pub fn third_party_dir(&self) -> PathBuf {
        self.root.join(THIRD_PARTY_DIR)
    }

    /// `<root>/Binaries/<platform>`
    pub fn binaries_dir(&self, platform: &str) -> PathBuf {
        self.root.join(BINARIES_DIR).join(platform)
    }

    /// Check that the project exists and has a build descriptor.
    ///
    /// Run before anything is written so a broken project leaves no output behind.
    pub fn validate(&self) -> Result<()> {
        if !self.root.exists() {
            return Err(Box::new(Error::ProjectNotFound {
                path: self.root.clone(),
            }));
        }
        if !self.root.is_dir() {
            return Err(Box::new(Error::NotADirectory {
                path: self.root.clone(),
            }));
        }

        let build = self.build_descriptor();
        if !build.is_file() {
            return Err(Box::new(Error::MissingBuildDescriptor {
                path: build,
                name: self.name.clone(),
            }));
        }

        Ok(())
    }

    /// Implementation files directly in the source directory.
    pub fn sources(&self) -> Result<Vec<PathBuf>> {
        fs::list_files(&self.source_dir(), "cpp")
    }

    /// Header files directly in the source directory.
    pub fn headers(&self) -> Result<Vec<PathBuf>> {
        fs::list_files(&self.source_dir(), "h")
    }

    /// Implementation files to migrate: every source except `<name>.cpp`,
    /// which is replaced by the generated module implementation.
    pub fn migrated_sources(&self) -> Result<Vec<PathBuf>> {
        Ok(self
            .sources()?
            .into_iter()
            .filter(|path| path.file_stem().and_then(|s| s.to_str()) != Some(self.name.as_str()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use std::fs as stdfs;

    use tempfile::TempDir;

    use super::*;

    fn scaffold(temp: &TempDir, name: &str) -> PathBuf {
        let root = temp.path().join(name);
        let source = root.join("Source").join(name);
        stdfs::create_dir_all(&source).unwrap();
        stdfs::write(source.join(format!("{name}.Build.cs")), "// build").unwrap();
        stdfs::write(source.join(format!("{name}.cpp")), "// main").unwrap();
        stdfs::write(source.join("Util.cpp"), "// util").unwrap();
        stdfs::write(source.join("Util.h"), "// header").unwrap();
        root
    }

    #[test]
    fn test_resolve_derives_name_from_last_segment() {
        let project = Project::resolve("/games/Foo/").unwrap();
        assert_eq!(project.name(), "Foo");
        assert_eq!(project.root(), Path::new("/games/Foo"));
    }

    #[test]
    fn test_resolve_normalizes_parent_components() {
        let project = Project::resolve("/games/Foo/Source/..").unwrap();
        assert_eq!(project.name(), "Foo");
    }

    #[test]
    fn test_resolve_relative_path_is_absolute() {
        let project = Project::resolve("Foo").unwrap();
        assert!(project.root().is_absolute());
        assert_eq!(project.name(), "Foo");
    }

    #[test]
    fn test_resolve_root_has_no_name() {
        let err = Project::resolve("/").unwrap_err();
        assert!(matches!(*err, Error::InvalidProjectName { .. }));
    }

    #[test]
    fn test_derived_paths() {
        let project = Project::resolve("/games/Foo").unwrap();
        assert_eq!(
            project.build_descriptor(),
            PathBuf::from("/games/Foo/Source/Foo/Foo.Build.cs")
        );
        assert_eq!(
            project.third_party_dir(),
            PathBuf::from("/games/Foo/ThirdParty")
        );
        assert_eq!(
            project.binaries_dir("Win64"),
            PathBuf::from("/games/Foo/Binaries/Win64")
        );
    }

    #[test]
    fn test_validate_missing_project() {
        let temp = TempDir::new().unwrap();
        let project = Project::resolve(temp.path().join("Missing")).unwrap();

        let err = project.validate().unwrap_err();
        assert!(matches!(*err, Error::ProjectNotFound { .. }));
    }

    #[test]
    fn test_validate_file_is_not_a_directory() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("Foo");
        stdfs::write(&file, "").unwrap();

        let err = Project::resolve(&file).unwrap().validate().unwrap_err();
        assert!(matches!(*err, Error::NotADirectory { .. }));
    }

    #[test]
    fn test_validate_missing_build_descriptor() {
        let temp = TempDir::new().unwrap();
        let root = scaffold(&temp, "Foo");
        stdfs::remove_file(root.join("Source").join("Foo").join("Foo.Build.cs")).unwrap();

        let err = Project::resolve(&root).unwrap().validate().unwrap_err();
        assert!(matches!(*err, Error::MissingBuildDescriptor { .. }));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_migrated_sources_skip_module_file() {
        let temp = TempDir::new().unwrap();
        let root = scaffold(&temp, "Foo");
        let project = Project::resolve(&root).unwrap();
        project.validate().unwrap();

        let sources = project.migrated_sources().unwrap();
        assert_eq!(sources, vec![project.source_dir().join("Util.cpp")]);

        let headers = project.headers().unwrap();
        assert_eq!(headers, vec![project.source_dir().join("Util.h")]);
    }
}
