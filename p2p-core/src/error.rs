use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for project2plugin operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("project directory '{path}' does not exist")]
    #[diagnostic(
        code(p2p::project_not_found),
        help("pass the path of an existing engine project directory")
    )]
    ProjectNotFound { path: PathBuf },

    #[error("'{path}' is not a directory")]
    #[diagnostic(
        code(p2p::not_a_directory),
        help("pass the project directory, not a file inside it")
    )]
    NotADirectory { path: PathBuf },

    #[error("cannot derive a project name from '{path}'")]
    #[diagnostic(
        code(p2p::invalid_project_name),
        help("the last path component must be a valid UTF-8 directory name")
    )]
    InvalidProjectName { path: PathBuf },

    #[error("build descriptor '{path}' not found")]
    #[diagnostic(
        code(p2p::missing_build_descriptor),
        help("project '{name}' must provide Source/{name}/{name}.Build.cs")
    )]
    MissingBuildDescriptor { path: PathBuf, name: String },

    #[error("output directory '{output}' overlaps project '{project}'")]
    #[diagnostic(
        code(p2p::output_overlaps_project),
        help("choose a base directory that does not contain the project or its Source, ThirdParty and Binaries directories")
    )]
    OutputOverlapsProject { output: PathBuf, project: PathBuf },

    #[error("failed to {action} '{path}'")]
    #[diagnostic(code(p2p::io))]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Wrap an I/O error with the operation and path it happened on
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            action,
            path: path.into(),
            source,
        })
    }

    /// Whether this error means something required was not found
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::ProjectNotFound { .. } | Error::MissingBuildDescriptor { .. } => true,
            Error::Io { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}
