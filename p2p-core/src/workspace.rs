//! Output directory setup.

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{BINARIES_DIR, Error, Project, Result, fs};

/// Default base directory plugins are written under.
pub const DEFAULT_BASE_DIR: &str = "Plugins";

/// Format of the suffix appended to timestamped output directories.
pub const DIR_TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// How an existing output directory for the same project is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OverwritePolicy {
    /// Delete `<base>/<name>` and recreate it.
    #[default]
    Replace,
    /// Create `<base>/<name>-<timestamp>` next to earlier runs.
    #[serde(alias = "timestamped", alias = "unique")]
    Timestamp,
}

impl OverwritePolicy {
    /// Returns the policy identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            OverwritePolicy::Replace => "replace",
            OverwritePolicy::Timestamp => "timestamp",
        }
    }
}

impl fmt::Display for OverwritePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OverwritePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "replace" => Ok(OverwritePolicy::Replace),
            "timestamp" | "timestamped" | "unique" => Ok(OverwritePolicy::Timestamp),
            _ => Err(format!(
                "unknown overwrite policy '{}', expected 'replace' or 'timestamp'",
                s
            )),
        }
    }
}

/// The output directory a conversion writes into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    root: PathBuf,
    policy: OverwritePolicy,
    replaced: bool,
}

impl Workspace {
    /// Compute the output root without touching the filesystem.
    pub fn plan(base: &Path, name: &str, policy: OverwritePolicy, now: DateTime<Utc>) -> Self {
        let dir_name = match policy {
            OverwritePolicy::Replace => name.to_string(),
            OverwritePolicy::Timestamp => {
                format!("{}-{}", name, now.format(DIR_TIMESTAMP_FORMAT))
            }
        };

        Self {
            root: base.join(dir_name),
            policy,
            replaced: false,
        }
    }

    /// Create the output root according to `policy`.
    ///
    /// `Replace` removes a previous output for the same project first.
    /// `Timestamp` tolerates an existing directory with the same stamp.
    pub fn init(
        base: &Path,
        name: &str,
        policy: OverwritePolicy,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        let mut workspace = Self::plan(base, name, policy, now);

        if policy == OverwritePolicy::Replace {
            workspace.replaced = fs::remove_dir_if_exists(&workspace.root)?;
        }

        std::fs::create_dir_all(&workspace.root)
            .map_err(|e| Error::io("create directory", &workspace.root, e))?;

        tracing::debug!(
            root = %workspace.root.display(),
            policy = %policy,
            replaced = workspace.replaced,
            "initialized workspace"
        );

        Ok(workspace)
    }

    /// Reject an output root that would replace or feed back into the project.
    ///
    /// The output may sit inside the project, but it must not be the project
    /// root or one of its parents. It must also stay clear of the directories
    /// a conversion reads from, because `Replace` deletes the output root and
    /// the `ThirdParty` copy walks its source while writing.
    pub fn check_disjoint(&self, project: &Project) -> Result<()> {
        let output = std::path::absolute(&self.root)
            .map(|root| fs::normalize(&root))
            .map_err(|e| Error::io("resolve", &self.root, e))?;

        let inputs = [
            project.source_dir(),
            project.third_party_dir(),
            project.root().join(BINARIES_DIR),
        ];
        let overlaps = project.root().starts_with(&output)
            || inputs
                .iter()
                .any(|input| input.starts_with(&output) || output.starts_with(input));

        if overlaps {
            return Err(Box::new(Error::OutputOverlapsProject {
                output,
                project: project.root().to_path_buf(),
            }));
        }
        Ok(())
    }

    /// The output root every later step writes under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn policy(&self) -> OverwritePolicy {
        self.policy
    }

    /// Whether a previous output directory was deleted.
    pub fn replaced(&self) -> bool {
        self.replaced
    }
}
