//! `project2plugin.toml` configuration.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use project2plugin_core::{DEFAULT_BASE_DIR, OverwritePolicy};
use serde::Deserialize;

use crate::{Error, Result};

/// File name looked up in the working directory when no config path is given.
pub const CONFIG_FILE_NAME: &str = "project2plugin.toml";

/// Platform subdirectory of `Binaries/` copied by default.
pub const DEFAULT_BINARIES_PLATFORM: &str = "Win64";

/// Conversion settings. Every key is optional; command-line flags override them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory plugins are created under
    pub base_dir: PathBuf,
    /// How an existing output for the same project is handled
    pub policy: OverwritePolicy,
    /// Copy the project's ThirdParty directory
    pub third_party: bool,
    /// Copy compiled artifacts from Binaries/<platform>
    pub binaries: bool,
    /// Platform directory under Binaries/
    pub platform: String,
    /// Stamp VersionName into the descriptor; defaults to the policy's choice
    pub version_name: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            policy: OverwritePolicy::default(),
            third_party: true,
            binaries: false,
            platform: DEFAULT_BINARIES_PLATFORM.to_string(),
            version_name: None,
        }
    }
}

impl Config {
    /// Open and parse a config file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Load `project2plugin.toml` from `dir` if it exists.
    pub fn discover(dir: &Path) -> Result<Option<Self>> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::open(&path).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Parse config content, using `filename` in error reports.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))
    }

    /// Whether the descriptor carries a VersionName.
    ///
    /// Replaced outputs are stamped; timestamped outputs already carry the
    /// time in their directory name.
    pub fn version_name_enabled(&self) -> bool {
        self.version_name
            .unwrap_or(self.policy == OverwritePolicy::Replace)
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, CONFIG_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.base_dir, PathBuf::from("Plugins"));
        assert!(config.third_party);
        assert!(!config.binaries);
        assert!(config.version_name_enabled());
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_str(
            r#"
            base_dir = "Out"
            policy = "timestamp"
            third_party = false
            binaries = true
            platform = "Linux"
            "#,
        )
        .unwrap();

        assert_eq!(config.base_dir, PathBuf::from("Out"));
        assert_eq!(config.policy, OverwritePolicy::Timestamp);
        assert!(!config.third_party);
        assert!(config.binaries);
        assert_eq!(config.platform, "Linux");
        assert!(!config.version_name_enabled());
    }

    #[test]
    fn test_explicit_version_name_wins_over_policy() {
        let config = Config::from_str(
            r#"
            policy = "timestamp"
            version_name = true
            "#,
        )
        .unwrap();
        assert!(config.version_name_enabled());
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let err = Config::from_str("overwrite = true\n").unwrap_err();
        match *err {
            Error::Parse { filename, .. } => assert_eq!(filename, CONFIG_FILE_NAME),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_policy_is_rejected() {
        assert!(Config::from_str(r#"policy = "merge""#).is_err());
    }

    #[test]
    fn test_discover() {
        let temp = TempDir::new().unwrap();
        assert_eq!(Config::discover(temp.path()).unwrap(), None);

        std::fs::write(temp.path().join(CONFIG_FILE_NAME), "binaries = true\n").unwrap();
        let config = Config::discover(temp.path()).unwrap().unwrap();
        assert!(config.binaries);
    }

    #[test]
    fn test_open_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = Config::open(temp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
