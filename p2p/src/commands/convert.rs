use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::Args;
use eyre::Result;
use project2plugin_codegen::GeneratorOptions;
use project2plugin_core::{OverwritePolicy, Project};
use project2plugin_manifest::Config;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ConvertCommand {
    /// Path to the project directory
    pub path: PathBuf,

    /// Config file (defaults to ./project2plugin.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory the plugin is created under [default: Plugins]
    #[arg(short, long)]
    pub base: Option<PathBuf>,

    /// Existing output handling: replace or timestamp [default: replace]
    #[arg(short, long)]
    pub policy: Option<OverwritePolicy>,

    /// Do not copy the project's ThirdParty directory
    #[arg(long)]
    pub no_third_party: bool,

    /// Copy compiled modules from Binaries/<platform>
    #[arg(long)]
    pub binaries: bool,

    /// Platform directory under Binaries/ [default: Win64]
    #[arg(long)]
    pub platform: Option<String>,

    /// Stamp VersionName into the descriptor
    #[arg(long, conflicts_with = "no_version_name")]
    pub version_name: bool,

    /// Leave VersionName out of the descriptor
    #[arg(long)]
    pub no_version_name: bool,

    /// Preview the plugin without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl ConvertCommand {
    pub fn run(&self) -> Result<()> {
        let config = self.apply(self.load_config());
        tracing::debug!(?config, "resolved configuration");

        let project = Project::resolve(&self.path).unwrap_or_exit();
        project.validate().unwrap_or_exit();

        let report = ops::convert(
            &project,
            ops::convert::ConvertOptions {
                base_dir: &config.base_dir,
                policy: config.policy,
                version_name: config.version_name_enabled(),
                generator: GeneratorOptions {
                    third_party: config.third_party,
                    binaries: config.binaries.then(|| config.platform.clone()),
                },
                dry_run: self.dry_run,
                now: Utc::now(),
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    fn load_config(&self) -> Config {
        match &self.config {
            Some(path) => Config::open(path).unwrap_or_exit(),
            None => Config::discover(Path::new("."))
                .unwrap_or_exit()
                .unwrap_or_default(),
        }
    }

    /// Layer command-line flags over the file configuration.
    fn apply(&self, mut config: Config) -> Config {
        if let Some(base) = &self.base {
            config.base_dir = base.clone();
        }
        if let Some(policy) = self.policy {
            config.policy = policy;
        }
        if self.no_third_party {
            config.third_party = false;
        }
        if self.binaries {
            config.binaries = true;
        }
        if let Some(platform) = &self.platform {
            config.platform = platform.clone();
        }
        if self.version_name {
            config.version_name = Some(true);
        } else if self.no_version_name {
            config.version_name = Some(false);
        }
        config
    }
}
