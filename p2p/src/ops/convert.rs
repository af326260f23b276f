//! Convert operation - project directory to plugin directory.

use std::path::Path;

use chrono::{DateTime, Utc};
use eyre::{Context, Result};
use project2plugin_codegen::{Generator, GeneratorOptions};
use project2plugin_core::{OverwritePolicy, Project, Workspace};
use project2plugin_manifest::PluginDescriptor;

use crate::reports::{ConvertReport, ConvertResult};

/// Options for the convert operation.
pub struct ConvertOptions<'a> {
    /// Directory the plugin directory is created under.
    pub base_dir: &'a Path,
    /// How an existing output for the same project is handled.
    pub policy: OverwritePolicy,
    /// Whether the descriptor carries a VersionName.
    pub version_name: bool,
    /// Optional copy steps.
    pub generator: GeneratorOptions,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Generation time, used for VersionName and timestamped directories.
    pub now: DateTime<Utc>,
}

/// Execute the convert operation.
///
/// The project and the planned output root are checked before the output
/// directory is touched. A project without build rules, or an output root
/// overlapping the project, leaves the filesystem unchanged.
pub fn convert(project: &Project, opts: ConvertOptions) -> Result<ConvertReport> {
    project.validate().wrap_err("Invalid project")?;

    let planned = Workspace::plan(opts.base_dir, project.name(), opts.policy, opts.now);
    planned
        .check_disjoint(project)
        .wrap_err("Invalid output directory")?;

    let mut descriptor = PluginDescriptor::new(project.name());
    if opts.version_name {
        descriptor = descriptor.with_version_name(opts.now);
    }
    let generator = Generator::new(project, descriptor).with_options(opts.generator);

    let (workspace, result) = if opts.dry_run {
        let files = generator.preview().wrap_err("Failed to plan plugin")?;
        (planned, ConvertResult::Preview(files))
    } else {
        let workspace = Workspace::init(opts.base_dir, project.name(), opts.policy, opts.now)
            .wrap_err("Failed to prepare output directory")?;
        let generated = generator
            .generate(workspace.root())
            .wrap_err("Failed to generate plugin")?;
        (workspace, ConvertResult::Written(generated.files))
    };

    tracing::info!(
        project = %project.name(),
        output = %workspace.root().display(),
        dry_run = opts.dry_run,
        "converted project"
    );

    Ok(ConvertReport {
        name: project.name().to_string(),
        project_root: project.root().to_path_buf(),
        output_root: workspace.root().to_path_buf(),
        policy: workspace.policy(),
        replaced: workspace.replaced(),
        result,
    })
}
