//! Convert command report data structures.

use std::path::PathBuf;

use project2plugin_codegen::{CreatedFile, FileKind, PreviewFile};
use project2plugin_core::OverwritePolicy;

use super::output::{Output, Report};

/// Report data from converting a project.
#[derive(Debug)]
pub struct ConvertReport {
    /// Project (and plugin) name.
    pub name: String,
    /// Absolute project root.
    pub project_root: PathBuf,
    /// Plugin output root.
    pub output_root: PathBuf,
    /// Overwrite policy used.
    pub policy: OverwritePolicy,
    /// Whether a previous output was deleted.
    pub replaced: bool,
    /// Files written, or the plan of a dry run.
    pub result: ConvertResult,
}

#[derive(Debug)]
pub enum ConvertResult {
    /// Files were written to disk.
    Written(Vec<CreatedFile>),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

impl Report for ConvertReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            ConvertResult::Written(files) => self.render_written(out, files),
            ConvertResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl ConvertReport {
    fn render_header(&self, out: &mut dyn Output) {
        out.key_value("Project", &self.project_root.display().to_string());
        out.key_value("Plugin", &self.output_root.display().to_string());
        out.key_value("Policy", self.policy.as_str());
        out.newline();
    }

    fn render_written(&self, out: &mut dyn Output, files: &[CreatedFile]) {
        if self.replaced {
            out.warning(&format!(
                "replaced previous output at {}",
                self.output_root.display()
            ));
        }

        self.render_header(out);

        out.section(&format!("Created ({})", files.len()));
        for file in files {
            out.added_item(&describe(&file.path, file.kind));
        }
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        self.render_header(out);

        for file in files {
            out.divider(&describe(&file.path, file.kind));
            match (&file.content, &file.source) {
                (Some(content), _) => out.preformatted(content),
                (None, Some(source)) => out.preformatted(&format!("from {}", source.display())),
                (None, None) => {}
            }
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} files would be created for {}",
            files.len(),
            self.name
        ));
    }
}

fn describe(path: &str, kind: FileKind) -> String {
    match kind {
        FileKind::Generated => path.to_string(),
        FileKind::Migrated => format!("{} (migrated)", path),
        FileKind::Copied => format!("{} (copied)", path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::BufferOutput;

    fn report(result: ConvertResult, replaced: bool) -> ConvertReport {
        ConvertReport {
            name: "Foo".to_string(),
            project_root: PathBuf::from("/games/Foo"),
            output_root: PathBuf::from("Plugins/Foo"),
            policy: OverwritePolicy::Replace,
            replaced,
            result,
        }
    }

    #[test]
    fn test_render_written() {
        let report = report(
            ConvertResult::Written(vec![
                CreatedFile {
                    path: "Foo.uplugin".to_string(),
                    kind: FileKind::Generated,
                },
                CreatedFile {
                    path: "Source/Foo/Private/FooUtil.cpp".to_string(),
                    kind: FileKind::Migrated,
                },
            ]),
            true,
        );

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "warning: replaced previous output at Plugins/Foo",
                "Project: /games/Foo",
                "Plugin: Plugins/Foo",
                "Policy: replace",
                "",
                "Created (2):",
                "  + Foo.uplugin",
                "  + Source/Foo/Private/FooUtil.cpp (migrated)",
            ]
        );
    }

    #[test]
    fn test_render_preview() {
        let report = report(
            ConvertResult::Preview(vec![
                PreviewFile {
                    path: "Source/Foo/Private/FooPrivatePCH.h".to_string(),
                    kind: FileKind::Generated,
                    content: Some(String::new()),
                    source: None,
                },
                PreviewFile {
                    path: "Source/Foo/Classes/FooUtil.h".to_string(),
                    kind: FileKind::Copied,
                    content: None,
                    source: Some(PathBuf::from("/games/Foo/Source/Foo/FooUtil.h")),
                },
            ]),
            false,
        );

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert!(out.lines.contains(&"── Source/Foo/Classes/FooUtil.h (copied) ──".to_string()));
        assert!(out.lines.contains(&"from /games/Foo/Source/Foo/FooUtil.h".to_string()));
        assert_eq!(
            out.lines.last().map(String::as_str),
            Some("2 files would be created for Foo")
        );
    }
}
