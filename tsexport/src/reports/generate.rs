//! Generate command report data structures.

use std::path::PathBuf;

use tsexport_codegen::CleanResult;

use super::output::{Output, Report};

/// Report data from a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Output root.
    pub output_dir: PathBuf,
    /// Number of types declared in the manifest.
    pub type_count: usize,
    /// Files written, or the preview.
    pub result: GenerationResult,
}

/// Result of generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// What the synchronizer removed first.
    pub cleaned: CleanResult,
    /// Declaration files, relative to the output root.
    pub written: Vec<String>,
    /// Index file, if one was written.
    pub index: Option<String>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
    /// What the synchronizer would remove first.
    pub stale: CleanResult,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        let root = self.output_dir.display().to_string();

        if written.cleaned.created_root {
            out.key_value("Created", &root);
        } else if !written.cleaned.is_empty() {
            out.key_value(
                "Cleared",
                &format!(
                    "{} ({} files, {} folders)",
                    root,
                    written.cleaned.deleted_files.len(),
                    written.cleaned.removed_dirs.len()
                ),
            );
        }

        if written.written.is_empty() {
            out.preformatted(&format!(
                "No exportable types among {} declared.",
                self.type_count
            ));
            return;
        }

        out.section(&format!(
            "Generated ({} of {} types)",
            written.written.len(),
            self.type_count
        ));
        for path in &written.written {
            out.added_item(path);
        }
        if let Some(index) = &written.index {
            out.added_item(index);
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        if !preview.stale.deleted_files.is_empty() {
            out.preformatted(&format!(
                "{} existing files would be deleted",
                preview.stale.deleted_files.len()
            ));
        }
        out.preformatted(&format!(
            "{} files would be generated in {}",
            preview.files.len(),
            self.output_dir.display()
        ));
    }
}
