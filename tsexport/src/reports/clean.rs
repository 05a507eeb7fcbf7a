//! Clean command report data structures.

use std::path::PathBuf;

use tsexport_codegen::CleanResult;

use super::output::{Output, Report};

/// Report data from clearing the output root.
#[derive(Debug)]
pub struct CleanReport {
    /// Whether this was a dry run.
    pub dry_run: bool,
    /// Output root.
    pub output_dir: PathBuf,
    pub result: CleanResult,
}

impl Report for CleanReport {
    fn render(&self, out: &mut dyn Output) {
        if self.result.created_root {
            let verb = if self.dry_run { "Would create" } else { "Created" };
            out.key_value(verb, &self.output_dir.display().to_string());
            return;
        }

        if self.result.is_empty() {
            out.preformatted("No generated files found.");
            return;
        }

        out.section(if self.dry_run { "Would delete" } else { "Deleted" });
        for path in &self.result.deleted_files {
            out.removed_item(path);
        }
        for dir in &self.result.removed_dirs {
            out.removed_item(&format!("{}/", dir));
        }
    }
}
