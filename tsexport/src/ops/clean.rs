//! Clean operation - remove generated declarations.

use std::path::Path;

use eyre::{Context, Result};
use tracing::debug;
use tsexport_codegen::LanguageCodegen;
use tsexport_codegen_typescript::Generator;
use tsexport_manifest::Manifest;

use crate::reports::CleanReport;

/// Options for the clean operation.
pub struct CleanOptions<'a> {
    /// Output root containing generated files.
    pub output_dir: &'a Path,
    /// Whether to preview without deleting.
    pub dry_run: bool,
}

/// Execute the clean operation.
///
/// Deletes every `.ts` file under the output root and any folder left
/// empty; other files stay.
pub fn clean(manifest: &Manifest, opts: CleanOptions) -> Result<CleanReport> {
    let generator = Generator::from_manifest(manifest);
    let result = if opts.dry_run {
        generator
            .preview_clean(opts.output_dir)
            .wrap_err("Failed to preview clean")?
    } else {
        generator
            .clean(opts.output_dir)
            .wrap_err("Failed to clean output directory")?
    };

    debug!(
        files = result.deleted_files.len(),
        dirs = result.removed_dirs.len(),
        dry_run = opts.dry_run,
        "clean finished"
    );

    Ok(CleanReport {
        dry_run: opts.dry_run,
        output_dir: opts.output_dir.to_path_buf(),
        result,
    })
}
