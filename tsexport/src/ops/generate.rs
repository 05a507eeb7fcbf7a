//! Generate operation - one declaration per exported type.

use std::path::Path;

use eyre::{Context, Result};
use tracing::debug;
use tsexport_codegen::LanguageCodegen;
use tsexport_codegen_typescript::Generator;
use tsexport_manifest::Manifest;

use crate::reports::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Output root; files land below it.
    pub output_dir: &'a Path,
    /// Overrides `generate_index` from the manifest when set.
    pub index: Option<bool>,
    /// Whether to preview without touching disk.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Clears stale declarations from the output root first, then writes the
/// declaration files and, if enabled, the index.
pub fn generate(manifest: &Manifest, opts: GenerateOptions) -> Result<GenerateReport> {
    let mut generator = Generator::from_manifest(manifest);
    debug!(
        types = manifest.registry().len(),
        root = %opts.output_dir.display(),
        dry_run = opts.dry_run,
        "starting generation"
    );
    if let Some(index) = opts.index {
        generator = generator.with_index(index);
    }

    let result = if opts.dry_run {
        let stale = generator
            .preview_clean(opts.output_dir)
            .wrap_err("Failed to scan output directory")?;
        let files = generator
            .preview()
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files, stale })
    } else {
        let result = generator
            .generate(opts.output_dir)
            .wrap_err("Failed to generate declarations")?;
        GenerationResult::Written(WrittenResult {
            cleaned: result.cleaned,
            written: result.written,
            index: result.index,
        })
    };

    Ok(GenerateReport {
        output_dir: opts.output_dir.to_path_buf(),
        type_count: manifest.registry().len(),
        result,
    })
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    const MANIFEST: &str = r#"
[output]
root = "out"
line_ending = "lf"

[[types]]
name = "Person"
namespace = "App.Models"
export = true

[[types.members]]
name = "Name"
type = "string"
"#;

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("out");
        let manifest = Manifest::from_str(MANIFEST).unwrap();

        let report = generate(
            &manifest,
            GenerateOptions {
                output_dir: &root,
                index: Some(true),
                dry_run: true,
            },
        )
        .unwrap();

        let GenerationResult::Preview(preview) = report.result else {
            panic!("expected a preview");
        };
        let paths: Vec<&str> = preview.files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, vec!["Models/Person.ts", "index.ts"]);
        assert!(preview.stale.created_root);
        assert!(!root.exists());
    }

    #[test]
    fn test_written() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("out");
        let manifest = Manifest::from_str(MANIFEST).unwrap();

        let report = generate(
            &manifest,
            GenerateOptions {
                output_dir: &root,
                index: None,
                dry_run: false,
            },
        )
        .unwrap();

        let GenerationResult::Written(written) = report.result else {
            panic!("expected written files");
        };
        assert_eq!(written.written, vec!["Models/Person.ts"]);
        assert!(written.index.is_none());
        assert!(root.join("Models/Person.ts").is_file());
    }
}
