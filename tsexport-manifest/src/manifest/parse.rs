//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{Manifest, OutputConfig, lower, validate::ParseContext};
use crate::{Error, Result};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "tsexport.toml")
    }
}

impl Manifest {
    /// Parse a tsexport.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a tsexport.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let ctx = ParseContext::new(content, filename);
    let mut manifest: Manifest =
        toml::from_str(content).map_err(|e| ctx.source_context().parse_error(e))?;

    validate_output(&manifest.output, &ctx)?;
    manifest.registry = lower::build_registry(&manifest.types, &ctx)?;
    Ok(manifest)
}

fn validate_output(output: &OutputConfig, ctx: &ParseContext) -> Result<()> {
    if output.root.as_os_str().is_empty() {
        return Err(ctx.source_context().validation_error(
            "output root cannot be empty",
            ctx.find_span("root", ""),
        ));
    }
    if !(1..=8).contains(&output.indent) {
        return Err(ctx.source_context().validation_error(
            format!("indent must be between 1 and 8 spaces, got {}", output.indent),
            None,
        ));
    }
    Ok(())
}
