//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// A declared type that produces no file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedType {
    pub id: String,
    pub reason: String,
}

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Number of declared types.
    pub type_count: usize,
    /// Number of types that produce a file.
    pub exported_count: usize,
    /// Types that produce no file, with the reason.
    pub skipped: Vec<SkippedType>,
    /// Output paths claimed by more than one type.
    pub warnings: Vec<String>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        if !self.warnings.is_empty() {
            out.newline();
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();
        out.preformatted(&format!(
            "  {} type{}, {} exported",
            self.type_count,
            if self.type_count == 1 { "" } else { "s" },
            self.exported_count
        ));

        if !self.skipped.is_empty() {
            out.newline();
            out.section("Skipped");
            for skipped in &self.skipped {
                out.list_item(&format!("{} ({})", skipped.id, skipped.reason));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_render() {
        let report = CheckReport {
            config_path: PathBuf::from("tsexport.toml"),
            type_count: 2,
            exported_count: 1,
            skipped: vec![SkippedType {
                id: "App.Entity".to_string(),
                reason: "abstract".to_string(),
            }],
            warnings: Vec::new(),
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.lines,
            vec![
                "✓ tsexport.toml is valid",
                "",
                "  2 types, 1 exported",
                "",
                "Skipped:",
                "  - App.Entity (abstract)",
            ]
        );
    }
}
