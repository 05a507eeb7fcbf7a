//! One `<ExportName>.ts` declaration file.

use std::path::{Path, PathBuf};

use tsexport_codegen::{Indent, Location};
use tsexport_core::{GeneratedFile, LineEnding};

use crate::code_file::CodeFile;

/// A declaration file at a planned location.
pub struct DeclarationTs {
    location: Location,
    file: CodeFile,
    indent: Indent,
    line_ending: LineEnding,
}

impl DeclarationTs {
    pub fn new(location: Location, file: CodeFile) -> Self {
        Self {
            location,
            file,
            indent: Indent::default(),
            line_ending: LineEnding::default(),
        }
    }

    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    pub fn location(&self) -> &Location {
        &self.location
    }
}

impl GeneratedFile for DeclarationTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.location.relative)
    }

    fn render(&self) -> String {
        self.line_ending
            .apply(&self.file.render_with_indent(self.indent))
    }
}
