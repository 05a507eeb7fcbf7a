//! Barrel file re-exporting every generated declaration.

use std::path::{Path, PathBuf};

use tsexport_codegen::FolderMap;
use tsexport_core::{GeneratedFile, LineEnding};

use crate::{ast::Export, code_file::CodeFile};

pub const INDEX_FILE: &str = "index.ts";

/// The `index.ts` file at the output root.
///
/// One `export type { default as <Stem> } from './<path>';` line per
/// generated file, folder by folder, in emission order.
pub struct IndexTs {
    /// (file stem, module path relative to the root)
    entries: Vec<(String, String)>,
    line_ending: LineEnding,
}

impl IndexTs {
    pub fn new(folders: &FolderMap) -> Self {
        let entries = folders
            .files()
            .map(|relative| {
                let module = relative.strip_suffix(".ts").unwrap_or(relative);
                let stem = module.rsplit('/').next().unwrap_or(module);
                (stem.to_string(), module.to_string())
            })
            .collect();
        Self {
            entries,
            line_ending: LineEnding::default(),
        }
    }

    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }
}

impl GeneratedFile for IndexTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(INDEX_FILE)
    }

    fn render(&self) -> String {
        let file = self.entries.iter().fold(CodeFile::new(), |file, (stem, module)| {
            file.export(Export::default_type_from(stem.as_str(), format!("./{module}")))
        });
        self.line_ending.apply(&file.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_lines() {
        let mut folders = FolderMap::new();
        folders.insert("Models", "Models/Person.ts");
        folders.insert("Models", "Models/Order.ts");
        folders.insert("", "Root.ts");

        let index = IndexTs::new(&folders).with_line_ending(LineEnding::Lf);
        assert_eq!(
            index.render(),
            "export type { default as Person } from './Models/Person';\n\
             export type { default as Order } from './Models/Order';\n\
             export type { default as Root } from './Root';\n"
        );
    }

    #[test]
    fn test_crlf() {
        let mut folders = FolderMap::new();
        folders.insert("Models", "Models/Person.ts");

        let index = IndexTs::new(&folders).with_line_ending(LineEnding::Crlf);
        assert_eq!(
            index.render(),
            "export type { default as Person } from './Models/Person';\r\n"
        );
    }

    #[test]
    fn test_path() {
        let index = IndexTs::new(&FolderMap::new());
        assert_eq!(index.render(), "");
        assert_eq!(index.path(Path::new("out")), Path::new("out").join("index.ts"));
    }
}
