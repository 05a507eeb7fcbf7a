//! List command report data structures.

use serde::Serialize;

use super::output::{Output, Report};

/// One type that would be exported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    /// Qualified id (`App.Models.Person`)
    pub id: String,
    /// Interface name in the output
    pub export_name: String,
    /// File the interface is written to
    pub path: String,
}

/// Report data for `tsexport list`.
#[derive(Debug, Serialize)]
pub struct ListReport {
    pub root: String,
    pub types: Vec<ListEntry>,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.types.is_empty() {
            out.preformatted("No exportable types");
            return;
        }

        out.section(&format!("Types ({})", self.types.len()));
        let width = self
            .types
            .iter()
            .map(|entry| entry.export_name.len())
            .max()
            .unwrap_or(0);
        for entry in &self.types {
            out.list_item(&format!(
                "{:width$}  {}  ({})",
                entry.export_name,
                entry.path,
                entry.id,
                width = width
            ));
        }
    }
}
