//! `import type` statements for a module's default export.

use std::fmt;

use tsexport_codegen::{CodeFragment, Renderable};

/// `import type Name from 'module';`
///
/// Ordering compares the bound name first, so a sorted list reads
/// alphabetically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Import {
    name: String,
    module: String,
}

impl Import {
    pub fn type_default(name: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            module: module.into(),
        }
    }
}

impl fmt::Display for Import {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "import type {} from '{}';", self.name, self.module)
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.to_string())]
    }
}
