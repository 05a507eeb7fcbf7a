//! `export` statements.

use std::fmt;

use tsexport_codegen::{CodeFragment, Renderable};

/// The export forms a declaration file or the index needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Export {
    /// `export default Name;`
    Default(String),
    /// `export type { default as Name } from 'module';`
    DefaultTypeFrom { name: String, module: String },
}

impl Export {
    pub fn default_of(name: impl Into<String>) -> Self {
        Export::Default(name.into())
    }

    /// Re-export the default export of `module` as a type named `name`.
    pub fn default_type_from(name: impl Into<String>, module: impl Into<String>) -> Self {
        Export::DefaultTypeFrom {
            name: name.into(),
            module: module.into(),
        }
    }
}

impl fmt::Display for Export {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Export::Default(name) => write!(f, "export default {name};"),
            Export::DefaultTypeFrom { name, module } => {
                write!(f, "export type {{ default as {name} }} from '{module}';")
            }
        }
    }
}

impl Renderable for Export {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.to_string())]
    }
}
