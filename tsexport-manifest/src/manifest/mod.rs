//! Manifest types and parsing for tsexport.toml files.

mod file;
mod lower;
mod parse;
mod starter;
mod validate;

use std::path::PathBuf;

pub use file::ManifestFile;
use serde::Deserialize;
pub use starter::StarterManifest;
use tsexport_core::{LineEnding, MemberNaming};
use tsexport_ir::TypeRegistry;
pub use validate::ParseContext;

/// Root manifest for tsexport.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Where and how declarations are written
    pub output: OutputConfig,

    /// Type definitions, in discovery order
    #[serde(default)]
    pub types: Vec<TypeEntry>,

    /// Registry built from `types` once the manifest has been validated
    #[serde(skip)]
    registry: TypeRegistry,
}

impl Manifest {
    /// The validated type registry.
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }
}

/// The `[output]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Output root, relative to the current directory
    pub root: PathBuf,

    /// Write an index.ts barrel re-exporting every declaration
    #[serde(default)]
    pub generate_index: bool,

    #[serde(default)]
    pub member_naming: MemberNaming,

    /// Emit `import type` lines for referenced types instead of relying on
    /// global name resolution
    #[serde(default)]
    pub reference_imports: bool,

    /// Spaces per indentation level
    #[serde(default = "default_indent")]
    pub indent: u8,

    #[serde(default)]
    pub line_ending: LineEnding,
}

fn default_indent() -> u8 {
    4
}

/// One `[[types]]` entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeEntry {
    /// Declared type name
    pub name: String,

    /// Enclosing namespace (`App.Models`)
    #[serde(default)]
    pub namespace: String,

    /// Qualified id of the parent type
    pub parent: Option<String>,

    /// Export annotation: `true`, or the name to export under
    pub export: Option<ExportSpec>,

    /// Folder annotation
    pub folder: Option<String>,

    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,

    /// Members declared on this type, in declaration order
    #[serde(default)]
    pub members: Vec<MemberEntry>,
}

/// Value of a type's `export` key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ExportSpec {
    Flag(bool),
    Named(String),
}

/// One `[[types.members]]` entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemberEntry {
    pub name: String,

    /// Type expression, e.g. `int`, `DateTime?`, `List<Address>`
    #[serde(rename = "type")]
    pub ty: String,

    /// Annotation: name to emit under
    pub ts_name: Option<String>,

    /// Annotation: explicit optionality
    pub optional: Option<bool>,
}

/// Parent ids that denote the universal root rather than a registered type.
pub(crate) const ROOT_TYPES: &[&str] = &["object", "System.Object"];
