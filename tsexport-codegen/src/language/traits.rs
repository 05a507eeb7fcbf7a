//! Language-agnostic code generation traits.

use std::path::Path;

use eyre::Result;
use tsexport_ir::{Member, PrimitiveKind, TypeDescriptor, ValueType};

/// Trait for language-specific code generators.
///
/// Implement this trait to add support for emitting declarations in a new
/// language.
pub trait LanguageCodegen {
    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Clear previous output, then generate all files into `output_dir`
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;

    /// Remove previously generated files.
    ///
    /// Default implementation returns an empty result (no cleaning).
    fn clean(&self, _output_dir: &Path) -> Result<CleanResult> {
        Ok(CleanResult::default())
    }

    /// Preview what would be cleaned without actually deleting files.
    ///
    /// Default implementation returns an empty result.
    fn preview_clean(&self, _output_dir: &Path) -> Result<CleanResult> {
        Ok(CleanResult::default())
    }
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// What was removed before writing
    pub cleaned: CleanResult,
    /// Declaration files written, relative to the output root
    pub written: Vec<String>,
    /// The index file, if one was written
    pub index: Option<String>,
}

/// Result of clearing an output root
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CleanResult {
    /// The output root did not exist and was created
    pub created_root: bool,
    /// Generated files that were deleted, relative to the output root
    pub deleted_files: Vec<String>,
    /// Directories removed because they were left empty
    pub removed_dirs: Vec<String>,
}

impl CleanResult {
    pub fn is_empty(&self) -> bool {
        self.deleted_files.is_empty() && self.removed_dirs.is_empty()
    }
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}

/// Trait for mapping type descriptors to language-specific type strings.
///
/// Implementations supply the leaf mappings; [`TypeMapper::map_type`]
/// composes them and is total over every descriptor.
pub trait TypeMapper {
    /// Map a primitive kind
    fn map_primitive(&self, kind: PrimitiveKind) -> &'static str;

    /// Map a nullable wrapper around an already mapped value type
    fn map_nullable(&self, inner: &str) -> String;

    /// Map a homogeneous sequence of an already mapped element type
    fn map_sequence(&self, element: &str) -> String;

    /// Map a reference to another type by its declared name
    fn map_reference(&self, name: &str) -> String {
        name.to_string()
    }

    /// Fallback for anything without a dedicated rule
    fn map_unknown(&self) -> &'static str;

    /// Render a complete descriptor to a string.
    fn map_type(&self, ty: &TypeDescriptor) -> String {
        match ty {
            TypeDescriptor::Primitive(kind) => self.map_primitive(*kind).to_string(),
            TypeDescriptor::Nullable(ValueType::Primitive(kind)) => {
                self.map_nullable(self.map_primitive(*kind))
            }
            TypeDescriptor::Nullable(ValueType::Struct(_)) => {
                self.map_nullable(self.map_unknown())
            }
            TypeDescriptor::Sequence(element) => {
                let element = self.map_type(element);
                self.map_sequence(&element)
            }
            TypeDescriptor::Reference(name) => self.map_reference(name),
            TypeDescriptor::Unknown(_) => self.map_unknown().to_string(),
        }
    }

    /// Whether the member is emitted as optional: annotated as optional,
    /// or declared with a nullable value type.
    fn is_optional(&self, member: &Member) -> bool {
        member.annotation.as_ref().is_some_and(|a| a.optional) || member.ty.is_nullable()
    }
}
