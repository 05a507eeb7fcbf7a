//! Intermediate representation for the tsexport generator.
//!
//! This crate holds the read-only view of host type metadata that the
//! generator consumes. Types are registered once, up front, in a
//! [`TypeRegistry`]; the generator never mutates them.
//!
//! # Architecture
//!
//! ```text
//! tsexport.toml (TOML) → tsexport-manifest (parsing) → tsexport-ir (registry) → codegen
//! ```
//!
//! The IR is language-agnostic: descriptors say *what* a member's type is
//! (primitive, nullable value, sequence, reference), never how a target
//! language spells it.

mod descriptor;
mod registry;
mod type_def;

pub use descriptor::{PrimitiveKind, TypeDescriptor, ValueType};
pub use registry::{Ancestry, DuplicateType, TypeRegistry};
pub use type_def::{ExportAnnotation, FolderAnnotation, Member, MemberAnnotation, TypeDef, TypeId};
