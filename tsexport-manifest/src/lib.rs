//! Parsing and validation of tsexport.toml manifests.
//!
//! A manifest names the output root and options, and declares the host
//! types to export. Parsing validates everything up front and lowers the
//! types into a [`tsexport_ir::TypeRegistry`], so generators only ever see
//! a consistent registry.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;
mod type_expr;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    ExportSpec, Manifest, ManifestFile, MemberEntry, OutputConfig, ParseContext,
    StarterManifest, TypeEntry,
};
pub use type_expr::TypeExpr;
