//! Core utilities and types for the tsexport generator.
//!
//! This crate provides fundamental types and utilities used across
//! the tsexport workspace.

mod file;
mod line_ending;
mod member_naming;
mod utils;

// File operations
pub use file::{File, GeneratedFile, WritePolicy, WriteResult};
// Output options shared by the manifest and the generators
pub use line_ending::LineEnding;
pub use member_naming::MemberNaming;
// String and path utilities
pub use utils::{to_camel_case, to_forward_slashes};
