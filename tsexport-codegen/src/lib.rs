//! Shared code generation utilities for the tsexport generator.
//!
//! This crate provides the language-agnostic half of a generation run,
//! used by language-specific generators (e.g., `tsexport-codegen-typescript`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`classifier`] - Which registered types are exported, and under what name
//! - [`generation`] - Output layout (OutputPlanner, Synchronizer, FolderMap)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, TypeMapper, etc.)

pub mod builder;
pub mod classifier;
pub mod generation;
pub mod language;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use classifier::{Candidate, Classifier, SkipReason};
pub use generation::{FolderMap, Location, OutputPlanner, Synchronizer};
pub use language::{CleanResult, GenerateResult, LanguageCodegen, PreviewFile, TypeMapper};
