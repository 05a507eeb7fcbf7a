//! The seam between a generation run and a target language.
//!
//! A language supplies a [`TypeMapper`] for member types and a
//! [`LanguageCodegen`] that previews, writes and clears its output.

mod traits;

pub use traits::{CleanResult, GenerateResult, LanguageCodegen, PreviewFile, TypeMapper};
