//! Text output for syntax nodes.
//!
//! Nodes implement [`Renderable`] and describe themselves as
//! [`CodeFragment`]s. A [`CodeBuilder`] turns fragments into lines using
//! one [`Indent`] for the whole file.

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
