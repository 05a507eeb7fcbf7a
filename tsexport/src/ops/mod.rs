//! Core operations.
//!
//! This module contains the business logic for tsexport commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod clean;
pub mod generate;
pub mod list;

pub use check::check;
pub use clean::clean;
pub use generate::generate;
pub use list::list;
