//! Syntax nodes for the statements a declaration file contains.

mod exports;
mod imports;
mod interface;

pub use exports::Export;
pub use imports::Import;
pub use interface::{Interface, InterfaceField};
