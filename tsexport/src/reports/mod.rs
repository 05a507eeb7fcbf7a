//! What each command prints.
//!
//! Ops return these; commands render them to the terminal.

mod check;
mod clean;
mod generate;
mod list;
mod output;

pub use check::{CheckReport, SkippedType};
pub use clean::CleanReport;
pub use generate::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult};
pub use list::{ListEntry, ListReport};
pub use output::{Report, TerminalOutput};
