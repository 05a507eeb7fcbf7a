//! Output management for a generation run.
//!
//! - [`OutputPlanner`] - Folder and file path for each emitted type
//! - [`Synchronizer`] - Clears previously generated files from the output root
//! - [`FolderMap`] - Files written per folder, in emission order

mod folder_map;
mod planner;
mod synchronizer;

pub use folder_map::FolderMap;
pub use planner::{Location, OutputPlanner, infer_folder, relative_module_path};
pub use synchronizer::Synchronizer;
