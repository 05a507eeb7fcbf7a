//! Files written by the TypeScript generator.

mod declaration_ts;
mod index_ts;

pub use declaration_ts::DeclarationTs;
pub use index_ts::{INDEX_FILE, IndexTs};
