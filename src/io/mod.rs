//! Input/output helpers.
//!
//! - snapshot ingest for comparisons, CSV or JSON (`snapshots`)
//! - table and comparison exports to CSV (`export`)
//! - table JSON read/write (`table`)

pub mod export;
pub mod snapshots;
pub mod table;

pub use export::*;
pub use snapshots::*;
pub use table::*;
