//! Selection catalog: maps a selection key to its configuration record.
//!
//! Unknown keys are not an error; they resolve to `default_record()`.

pub mod selections;

pub use selections::*;
