//! Mathematical utilities: correlation between indicator series.

pub mod correlation;

pub use correlation::*;
