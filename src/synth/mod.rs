//! Series synthesis.
//!
//! Responsibilities:
//!
//! - validate an indicator's parameters before evaluating anything
//! - evaluate the indicator's model for every year of the range
//! - assemble the per-indicator series into a `TimeSeriesTable`

pub mod synthesizer;

pub use synthesizer::*;
