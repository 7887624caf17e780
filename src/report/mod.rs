//! Terminal reporting: plain-text tables for synthesized series, trends,
//! comparisons and projections.

pub mod format;

pub use format::*;
