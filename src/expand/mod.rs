//! Tag-driven conditional indicators.
//!
//! A registry maps a priority tag to one extra indicator and its synthesis
//! rule. Expansion looks each tag up independently; tags without an entry are
//! ignored.

pub mod registry;

pub use registry::*;
