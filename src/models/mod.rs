//! Piecewise growth models.
//!
//! Models are implemented as small, pure functions so that the synthesizer can
//! stay generic over indicators.

pub mod model;

pub use model::*;
