//! Cross-entity comparison: 0-100 normalization and dense ranking.

pub mod normalize;
pub mod rank;

pub use normalize::*;
pub use rank::*;
