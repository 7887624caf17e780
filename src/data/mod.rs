//! Built-in reference datasets.

pub mod equipment;
pub mod programs;
pub mod regional;
pub mod structure;

pub use equipment::*;
pub use programs::*;
pub use regional::*;
pub use structure::*;
