//! Derived analysis on synthesized tables and reference datasets.
//!
//! - first/last trend summaries and year-over-year growth (`trend`)
//! - forward projections under named scenarios (`projection`)
//! - modernization program portfolio summary (`portfolio`)
//! - equipment growth and modernity (`inventory`)
//! - division totals per type (`structure`)

pub mod inventory;
pub mod portfolio;
pub mod projection;
pub mod structure;
pub mod trend;

pub use inventory::*;
pub use portfolio::*;
pub use projection::*;
pub use structure::*;
pub use trend::*;
