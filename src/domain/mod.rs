//! Domain types used throughout the engine.
//!
//! This module defines:
//!
//! - configuration records and growth models (`ConfigurationRecord`, `IndicatorSpec`, `GrowthModel`)
//! - annual tables (`YearRange`, `Series`, `TimeSeriesTable`)
//! - comparison inputs/outputs (`EntitySnapshot`, `NormalizedComparison`)
//! - modernization programs (`Program`)

pub mod types;

pub use types::*;
