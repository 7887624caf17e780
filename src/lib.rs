//! `force-scenarios` library crate.
//!
//! The binary (`scn`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the engine (resolve, synthesize, expand, normalize) is reusable without the CLI
//! - code stays easy to navigate as the project grows

pub mod analysis;
pub mod app;
pub mod catalog;
pub mod cli;
pub mod compare;
pub mod data;
pub mod domain;
pub mod error;
pub mod expand;
pub mod io;
pub mod math;
pub mod models;
pub mod report;
pub mod settings;
pub mod synth;
pub mod telemetry;
