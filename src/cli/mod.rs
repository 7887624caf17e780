//! Command-line parsing for the force scenario engine.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the synthesis/comparison code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "scn",
    version,
    about = "Scenario-driven force indicator synthesis and regional comparison"
)]
pub struct Cli {
    /// Log level when `RUST_LOG` is unset (overrides `SCN_LOG_LEVEL`).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Synthesize annual indicator tables for one or more selections.
    Synth(SynthArgs),
    /// Normalize and rank entity snapshots (built-in regional data by default).
    Compare(CompareArgs),
    /// Project one indicator forward under the built-in scenarios.
    Project(ProjectArgs),
    /// List known selections and the tag registry.
    List,
    /// Summarize the modernization program portfolio.
    Programs,
    /// Equipment inventory growth and modernity rates.
    Inventory,
    /// Division totals across regional commands.
    Structure,
}

/// Synthesis year range. Falls back to `SCN_FIRST_YEAR` / `SCN_LAST_YEAR`.
#[derive(Debug, Args, Clone, Default)]
pub struct YearArgs {
    /// First synthesized year (the growth curve is anchored here).
    #[arg(long)]
    pub first_year: Option<i32>,

    /// Last synthesized year.
    #[arg(long)]
    pub last_year: Option<i32>,
}

/// Options for `scn synth`.
#[derive(Debug, Args, Clone)]
pub struct SynthArgs {
    /// Selection keys (unknown keys fall back to the default record).
    #[arg(value_name = "SELECTION", default_value = "whole-force")]
    pub selections: Vec<String>,

    #[command(flatten)]
    pub years: YearArgs,

    /// Display window start (must lie inside the synthesized range).
    #[arg(long)]
    pub from: Option<i32>,

    /// Display window end (must lie inside the synthesized range).
    #[arg(long)]
    pub to: Option<i32>,

    /// Print first/last/change per indicator.
    #[arg(long)]
    pub trend: bool,

    /// Also print year-over-year growth and the correlation matrix.
    #[arg(long)]
    pub expert: bool,

    /// Export tables to CSV (long format).
    #[arg(long)]
    pub export_csv: Option<PathBuf>,

    /// Export tables to JSON.
    #[arg(long)]
    pub export_json: Option<PathBuf>,
}

/// Options for `scn compare`.
#[derive(Debug, Args, Clone)]
pub struct CompareArgs {
    /// Indicator to compare (repeatable).
    #[arg(short = 'i', long = "indicator", value_name = "NAME")]
    pub indicators: Vec<String>,

    /// Snapshot file (`.json` array or `.csv` with an `entity` column).
    #[arg(long, value_name = "PATH", conflicts_with = "tables")]
    pub input: Option<PathBuf>,

    /// Table JSON written by `scn synth --export-json`; each selection becomes an entity.
    #[arg(long, value_name = "JSON")]
    pub tables: Option<PathBuf>,

    /// Year taken from each saved table (default: its last year).
    #[arg(long, requires = "tables")]
    pub year: Option<i32>,

    /// Entity whose per-indicator position is printed.
    #[arg(long)]
    pub focus: Option<String>,

    /// Export the comparison to CSV.
    #[arg(long)]
    pub export_csv: Option<PathBuf>,
}

/// Options for `scn project`.
#[derive(Debug, Args, Clone)]
pub struct ProjectArgs {
    /// Selection key.
    #[arg(value_name = "SELECTION")]
    pub selection: String,

    /// Indicator to project.
    #[arg(short = 'i', long)]
    pub indicator: String,

    #[command(flatten)]
    pub years: YearArgs,

    /// Number of years to project past the last synthesized year.
    #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u16).range(1..))]
    pub horizon: u16,
}
