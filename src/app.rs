//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads settings and initialises logging
//! - parses CLI arguments
//! - runs the scenario / comparison pipeline
//! - prints reports
//! - writes optional exports

use clap::Parser;
use tracing::{info, warn};

use crate::analysis::{
    builtin_scenarios, project, summarize, summarize_inventory, summarize_portfolio, summarize_structure,
};
use crate::cli::{Command, CompareArgs, ProjectArgs, SynthArgs, YearArgs};
use crate::data::{
    BASELINE_YEAR, CURRENT_YEAR, DEFAULT_FOCUS, DEFAULT_INDICATORS, equipment_inventory, modernization_programs,
    regional_commands, regional_snapshots,
};
use crate::domain::{EntitySnapshot, YearRange};
use crate::error::AppError;
use crate::io::TableFile;
use crate::settings::Settings;

pub mod pipeline;

/// Entry point for the `scn` binary.
pub fn run() -> Result<(), AppError> {
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    let settings = Settings::load().map_err(|e| AppError::new(2, format!("Invalid settings: {e}")))?;
    let log_level = cli.log_level.as_deref().unwrap_or(&settings.log_level);
    crate::telemetry::init(log_level).map_err(|e| AppError::new(2, e.to_string()))?;

    match cli.command {
        Command::Synth(args) => handle_synth(args, &settings),
        Command::Compare(args) => handle_compare(args),
        Command::Project(args) => handle_project(args, &settings),
        Command::List => handle_list(),
        Command::Programs => handle_programs(),
        Command::Inventory => handle_inventory(),
        Command::Structure => handle_structure(),
    }
}

fn handle_synth(args: SynthArgs, settings: &Settings) -> Result<(), AppError> {
    let years = year_range(&args.years, settings)?;
    let outputs = pipeline::run_scenarios(&args.selections, years)?;

    // Optional display window inside the synthesized range.
    let window = match (args.from, args.to) {
        (None, None) => None,
        (from, to) => Some(YearRange::new(
            from.unwrap_or(years.first()),
            to.unwrap_or(years.last()),
        )?),
    };

    let mut views = Vec::with_capacity(outputs.len());
    for out in &outputs {
        let view = match window {
            Some(range) => out.table.window(range)?,
            None => out.table.clone(),
        };

        println!("{}", crate::report::format_scenario(&out.config, &view));
        if args.trend || args.expert {
            println!("{}", crate::report::format_trends(&summarize(&view)));
        }
        if args.expert {
            println!("{}", crate::report::format_annual_growth(&view));
            println!("{}", crate::report::format_correlation(&crate::math::pearson(&view)));
        }
        views.push((out.selection.clone(), view));
    }

    if let Some(path) = &args.export_csv {
        crate::io::write_tables_csv(path, &views)?;
    }
    if let Some(path) = &args.export_json {
        let files: Vec<TableFile> = outputs
            .iter()
            .zip(&views)
            .map(|(out, (selection, view))| TableFile::new(selection.clone(), out.config.kind, view.clone()))
            .collect();
        crate::io::write_tables_json(path, &files)?;
    }

    Ok(())
}

fn handle_compare(args: CompareArgs) -> Result<(), AppError> {
    let builtin = args.input.is_none() && args.tables.is_none();
    let snapshots = if let Some(path) = &args.input {
        crate::io::read_snapshots(path)?
    } else if let Some(path) = &args.tables {
        crate::io::read_tables_json(path)?
            .iter()
            .map(|file| file.snapshot_at(args.year))
            .collect::<Result<Vec<_>, _>>()?
    } else {
        regional_snapshots()
    };

    let indicators: Vec<String> = if !args.indicators.is_empty() {
        args.indicators.clone()
    } else if builtin {
        DEFAULT_INDICATORS.iter().map(|s| s.to_string()).collect()
    } else {
        common_indicators(&snapshots)
    };

    let comparison = pipeline::run_comparison(&snapshots, &indicators)?;
    println!("{}", crate::report::format_comparison(&comparison));

    let focus = args
        .focus
        .clone()
        .or_else(|| builtin.then(|| DEFAULT_FOCUS.to_string()));
    if let Some(entity) = focus {
        match comparison.position(&entity) {
            Some(positions) => println!("{}", crate::report::format_position(&entity, &positions)),
            None => warn!(entity = %entity, "focus entity not found in comparison"),
        }
    }

    if let Some(path) = &args.export_csv {
        crate::io::write_comparison_csv(path, &comparison)?;
    }
    Ok(())
}

/// Indicators every snapshot carries, in name order.
fn common_indicators(snapshots: &[EntitySnapshot]) -> Vec<String> {
    let Some((first, rest)) = snapshots.split_first() else {
        return Vec::new();
    };
    first
        .values
        .keys()
        .filter(|name| rest.iter().all(|s| s.values.contains_key(*name)))
        .cloned()
        .collect()
}

fn handle_project(args: ProjectArgs, settings: &Settings) -> Result<(), AppError> {
    let years = year_range(&args.years, settings)?;
    let horizon = horizon_range(years, args.horizon)?;
    let out = pipeline::run_scenario(&args.selection, years)?;

    let projected = project(&out.table, &args.indicator, horizon, &builtin_scenarios())?;
    info!(indicator = %args.indicator, first = horizon.first(), last = horizon.last(), "projection computed");

    println!("{}", crate::report::format_projection(&args.indicator, &projected));
    Ok(())
}

fn handle_list() -> Result<(), AppError> {
    let records = crate::catalog::known_selections();
    let registry = crate::expand::ConditionalRegistry::builtin();
    println!("{}", crate::report::format_selection_list(&records, &registry));
    Ok(())
}

fn handle_programs() -> Result<(), AppError> {
    let programs = modernization_programs();
    let summary = summarize_portfolio(&programs);
    println!("{}", crate::report::format_portfolio(&programs, &summary));
    Ok(())
}

fn handle_inventory() -> Result<(), AppError> {
    let summary = summarize_inventory(&equipment_inventory());
    println!("{}", crate::report::format_inventory(&summary, BASELINE_YEAR, CURRENT_YEAR));
    Ok(())
}

fn handle_structure() -> Result<(), AppError> {
    let commands = regional_commands();
    let totals = summarize_structure(&commands);
    println!("{}", crate::report::format_structure(&commands, &totals));
    Ok(())
}

/// Synthesis range from flags, falling back to settings.
fn year_range(args: &YearArgs, settings: &Settings) -> Result<YearRange, AppError> {
    let first = args.first_year.unwrap_or(settings.first_year);
    let last = args.last_year.unwrap_or(settings.last_year);
    Ok(YearRange::new(first, last)?)
}

/// `horizon` years directly after `years`.
fn horizon_range(years: YearRange, horizon: u16) -> Result<YearRange, AppError> {
    let overflow = || AppError::new(2, format!("Projection horizon of {horizon} years runs past year {}.", i32::MAX));
    if horizon == 0 {
        return Err(AppError::new(2, "Projection horizon must be at least 1 year."));
    }
    let first = years.last().checked_add(1).ok_or_else(overflow)?;
    let last = first.checked_add(i32::from(horizon) - 1).ok_or_else(overflow)?;
    Ok(YearRange::new(first, last)?)
}

/// Rewrite argv so `scn` defaults to `scn synth`.
///
/// Rules:
/// - `scn`                      -> `scn synth`
/// - `scn --trend ...`          -> `scn synth --trend ...`
/// - `scn --help/--version/-h`  -> unchanged (show top-level help/version)
/// - `--log-level <v>` before any of the above is skipped over
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    // Global flags may precede the subcommand.
    let mut idx = 1;
    while let Some(arg) = argv.get(idx) {
        if arg == "--log-level" {
            idx += 2;
        } else if arg.starts_with("--log-level=") {
            idx += 1;
        } else {
            break;
        }
    }
    if idx > argv.len() {
        // `--log-level` without a value; let clap report it.
        return argv;
    }

    let Some(next) = argv.get(idx) else {
        argv.push("synth".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        next.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    if next.starts_with('-') {
        argv.insert(idx, "synth".to_string());
    }
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_defaults_to_synth() {
        assert_eq!(rewrite_args(args(&["scn"])), args(&["scn", "synth"]));
        assert_eq!(
            rewrite_args(args(&["scn", "--trend"])),
            args(&["scn", "synth", "--trend"])
        );
        assert_eq!(
            rewrite_args(args(&["scn", "--log-level", "debug", "--trend"])),
            args(&["scn", "--log-level", "debug", "synth", "--trend"])
        );
        assert_eq!(
            rewrite_args(args(&["scn", "--log-level=debug"])),
            args(&["scn", "--log-level=debug", "synth"])
        );

        let argv = rewrite_args(args(&["scn", "--log-level", "debug", "--trend"]));
        let cli = crate::cli::Cli::try_parse_from(argv).unwrap();
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert!(matches!(cli.command, Command::Synth(ref a) if a.trend));
    }

    #[test]
    fn log_level_before_subcommand_is_left_alone() {
        assert_eq!(
            rewrite_args(args(&["scn", "--log-level", "info", "list"])),
            args(&["scn", "--log-level", "info", "list"])
        );
        assert_eq!(rewrite_args(args(&["scn", "--log-level"])), args(&["scn", "--log-level"]));
    }

    #[test]
    fn common_indicators_skip_partial_columns() {
        let snapshots = vec![
            EntitySnapshot::new("a").with("x", 1.0).with("y", 2.0),
            EntitySnapshot::new("b").with("y", 3.0).with("z", 4.0),
        ];
        assert_eq!(common_indicators(&snapshots), vec!["y".to_string()]);
        assert!(common_indicators(&[]).is_empty());
    }

    #[test]
    fn horizon_is_checked_against_year_overflow() {
        let years = YearRange::new(2012, 2024).unwrap();
        let horizon = horizon_range(years, 6).unwrap();
        assert_eq!((horizon.first(), horizon.last()), (2025, 2030));

        let edge = YearRange::new(i32::MAX - 2, i32::MAX - 1).unwrap();
        assert_eq!(horizon_range(edge, 1).unwrap().first(), i32::MAX);
        assert_eq!(horizon_range(edge, 2).unwrap_err().exit_code(), 2);
        assert_eq!(horizon_range(YearRange::single(i32::MAX), 1).unwrap_err().exit_code(), 2);
        assert!(horizon_range(years, 0).is_err());
    }

    #[test]
    fn subcommands_and_help_are_untouched() {
        assert_eq!(rewrite_args(args(&["scn", "compare"])), args(&["scn", "compare"]));
        assert_eq!(rewrite_args(args(&["scn", "--help"])), args(&["scn", "--help"]));
    }

    #[test]
    fn year_range_prefers_flags() {
        let settings = Settings::default();
        let flags = YearArgs {
            first_year: Some(2015),
            last_year: None,
        };
        let range = year_range(&flags, &settings).unwrap();
        assert_eq!((range.first(), range.last()), (2015, 2024));

        let reversed = YearArgs {
            first_year: Some(2030),
            last_year: Some(2020),
        };
        assert_eq!(year_range(&reversed, &settings).unwrap_err().exit_code(), 2);
    }
}
