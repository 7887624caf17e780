//! Shared "scenario pipeline" used by every command.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! resolve selection -> synthesize base indicators -> expand tagged indicators
//!
//! Each selection is independent, so batches run on the rayon pool.

use rayon::prelude::*;
use tracing::debug;

use crate::catalog::resolve;
use crate::compare::normalize;
use crate::domain::{ConfigurationRecord, EntitySnapshot, NormalizedComparison, TimeSeriesTable, YearRange};
use crate::error::EngineResult;
use crate::expand::expand;
use crate::synth::synthesize;

/// Computed outputs for one selection.
#[derive(Debug, Clone)]
pub struct ScenarioOutput {
    pub selection: String,
    pub config: ConfigurationRecord,
    pub table: TimeSeriesTable,
}

/// Resolve, synthesize and expand one selection.
pub fn run_scenario(selection: &str, years: YearRange) -> EngineResult<ScenarioOutput> {
    let config = resolve(selection);
    let base = synthesize(&config, years)?;
    debug!(selection, resolved = %config.key, indicators = base.len(), "base indicators synthesized");

    let table = expand(base, &config)?;
    debug!(selection, indicators = table.len(), "conditional indicators expanded");

    Ok(ScenarioOutput {
        selection: selection.to_string(),
        config,
        table,
    })
}

/// Run several selections in parallel. Output order follows `selections`.
pub fn run_scenarios<S: AsRef<str> + Sync>(selections: &[S], years: YearRange) -> EngineResult<Vec<ScenarioOutput>> {
    selections
        .par_iter()
        .map(|s| run_scenario(s.as_ref(), years))
        .collect()
}

/// Normalize and rank `indicators` across `snapshots`.
pub fn run_comparison<S: AsRef<str>>(
    snapshots: &[EntitySnapshot],
    indicators: &[S],
) -> EngineResult<NormalizedComparison> {
    let comparison = normalize(snapshots, indicators)?;
    debug!(
        entities = comparison.rows.len(),
        indicators = comparison.indicators.len(),
        "comparison normalized"
    );
    Ok(comparison)
}
