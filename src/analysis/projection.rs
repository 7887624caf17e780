//! Forward projections of one indicator under named scenarios.
//!
//! Each scenario is a plain growth model anchored at the indicator's last
//! synthesized value: the first horizon year carries the anchor value and later
//! years move by the scenario rate.

use crate::domain::{IndicatorSpec, TimeSeriesTable, YearRange};
use crate::error::{EngineError, EngineResult};
use crate::synth::synthesize_indicator;

/// A named annual growth assumption.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub rate: f64,
}

impl Scenario {
    pub fn new(name: impl Into<String>, rate: f64) -> Self {
        Self {
            name: name.into(),
            rate,
        }
    }
}

/// Conservative, moderate and ambitious readiness scenarios.
pub fn builtin_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new("conservative", -0.02),
        Scenario::new("moderate", -0.01),
        Scenario::new("ambitious", 0.01),
    ]
}

/// Project `indicator` over `horizon`, one output series per scenario.
///
/// `horizon` must start after the last year of `table`.
pub fn project(
    table: &TimeSeriesTable,
    indicator: &str,
    horizon: YearRange,
    scenarios: &[Scenario],
) -> EngineResult<TimeSeriesTable> {
    let source = table.get(indicator).ok_or_else(|| EngineError::UnknownIndicator {
        indicator: indicator.to_string(),
    })?;
    let table_last = table.years().last();
    if horizon.first() <= table_last {
        return Err(EngineError::HorizonNotAfterTable {
            first: horizon.first(),
            table_last,
        });
    }
    let anchor = source.last().map(|p| p.value).unwrap_or_default();

    let mut out = TimeSeriesTable::new(horizon);
    for scenario in scenarios {
        let spec = IndicatorSpec::growth(anchor, scenario.rate);
        let mut series = synthesize_indicator(&scenario.name, &spec, horizon)?;
        series.polarity = source.polarity;
        out.insert(scenario.name.clone(), series)?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::resolve;
    use crate::synth::synthesize;

    #[test]
    fn projection_starts_from_last_value() {
        let config = resolve("whole-force");
        let table = synthesize(&config, YearRange::new(2012, 2024).unwrap()).unwrap();
        let last = table
            .get("operational_readiness_pct")
            .unwrap()
            .last()
            .unwrap()
            .value;

        let horizon = YearRange::new(2025, 2030).unwrap();
        let projected = project(&table, "operational_readiness_pct", horizon, &builtin_scenarios()).unwrap();
        assert_eq!(projected.len(), 3);
        for (_, series) in projected.iter() {
            assert_eq!(series.value_at(2025), Some(last));
        }
        let conservative = projected.get("conservative").unwrap().values();
        assert!(conservative.windows(2).all(|w| w[1] < w[0]));
        let ambitious = projected.get("ambitious").unwrap().values();
        assert!(ambitious.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn rejects_overlapping_horizon_and_unknown_indicator() {
        let config = resolve("whole-force");
        let table = synthesize(&config, YearRange::new(2012, 2024).unwrap()).unwrap();
        let scenarios = builtin_scenarios();

        assert!(matches!(
            project(&table, "training_hours", YearRange::new(2024, 2030).unwrap(), &scenarios),
            Err(EngineError::HorizonNotAfterTable { .. })
        ));
        assert!(matches!(
            project(&table, "nope", YearRange::new(2025, 2030).unwrap(), &scenarios),
            Err(EngineError::UnknownIndicator { .. })
        ));
    }
}
