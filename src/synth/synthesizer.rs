//! Turn a configuration record and a year range into an annual table.
//!
//! The synthesizer has no indicator-specific branching: it only looks at which
//! model (`Growth` or `Floor`) an indicator uses and evaluates it with the
//! constants carried by the record.

use crate::domain::{ConfigurationRecord, GrowthModel, IndicatorSpec, Series, SeriesPoint, TimeSeriesTable, YearRange};
use crate::error::{EngineError, EngineResult};
use crate::models::evaluate;

/// Synthesize every indicator of `config` over `years`.
pub fn synthesize(config: &ConfigurationRecord, years: YearRange) -> EngineResult<TimeSeriesTable> {
    let mut table = TimeSeriesTable::new(years);
    for (name, spec) in &config.base_rates {
        let series = synthesize_indicator(name, spec, years)?;
        table.insert(name.clone(), series)?;
    }
    Ok(table)
}

/// Synthesize a single indicator over `years`.
pub fn synthesize_indicator(name: &str, spec: &IndicatorSpec, years: YearRange) -> EngineResult<Series> {
    let base = validate(name, spec)?;

    let mut points = Vec::with_capacity(years.len());
    for year in years.iter() {
        let value = evaluate(&spec.model, base, years.first(), year);
        if !value.is_finite() || value < 0.0 {
            return Err(EngineError::NegativeValue {
                indicator: name.to_string(),
                year,
                value,
            });
        }
        points.push(SeriesPoint { year, value });
    }

    Ok(Series {
        polarity: spec.model.polarity(),
        points,
    })
}

/// Check the spec's constants and return its base value.
fn validate(name: &str, spec: &IndicatorSpec) -> EngineResult<f64> {
    let invalid = |parameter: &'static str, value: f64| EngineError::InvalidParameter {
        indicator: name.to_string(),
        parameter,
        value,
    };

    let base = spec.base.ok_or_else(|| EngineError::MissingBase {
        indicator: name.to_string(),
    })?;
    if !(base.is_finite() && base >= 0.0) {
        return Err(invalid("base", base));
    }

    let rate = spec.model.rate();
    if !rate.is_finite() {
        return Err(invalid("rate", rate));
    }

    match &spec.model {
        GrowthModel::Growth { regimes, cap, .. } => {
            for regime in regimes {
                if !(regime.factor.is_finite() && regime.factor > 1.0) {
                    return Err(invalid("regime factor", regime.factor));
                }
            }
            if let Some(cap) = cap {
                if !(cap.is_finite() && *cap >= 0.0) {
                    return Err(invalid("cap", *cap));
                }
            }
        }
        GrowthModel::Floor { rate, floor } => {
            if *rate < 0.0 {
                return Err(invalid("rate", *rate));
            }
            if !(floor.is_finite() && *floor >= 0.0) {
                return Err(invalid("floor", *floor));
            }
        }
    }

    Ok(base)
}
