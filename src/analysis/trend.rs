//! Trend summaries.

use serde::Serialize;

use crate::domain::{Polarity, Series, TimeSeriesTable};

/// First-to-last movement of one indicator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSummary {
    pub indicator: String,
    pub polarity: Polarity,
    pub first_year: i32,
    pub first: f64,
    pub last_year: i32,
    pub last: f64,
    /// `(last - first) / first * 100`; `None` when `first` is 0.
    pub change_pct: Option<f64>,
    /// `change_pct` with the sign flipped for lower-is-better indicators.
    pub improvement_pct: Option<f64>,
}

/// Summarize every indicator of `table`.
pub fn summarize(table: &TimeSeriesTable) -> Vec<TrendSummary> {
    table
        .iter()
        .filter_map(|(name, series)| summarize_series(name, series))
        .collect()
}

fn summarize_series(name: &str, series: &Series) -> Option<TrendSummary> {
    let first = series.first()?;
    let last = series.last()?;
    let change_pct = pct_change(first.value, last.value);
    let improvement_pct = change_pct.map(|c| match series.polarity {
        Polarity::HigherIsBetter => c,
        Polarity::LowerIsBetter => -c,
    });
    Some(TrendSummary {
        indicator: name.to_string(),
        polarity: series.polarity,
        first_year: first.year,
        first: first.value,
        last_year: last.year,
        last: last.value,
        change_pct,
        improvement_pct,
    })
}

/// Year-over-year percent change. The first year has no predecessor.
pub fn annual_growth(series: &Series) -> Vec<(i32, Option<f64>)> {
    let mut out = Vec::with_capacity(series.points.len());
    let mut previous: Option<f64> = None;
    for p in &series.points {
        out.push((p.year, previous.and_then(|prev| pct_change(prev, p.value))));
        previous = Some(p.value);
    }
    out
}

fn pct_change(from: f64, to: f64) -> Option<f64> {
    if from == 0.0 {
        return None;
    }
    Some((to - from) / from * 100.0)
}
