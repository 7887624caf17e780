//! Shared domain types.
//!
//! These types are kept lightweight and serializable so they can be:
//!
//! - built in-memory by the catalog and the synthesizer
//! - exported to JSON/CSV
//! - reloaded later for comparisons

use std::collections::{BTreeMap, BTreeSet};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Category of a configuration record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ConfigKind {
    /// All branches of the armed forces together.
    WholeForce,
    /// One service branch (land, naval, air, air defense).
    SingleBranch,
    /// A single acquisition or modernization program.
    StrategicProgram,
}

impl ConfigKind {
    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            ConfigKind::WholeForce => "whole force",
            ConfigKind::SingleBranch => "single branch",
            ConfigKind::StrategicProgram => "strategic program",
        }
    }
}

/// Whether higher or lower values of an indicator are better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Polarity {
    HigherIsBetter,
    LowerIsBetter,
}

/// Narrative axis a dashboard leads with for a given record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NarrativeAxis {
    Capability,
    Modernization,
    Readiness,
    Projection,
}

/// Priority tags that select a narrative axis. First matching tag wins.
const TAG_AXES: &[(&str, NarrativeAxis)] = &[
    ("armor-modernization", NarrativeAxis::Modernization),
    ("c4isr", NarrativeAxis::Modernization),
    ("modernization", NarrativeAxis::Modernization),
    ("joint-operations", NarrativeAxis::Readiness),
    ("integrated-air-defense", NarrativeAxis::Readiness),
    ("local-production", NarrativeAxis::Projection),
    ("blue-water", NarrativeAxis::Projection),
];

/// A step change applied to a growth curve from `year` onwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegimeShift {
    pub year: i32,
    pub factor: f64,
}

/// Which piecewise model an indicator follows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "lowercase")]
pub enum GrowthModel {
    /// `b * (1 + rate * (y - first))`, scaled by active regime shifts, capped per year.
    Growth {
        rate: f64,
        #[serde(default)]
        regimes: Vec<RegimeShift>,
        #[serde(default)]
        cap: Option<f64>,
    },
    /// `max(b - rate * (y - first), floor)`; used where lower is better.
    Floor { rate: f64, floor: f64 },
}

impl GrowthModel {
    pub fn polarity(&self) -> Polarity {
        match self {
            GrowthModel::Growth { .. } => Polarity::HigherIsBetter,
            GrowthModel::Floor { .. } => Polarity::LowerIsBetter,
        }
    }

    pub fn rate(&self) -> f64 {
        match self {
            GrowthModel::Growth { rate, .. } | GrowthModel::Floor { rate, .. } => *rate,
        }
    }
}

/// Base value plus synthesis rule for one indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSpec {
    pub base: Option<f64>,
    #[serde(flatten)]
    pub model: GrowthModel,
}

impl IndicatorSpec {
    /// Linear growth from `base` at `rate` per year, no regimes, no cap.
    pub fn growth(base: f64, rate: f64) -> Self {
        Self {
            base: Some(base),
            model: GrowthModel::Growth {
                rate,
                regimes: Vec::new(),
                cap: None,
            },
        }
    }

    /// Declining from `base` by `rate` per year down to `floor`.
    pub fn floor(base: f64, rate: f64, floor: f64) -> Self {
        Self {
            base: Some(base),
            model: GrowthModel::Floor { rate, floor },
        }
    }

    /// Add a regime shift. Floor-model specs have no regimes and are returned unchanged.
    pub fn with_regime(mut self, year: i32, factor: f64) -> Self {
        if let GrowthModel::Growth { regimes, .. } = &mut self.model {
            regimes.push(RegimeShift { year, factor });
        }
        self
    }

    /// Set the saturation cap. Floor-model specs are returned unchanged.
    pub fn with_cap(mut self, value: f64) -> Self {
        if let GrowthModel::Growth { cap, .. } = &mut self.model {
            *cap = Some(value);
        }
        self
    }
}

/// Everything the synthesizer needs to know about one selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationRecord {
    pub key: String,
    pub label: String,
    pub kind: ConfigKind,
    pub base_rates: BTreeMap<String, IndicatorSpec>,
    #[serde(default)]
    pub priority_tags: BTreeSet<String>,
}

impl ConfigurationRecord {
    pub fn new(key: impl Into<String>, label: impl Into<String>, kind: ConfigKind) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind,
            base_rates: BTreeMap::new(),
            priority_tags: BTreeSet::new(),
        }
    }

    pub fn with_indicator(mut self, name: impl Into<String>, spec: IndicatorSpec) -> Self {
        self.base_rates.insert(name.into(), spec);
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.priority_tags.insert(tag.into());
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.priority_tags.contains(tag)
    }

    /// Axis the presentation layer should lead with.
    pub fn headline_axis(&self) -> NarrativeAxis {
        TAG_AXES
            .iter()
            .find(|(tag, _)| self.has_tag(tag))
            .map(|(_, axis)| *axis)
            .unwrap_or(NarrativeAxis::Capability)
    }
}

/// Inclusive, contiguous range of years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "YearRangeRepr")]
pub struct YearRange {
    first: i32,
    last: i32,
}

#[derive(Deserialize)]
struct YearRangeRepr {
    first: i32,
    last: i32,
}

impl TryFrom<YearRangeRepr> for YearRange {
    type Error = EngineError;

    fn try_from(value: YearRangeRepr) -> Result<Self, Self::Error> {
        YearRange::new(value.first, value.last)
    }
}

impl YearRange {
    /// `first..=last`. Fails when `last < first`.
    pub fn new(first: i32, last: i32) -> EngineResult<Self> {
        if last < first {
            return Err(EngineError::EmptyYearRange { first, last });
        }
        Ok(Self { first, last })
    }

    pub fn single(year: i32) -> Self {
        Self {
            first: year,
            last: year,
        }
    }

    /// Build a range from an explicit year list, which must step by exactly 1.
    pub fn from_years(years: &[i32]) -> EngineResult<Self> {
        let (Some(&first), Some(&last)) = (years.first(), years.last()) else {
            return Err(EngineError::EmptyYearRange { first: 0, last: -1 });
        };
        for w in years.windows(2) {
            if w[1] != w[0] + 1 {
                return Err(EngineError::NonContiguousYears {
                    previous: w[0],
                    next: w[1],
                });
            }
        }
        Ok(Self { first, last })
    }

    pub fn first(&self) -> i32 {
        self.first
    }

    pub fn last(&self) -> i32 {
        self.last
    }

    pub fn len(&self) -> usize {
        (i64::from(self.last) - i64::from(self.first) + 1) as usize
    }

    /// Always false; a range holds at least one year.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, year: i32) -> bool {
        year >= self.first && year <= self.last
    }

    /// True when every year of `self` is also in `outer`.
    pub fn is_within(&self, outer: &YearRange) -> bool {
        self.first >= outer.first && self.last <= outer.last
    }

    pub fn iter(&self) -> impl Iterator<Item = i32> + use<> {
        self.first..=self.last
    }
}

/// One synthesized value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub year: i32,
    pub value: f64,
}

/// Annual values for one indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub polarity: Polarity,
    pub points: Vec<SeriesPoint>,
}

impl Series {
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn value_at(&self, year: i32) -> Option<f64> {
        self.points.iter().find(|p| p.year == year).map(|p| p.value)
    }

    pub fn first(&self) -> Option<&SeriesPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&SeriesPoint> {
        self.points.last()
    }

    fn covers(&self, years: &YearRange) -> bool {
        self.points.len() == years.len()
            && self.points.iter().zip(years.iter()).all(|(p, y)| p.year == y)
    }
}

/// Indicator name -> annual series, all sharing the same year coverage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TableRepr", into = "TableRepr")]
pub struct TimeSeriesTable {
    years: YearRange,
    series: BTreeMap<String, Series>,
}

#[derive(Clone, Serialize, Deserialize)]
struct TableRepr {
    years: YearRange,
    series: BTreeMap<String, Series>,
}

impl TryFrom<TableRepr> for TimeSeriesTable {
    type Error = EngineError;

    fn try_from(value: TableRepr) -> Result<Self, Self::Error> {
        let mut table = TimeSeriesTable::new(value.years);
        for (name, series) in value.series {
            table.insert(name, series)?;
        }
        Ok(table)
    }
}

impl From<TimeSeriesTable> for TableRepr {
    fn from(value: TimeSeriesTable) -> Self {
        TableRepr {
            years: value.years,
            series: value.series,
        }
    }
}

impl TimeSeriesTable {
    pub fn new(years: YearRange) -> Self {
        Self {
            years,
            series: BTreeMap::new(),
        }
    }

    pub fn years(&self) -> YearRange {
        self.years
    }

    /// Add a series. It must cover exactly the table years and use a new name.
    pub fn insert(&mut self, indicator: impl Into<String>, series: Series) -> EngineResult<()> {
        let indicator = indicator.into();
        if self.series.contains_key(&indicator) {
            return Err(EngineError::DuplicateIndicator { indicator });
        }
        if !series.covers(&self.years) {
            return Err(EngineError::MisalignedSeries {
                indicator,
                first: self.years.first,
                last: self.years.last,
            });
        }
        self.series.insert(indicator, series);
        Ok(())
    }

    pub fn get(&self, indicator: &str) -> Option<&Series> {
        self.series.get(indicator)
    }

    pub fn contains(&self, indicator: &str) -> bool {
        self.series.contains_key(indicator)
    }

    pub fn indicators(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Series)> {
        self.series.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Flattened `(year, indicator, value)` triples, indicator-major.
    pub fn points(&self) -> impl Iterator<Item = (i32, &str, f64)> {
        self.series
            .iter()
            .flat_map(|(name, s)| s.points.iter().map(move |p| (p.year, name.as_str(), p.value)))
    }

    /// Restrict every series to `range`, which must lie inside the table years.
    pub fn window(&self, range: YearRange) -> EngineResult<TimeSeriesTable> {
        if !range.is_within(&self.years) {
            return Err(EngineError::WindowOutOfRange {
                first: range.first,
                last: range.last,
                table_first: self.years.first,
                table_last: self.years.last,
            });
        }
        let series = self
            .series
            .iter()
            .map(|(name, s)| {
                let points = s
                    .points
                    .iter()
                    .filter(|p| range.contains(p.year))
                    .copied()
                    .collect();
                (
                    name.clone(),
                    Series {
                        polarity: s.polarity,
                        points,
                    },
                )
            })
            .collect();
        Ok(TimeSeriesTable {
            years: range,
            series,
        })
    }
}

/// One entity's indicators for a comparison; no time dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySnapshot {
    pub entity: String,
    pub values: BTreeMap<String, f64>,
}

impl EntitySnapshot {
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            values: BTreeMap::new(),
        }
    }

    pub fn with(mut self, indicator: impl Into<String>, value: f64) -> Self {
        self.values.insert(indicator.into(), value);
        self
    }
}

/// Normalized value and dense rank of one entity for one indicator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedCell {
    pub raw: f64,
    /// `raw / max * 100`, or 0 when the maximum is 0.
    pub normalized: f64,
    /// Dense rank, 1 = highest raw value.
    pub rank: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRow {
    pub entity: String,
    pub cells: BTreeMap<String, NormalizedCell>,
}

/// Where one entity stands on one indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub indicator: String,
    pub raw: f64,
    pub rank: u32,
    pub total: usize,
}

/// Output of the comparative normalizer. Rows keep the input entity order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NormalizedComparison {
    pub indicators: Vec<String>,
    pub rows: Vec<NormalizedRow>,
}

impl NormalizedComparison {
    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }

    pub fn row(&self, entity: &str) -> Option<&NormalizedRow> {
        self.rows.iter().find(|r| r.entity == entity)
    }

    /// Raw value and `rank/total` for `entity` on every compared indicator.
    pub fn position(&self, entity: &str) -> Option<Vec<Position>> {
        let row = self.row(entity)?;
        let total = self.rows.len();
        Some(
            self.indicators
                .iter()
                .filter_map(|name| {
                    row.cells.get(name).map(|cell| Position {
                        indicator: name.clone(),
                        raw: cell.raw,
                        rank: cell.rank,
                        total,
                    })
                })
                .collect(),
        )
    }
}

/// Delivery status of a modernization program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProgramStatus {
    InProgress,
    Completed,
}

impl ProgramStatus {
    pub fn display_name(self) -> &'static str {
        match self {
            ProgramStatus::InProgress => "in progress",
            ProgramStatus::Completed => "completed",
        }
    }
}

/// A modernization or acquisition program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub name: String,
    pub budget_musd: f64,
    pub start: i32,
    pub end: i32,
    pub status: ProgramStatus,
}

/// Holdings of one equipment type at the start and end of the observed period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentStock {
    pub kind: String,
    pub baseline: u32,
    pub current: u32,
    /// Share of the holdings counted as modern, 0-100.
    pub modernity_pct: f64,
}

/// Divisions assigned to one regional command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalCommand {
    pub name: String,
    pub armored: u32,
    pub mechanized: u32,
    pub infantry: u32,
    pub special_forces: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(years: YearRange, value: f64) -> Series {
        Series {
            polarity: Polarity::HigherIsBetter,
            points: years.iter().map(|year| SeriesPoint { year, value }).collect(),
        }
    }

    #[test]
    fn year_range_rejects_reversed_bounds() {
        assert!(matches!(
            YearRange::new(2020, 2019),
            Err(EngineError::EmptyYearRange { .. })
        ));
        assert_eq!(YearRange::new(2012, 2024).unwrap().len(), 13);
        assert_eq!(YearRange::single(2015).len(), 1);
    }

    #[test]
    fn len_spans_the_full_i32_domain() {
        let widest = YearRange::new(i32::MIN, i32::MAX).unwrap();
        assert_eq!(widest.len() as u64, 1u64 << 32);
        assert_eq!(YearRange::new(-5, 5).unwrap().len(), 11);
    }

    #[test]
    fn from_years_requires_unit_steps() {
        let r = YearRange::from_years(&[2012, 2013, 2014]).unwrap();
        assert_eq!((r.first(), r.last()), (2012, 2014));

        assert_eq!(
            YearRange::from_years(&[2012, 2014]),
            Err(EngineError::NonContiguousYears {
                previous: 2012,
                next: 2014
            })
        );
        assert!(YearRange::from_years(&[2014, 2013]).is_err());
        assert!(YearRange::from_years(&[]).is_err());
    }

    #[test]
    fn insert_rejects_misaligned_and_duplicate_series() {
        let years = YearRange::new(2012, 2014).unwrap();
        let mut table = TimeSeriesTable::new(years);
        table.insert("a", flat(years, 1.0)).unwrap();

        let short = flat(YearRange::new(2012, 2013).unwrap(), 1.0);
        assert!(matches!(
            table.insert("b", short),
            Err(EngineError::MisalignedSeries { .. })
        ));
        assert!(matches!(
            table.insert("a", flat(years, 2.0)),
            Err(EngineError::DuplicateIndicator { .. })
        ));
    }

    #[test]
    fn window_keeps_requested_years_only() {
        let years = YearRange::new(2012, 2024).unwrap();
        let mut table = TimeSeriesTable::new(years);
        table.insert("a", flat(years, 3.0)).unwrap();

        let sub = table.window(YearRange::new(2015, 2018).unwrap()).unwrap();
        let got: Vec<i32> = sub.get("a").unwrap().points.iter().map(|p| p.year).collect();
        assert_eq!(got, vec![2015, 2016, 2017, 2018]);
        assert_eq!(sub.years(), YearRange::new(2015, 2018).unwrap());

        assert!(matches!(
            table.window(YearRange::new(2010, 2015).unwrap()),
            Err(EngineError::WindowOutOfRange { .. })
        ));
    }

    #[test]
    fn table_json_is_validated_on_load() {
        let json = r#"{"years":{"first":2012,"last":2013},"series":{"a":{"polarity":"higher-is-better","points":[{"year":2012,"value":1.0}]}}}"#;
        assert!(serde_json::from_str::<TimeSeriesTable>(json).is_err());

        let json = r#"{"years":{"first":2013,"last":2012},"series":{}}"#;
        assert!(serde_json::from_str::<TimeSeriesTable>(json).is_err());
    }

    #[test]
    fn headline_axis_defaults_to_capability() {
        let record = ConfigurationRecord::new("x", "X", ConfigKind::SingleBranch);
        assert_eq!(record.headline_axis(), NarrativeAxis::Capability);

        let record = record.with_tag("joint-operations").with_tag("unknown");
        assert_eq!(record.headline_axis(), NarrativeAxis::Readiness);
    }

    #[test]
    fn position_reports_rank_out_of_total() {
        let mut cells = BTreeMap::new();
        cells.insert(
            "tanks".to_string(),
            NormalizedCell {
                raw: 10.0,
                normalized: 100.0,
                rank: 1,
            },
        );
        let cmp = NormalizedComparison {
            indicators: vec!["tanks".to_string()],
            rows: vec![
                NormalizedRow {
                    entity: "A".to_string(),
                    cells,
                },
                NormalizedRow {
                    entity: "B".to_string(),
                    cells: BTreeMap::new(),
                },
            ],
        };
        let pos = cmp.position("A").unwrap();
        assert_eq!(pos.len(), 1);
        assert_eq!((pos[0].rank, pos[0].total), (1, 2));
        assert!(cmp.position("Z").is_none());
    }
}
