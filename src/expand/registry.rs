//! Conditional indicator registry and the expander.

use std::collections::BTreeMap;

use tracing::debug;

use crate::domain::{ConfigurationRecord, IndicatorSpec, TimeSeriesTable};
use crate::error::{EngineError, EngineResult};
use crate::synth::synthesize_indicator;

/// Extra indicator synthesized when its tag is present.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalIndicator {
    pub indicator: String,
    pub spec: IndicatorSpec,
}

/// Tag -> conditional indicator.
#[derive(Debug, Clone, Default)]
pub struct ConditionalRegistry {
    entries: BTreeMap<String, ConditionalIndicator>,
}

impl ConditionalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the indicator for `tag`.
    pub fn register(&mut self, tag: impl Into<String>, indicator: impl Into<String>, spec: IndicatorSpec) {
        self.entries.insert(
            tag.into(),
            ConditionalIndicator {
                indicator: indicator.into(),
                spec,
            },
        );
    }

    pub fn get(&self, tag: &str) -> Option<&ConditionalIndicator> {
        self.entries.get(tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConditionalIndicator)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The registry used by the catalog's priority tags.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(
            "modernization",
            "modern_equipment_share_pct",
            IndicatorSpec::growth(35.0, 0.04).with_regime(2020, 1.1).with_cap(75.0),
        );
        registry.register(
            "joint-operations",
            "joint_exercises",
            IndicatorSpec::growth(4.0, 0.15).with_regime(2018, 1.2).with_cap(20.0),
        );
        registry.register(
            "armor-modernization",
            "modernized_tanks",
            IndicatorSpec::growth(200.0, 0.1).with_regime(2020, 1.25).with_cap(1500.0),
        );
        registry.register(
            "c4isr",
            "c4isr_coverage_pct",
            IndicatorSpec::growth(20.0, 0.08).with_regime(2017, 1.3).with_cap(90.0),
        );
        registry.register(
            "blue-water",
            "blue_water_deployments",
            IndicatorSpec::growth(2.0, 0.1).with_regime(2016, 1.4).with_cap(12.0),
        );
        registry.register(
            "air-superiority",
            "fourth_gen_plus_share_pct",
            IndicatorSpec::growth(15.0, 0.05).with_regime(2015, 1.5).with_cap(60.0),
        );
        registry.register(
            "integrated-air-defense",
            "sam_coverage_pct",
            IndicatorSpec::growth(40.0, 0.03).with_regime(2017, 1.2).with_cap(85.0),
        );
        registry.register(
            "local-production",
            "local_content_pct",
            IndicatorSpec::growth(10.0, 0.06).with_cap(45.0),
        );
        registry
    }
}

/// Append the conditional indicators of `config`'s tags using the built-in registry.
pub fn expand(table: TimeSeriesTable, config: &ConfigurationRecord) -> EngineResult<TimeSeriesTable> {
    expand_with(table, config, &ConditionalRegistry::builtin())
}

/// Append the conditional indicators of `config`'s tags using `registry`.
///
/// Appending an indicator that is already in the table is a configuration error.
pub fn expand_with(
    mut table: TimeSeriesTable,
    config: &ConfigurationRecord,
    registry: &ConditionalRegistry,
) -> EngineResult<TimeSeriesTable> {
    let years = table.years();
    for tag in &config.priority_tags {
        let Some(entry) = registry.get(tag) else {
            debug!(tag = %tag, "no conditional indicator for tag");
            continue;
        };
        if table.contains(&entry.indicator) {
            return Err(EngineError::DuplicateIndicator {
                indicator: entry.indicator.clone(),
            });
        }
        let series = synthesize_indicator(&entry.indicator, &entry.spec, years)?;
        table.insert(entry.indicator.clone(), series)?;
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::resolve;
    use crate::domain::{ConfigKind, YearRange};
    use crate::synth::synthesize;

    fn record(tags: &[&str]) -> ConfigurationRecord {
        let mut record = ConfigurationRecord::new("r", "R", ConfigKind::SingleBranch)
            .with_indicator("base", IndicatorSpec::growth(1.0, 0.0));
        for tag in tags {
            record = record.with_tag(*tag);
        }
        record
    }

    #[test]
    fn unknown_tags_leave_table_unchanged() {
        let config = record(&["not-a-tag"]);
        let years = YearRange::new(2012, 2014).unwrap();
        let table = synthesize(&config, years).unwrap();
        let expanded = expand(table.clone(), &config).unwrap();
        assert_eq!(expanded, table);
    }

    #[test]
    fn known_tags_append_aligned_series() {
        let config = record(&["c4isr", "modernization"]);
        let years = YearRange::new(2012, 2024).unwrap();
        let table = expand(synthesize(&config, years).unwrap(), &config).unwrap();

        let names: Vec<&str> = table.indicators().collect();
        assert_eq!(names, vec!["base", "c4isr_coverage_pct", "modern_equipment_share_pct"]);
        let coverage = table.get("c4isr_coverage_pct").unwrap();
        assert_eq!(coverage.points.len(), years.len());
        assert!(coverage.values().iter().all(|&v| v <= 90.0));
    }

    #[test]
    fn duplicate_indicator_is_rejected() {
        let config = ConfigurationRecord::new("r", "R", ConfigKind::SingleBranch)
            .with_indicator("local_content_pct", IndicatorSpec::growth(1.0, 0.0))
            .with_tag("local-production");
        let table = synthesize(&config, YearRange::single(2012)).unwrap();
        assert!(matches!(
            expand(table, &config),
            Err(EngineError::DuplicateIndicator { .. })
        ));
    }

    #[test]
    fn custom_registry_is_honoured() {
        let mut registry = ConditionalRegistry::new();
        registry.register("drones", "uav_fleet", IndicatorSpec::growth(5.0, 0.5));
        let config = record(&["drones", "c4isr"]);
        let years = YearRange::new(2020, 2022).unwrap();
        let table = expand_with(synthesize(&config, years).unwrap(), &config, &registry).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("uav_fleet").unwrap().values(), vec![5.0, 7.5, 10.0]);
    }

    #[test]
    fn every_catalog_tag_with_an_entry_expands_cleanly() {
        let registry = ConditionalRegistry::builtin();
        for key in crate::catalog::KNOWN_KEYS {
            let config = resolve(key);
            let years = YearRange::new(2012, 2030).unwrap();
            let table = expand_with(synthesize(&config, years).unwrap(), &config, &registry).unwrap();
            let tagged = config.priority_tags.iter().filter(|t| registry.get(t).is_some()).count();
            assert_eq!(table.len(), config.base_rates.len() + tagged);
        }
    }
}
