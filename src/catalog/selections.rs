//! Known selections and the resolver.

use tracing::debug;

use crate::domain::{ConfigKind, ConfigurationRecord, IndicatorSpec};

/// Key of the record returned for unknown selections.
pub const DEFAULT_KEY: &str = "default";

/// Keys of every known selection, in display order.
pub const KNOWN_KEYS: &[&str] = &[
    "whole-force",
    "land-forces",
    "naval-forces",
    "air-forces",
    "air-defense",
    "t90ms-acquisition",
    "c4isr-program",
];

/// Resolve a selection key. Exact, case-sensitive match; never fails.
pub fn resolve(key: &str) -> ConfigurationRecord {
    match lookup(key) {
        Some(record) => record,
        None => {
            debug!(selection = key, "unknown selection, using default record");
            default_record()
        }
    }
}

/// Like `resolve`, but `None` for unknown keys.
pub fn lookup(key: &str) -> Option<ConfigurationRecord> {
    let record = match key {
        "whole-force" => whole_force(),
        "land-forces" => land_forces(),
        "naval-forces" => naval_forces(),
        "air-forces" => air_forces(),
        "air-defense" => air_defense(),
        "t90ms-acquisition" => t90ms_acquisition(),
        "c4isr-program" => c4isr_program(),
        _ => return None,
    };
    Some(record)
}

/// Every known record, in `KNOWN_KEYS` order.
pub fn known_selections() -> Vec<ConfigurationRecord> {
    KNOWN_KEYS.iter().filter_map(|key| lookup(key)).collect()
}

/// Fallback record: readiness (70, +2%/yr, cap 100) and budget (1.0, +3%/yr), no tags.
pub fn default_record() -> ConfigurationRecord {
    ConfigurationRecord::new(DEFAULT_KEY, "Default force profile", ConfigKind::WholeForce)
        .with_indicator(
            "operational_readiness_pct",
            IndicatorSpec::growth(70.0, 0.02).with_cap(100.0),
        )
        .with_indicator("defense_budget_bn", IndicatorSpec::growth(1.0, 0.03))
}

fn whole_force() -> ConfigurationRecord {
    ConfigurationRecord::new("whole-force", "Armed forces (all branches)", ConfigKind::WholeForce)
        .with_indicator(
            "defense_budget_bn",
            IndicatorSpec::growth(4.5, 0.05)
                .with_regime(2015, 1.3)
                .with_regime(2020, 1.2),
        )
        .with_indicator(
            "operational_readiness_pct",
            IndicatorSpec::growth(70.0, 0.022).with_cap(95.0),
        )
        .with_indicator("deployment_time_days", IndicatorSpec::floor(72.0, 2.5, 45.0))
        .with_indicator(
            "combined_exercises",
            IndicatorSpec::growth(15.0, 0.1).with_regime(2017, 1.1),
        )
        .with_indicator("training_hours", IndicatorSpec::growth(800.0, 0.027))
        .with_tag("modernization")
        .with_tag("joint-operations")
}

fn land_forces() -> ConfigurationRecord {
    ConfigurationRecord::new("land-forces", "Land forces", ConfigKind::SingleBranch)
        .with_indicator("main_battle_tanks", IndicatorSpec::growth(3400.0, 0.0088))
        .with_indicator("armored_vehicles", IndicatorSpec::growth(9500.0, 0.022))
        .with_indicator(
            "self_propelled_artillery",
            IndicatorSpec::growth(650.0, 0.02).with_regime(2019, 1.1),
        )
        .with_indicator("deployment_time_days", IndicatorSpec::floor(72.0, 2.25, 45.0))
        .with_tag("armor-modernization")
}

fn naval_forces() -> ConfigurationRecord {
    ConfigurationRecord::new("naval-forces", "Naval forces", ConfigKind::SingleBranch)
        .with_indicator(
            "major_surface_combatants",
            IndicatorSpec::growth(9.0, 0.03).with_regime(2015, 1.2).with_regime(2016, 1.25),
        )
        .with_indicator("submarines", IndicatorSpec::growth(4.0, 0.05).with_cap(8.0))
        .with_indicator("patrol_days_at_sea", IndicatorSpec::growth(120.0, 0.04).with_cap(220.0))
        .with_tag("blue-water")
}

fn air_forces() -> ConfigurationRecord {
    ConfigurationRecord::new("air-forces", "Air forces", ConfigKind::SingleBranch)
        .with_indicator("combat_aircraft", IndicatorSpec::growth(480.0, 0.01).with_regime(2015, 1.05))
        .with_indicator("flight_hours_per_pilot", IndicatorSpec::growth(90.0, 0.03).with_cap(150.0))
        .with_indicator("sortie_turnaround_hours", IndicatorSpec::floor(8.0, 0.3, 4.0))
        .with_tag("air-superiority")
}

fn air_defense() -> ConfigurationRecord {
    ConfigurationRecord::new("air-defense", "Air defense forces", ConfigKind::SingleBranch)
        .with_indicator("sam_batteries", IndicatorSpec::growth(100.0, 0.02).with_regime(2017, 1.15))
        .with_indicator("radar_sites", IndicatorSpec::growth(60.0, 0.015))
        .with_indicator("alert_response_minutes", IndicatorSpec::floor(15.0, 0.6, 6.0))
        .with_tag("integrated-air-defense")
}

fn t90ms_acquisition() -> ConfigurationRecord {
    ConfigurationRecord::new("t90ms-acquisition", "T-90MS acquisition", ConfigKind::StrategicProgram)
        .with_indicator(
            "program_spend_musd",
            IndicatorSpec::growth(50.0, 0.4).with_regime(2020, 1.5).with_cap(1200.0),
        )
        .with_indicator(
            "units_delivered",
            IndicatorSpec::growth(10.0, 0.5).with_regime(2021, 1.6).with_cap(500.0),
        )
        .with_tag("armor-modernization")
        .with_tag("local-production")
}

fn c4isr_program() -> ConfigurationRecord {
    ConfigurationRecord::new("c4isr-program", "C4ISR systems", ConfigKind::StrategicProgram)
        .with_indicator(
            "program_spend_musd",
            IndicatorSpec::growth(40.0, 0.25).with_regime(2017, 1.3).with_cap(600.0),
        )
        .with_indicator("network_latency_ms", IndicatorSpec::floor(250.0, 15.0, 40.0))
        .with_tag("c4isr")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GrowthModel, NarrativeAxis};

    #[test]
    fn unknown_selection_resolves_to_default() {
        let record = resolve("unknown-branch-xyz");
        assert_eq!(record, default_record());
        assert_eq!(record.key, DEFAULT_KEY);
        assert!(record.priority_tags.is_empty());
    }

    #[test]
    fn match_is_exact() {
        assert_eq!(resolve("whole-force").key, "whole-force");
        assert_eq!(resolve("Whole-Force").key, DEFAULT_KEY);
        assert_eq!(resolve(" whole-force").key, DEFAULT_KEY);
    }

    #[test]
    fn every_known_key_resolves_to_itself() {
        let records = known_selections();
        assert_eq!(records.len(), KNOWN_KEYS.len());
        for (record, key) in records.iter().zip(KNOWN_KEYS) {
            assert_eq!(record.key, *key);
            assert!(!record.base_rates.is_empty());
            assert!(record.base_rates.values().all(|spec| spec.base.is_some()));
        }
    }

    #[test]
    fn whole_force_budget_matches_documented_profile() {
        let record = resolve("whole-force");
        let budget = &record.base_rates["defense_budget_bn"];
        assert_eq!(budget.base, Some(4.5));
        let GrowthModel::Growth { rate, regimes, cap } = &budget.model else {
            panic!("budget should use the growth model");
        };
        assert_eq!(*rate, 0.05);
        assert_eq!(regimes.len(), 2);
        assert!(cap.is_none());
        assert_eq!(record.headline_axis(), NarrativeAxis::Modernization);
    }
}
