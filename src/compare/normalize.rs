//! Rescale indicators to 0-100 against the cross-entity maximum and rank them.

use std::collections::BTreeMap;

use crate::compare::rank::dense_rank_desc;
use crate::domain::{EntitySnapshot, NormalizedCell, NormalizedComparison, NormalizedRow};
use crate::error::{EngineError, EngineResult};

/// Normalize and rank `indicators` across `snapshots`.
///
/// - duplicate indicator names are compared once, in first-seen order
/// - rows keep the order of `snapshots`
/// - an empty `indicators` list yields an empty comparison
pub fn normalize<S: AsRef<str>>(
    snapshots: &[EntitySnapshot],
    indicators: &[S],
) -> EngineResult<NormalizedComparison> {
    let mut names: Vec<String> = Vec::with_capacity(indicators.len());
    for name in indicators {
        let name = name.as_ref();
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    if names.is_empty() {
        return Ok(NormalizedComparison::default());
    }

    let mut rows: Vec<NormalizedRow> = snapshots
        .iter()
        .map(|s| NormalizedRow {
            entity: s.entity.clone(),
            cells: BTreeMap::new(),
        })
        .collect();

    for name in &names {
        let raw = column(snapshots, name)?;
        let max = raw.iter().copied().fold(0.0_f64, f64::max);
        let ranks = dense_rank_desc(&raw);

        for ((row, &value), rank) in rows.iter_mut().zip(&raw).zip(ranks) {
            let normalized = if max == 0.0 { 0.0 } else { value / max * 100.0 };
            row.cells.insert(
                name.clone(),
                NormalizedCell {
                    raw: value,
                    normalized,
                    rank,
                },
            );
        }
    }

    Ok(NormalizedComparison {
        indicators: names,
        rows,
    })
}

/// Raw values of `indicator` in entity order, validated.
fn column(snapshots: &[EntitySnapshot], indicator: &str) -> EngineResult<Vec<f64>> {
    snapshots
        .iter()
        .map(|s| {
            let value = *s
                .values
                .get(indicator)
                .ok_or_else(|| EngineError::MissingIndicator {
                    entity: s.entity.clone(),
                    indicator: indicator.to_string(),
                })?;
            if !(value.is_finite() && value >= 0.0) {
                return Err(EngineError::InvalidSnapshotValue {
                    entity: s.entity.clone(),
                    indicator: indicator.to_string(),
                    value,
                });
            }
            Ok(value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshots(values: &[(&str, f64)]) -> Vec<EntitySnapshot> {
        values
            .iter()
            .map(|&(entity, v)| EntitySnapshot::new(entity).with("tanks", v))
            .collect()
    }

    fn ranks(cmp: &NormalizedComparison, indicator: &str) -> Vec<u32> {
        cmp.rows.iter().map(|r| r.cells[indicator].rank).collect()
    }

    #[test]
    fn dense_rank_has_no_gap_after_ties() {
        let cmp = normalize(&snapshots(&[("A", 10.0), ("B", 10.0), ("C", 7.0)]), &["tanks"]).unwrap();
        assert_eq!(ranks(&cmp, "tanks"), vec![1, 1, 2]);
        let normalized: Vec<f64> = cmp.rows.iter().map(|r| r.cells["tanks"].normalized).collect();
        assert_eq!(normalized[0], 100.0);
        assert_eq!(normalized[1], 100.0);
        assert!((normalized[2] - 70.0).abs() < 1e-9);
    }

    #[test]
    fn zero_max_normalizes_to_zero_and_ties_at_one() {
        let cmp = normalize(&snapshots(&[("A", 0.0), ("B", 0.0)]), &["tanks"]).unwrap();
        assert!(cmp.rows.iter().all(|r| r.cells["tanks"].normalized == 0.0));
        assert_eq!(ranks(&cmp, "tanks"), vec![1, 1]);
    }

    #[test]
    fn output_keeps_input_entity_order() {
        let input = snapshots(&[("Iran", 610.0), ("Egypt", 462.0), ("Algeria", 130.0), ("Turkey", 355.0)]);
        let cmp = normalize(&input, &["tanks"]).unwrap();
        let order: Vec<&str> = cmp.rows.iter().map(|r| r.entity.as_str()).collect();
        assert_eq!(order, vec!["Iran", "Egypt", "Algeria", "Turkey"]);
        assert_eq!(ranks(&cmp, "tanks"), vec![1, 2, 4, 3]);
    }

    #[test]
    fn missing_indicator_is_a_configuration_error() {
        let mut input = snapshots(&[("A", 1.0), ("B", 2.0)]);
        input[1].values.clear();
        assert_eq!(
            normalize(&input, &["tanks"]),
            Err(EngineError::MissingIndicator {
                entity: "B".to_string(),
                indicator: "tanks".to_string()
            })
        );
    }

    #[test]
    fn empty_indicator_set_is_empty_comparison() {
        let none: [&str; 0] = [];
        let cmp = normalize(&snapshots(&[("A", 1.0)]), &none).unwrap();
        assert!(cmp.is_empty());
        assert!(cmp.rows.is_empty());
    }

    #[test]
    fn duplicate_requests_are_compared_once() {
        let cmp = normalize(&snapshots(&[("A", 1.0)]), &["tanks", "tanks"]).unwrap();
        assert_eq!(cmp.indicators, vec!["tanks".to_string()]);
    }

    #[test]
    fn negative_values_are_rejected() {
        assert!(matches!(
            normalize(&snapshots(&[("A", -1.0)]), &["tanks"]),
            Err(EngineError::InvalidSnapshotValue { .. })
        ));
    }
}
