//! Read/write table JSON files.
//!
//! A table file is the portable form of one synthesized selection:
//! - run metadata (tool, generation time, selection key and kind)
//! - the `TimeSeriesTable` itself
//!
//! Loading re-validates the table (year coverage, contiguous range). Saved
//! tables can be compared against each other by taking one year of each as an
//! entity snapshot.

use std::fs::File;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{ConfigKind, EntitySnapshot, TimeSeriesTable};
use crate::error::{AppError, EngineError, EngineResult};

/// A saved table file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableFile {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    pub selection: String,
    pub kind: ConfigKind,
    pub table: TimeSeriesTable,
}

impl TableFile {
    pub fn new(selection: impl Into<String>, kind: ConfigKind, table: TimeSeriesTable) -> Self {
        Self {
            tool: "scn".to_string(),
            generated_at: Utc::now(),
            selection: selection.into(),
            kind,
            table,
        }
    }

    /// Values of every indicator in `year` (default: the last table year),
    /// keyed by the selection.
    pub fn snapshot_at(&self, year: Option<i32>) -> EngineResult<EntitySnapshot> {
        let years = self.table.years();
        let year = year.unwrap_or(years.last());
        if !years.contains(year) {
            return Err(EngineError::WindowOutOfRange {
                first: year,
                last: year,
                table_first: years.first(),
                table_last: years.last(),
            });
        }
        Ok(self
            .table
            .iter()
            .filter_map(|(name, series)| series.value_at(year).map(|v| (name, v)))
            .fold(EntitySnapshot::new(self.selection.clone()), |snapshot, (name, v)| {
                snapshot.with(name, v)
            }))
    }
}

/// Write table files as a JSON array.
pub fn write_tables_json(path: &Path, files: &[TableFile]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create table JSON '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(file, files)
        .map_err(|e| AppError::new(2, format!("Failed to write table JSON: {e}")))?;
    info!(path = %path.display(), tables = files.len(), "table JSON written");
    Ok(())
}

/// Read table files written by `write_tables_json`.
pub fn read_tables_json(path: &Path) -> Result<Vec<TableFile>, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open table JSON '{}': {e}", path.display())))?;
    serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid table JSON: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::YearRange;

    #[test]
    fn table_json_round_trips() {
        let config = crate::catalog::resolve("naval-forces");
        let table = crate::synth::synthesize(&config, YearRange::new(2012, 2016).unwrap()).unwrap();
        let files = vec![TableFile::new(config.key.clone(), config.kind, table.clone())];

        let path = std::env::temp_dir().join(format!("scn_tables_{}.json", std::process::id()));
        write_tables_json(&path, &files).unwrap();
        let loaded = read_tables_json(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].selection, "naval-forces");
        assert_eq!(loaded[0].kind, config.kind);
        assert_eq!(loaded[0].table.years(), table.years());
        let names: Vec<&str> = loaded[0].table.indicators().collect();
        let expected: Vec<&str> = table.indicators().collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn saved_tables_compare_as_snapshots() {
        let years = YearRange::new(2012, 2024).unwrap();
        let files: Vec<TableFile> = ["whole-force", "default"]
            .iter()
            .map(|key| {
                let config = crate::catalog::resolve(key);
                let table = crate::synth::synthesize(&config, years).unwrap();
                TableFile::new(*key, config.kind, table)
            })
            .collect();

        let path = std::env::temp_dir().join(format!("scn_compare_tables_{}.json", std::process::id()));
        write_tables_json(&path, &files).unwrap();
        let loaded = read_tables_json(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let snapshots: Vec<EntitySnapshot> = loaded.iter().map(|f| f.snapshot_at(None).unwrap()).collect();
        assert_eq!(snapshots[0].entity, "whole-force");
        assert!((snapshots[0].values["defense_budget_bn"] - 11.232).abs() < 1e-9);

        let cmp = crate::compare::normalize(&snapshots, &["defense_budget_bn"]).unwrap();
        assert_eq!(cmp.rows[0].cells["defense_budget_bn"].rank, 1);
        assert_eq!(cmp.rows[1].cells["defense_budget_bn"].rank, 2);

        let early = loaded[1].snapshot_at(Some(2012)).unwrap();
        assert_eq!(early.values["defense_budget_bn"], 1.0);
        assert!(matches!(
            loaded[0].snapshot_at(Some(2030)),
            Err(EngineError::WindowOutOfRange { .. })
        ));
    }
}
