//! CSV exports of tables and comparisons.
//!
//! Both exports use a long format (one value per row) so they load directly into
//! spreadsheets or dataframe tools.

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::domain::{NormalizedComparison, TimeSeriesTable};
use crate::error::AppError;

#[derive(Serialize)]
struct TableRow<'a> {
    selection: &'a str,
    year: i32,
    indicator: &'a str,
    value: f64,
}

#[derive(Serialize)]
struct ComparisonRow<'a> {
    entity: &'a str,
    indicator: &'a str,
    raw: f64,
    normalized: f64,
    rank: u32,
}

/// Write `(selection, table)` pairs as `selection,year,indicator,value` rows.
pub fn write_tables_csv(path: &Path, tables: &[(String, TimeSeriesTable)]) -> Result<(), AppError> {
    let file = std::fs::File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))?;
    write_tables(file, tables)?;
    info!(path = %path.display(), tables = tables.len(), "table CSV written");
    Ok(())
}

pub fn write_tables<W: Write>(out: W, tables: &[(String, TimeSeriesTable)]) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_writer(out);
    for (selection, table) in tables {
        for (year, indicator, value) in table.points() {
            writer
                .serialize(TableRow {
                    selection,
                    year,
                    indicator,
                    value,
                })
                .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
        }
    }
    writer
        .flush()
        .map_err(|e| AppError::new(2, format!("Failed to flush export CSV: {e}")))
}

/// Write a comparison as `entity,indicator,raw,normalized,rank` rows.
pub fn write_comparison_csv(path: &Path, comparison: &NormalizedComparison) -> Result<(), AppError> {
    let file = std::fs::File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))?;
    write_comparison(file, comparison)?;
    info!(path = %path.display(), entities = comparison.rows.len(), "comparison CSV written");
    Ok(())
}

pub fn write_comparison<W: Write>(out: W, comparison: &NormalizedComparison) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_writer(out);
    for row in &comparison.rows {
        for indicator in &comparison.indicators {
            let Some(cell) = row.cells.get(indicator) else {
                continue;
            };
            writer
                .serialize(ComparisonRow {
                    entity: &row.entity,
                    indicator,
                    raw: cell.raw,
                    normalized: cell.normalized,
                    rank: cell.rank,
                })
                .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
        }
    }
    writer
        .flush()
        .map_err(|e| AppError::new(2, format!("Failed to flush export CSV: {e}")))
}
