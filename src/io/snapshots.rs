//! Entity snapshot ingest.
//!
//! Two formats are accepted, chosen by file extension:
//!
//! - `.json`: an array of `{ "entity": ..., "values": { name: number } }`
//! - anything else: CSV with an `entity` column and one numeric column per indicator
//!
//! Empty CSV cells are left out of the snapshot, so requesting that indicator
//! later is reported by the normalizer. Unparseable numbers fail the load with
//! the offending line.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use tracing::debug;

use crate::domain::EntitySnapshot;
use crate::error::AppError;

const ENTITY_COLUMN: &str = "entity";

/// Load snapshots from `path` (JSON or CSV).
pub fn read_snapshots(path: &Path) -> Result<Vec<EntitySnapshot>, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open snapshots '{}': {e}", path.display())))?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let snapshots = if is_json {
        serde_json::from_reader(file)
            .map_err(|e| AppError::new(2, format!("Invalid snapshots JSON '{}': {e}", path.display())))?
    } else {
        parse_snapshots_csv(file)?
    };

    debug!(path = %path.display(), entities = snapshots.len(), "snapshots loaded");
    Ok(snapshots)
}

/// Parse snapshots from CSV text.
pub fn parse_snapshots_csv<R: Read>(input: R) -> Result<Vec<EntitySnapshot>, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader
        .headers()
        .map_err(|e| AppError::new(2, format!("Failed to read CSV headers: {e}")))?
        .clone();
    let header_map = build_header_map(&headers);
    let entity_idx = *header_map
        .get(ENTITY_COLUMN)
        .ok_or_else(|| AppError::new(2, "Snapshot CSV is missing the 'entity' column."))?;

    let mut out = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        // +2: records start after the header and lines are 1-based.
        let line = idx + 2;
        let record = result.map_err(|e| AppError::new(2, format!("CSV parse error at line {line}: {e}")))?;
        out.push(parse_row(&record, &headers, entity_idx, line)?);
    }
    Ok(out)
}

fn parse_row(
    record: &StringRecord,
    headers: &StringRecord,
    entity_idx: usize,
    line: usize,
) -> Result<EntitySnapshot, AppError> {
    let entity = record.get(entity_idx).unwrap_or("");
    if entity.is_empty() {
        return Err(AppError::new(2, format!("Line {line}: empty entity name.")));
    }

    let mut snapshot = EntitySnapshot::new(entity);
    for (idx, (name, raw)) in headers.iter().zip(record.iter()).enumerate() {
        if idx == entity_idx || raw.is_empty() {
            continue;
        }
        let value: f64 = raw.parse().map_err(|_| {
            AppError::new(
                2,
                format!("Line {line}: '{raw}' is not a number (column '{}').", normalize_header_name(name)),
            )
        })?;
        snapshot = snapshot.with(normalize_header_name(name), value);
    }
    Ok(snapshot)
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports sometimes prefix the first header with a UTF-8 BOM.
    name.trim().trim_start_matches('\u{feff}').to_ascii_lowercase()
}
