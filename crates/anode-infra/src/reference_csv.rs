//! Reference metric table loader
//!
//! Expected columns (any order, extra columns ignored):
//! `Lot;RRO2;RRCO2;AP;TC;NAC`. NAC may be blank.

use std::path::Path;

use anode_domain::model::{parse_decimal, ReferenceMetrics, ReferenceRecord, ReferenceStore};

use crate::error::TableLoadError;
use crate::table::{cell, read_delimited, RawTable};

const TABLE: &str = "reference table";
const COLUMNS: [&str; 6] = ["Lot", "RRO2", "RRCO2", "AP", "TC", "NAC"];

/// Load the reference store from a delimited file
pub fn load_reference_store<P: AsRef<Path>>(
    path: P,
    delimiter: char,
) -> Result<ReferenceStore, TableLoadError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let store = parse_reference_csv(&bytes, delimiter)?;
    tracing::info!(path = %path.display(), lots = store.len(), "reference store loaded");
    Ok(store)
}

/// Parse reference rows from delimited bytes
pub fn parse_reference_csv(bytes: &[u8], delimiter: char) -> Result<ReferenceStore, TableLoadError> {
    let table = read_delimited(bytes, delimiter)?;
    let records = parse_records(&table)?;
    Ok(ReferenceStore::from_records(records))
}

fn parse_records(table: &RawTable) -> Result<Vec<ReferenceRecord>, TableLoadError> {
    let [lot_col, rro2_col, rrco2_col, ap_col, tc_col, nac_col] = table.locate(TABLE, COLUMNS)?;

    let mut records = Vec::with_capacity(table.rows.len());
    for (row_num, row) in &table.rows {
        let row_num = *row_num;
        let lot = cell(row, lot_col);
        if lot.is_empty() {
            return Err(TableLoadError::MissingValue {
                row: row_num,
                column: "Lot".to_string(),
            });
        }

        let metrics = ReferenceMetrics {
            rro2: required_number(cell(row, rro2_col), row_num, "RRO2")?,
            rrco2: required_number(cell(row, rrco2_col), row_num, "RRCO2")?,
            ap: required_number(cell(row, ap_col), row_num, "AP")?,
            tc: required_number(cell(row, tc_col), row_num, "TC")?,
            nac: optional_number(cell(row, nac_col), row_num, "NAC")?,
        };

        records.push(ReferenceRecord {
            lot: lot.to_string(),
            metrics,
        });
    }
    Ok(records)
}

fn required_number(s: &str, row: usize, column: &str) -> Result<f64, TableLoadError> {
    optional_number(s, row, column)?.ok_or_else(|| TableLoadError::MissingValue {
        row,
        column: column.to_string(),
    })
}

fn optional_number(s: &str, row: usize, column: &str) -> Result<Option<f64>, TableLoadError> {
    if is_null_marker(s) {
        return Ok(None);
    }
    parse_decimal(s)
        .map(Some)
        .ok_or_else(|| TableLoadError::InvalidNumber {
            row,
            column: column.to_string(),
            value: s.to_string(),
        })
}

/// Spreadsheet spellings of an empty cell
fn is_null_marker(s: &str) -> bool {
    let s = s.trim();
    s.is_empty()
        || s == "-"
        || ["nan", "na", "n/a", "#n/a", "null"]
            .iter()
            .any(|m| s.eq_ignore_ascii_case(m))
}
