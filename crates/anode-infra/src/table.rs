//! Raw table reading shared by the loaders

use std::borrow::Cow;
use std::path::Path;

use calamine::{open_workbook, Reader, Xlsx};
use encoding_rs::WINDOWS_1252;

use crate::error::TableLoadError;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Header plus data rows. Each row carries its 1-based line number
/// (the header is row 1).
pub(crate) struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<(usize, Vec<String>)>,
}

impl RawTable {
    /// Positions of the required columns, matched trimmed and case-insensitively
    pub fn locate<const N: usize>(
        &self,
        table: &str,
        required: [&str; N],
    ) -> Result<[usize; N], TableLoadError> {
        let mut positions = [0usize; N];
        for (slot, name) in positions.iter_mut().zip(required) {
            *slot = self
                .headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
                .ok_or_else(|| TableLoadError::SchemaMismatch {
                    table: table.to_string(),
                    column: name.to_string(),
                })?;
        }
        Ok(positions)
    }
}

/// Cell text, empty when the row is short
pub(crate) fn cell(row: &[String], idx: usize) -> &str {
    row.get(idx).map(|s| s.trim()).unwrap_or("")
}

/// Decode uploaded bytes: UTF-8 (BOM stripped), falling back to Windows-1252
/// for files saved by older spreadsheet tools
pub(crate) fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => {
            let (decoded, _, had_errors) = WINDOWS_1252.decode(bytes);
            if had_errors {
                tracing::warn!("some characters could not be decoded from Windows-1252");
            } else {
                tracing::debug!("input is not UTF-8, decoded as Windows-1252");
            }
            decoded
        }
    }
}

pub(crate) fn read_delimited(bytes: &[u8], delimiter: char) -> Result<RawTable, TableLoadError> {
    if !delimiter.is_ascii() {
        return Err(TableLoadError::UnsupportedFormat(format!(
            "delimiter {:?} is not ASCII",
            delimiter
        )));
    }

    let text = decode_text(bytes);
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(TableLoadError::Empty("no header row".to_string()));
    }

    let mut rows = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        let row_num = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(row_idx + 2);
        let values: Vec<String> = record.iter().map(str::to_string).collect();
        if values.iter().all(|v| v.is_empty()) {
            continue;
        }
        rows.push((row_num, values));
    }

    Ok(RawTable { headers, rows })
}

/// First worksheet of an `.xlsx` workbook
pub(crate) fn read_first_sheet(path: &Path) -> Result<RawTable, TableLoadError> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| TableLoadError::Empty("workbook has no sheets".to_string()))?;
    let range = workbook.worksheet_range(&sheet_name)?;

    let mut sheet_rows = range.rows();
    let headers: Vec<String> = sheet_rows
        .next()
        .ok_or_else(|| TableLoadError::Empty(format!("sheet {} has no rows", sheet_name)))?
        .iter()
        .map(|c| c.to_string().trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for (row_idx, data_row) in sheet_rows.enumerate() {
        let values: Vec<String> = data_row
            .iter()
            .map(|c| c.to_string().trim().to_string())
            .collect();
        if values.iter().all(|v| v.is_empty()) {
            continue;
        }
        rows.push((row_idx + 2, values));
    }

    Ok(RawTable { headers, rows })
}
