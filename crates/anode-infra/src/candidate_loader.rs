//! Batch candidate upload loader
//!
//! Expected columns: `Jenis` (CPC-HS, CPC-LS or CTP), `Lot` (source code),
//! `Source` (descriptive name), `Price` (USD/ton). Accepts `.csv`/`.txt` and
//! `.xlsx` files.

use std::path::Path;

use anode_domain::model::{CandidateRow, CandidateSet, MaterialFamily, PriceField, SourceCode};

use crate::error::TableLoadError;
use crate::table::{cell, read_delimited, read_first_sheet, RawTable};

const TABLE: &str = "candidate table";
pub const CANDIDATE_COLUMNS: [&str; 4] = ["Jenis", "Lot", "Source", "Price"];

/// Load candidates from a file, picking the reader by extension
pub fn load_candidates<P: AsRef<Path>>(
    path: P,
    delimiter: char,
) -> Result<CandidateSet, TableLoadError> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let table = match ext.as_str() {
        "csv" | "txt" => read_delimited(&std::fs::read(path)?, delimiter)?,
        "xlsx" => read_first_sheet(path)?,
        other => return Err(TableLoadError::UnsupportedFormat(other.to_string())),
    };

    let set = CandidateSet::from_rows(parse_rows(&table)?);
    tracing::info!(
        path = %path.display(),
        hs = set.hs.len(),
        ls = set.ls.len(),
        ctp = set.ctp.len(),
        "candidates loaded"
    );
    Ok(set)
}

/// Parse candidates from delimited bytes (an uploaded CSV body)
pub fn parse_candidates_csv(bytes: &[u8], delimiter: char) -> Result<CandidateSet, TableLoadError> {
    let table = read_delimited(bytes, delimiter)?;
    Ok(CandidateSet::from_rows(parse_rows(&table)?))
}

fn parse_rows(table: &RawTable) -> Result<Vec<CandidateRow>, TableLoadError> {
    let [jenis_col, lot_col, source_col, price_col] = table.locate(TABLE, CANDIDATE_COLUMNS)?;

    let mut rows = Vec::with_capacity(table.rows.len());
    for (row_num, row) in &table.rows {
        let jenis = cell(row, jenis_col);
        let family = MaterialFamily::from_jenis(jenis).ok_or_else(|| TableLoadError::UnknownFamily {
            row: *row_num,
            value: jenis.to_string(),
        })?;
        let raw_lot = cell(row, lot_col);
        if raw_lot.is_empty() {
            return Err(TableLoadError::MissingValue {
                row: *row_num,
                column: "Lot".to_string(),
            });
        }
        let lot = SourceCode::new(raw_lot).ok_or_else(|| TableLoadError::InvalidSourceCode {
            row: *row_num,
            value: raw_lot.to_string(),
        })?;

        let price = PriceField::parse(cell(row, price_col));
        if let PriceField::Invalid(ref raw) = price {
            tracing::warn!(row = *row_num, lot = %lot, price = %raw, "candidate price is not numeric");
        }

        rows.push(CandidateRow {
            family,
            lot,
            source: cell(row, source_col).to_string(),
            price,
        });
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;
    use std::io::Write;

    const SAMPLE: &str = "Jenis,Lot,Source,Price\n\
                          CPC-HS,A,Src1,1000\n\
                          CPC-HS,W,Src4,\"1,050.5\"\n\
                          CPC-LS,G,Src2,1200\n\
                          CTP,A,Src3,abc\n";

    #[test]
    fn test_parse_candidates() {
        let set = parse_candidates_csv(SAMPLE.as_bytes(), ',').unwrap();
        assert_eq!(set.hs.len(), 2);
        assert_eq!(set.ls.len(), 1);
        assert_eq!(set.ctp.len(), 1);
        assert_eq!(set.hs[1].price, PriceField::Value(1050.5));
        assert_eq!(set.ctp[0].price, PriceField::Invalid("abc".to_string()));
        assert_eq!(set.hs[0].display_source(), "A - Src1");
    }

    #[test]
    fn test_missing_price_column() {
        let err = parse_candidates_csv(b"Jenis,Lot,Source\nCTP,A,Src3\n", ',').unwrap_err();
        match err {
            TableLoadError::SchemaMismatch { column, .. } => assert_eq!(column, "Price"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_unknown_family_fails_fast() {
        let err = parse_candidates_csv(b"Jenis,Lot,Source,Price\nCOKE,A,Src,1\n", ',').unwrap_err();
        match err {
            TableLoadError::UnknownFamily { row, value } => {
                assert_eq!(row, 2);
                assert_eq!(value, "COKE");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_blank_lot_rejected() {
        let err = parse_candidates_csv(b"Jenis,Lot,Source,Price\nCTP,,Src,1\n", ',').unwrap_err();
        assert!(matches!(err, TableLoadError::MissingValue { row: 2, .. }));
    }

    #[test]
    fn test_multi_letter_lot_rejected() {
        let err = parse_candidates_csv(b"Jenis,Lot,Source,Price
CPC-HS,A,Src1,1000
CPC-LS,BG,Src,1
", ',')
            .unwrap_err();
        match err {
            TableLoadError::InvalidSourceCode { row, value } => {
                assert_eq!(row, 3);
                assert_eq!(value, "BG");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_load_csv_file() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let set = load_candidates(file.path(), ',').unwrap();
        assert_eq!(set.combination_count(), 2);
    }

    #[test]
    fn test_load_xlsx_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("candidates.xlsx");

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        for (col, h) in CANDIDATE_COLUMNS.iter().enumerate() {
            sheet.write_string(0, col as u16, *h).unwrap();
        }
        sheet.write_string(1, 0, "CPC-HS").unwrap();
        sheet.write_string(1, 1, "A").unwrap();
        sheet.write_string(1, 2, "Src1").unwrap();
        sheet.write_number(1, 3, 1000.0).unwrap();
        sheet.write_string(2, 0, "CTP").unwrap();
        sheet.write_string(2, 1, "Q").unwrap();
        sheet.write_string(2, 2, "Src9").unwrap();
        sheet.write_number(2, 3, 1510.25).unwrap();
        workbook.save(&path).unwrap();

        let set = load_candidates(&path, ',').unwrap();
        assert_eq!(set.hs.len(), 1);
        assert_eq!(set.ctp.len(), 1);
        assert_eq!(set.hs[0].price, PriceField::Value(1000.0));
        assert_eq!(set.ctp[0].price, PriceField::Value(1510.25));
        assert_eq!(set.ctp[0].lot.as_char(), 'Q');
    }

    #[test]
    fn test_unsupported_extension() {
        let err = load_candidates("candidates.json", ',').unwrap_err();
        assert!(matches!(err, TableLoadError::UnsupportedFormat(_)));
    }
}
