//! Candidate upload template

use std::path::Path;

use anode_domain::model::MaterialFamily;
use anode_infra::candidate_loader::CANDIDATE_COLUMNS;
use anode_types::{Error, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet};

use crate::constants::{default_prices, sources_for};

pub const TEMPLATE_SHEET: &str = "Candidates";
pub const TEMPLATE_FILE_NAME: &str = "candidate-template.xlsx";

/// Write the template workbook users fill in before uploading
pub fn export_candidate_template(output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    write_template_sheet(workbook.add_worksheet())?;
    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;
    Ok(())
}

/// Template workbook bytes, for serving as a download
pub fn candidate_template_buffer() -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    write_template_sheet(workbook.add_worksheet())?;
    workbook
        .save_to_buffer()
        .map_err(|e| Error::Excel(e.to_string()))
}

fn write_template_sheet(sheet: &mut Worksheet) -> Result<()> {
    sheet
        .set_name(TEMPLATE_SHEET)
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();
    for (col, header) in CANDIDATE_COLUMNS.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    // One example row per sourced family
    let prices = default_prices();
    for (idx, family) in MaterialFamily::SOURCED.iter().enumerate() {
        let row = (idx + 1) as u32;
        let code = sources_for(*family)
            .first()
            .map(|c| c.to_string())
            .unwrap_or_default();
        let price = match family {
            MaterialFamily::CpcHs => prices.hs,
            MaterialFamily::CpcLs => prices.ls,
            _ => prices.ctp,
        };
        sheet
            .write_string(row, 0, family.label())
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 1, &code)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 2, format!("Supplier {}", code))
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 3, price)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    sheet
        .set_column_width(2, 24)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anode_infra::load_candidates;

    #[test]
    fn test_buffer_is_xlsx() {
        let bytes = candidate_template_buffer().unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_buffer_loads_as_candidates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(TEMPLATE_FILE_NAME);
        std::fs::write(&path, candidate_template_buffer().unwrap()).unwrap();

        let set = load_candidates(&path, ',').unwrap();
        assert_eq!(set.combination_count(), 1);
        assert_eq!(set.hs[0].display_source(), "A - Supplier A");
        assert_eq!(set.ls[0].lot.as_char(), 'G');
        assert_eq!(set.ctp[0].price.value(), Ok(1500.0));
    }
}
