//! Excel export of ranked predictions

use std::path::Path;

use anode_domain::model::{CombinationEvaluation, PredictionResult, SkippedCombination};
use anode_types::{Error, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

pub const PREDICTIONS_SHEET: &str = "Predictions";
pub const SKIPPED_SHEET: &str = "Skipped";

pub const PREDICTION_HEADERS: [&str; 12] = [
    "Rank", "CPC HS", "CPC LS", "CTP", "Lot", "RRO2", "RRCO2", "AP", "TC", "NAC", "Cost",
    "NAC/Cost",
];

/// Export ranked predictions to an Excel file
pub fn export_predictions_to_excel(results: &[PredictionResult], output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    write_predictions_sheet(workbook.add_worksheet(), results)?;
    workbook.save(output_path).map_err(excel_err)?;
    tracing::info!(path = %output_path.display(), rows = results.len(), "predictions exported");
    Ok(())
}

/// Export predictions plus the list of skipped combinations
pub fn export_evaluation_to_excel(evaluation: &CombinationEvaluation, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    write_predictions_sheet(workbook.add_worksheet(), &evaluation.results)?;
    write_skipped_sheet(workbook.add_worksheet(), &evaluation.skipped)?;
    workbook.save(output_path).map_err(excel_err)?;
    tracing::info!(
        path = %output_path.display(),
        rows = evaluation.results.len(),
        skipped = evaluation.skipped.len(),
        "evaluation exported"
    );
    Ok(())
}

/// Workbook bytes, for serving as a download
pub fn predictions_to_buffer(results: &[PredictionResult]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    write_predictions_sheet(workbook.add_worksheet(), results)?;
    workbook.save_to_buffer().map_err(excel_err)
}

/// Download name for a report generated now
pub fn default_report_file_name() -> String {
    format!(
        "anode-cost-ranking-{}.xlsx",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    )
}

fn excel_err(e: XlsxError) -> Error {
    Error::Excel(e.to_string())
}

fn write_predictions_sheet(sheet: &mut Worksheet, results: &[PredictionResult]) -> Result<()> {
    sheet.set_name(PREDICTIONS_SHEET).map_err(excel_err)?;

    let header_format = Format::new().set_bold();
    let number_format = Format::new().set_num_format("0.00");

    for (col, header) in PREDICTION_HEADERS.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(excel_err)?;
    }

    for (idx, result) in results.iter().enumerate() {
        let row = (idx + 1) as u32;

        sheet.write_number(row, 0, (idx + 1) as f64).map_err(excel_err)?;
        sheet.write_string(row, 1, &result.hs_source).map_err(excel_err)?;
        sheet.write_string(row, 2, &result.ls_source).map_err(excel_err)?;
        sheet.write_string(row, 3, &result.ctp_source).map_err(excel_err)?;
        sheet.write_string(row, 4, result.key.lot()).map_err(excel_err)?;

        let numbers = [
            result.rro2,
            result.rrco2,
            result.ap,
            result.tc,
            result.nac,
            result.cost,
            result.ratio,
        ];
        for (offset, value) in numbers.iter().enumerate() {
            sheet
                .write_number_with_format(row, 5 + offset as u16, *value, &number_format)
                .map_err(excel_err)?;
        }
    }

    sheet.set_freeze_panes(1, 0).map_err(excel_err)?;
    sheet.set_column_width(0, 6).map_err(excel_err)?;
    for col in 1..=3 {
        sheet.set_column_width(col, 24).map_err(excel_err)?;
    }
    sheet.set_column_width(11, 12).map_err(excel_err)?;

    Ok(())
}

fn write_skipped_sheet(sheet: &mut Worksheet, skipped: &[SkippedCombination]) -> Result<()> {
    sheet.set_name(SKIPPED_SHEET).map_err(excel_err)?;

    let header_format = Format::new().set_bold();
    for (col, header) in ["Lot", "Reason"].iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(excel_err)?;
    }

    for (idx, entry) in skipped.iter().enumerate() {
        let row = (idx + 1) as u32;
        sheet.write_string(row, 0, entry.key.lot()).map_err(excel_err)?;
        sheet.write_string(row, 1, entry.reason.to_string()).map_err(excel_err)?;
    }

    sheet.set_column_width(1, 30).map_err(excel_err)?;
    Ok(())
}
