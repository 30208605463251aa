//! Spreadsheet artifacts offered for download

pub mod excel;
pub mod template;

pub use excel::{
    default_report_file_name, export_evaluation_to_excel, export_predictions_to_excel,
    predictions_to_buffer,
};
pub use template::{candidate_template_buffer, export_candidate_template, TEMPLATE_FILE_NAME};
