//! Errors raised while loading input tables

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableLoadError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to read workbook: {0}")]
    Excel(String),

    #[error("Schema mismatch in {table}: missing column {column:?}")]
    SchemaMismatch { table: String, column: String },

    #[error("Invalid number format in row {row}, column {column}: {value}")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Missing value in row {row}, column {column}")]
    MissingValue { row: usize, column: String },

    #[error("Unknown material family in row {row}: {value:?}")]
    UnknownFamily { row: usize, value: String },

    #[error("Invalid source code in row {row}: {value:?} (expected a single letter)")]
    InvalidSourceCode { row: usize, value: String },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Table is empty: {0}")]
    Empty(String),
}

impl From<calamine::XlsxError> for TableLoadError {
    fn from(err: calamine::XlsxError) -> Self {
        TableLoadError::Excel(err.to_string())
    }
}

impl From<TableLoadError> for anode_types::Error {
    fn from(err: TableLoadError) -> Self {
        match err {
            TableLoadError::Io(e) => anode_types::Error::Io(e),
            TableLoadError::SchemaMismatch { table, column } => {
                anode_types::Error::SchemaMismatch { table, column }
            }
            other => anode_types::Error::Table(other.to_string()),
        }
    }
}
