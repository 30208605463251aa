//! Error types for anode cost prediction

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Errors raised while costing a single blend
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CostError {
    #[error("Invalid price format: {0:?}")]
    InvalidPriceFormat(String),

    #[error("NAC/cost ratio undefined for {key}: cost is zero")]
    DivisionUndefined { key: String },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Cost error: {0}")]
    Cost(#[from] CostError),

    #[error("Table load error: {0}")]
    Table(String),

    #[error("Schema mismatch in {table}: missing column {column:?}")]
    SchemaMismatch { table: String, column: String },

    #[error("Invalid composition: {0}")]
    InvalidComposition(String),

    #[error("Excel export error: {0}")]
    Excel(String),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
