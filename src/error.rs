//! Error types for the college basketball statistics pipeline

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Schema mismatch: expected column '{column}' is absent")]
    SchemaMismatch { column: String },

    #[error("Cannot convert value '{value}' in column '{column}' to {target}")]
    TypeCoercion {
        column: String,
        value: String,
        target: String,
    },

    #[error("Invalid quantile {quantile}: must be within [0, 1]")]
    InvalidQuantile { quantile: f64 },

    #[error("Column '{column}' appears more than once")]
    DuplicateColumn { column: String },

    #[error("Row {line} has {found} fields, expected {expected}")]
    MalformedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("No table matching '{selector}' found in document")]
    TableNotFound { selector: String },

    #[error("Invalid CSS selector: {selector}")]
    InvalidSelector { selector: String },

    #[error("Invalid season: {0}")]
    InvalidSeason(#[from] std::num::ParseIntError),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Source returned no data")]
    NoData,
}
