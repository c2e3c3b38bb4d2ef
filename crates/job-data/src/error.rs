// File: crates/job-data/src/error.rs
// Summary: Error type for loading result-set tables.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to open {origin}")]
    Open {
        origin: String,
        #[source]
        source: csv::Error,
    },
    #[error("{origin}: failed to read header row")]
    Header {
        origin: String,
        #[source]
        source: csv::Error,
    },
    #[error("{origin}: missing required column `{column}`")]
    MissingColumn { origin: String, column: String },
    #[error("{origin}: invalid data in row {row}")]
    Row {
        origin: String,
        /// 1-based index of the data row (header excluded).
        row: usize,
        #[source]
        source: csv::Error,
    },
}

impl DataError {
    /// Name of the missing column, when that is what went wrong.
    pub fn missing_column(&self) -> Option<&str> {
        match self {
            DataError::MissingColumn { column, .. } => Some(column.as_str()),
            _ => None,
        }
    }
}
