//! Error types for CSV input and output.

use thiserror::Error;

/// Errors that can occur while reading or writing CSV files.
#[derive(Error, Debug)]
pub enum CsvError {
    /// Input file does not exist
    #[error("cannot find file: '{path}'")]
    NotFound {
        /// Expected file path
        path: String,
    },

    /// Input file has no header row
    #[error("CSV '{path}' has no headers")]
    NoHeaders {
        /// File path
        path: String,
    },

    /// Input file lacks one or more expected headers
    #[error("CSV '{path}' has wrong headers: {headers:?} (missing {missing:?})")]
    WrongHeaders {
        /// File path
        path: String,
        /// Headers actually present
        headers: Vec<String>,
        /// Expected headers that are absent
        missing: Vec<String>,
    },

    /// No key column could be determined
    #[error("no key header configured")]
    NoKeyHeader,

    /// Malformed CSV content
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error while accessing the file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for CSV operations.
pub type Result<T> = std::result::Result<T, CsvError>;
