//! CSV input and output for the PubChem scraper.
//!
//! The input file is validated against the configured headers and loaded as
//! rows keyed by the exposure-name column. Scraped records are written back
//! with the configured output headers, carrying input columns through.

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod error;
pub mod reader;
pub mod writer;

pub use error::{CsvError, Result};
pub use reader::{guard_csv, read_rows, CsvRow, CsvRows};
pub use writer::{write_records, write_records_to};
