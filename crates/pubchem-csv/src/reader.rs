//! CSV input: header validation and keyed row loading.

use crate::error::{CsvError, Result};
use pubchem_core::{CoreError, ExposureName};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

/// One input row, keyed by header.
pub type CsvRow = HashMap<String, String>;

/// Input rows in file order, keyed by the value of the key column.
#[derive(Debug, Clone, Default)]
pub struct CsvRows {
    keys: Vec<String>,
    rows: HashMap<String, CsvRow>,
}

impl CsvRows {
    /// Distinct keys in order of first appearance.
    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Row for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&CsvRow> {
        self.rows.get(key)
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keys converted to exposure names, in order.
    pub fn exposure_names(&self) -> std::result::Result<Vec<ExposureName>, CoreError> {
        self.keys.iter().map(|key| ExposureName::new(key.as_str())).collect()
    }

    fn insert(&mut self, key: String, row: CsvRow) {
        if self.rows.insert(key.clone(), row).is_none() {
            self.keys.push(key);
        } else {
            debug!(%key, "duplicate key, keeping first position with latest values");
        }
    }
}

/// Check that `path` exists, has a header row, and contains every expected header.
pub fn guard_csv(path: &Path, expected_headers: &[String]) -> Result<()> {
    let mut reader = open_reader(path)?;
    check_headers(path, &header_list(&mut reader)?, expected_headers)
}

/// Load rows keyed by the first expected header.
///
/// A repeated key keeps its first position and takes the later row's values.
/// Rows whose key is blank are skipped.
pub fn read_rows(path: &Path, expected_headers: &[String]) -> Result<CsvRows> {
    let key_header = expected_headers.first().ok_or(CsvError::NoKeyHeader)?;

    let mut reader = open_reader(path)?;
    let headers = header_list(&mut reader)?;
    check_headers(path, &headers, expected_headers)?;

    let mut rows = CsvRows::default();

    for (line, record) in reader.records().enumerate() {
        let record = record?;
        let row: CsvRow = headers
            .iter()
            .enumerate()
            .map(|(i, header)| (header.clone(), record.get(i).unwrap_or_default().to_string()))
            .collect();

        let key = row.get(key_header).cloned().unwrap_or_default();
        if key.trim().is_empty() {
            // Line numbers are 1-based and the header occupies line 1
            warn!(line = line + 2, header = %key_header, "skipping row with empty key");
            continue;
        }
        rows.insert(key, row);
    }

    info!(count = rows.len(), path = %path.display(), "loaded input rows");
    Ok(rows)
}

fn open_reader(path: &Path) -> Result<csv::Reader<std::fs::File>> {
    if !path.exists() {
        return Err(CsvError::NotFound {
            path: path.display().to_string(),
        });
    }
    let reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    Ok(reader)
}

fn header_list(reader: &mut csv::Reader<std::fs::File>) -> Result<Vec<String>> {
    Ok(reader.headers()?.iter().map(str::to_string).collect())
}

fn check_headers(path: &Path, headers: &[String], expected: &[String]) -> Result<()> {
    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(CsvError::NoHeaders {
            path: path.display().to_string(),
        });
    }

    let missing: Vec<String> = expected
        .iter()
        .filter(|e| !headers.contains(e))
        .cloned()
        .collect();
    if !missing.is_empty() {
        return Err(CsvError::WrongHeaders {
            path: path.display().to_string(),
            headers: headers.to_vec(),
            missing,
        });
    }
    Ok(())
}
