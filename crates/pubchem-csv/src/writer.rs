//! CSV output of scraped records.

use crate::error::Result;
use crate::reader::CsvRows;
use pubchem_core::ScrapedRecord;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Write `records` to `path` with `out_headers` as the header row.
///
/// Overwrites any existing file.
pub fn write_records(
    path: &Path,
    out_headers: &[String],
    key_header: &str,
    rows: &CsvRows,
    records: &[ScrapedRecord],
) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_records_to(file, out_headers, key_header, rows, records)?;
    info!(count = records.len(), path = %path.display(), "wrote output rows");
    Ok(())
}

/// Write `records` as CSV into any writer.
///
/// For each output column: `cid` and `iupac` (case-insensitive) come from the
/// record, the key header carries the exposure name, and any other header is
/// copied from the matching input row. Unknown columns are left empty.
pub fn write_records_to<W: Write>(
    writer: W,
    out_headers: &[String],
    key_header: &str,
    rows: &CsvRows,
    records: &[ScrapedRecord],
) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(out_headers)?;

    for record in records {
        let input = rows.get(&record.name);
        let line: Vec<&str> = out_headers
            .iter()
            .map(|header| {
                if header.eq_ignore_ascii_case("cid") {
                    record.cid.as_str()
                } else if header.eq_ignore_ascii_case("iupac") {
                    record.iupac.as_str()
                } else if header == key_header {
                    record.name.as_str()
                } else {
                    input
                        .and_then(|row| row.get(header))
                        .map_or("", String::as_str)
                }
            })
            .collect();
        csv_writer.write_record(&line)?;
    }

    csv_writer.flush()?;
    Ok(())
}
