//! Spreadsheet export of displayed records.
//!
//! Output is CSV with a UTF-8 byte-order mark so spreadsheet applications
//! open accented names correctly. The header row holds the column labels of
//! [`Record::columns`]; each following row holds [`Record::cells`].
//!
//! Cells that a spreadsheet would read as a formula are prefixed with `'`.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use chrono::NaiveDate;

use crate::record::{Record, RecordKind};

/// MIME type for the exported file.
pub const CSV_MIME: &str = "text/csv;charset=utf-8";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

const FORMULA_TRIGGERS: &[char] = &['=', '+', '-', '@', '\t', '\r'];

/// Error returned by [`to_csv`].
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write csv row: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush csv buffer: {0}")]
    Flush(#[from] std::io::Error),
}

/// Serialize `records` as CSV bytes.
///
/// # Errors
///
/// Returns an error if a row cannot be written to the in-memory buffer.
pub fn to_csv<'a, R, I>(records: I) -> Result<Vec<u8>, ExportError>
where
    R: Record,
    I: IntoIterator<Item = &'a R>,
{
    let mut writer = csv::Writer::from_writer(UTF8_BOM.to_vec());
    writer.write_record(R::columns().iter().map(|c| c.label))?;
    for record in records {
        writer.write_record(record.cells().into_iter().map(neutralize_formula))?;
    }
    writer.into_inner().map_err(|e| ExportError::Flush(e.into_error()))
}

fn neutralize_formula(cell: String) -> String {
    if cell.starts_with(FORMULA_TRIGGERS) { format!("'{cell}") } else { cell }
}

/// Download filename, e.g. `patients-2024-03-01.csv`.
#[must_use]
pub fn export_filename(kind: RecordKind, date: NaiveDate) -> String {
    format!("{}-{}.csv", kind.collection(), date.format("%Y-%m-%d"))
}
