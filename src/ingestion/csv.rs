//! CSV record loading.

use std::path::Path;

use crate::error::{ProcessingError, ProcessingResult};
use crate::types::RecordSet;

/// Column holding the record key.
pub const KEY_COLUMN: &str = "key";
/// Column holding the record value.
pub const VALUE_COLUMN: &str = "value";

/// Load key/value records from a CSV file.
///
/// Rules:
///
/// - CSV must have headers.
/// - Headers must contain `key` and `value` (order can differ, other columns are ignored).
/// - Values are trimmed and parsed as `i64`; keys are trimmed and kept as text.
/// - I/O failures and invalid UTF-8 anywhere in the file are
///   [`ProcessingError::ResourceUnavailable`].
pub fn ingest_pairs_csv_from_path(path: impl AsRef<Path>) -> ProcessingResult<RecordSet> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| ProcessingError::unavailable(path, None, e))?;
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(file);
    read_pairs(&mut rdr, path)
}

/// Load key/value records from an existing CSV reader.
pub fn ingest_pairs_csv_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> ProcessingResult<RecordSet> {
    read_pairs(rdr, Path::new("<reader>"))
}

fn read_pairs<R: std::io::Read>(rdr: &mut csv::Reader<R>, label: &Path) -> ProcessingResult<RecordSet> {
    let headers = rdr.headers().map_err(|e| csv_error(label, e))?.clone();

    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| ProcessingError::SchemaMismatch {
                message: format!(
                    "missing required column '{name}'. headers={:?}",
                    headers.iter().collect::<Vec<_>>()
                ),
            })
    };
    let key_idx = column(KEY_COLUMN)?;
    let value_idx = column(VALUE_COLUMN)?;

    let mut out = RecordSet::default();
    for (row_idx0, result) in rdr.records().enumerate() {
        let record = result.map_err(|e| csv_error(label, e))?;
        // Line the record starts on; blank lines are skipped by the reader so the
        // record index alone is not enough.
        let user_row = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(row_idx0 + 2);

        let key = record.get(key_idx).unwrap_or("").trim().to_owned();
        let raw = record.get(value_idx).unwrap_or("");
        let value = raw.trim().parse::<i64>().map_err(|e| ProcessingError::ParseError {
            row: user_row,
            column: VALUE_COLUMN.to_owned(),
            raw: raw.to_owned(),
            message: e.to_string(),
        })?;
        out.push(key, value);
    }

    tracing::debug!(records = out.len(), source = %label.display(), "ingested csv pairs");
    Ok(out)
}

/// Unreadable input (I/O or invalid UTF-8) becomes `ResourceUnavailable`; everything else stays a
/// CSV error.
fn csv_error(label: &Path, err: csv::Error) -> ProcessingError {
    if !matches!(err.kind(), csv::ErrorKind::Io(_) | csv::ErrorKind::Utf8 { .. }) {
        return ProcessingError::Csv(err);
    }
    let line = err.position().map(|p| p.line() as usize);
    let source = match err.into_kind() {
        csv::ErrorKind::Io(e) => e,
        csv::ErrorKind::Utf8 { err, .. } => std::io::Error::new(std::io::ErrorKind::InvalidData, err),
        other => std::io::Error::other(format!("{other:?}")),
    };
    ProcessingError::unavailable(label, line, source)
}
