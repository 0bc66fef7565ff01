//! JSON record loading.
//!
//! Supported inputs:
//! - An object whose members are the records, in document order: `{"Alice": 23, "Bob": 56}`
//! - An array of pair objects: `[{"key": "Alice", "value": 23}, ...]`

use std::path::Path;

use crate::error::{ProcessingError, ProcessingResult};
use crate::types::RecordSet;

use super::csv::{KEY_COLUMN, VALUE_COLUMN};

/// Load key/value records from a JSON file.
pub fn ingest_pairs_json_from_path(path: impl AsRef<Path>) -> ProcessingResult<RecordSet> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| ProcessingError::unavailable(path, None, e))?;
    ingest_pairs_json_from_str(&text)
}

/// Load key/value records from an in-memory JSON string.
pub fn ingest_pairs_json_from_str(input: &str) -> ProcessingResult<RecordSet> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ProcessingError::SchemaMismatch {
            message: "json input is empty".to_string(),
        });
    }

    let out = match serde_json::from_str::<serde_json::Value>(trimmed)? {
        serde_json::Value::Object(map) => map
            .iter()
            .enumerate()
            .map(|(idx0, (k, v))| Ok((k.clone(), integer_value(idx0 + 1, k, v)?)))
            .collect::<ProcessingResult<RecordSet>>()?,
        serde_json::Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(idx0, item)| pair_from_object(idx0 + 1, item))
            .collect::<ProcessingResult<RecordSet>>()?,
        _ => {
            return Err(ProcessingError::SchemaMismatch {
                message: "json must be an object or an array of {\"key\", \"value\"} objects".to_string(),
            });
        }
    };

    tracing::debug!(records = out.len(), "ingested json pairs");
    Ok(out)
}

fn pair_from_object(row: usize, item: &serde_json::Value) -> ProcessingResult<(String, i64)> {
    let obj = item.as_object().ok_or_else(|| ProcessingError::SchemaMismatch {
        message: format!("row {row} is not a json object"),
    })?;
    let field = |name: &str| {
        obj.get(name).ok_or_else(|| ProcessingError::SchemaMismatch {
            message: format!("row {row} missing required field '{name}'"),
        })
    };

    let key = match field(KEY_COLUMN)? {
        serde_json::Value::String(s) => s.clone(),
        other => {
            return Err(ProcessingError::ParseError {
                row,
                column: KEY_COLUMN.to_owned(),
                raw: other.to_string(),
                message: "expected string".to_string(),
            });
        }
    };
    let value = integer_value(row, VALUE_COLUMN, field(VALUE_COLUMN)?)?;
    Ok((key, value))
}

fn integer_value(row: usize, column: &str, v: &serde_json::Value) -> ProcessingResult<i64> {
    v.as_i64().ok_or_else(|| ProcessingError::ParseError {
        row,
        column: column.to_owned(),
        raw: v.to_string(),
        message: "expected integer".to_string(),
    })
}
