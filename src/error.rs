use std::path::PathBuf;

use thiserror::Error;

/// Convenience result type for loading and line-reading operations.
pub type ProcessingResult<T> = Result<T, ProcessingError>;

/// Error type returned by record loaders and line sources.
///
/// Caller-supplied predicate failures are not wrapped here: the `try_*` operations in
/// [`crate::processing`] return the caller's own error type unchanged.
#[derive(Debug, Error)]
pub enum ProcessingError {
    /// The source could not be opened, or a read failed part way through.
    ///
    /// `line` is the 1-based line at which reading failed, or `None` when the open itself failed.
    #[error("resource unavailable: {}{}: {source}", .path.display(), line_suffix(.line))]
    ResourceUnavailable {
        path: PathBuf,
        line: Option<usize>,
        #[source]
        source: std::io::Error,
    },

    /// CSV decoding error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON decoding error (record files and configuration).
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input does not have the expected shape (missing columns, wrong JSON layout, unknown
    /// format).
    #[error("schema mismatch: {message}")]
    SchemaMismatch { message: String },

    /// A value could not be parsed as an integer magnitude.
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },
}

impl ProcessingError {
    pub(crate) fn unavailable(path: impl Into<PathBuf>, line: Option<usize>, source: std::io::Error) -> Self {
        Self::ResourceUnavailable {
            path: path.into(),
            line,
            source,
        }
    }

    /// Returns `true` for [`ProcessingError::ResourceUnavailable`].
    pub fn is_resource_unavailable(&self) -> bool {
        matches!(self, Self::ResourceUnavailable { .. })
    }
}

fn line_suffix(line: &Option<usize>) -> String {
    match line {
        Some(l) => format!(" (line {l})"),
        None => String::new(),
    }
}
