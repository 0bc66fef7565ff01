//! Unified loading entrypoints.
//!
//! [`load_records`] reads key/value records from a CSV or JSON file; [`load_lines`] reads a text
//! file line by line, trimming each line per [`SourceOptions::trim`].
//!
//! - If [`SourceOptions::format`] is `None`, the format is inferred from the file extension.
//! - If a [`SourceObserver`] is provided, success/failure/alerts are reported to it.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{ProcessingError, ProcessingResult};
use crate::processing::TrimMode;
use crate::types::RecordSet;

use super::lines::read_transformed_lines;
use super::observability::{SourceContext, SourceObserver, SourceSeverity, SourceStats};
use super::{csv, json};

/// Supported source formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceFormat {
    /// Comma-separated `key,value` records.
    Csv,
    /// JSON object or array of pair objects.
    Json,
    /// Plain text, one record per line.
    Text,
}

impl SourceFormat {
    /// Parse a format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            "txt" | "text" | "log" => Some(Self::Text),
            _ => None,
        }
    }
}

/// Options controlling loading behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct SourceOptions {
    /// If `None`, auto-detect format from file extension.
    pub format: Option<SourceFormat>,
    /// Whitespace stripping applied by [`load_lines`].
    pub trim: TrimMode,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn SourceObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: SourceSeverity,
}

impl fmt::Debug for SourceOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceOptions")
            .field("format", &self.format)
            .field("trim", &self.trim)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            format: None,
            trim: TrimMode::default(),
            observer: None,
            alert_at_or_above: SourceSeverity::Critical,
        }
    }
}

/// Load key/value records from `path`.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with the record count
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// # Examples
///
/// ```no_run
/// use rust_record_processing::ingestion::{load_records, SourceOptions};
/// use rust_record_processing::processing::ValueFilter;
///
/// # fn main() -> Result<(), rust_record_processing::ProcessingError> {
/// let employees = load_records("employees.json", &SourceOptions::default())?;
/// let top = employees.filter_by_value(|v| ValueFilter::AtLeast(100).matches(v));
/// println!("{:?}", top.records);
/// # Ok(())
/// # }
/// ```
pub fn load_records(path: impl AsRef<Path>, options: &SourceOptions) -> ProcessingResult<RecordSet> {
    let path = path.as_ref();
    let format = resolve_format(path, options)?;

    let result = match format {
        SourceFormat::Csv => csv::ingest_pairs_csv_from_path(path),
        SourceFormat::Json => json::ingest_pairs_json_from_path(path),
        SourceFormat::Text => Err(ProcessingError::SchemaMismatch {
            message: format!(
                "text sources hold lines, not key/value records ({})",
                path.display()
            ),
        }),
    };

    report(path, format, options, result.as_ref().map(RecordSet::len));
    result
}

/// Read every line of `path`, stripped per `options.trim`.
///
/// The format is not inspected: any readable file is treated as text. Returns all lines or the
/// first error.
pub fn load_lines(path: impl AsRef<Path>, options: &SourceOptions) -> ProcessingResult<Vec<String>> {
    let path = path.as_ref();
    let result = read_transformed_lines(path, options.trim.transform());
    report(path, SourceFormat::Text, options, result.as_ref().map(Vec::len));
    result
}

fn resolve_format(path: &Path, options: &SourceOptions) -> ProcessingResult<SourceFormat> {
    if let Some(f) = options.format {
        return Ok(f);
    }
    let result = infer_format_from_path(path);
    if let Err(e) = &result {
        // Inference failures are reported as text-format failures.
        if let Some(obs) = options.observer.as_ref() {
            let ctx = SourceContext {
                path: path.to_path_buf(),
                format: SourceFormat::Text,
            };
            notify_failure(obs.as_ref(), &ctx, options.alert_at_or_above, e);
        }
    }
    result
}

fn report(
    path: &Path,
    format: SourceFormat,
    options: &SourceOptions,
    outcome: Result<usize, &ProcessingError>,
) {
    let Some(obs) = options.observer.as_ref() else {
        return;
    };
    let ctx = SourceContext {
        path: path.to_path_buf(),
        format,
    };
    match outcome {
        Ok(records) => obs.on_success(&ctx, SourceStats { records }),
        Err(e) => notify_failure(obs.as_ref(), &ctx, options.alert_at_or_above, e),
    }
}

fn notify_failure(
    obs: &dyn SourceObserver,
    ctx: &SourceContext,
    alert_at_or_above: SourceSeverity,
    e: &ProcessingError,
) {
    let sev = SourceSeverity::for_error(e);
    obs.on_failure(ctx, sev, e);
    if sev >= alert_at_or_above {
        obs.on_alert(ctx, sev, e);
    }
}

fn infer_format_from_path(path: &Path) -> ProcessingResult<SourceFormat> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| ProcessingError::SchemaMismatch {
            message: format!(
                "cannot infer format: path has no extension ({})",
                path.display()
            ),
        })?;

    SourceFormat::from_extension(ext).ok_or_else(|| ProcessingError::SchemaMismatch {
        message: format!(
            "cannot infer format from extension '{ext}' for path ({})",
            path.display()
        ),
    })
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{infer_format_from_path, SourceFormat};

    #[test]
    fn infers_from_extension_case_insensitively() {
        assert_eq!(
            infer_format_from_path(Path::new("a/b.CSV")).unwrap(),
            SourceFormat::Csv
        );
        assert_eq!(
            infer_format_from_path(Path::new("x.json")).unwrap(),
            SourceFormat::Json
        );
        assert_eq!(
            infer_format_from_path(Path::new("notes.txt")).unwrap(),
            SourceFormat::Text
        );
    }

    #[test]
    fn unknown_or_missing_extension_is_rejected() {
        let err = infer_format_from_path(Path::new("data.parquet")).unwrap_err();
        assert!(err.to_string().contains("extension 'parquet'"));
        assert!(infer_format_from_path(Path::new("README")).is_err());
    }
}
