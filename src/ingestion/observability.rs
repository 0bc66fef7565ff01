use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::error::ProcessingError;

use super::unified::SourceFormat;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (operation failed).
    Error,
    /// Critical error (the source itself could not be read).
    Critical,
}

impl SourceSeverity {
    /// Severity assigned to a failed load.
    pub fn for_error(e: &ProcessingError) -> Self {
        match e {
            ProcessingError::ResourceUnavailable { .. } => Self::Critical,
            ProcessingError::Csv(err) => match err.kind() {
                ::csv::ErrorKind::Io(_) => Self::Critical,
                _ => Self::Error,
            },
            ProcessingError::Json(err) if err.is_io() => Self::Critical,
            ProcessingError::Json(_) => Self::Error,
            ProcessingError::SchemaMismatch { .. } => Self::Error,
            ProcessingError::ParseError { .. } => Self::Error,
        }
    }
}

/// Context about a load attempt.
#[derive(Debug, Clone)]
pub struct SourceContext {
    /// The input path.
    pub path: PathBuf,
    /// Format used to read it.
    pub format: SourceFormat,
}

/// Stats reported on a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceStats {
    /// Number of records (or lines) produced.
    pub records: usize,
}

/// Observer interface for load outcomes.
pub trait SourceObserver: Send + Sync {
    /// Called when a load succeeds.
    fn on_success(&self, _ctx: &SourceContext, _stats: SourceStats) {}

    /// Called when a load fails.
    fn on_failure(&self, _ctx: &SourceContext, _severity: SourceSeverity, _error: &ProcessingError) {}

    /// Called when a failure meets the alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &SourceContext, severity: SourceSeverity, error: &ProcessingError) {
        self.on_failure(ctx, severity, error)
    }
}

/// Fans out callbacks to a list of observers, in list order.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn SourceObserver>>,
}

impl CompositeObserver {
    /// Create a composite that forwards every callback to each of `observers`.
    pub fn new(observers: Vec<Arc<dyn SourceObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl SourceObserver for CompositeObserver {
    fn on_success(&self, ctx: &SourceContext, stats: SourceStats) {
        self.observers.iter().for_each(|o| o.on_success(ctx, stats));
    }

    fn on_failure(&self, ctx: &SourceContext, severity: SourceSeverity, error: &ProcessingError) {
        self.observers
            .iter()
            .for_each(|o| o.on_failure(ctx, severity, error));
    }

    fn on_alert(&self, ctx: &SourceContext, severity: SourceSeverity, error: &ProcessingError) {
        self.observers
            .iter()
            .for_each(|o| o.on_alert(ctx, severity, error));
    }
}

/// Forwards load events to the `tracing` subscriber installed by the application.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl SourceObserver for TracingObserver {
    fn on_success(&self, ctx: &SourceContext, stats: SourceStats) {
        tracing::info!(
            format = ?ctx.format,
            path = %ctx.path.display(),
            records = stats.records,
            "source loaded"
        );
    }

    fn on_failure(&self, ctx: &SourceContext, severity: SourceSeverity, error: &ProcessingError) {
        tracing::warn!(
            ?severity,
            format = ?ctx.format,
            path = %ctx.path.display(),
            %error,
            "source load failed"
        );
    }

    fn on_alert(&self, ctx: &SourceContext, severity: SourceSeverity, error: &ProcessingError) {
        tracing::error!(
            ?severity,
            format = ?ctx.format,
            path = %ctx.path.display(),
            %error,
            "source load alert"
        );
    }
}

/// Kind of load event written by [`FileObserver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceEventKind {
    Loaded,
    Failed,
    Alert,
}

/// One line of a [`FileObserver`] log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceEvent {
    /// Milliseconds since the Unix epoch.
    pub at_ms: u64,
    pub event: SourceEventKind,
    pub format: SourceFormat,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub records: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<SourceSeverity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SourceEvent {
    fn new(event: SourceEventKind, ctx: &SourceContext) -> Self {
        let at_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();
        Self {
            at_ms,
            event,
            format: ctx.format,
            path: ctx.path.display().to_string(),
            records: None,
            severity: None,
            error: None,
        }
    }

    fn failure(event: SourceEventKind, ctx: &SourceContext, severity: SourceSeverity, error: &ProcessingError) -> Self {
        Self {
            severity: Some(severity),
            error: Some(error.to_string()),
            ..Self::new(event, ctx)
        }
    }
}

/// Appends one JSON [`SourceEvent`] per line to a local log file.
///
/// Writes are best-effort; failures to open/write the log file are ignored.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append(&self, event: &SourceEvent) {
        let Ok(line) = serde_json::to_string(event) else {
            return;
        };
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{line}");
        }
    }
}

impl SourceObserver for FileObserver {
    fn on_success(&self, ctx: &SourceContext, stats: SourceStats) {
        self.append(&SourceEvent {
            records: Some(stats.records),
            ..SourceEvent::new(SourceEventKind::Loaded, ctx)
        });
    }

    fn on_failure(&self, ctx: &SourceContext, severity: SourceSeverity, error: &ProcessingError) {
        self.append(&SourceEvent::failure(SourceEventKind::Failed, ctx, severity, error));
    }

    fn on_alert(&self, ctx: &SourceContext, severity: SourceSeverity, error: &ProcessingError) {
        self.append(&SourceEvent::failure(SourceEventKind::Alert, ctx, severity, error));
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{
        FileObserver, SourceContext, SourceEvent, SourceEventKind, SourceObserver, SourceSeverity, SourceStats,
        TracingObserver,
    };
    use crate::error::ProcessingError;
    use crate::ingestion::SourceFormat;

    #[test]
    fn unavailable_sources_are_critical() {
        let err = ProcessingError::unavailable(
            "x.csv",
            None,
            std::io::Error::new(std::io::ErrorKind::NotFound, "nope"),
        );
        assert_eq!(SourceSeverity::for_error(&err), SourceSeverity::Critical);
    }

    #[test]
    fn shape_errors_are_not_critical() {
        let err = ProcessingError::SchemaMismatch {
            message: "missing".to_string(),
        };
        assert_eq!(SourceSeverity::for_error(&err), SourceSeverity::Error);
        assert!(SourceSeverity::Error < SourceSeverity::Critical);
    }

    #[test]
    fn file_observer_writes_one_json_event_per_callback() {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let log_path = std::env::temp_dir().join(format!("rust-record-processing-events-{nanos}.log"));
        let ctx = SourceContext {
            path: PathBuf::from("employees.csv"),
            format: SourceFormat::Csv,
        };
        let err = ProcessingError::SchemaMismatch {
            message: "missing".to_string(),
        };

        let obs = FileObserver::new(&log_path);
        obs.on_success(&ctx, SourceStats { records: 2 });
        obs.on_failure(&ctx, SourceSeverity::Error, &err);
        obs.on_alert(&ctx, SourceSeverity::Critical, &err);
        TracingObserver.on_success(&ctx, SourceStats { records: 2 });

        let events: Vec<SourceEvent> = std::fs::read_to_string(&log_path)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(
            events.iter().map(|e| e.event).collect::<Vec<_>>(),
            vec![SourceEventKind::Loaded, SourceEventKind::Failed, SourceEventKind::Alert]
        );
        assert_eq!(events[0].records, Some(2));
        assert_eq!(events[0].format, SourceFormat::Csv);
        assert_eq!(events[2].severity, Some(SourceSeverity::Critical));
        assert!(events[1].error.as_deref().unwrap().contains("schema mismatch"));
        let _ = std::fs::remove_file(&log_path);
    }
}
