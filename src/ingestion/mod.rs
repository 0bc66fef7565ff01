//! Loading records and lines from a single local source.
//!
//! Most callers should use [`load_records`] or [`load_lines`] (from [`unified`]) which:
//!
//! - auto-detect format by file extension (or you can override via [`SourceOptions`])
//! - read the whole source in one forward pass
//! - optionally report success/failure/alerts to a [`SourceObserver`]
//!
//! For lazy, line-at-a-time reading use [`LineSource`] directly. Format-specific functions are
//! available under [`csv`] and [`json`].

pub mod csv;
pub mod json;
pub mod lines;
pub mod observability;
pub mod unified;

pub use lines::{read_transformed_lines, read_trimmed_lines, LineSource};
pub use observability::{
    CompositeObserver, FileObserver, SourceContext, SourceEvent, SourceEventKind, SourceObserver, SourceSeverity,
    SourceStats, TracingObserver,
};
pub use unified::{load_lines, load_records, SourceFormat, SourceOptions};
