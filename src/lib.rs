//! `rust-record-processing` packages three small record patterns as pure, order-preserving
//! functions:
//!
//! - [`processing::filter_project`]: keep the key/value pairs whose value satisfies a predicate
//! - [`processing::line_transform`]: transform each line of a text source (canonically, trim it)
//! - [`processing::tag_by_predicate`]: pair every element with the boolean result of a predicate
//!
//! Around those it provides a typed record container ([`types::RecordSet`]), loaders for a single
//! local CSV, JSON or text source ([`ingestion`]), and a JSON configuration document
//! ([`config::ProcessingConfig`]).
//!
//! ## Filter: top earners
//!
//! ```rust
//! use rust_record_processing::types::RecordSet;
//!
//! let employees: RecordSet = [("Alice", 23), ("Bob", 56), ("Carol", 10), ("Frank", 343), ("Eve", 322)]
//!     .into_iter()
//!     .map(|(k, v)| (k.to_string(), v))
//!     .collect();
//!
//! let top_earners = employees.filter_by_value(|v| *v >= 100);
//! assert_eq!(
//!     top_earners.records,
//!     vec![("Frank".to_string(), 343), ("Eve".to_string(), 322)]
//! );
//! ```
//!
//! ## Lines: read and strip
//!
//! ```no_run
//! use rust_record_processing::ingestion::{read_trimmed_lines, LineSource};
//! use rust_record_processing::processing::trim_lines;
//!
//! # fn main() -> Result<(), rust_record_processing::ProcessingError> {
//! // Eager: every line, or the first error.
//! let lines = read_trimmed_lines("notes.txt")?;
//! println!("{lines:?}");
//!
//! // Lazy: one line at a time; the file is closed when `source` is dropped.
//! let source = LineSource::open("notes.txt")?;
//! for line in trim_lines(source) {
//!     println!("{}", line?);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Tag: map with a conditional
//!
//! ```rust
//! use rust_record_processing::processing::tag_by_predicate;
//!
//! let txt = [
//!     "lambda functions are anonymous functions.",
//!     "anonymous functions dont have a name.",
//!     "functions are object in python",
//! ];
//! let mark = tag_by_predicate(&txt, |s| s.contains("anonymous"));
//! assert_eq!(
//!     mark.iter().map(|(t, _)| *t).collect::<Vec<_>>(),
//!     vec![true, true, false]
//! );
//! ```
//!
//! ## Modules
//!
//! - [`processing`]: the filter / line-transform / tag operations and declarative predicates
//! - [`ingestion`]: CSV/JSON/text loading plus observer hooks
//! - [`types`]: record container types
//! - [`config`]: JSON configuration
//! - [`error`]: error types
//!
//! Predicate failures are never wrapped: the `try_*` operations return the caller's error type
//! unchanged.

pub mod config;
pub mod error;
pub mod ingestion;
pub mod processing;
pub mod types;

pub use error::{ProcessingError, ProcessingResult};
