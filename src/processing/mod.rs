//! In-memory record transformations.
//!
//! Everything here is a pure, single-pass function over its input. Inputs are borrowed and never
//! mutated; output order always follows input order.
//!
//! - [`filter_project()`]: keep the key/value pairs whose value satisfies a predicate
//! - [`line_transform()`]: lazily transform each line of a text source (canonically, trim it)
//! - [`tag_by_predicate()`]: pair every element with the boolean result of a predicate
//!
//! Predicates are plain closures. [`ValueFilter`] and [`TextMatch`] are ready-made predicates that
//! can also be deserialized from configuration.
//!
//! ## Example
//!
//! ```rust
//! use rust_record_processing::processing::{filter_project, tag_by_predicate, trim_lines};
//!
//! let employees = vec![
//!     ("Alice", 23),
//!     ("Bob", 56),
//!     ("Carol", 10),
//!     ("Frank", 343),
//!     ("Eve", 322),
//! ];
//! let top_earners = filter_project(&employees, |v| *v >= 100);
//! assert_eq!(top_earners, vec![("Frank", 343), ("Eve", 322)]);
//!
//! let lines = vec![Ok::<_, std::io::Error>("a ".to_string()), Ok(" b".to_string())];
//! let trimmed: Vec<String> = trim_lines(lines).collect::<Result<_, _>>().unwrap();
//! assert_eq!(trimmed, vec!["a", "b"]);
//!
//! let txt = ["anonymous functions", "named functions"];
//! let mark = tag_by_predicate(&txt, |s| s.contains("anonymous"));
//! assert_eq!(mark, vec![(true, "anonymous functions"), (false, "named functions")]);
//! ```

pub mod filter;
pub mod lines;
pub mod predicate;
pub mod tag;

pub use filter::{filter_project, filter_project_with, try_filter_project};
pub use lines::{line_transform, trim_lines, LineTransform, TrimMode};
pub use predicate::{TextMatch, ValueFilter};
pub use tag::{tag_by_predicate, tag_iter, try_tag_by_predicate};
