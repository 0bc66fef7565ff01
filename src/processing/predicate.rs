//! Declarative predicates that can be loaded from configuration.
//!
//! Any `FnMut(&T) -> bool` works as a predicate for the processing functions; these enums exist
//! so a predicate can be written down in a config file.

use serde::{Deserialize, Serialize};

/// Comparison of an integer value against a fixed threshold.
///
/// Serialized as a single-key object, e.g. `{"at_least": 100}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueFilter {
    /// `value >= n`
    AtLeast(i64),
    /// `value <= n`
    AtMost(i64),
    /// `value > n`
    GreaterThan(i64),
    /// `value < n`
    LessThan(i64),
    /// `value == n`
    EqualTo(i64),
}

impl ValueFilter {
    /// Evaluate the filter against `value`.
    pub fn matches(&self, value: &i64) -> bool {
        match *self {
            Self::AtLeast(n) => *value >= n,
            Self::AtMost(n) => *value <= n,
            Self::GreaterThan(n) => *value > n,
            Self::LessThan(n) => *value < n,
            Self::EqualTo(n) => *value == n,
        }
    }
}

/// Substring test over a text record.
///
/// Serialized as a single-key object, e.g. `{"contains": "anonymous"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextMatch {
    Contains(String),
    StartsWith(String),
    EndsWith(String),
}

impl TextMatch {
    /// Evaluate the match against `text`. Matching is case-sensitive.
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Self::Contains(needle) => text.contains(needle.as_str()),
            Self::StartsWith(needle) => text.starts_with(needle.as_str()),
            Self::EndsWith(needle) => text.ends_with(needle.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{TextMatch, ValueFilter};

    #[test]
    fn value_filter_boundaries() {
        assert!(ValueFilter::AtLeast(100).matches(&100));
        assert!(!ValueFilter::GreaterThan(100).matches(&100));
        assert!(ValueFilter::AtMost(10).matches(&10));
        assert!(!ValueFilter::LessThan(10).matches(&10));
        assert!(ValueFilter::EqualTo(-3).matches(&-3));
    }

    #[test]
    fn value_filter_from_json() {
        let f: ValueFilter = serde_json::from_str(r#"{"at_least": 100}"#).unwrap();
        assert_eq!(f, ValueFilter::AtLeast(100));
    }

    #[test]
    fn text_match_is_case_sensitive() {
        let m = TextMatch::Contains("anonymous".to_string());
        assert!(m.matches("lambda functions are anonymous functions."));
        assert!(!m.matches("Anonymous"));
        assert!(TextMatch::StartsWith("fun".into()).matches("functions"));
        assert!(TextMatch::EndsWith(".".into()).matches("a name."));
    }

    #[test]
    fn text_match_from_json() {
        let m: TextMatch = serde_json::from_str(r#"{"contains": "anonymous"}"#).unwrap();
        assert_eq!(m, TextMatch::Contains("anonymous".to_string()));
    }
}
