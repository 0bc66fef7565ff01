//! JSON configuration for a filter/tag run.
//!
//! ```json
//! {
//!   "format": "json",
//!   "trim": "both",
//!   "filter": { "at_least": 100 },
//!   "tag": { "contains": "anonymous" },
//!   "alert_at_or_above": "critical"
//! }
//! ```
//!
//! Every field is optional.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{ProcessingError, ProcessingResult};
use crate::ingestion::{SourceFormat, SourceObserver, SourceOptions, SourceSeverity};
use crate::processing::{tag_by_predicate, TextMatch, TrimMode, ValueFilter};
use crate::types::{RecordSet, Tagged};

/// Settings for loading a source and filtering/tagging its records.
///
/// Missing fields take their [`Default`] values; unknown fields are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Forced source format; inferred from the extension when absent.
    pub format: Option<SourceFormat>,
    /// Whitespace stripped from each line of a text source.
    pub trim: TrimMode,
    /// Value filter for key/value records. No filter keeps every record.
    pub filter: Option<ValueFilter>,
    /// Tag rule for text records. No rule tags every line `false`.
    pub tag: Option<TextMatch>,
    /// Failures at or above this severity are also reported through `on_alert`.
    pub alert_at_or_above: SourceSeverity,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            format: None,
            trim: TrimMode::default(),
            filter: None,
            tag: None,
            alert_at_or_above: SourceSeverity::Critical,
        }
    }
}

impl ProcessingConfig {
    /// Parse a config from JSON text.
    pub fn from_json_str(input: &str) -> ProcessingResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Read and parse a JSON config file. An unreadable file is
    /// [`ProcessingError::ResourceUnavailable`].
    pub fn from_path(path: impl AsRef<Path>) -> ProcessingResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ProcessingError::unavailable(path, None, e))?;
        let config = Self::from_json_str(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded processing config");
        Ok(config)
    }

    /// Loader options described by this config, reporting to `observer` if given.
    pub fn source_options(&self, observer: Option<Arc<dyn SourceObserver>>) -> SourceOptions {
        SourceOptions {
            format: self.format,
            trim: self.trim,
            observer,
            alert_at_or_above: self.alert_at_or_above,
        }
    }

    /// Apply the configured value filter.
    pub fn filter_records(&self, records: &RecordSet) -> RecordSet {
        match &self.filter {
            Some(f) => records.filter_by_value(|v| f.matches(v)),
            None => records.clone(),
        }
    }

    /// Apply the configured tag rule to every line.
    pub fn tag_lines(&self, lines: &[String]) -> Vec<Tagged<String>> {
        match &self.tag {
            Some(rule) => tag_by_predicate(lines, |l| rule.matches(l)),
            None => tag_by_predicate(lines, |_| false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ProcessingConfig;
    use crate::ingestion::{SourceFormat, SourceSeverity};
    use crate::processing::{TextMatch, TrimMode, ValueFilter};
    use crate::types::RecordSet;

    #[test]
    fn empty_object_gives_defaults() {
        let cfg = ProcessingConfig::from_json_str("{}").unwrap();
        assert_eq!(cfg, ProcessingConfig::default());
        assert_eq!(cfg.trim, TrimMode::Both);
        assert_eq!(cfg.alert_at_or_above, SourceSeverity::Critical);
    }

    #[test]
    fn full_config_parses() {
        let cfg = ProcessingConfig::from_json_str(
            r#"{
                "format": "csv",
                "trim": "trailing",
                "filter": {"at_least": 100},
                "tag": {"contains": "anonymous"},
                "alert_at_or_above": "error"
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.format, Some(SourceFormat::Csv));
        assert_eq!(cfg.trim, TrimMode::Trailing);
        assert_eq!(cfg.filter, Some(ValueFilter::AtLeast(100)));
        assert_eq!(cfg.tag, Some(TextMatch::Contains("anonymous".to_string())));
        assert_eq!(cfg.alert_at_or_above, SourceSeverity::Error);

        let opts = cfg.source_options(None);
        assert_eq!(opts.format, Some(SourceFormat::Csv));
        assert!(opts.observer.is_none());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = ProcessingConfig::from_json_str(r#"{"treshold": 3}"#).unwrap_err();
        assert!(err.to_string().contains("json error"));
    }

    #[test]
    fn filter_and_tag_follow_config() {
        let cfg = ProcessingConfig {
            filter: Some(ValueFilter::AtLeast(100)),
            tag: Some(TextMatch::Contains("anonymous".to_string())),
            ..Default::default()
        };
        let rs: RecordSet = vec![("Bob".to_string(), 56), ("Eve".to_string(), 322)]
            .into_iter()
            .collect();
        assert_eq!(cfg.filter_records(&rs).records, vec![("Eve".to_string(), 322)]);

        let lines = vec!["anonymous".to_string(), "named".to_string()];
        let tagged = cfg.tag_lines(&lines);
        assert_eq!(tagged[0], (true, "anonymous".to_string()));
        assert_eq!(tagged[1], (false, "named".to_string()));
    }

    #[test]
    fn no_rules_keeps_everything_untagged() {
        let cfg = ProcessingConfig::default();
        let rs: RecordSet = vec![("a".to_string(), 1)].into_iter().collect();
        assert_eq!(cfg.filter_records(&rs), rs);
        assert_eq!(cfg.tag_lines(&["x".to_string()]), vec![(false, "x".to_string())]);
    }
}
