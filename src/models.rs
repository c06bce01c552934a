//! Core data types shared across the analysis pipeline

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// One ingested prompt. Immutable once created; carries whatever metadata the
/// export format provided.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextItem {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl TextItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timestamp: None,
            source: None,
        }
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// One entry of a word-frequency ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
    /// Share of the total token stream, in percent.
    pub percentage: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_item_builder() {
        let item = TextItem::new("hello").with_source("export.json");
        assert_eq!(item.text, "hello");
        assert_eq!(item.source.as_deref(), Some("export.json"));
        assert!(item.timestamp.is_none());
    }

    #[test]
    fn test_text_item_serializes_without_empty_fields() {
        let item = TextItem::new("hello");
        let json = serde_json::to_string(&item).expect("serialize");
        assert!(!json.contains("timestamp"));
        assert!(!json.contains("source"));
    }
}
