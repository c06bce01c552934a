pub mod pipeline_tests;

use crate::models::TextItem;

/// Test helper to build a batch of text items
pub fn sample_items(texts: &[&str]) -> Vec<TextItem> {
    texts.iter().map(|t| TextItem::new(*t)).collect()
}

/// Test helper to build a token vector from string literals
pub fn tokens(words: &[&str]) -> Vec<String> {
    words.iter().map(ToString::to_string).collect()
}
