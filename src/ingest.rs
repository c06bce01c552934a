//! Ingestion boundary - exported chat history into `TextItem` batches
//!
//! Three export shapes are understood, chosen by file extension:
//! - `.json`: a ChatGPT `conversations.json` export — walk each
//!   conversation's `mapping`, keep user-authored messages, take the first
//!   `content.parts` entry, carry `create_time` when present.
//! - `.jsonl`: one JSON object per line with `messages[0].content`.
//! - `.txt`: `===SPLIT===`-delimited records, falling back to
//!   one-item-per-line when no delimiter is found.
//!
//! Malformed individual records are skipped with a warning rather than
//! failing the whole import; the engine downstream is total over whatever
//! survives.

use std::path::Path;

use chrono::DateTime;
use serde_json::Value;
use tracing::debug;
use tracing::warn;

use crate::models::TextItem;
use crate::PromptMirrorError;
use crate::Result;

/// Delimiter used by the browser-extension text export.
const SPLIT_MARKER: &str = "===SPLIT===";

/// Read an exported history file into text items.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Vec<TextItem>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let source = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string());

    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let mut items = match extension.as_str() {
        "json" => parse_chatgpt_export(&content)?,
        "jsonl" => parse_jsonl(&content),
        "txt" => parse_text(&content),
        other => {
            return Err(PromptMirrorError::UnsupportedFormat(other.to_string()));
        }
    };

    if let Some(source) = source {
        for item in &mut items {
            item.source = Some(source.clone());
        }
    }

    debug!(count = items.len(), path = %path.display(), "ingested history file");
    Ok(items)
}

/// Parse a ChatGPT `conversations.json` export: an array of conversations,
/// each holding a `mapping` of message nodes.
pub fn parse_chatgpt_export(content: &str) -> Result<Vec<TextItem>> {
    let data: Value = serde_json::from_str(content)?;
    let Some(conversations) = data.as_array() else {
        return Err(PromptMirrorError::InvalidInput(
            "expected a top-level JSON array of conversations".to_string(),
        ));
    };

    let mut items = Vec::new();
    for conversation in conversations {
        let Some(mapping) = conversation.get("mapping").and_then(Value::as_object) else {
            continue;
        };
        for node in mapping.values() {
            let Some(message) = node.get("message") else {
                continue;
            };
            let role = message
                .pointer("/author/role")
                .and_then(Value::as_str)
                .unwrap_or_default();
            if role != "user" {
                continue;
            }
            let Some(text) = message
                .pointer("/content/parts/0")
                .and_then(Value::as_str)
                .filter(|t| !t.trim().is_empty())
            else {
                continue;
            };

            let mut item = TextItem::new(text);
            if let Some(epoch) = message.get("create_time").and_then(Value::as_f64) {
                if let Some(timestamp) = DateTime::from_timestamp(epoch as i64, 0) {
                    item = item.with_timestamp(timestamp);
                }
            }
            items.push(item);
        }
    }
    Ok(items)
}

/// Parse JSONL: one `{"messages": [{"content": ...}, ...]}` object per line.
/// Unparseable lines are skipped.
pub fn parse_jsonl(content: &str) -> Vec<TextItem> {
    let mut items = Vec::new();
    for (line_no, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match serde_json::from_str::<Value>(trimmed) {
            Ok(value) => {
                if let Some(text) = value
                    .pointer("/messages/0/content")
                    .and_then(Value::as_str)
                    .filter(|t| !t.trim().is_empty())
                {
                    items.push(TextItem::new(text));
                }
            }
            Err(e) => {
                warn!(line = line_no + 1, error = %e, "skipping malformed JSONL line");
            }
        }
    }
    items
}

/// Parse plain text: `===SPLIT===` records when the delimiter yields more
/// than one record, otherwise one item per non-empty line.
pub fn parse_text(content: &str) -> Vec<TextItem> {
    let split: Vec<&str> = content
        .split(SPLIT_MARKER)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    let records: Vec<&str> = if split.len() >= 2 {
        split
    } else {
        content
            .lines()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    };

    records.into_iter().map(TextItem::new).collect()
}
