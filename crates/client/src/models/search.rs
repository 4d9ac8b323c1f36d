//! Oneshot search result models.
//!
//! # What this module handles:
//! - The `{"results": [...], "messages": [...]}` body of an inline search
//! - Reading string cells out of a result row
//!
//! # What this module does NOT handle:
//! - Building SPL or sending the request (see [`crate::endpoints::search`])

use serde::Deserialize;
use serde_json::Value;

use super::common::SplunkMessage;

/// One result row: column name to cell value.
pub type SearchRow = serde_json::Map<String, Value>;

/// Body of a oneshot search created with `output_mode=json`.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct OneshotResults {
    #[serde(default)]
    pub results: Vec<SearchRow>,
    #[serde(default)]
    pub messages: Vec<SplunkMessage>,
}

/// String values of a cell. Multivalue cells arrive as JSON arrays.
pub fn cell_strings(value: &Value) -> Vec<&str> {
    match value {
        Value::String(s) => vec![s.as_str()],
        Value::Array(items) => items.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    }
}
