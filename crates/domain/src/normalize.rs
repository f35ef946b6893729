//! Normalization utilities for loosely typed wire data
//!
//! The user-directory API and the legacy single-profile data shape both
//! deliver values with inconsistent types: list fields may arrive as
//! JSON arrays, comma-separated strings, or null; booleans may be
//! missing entirely. These helpers coerce everything to the canonical
//! domain representation: deduplicated ordered lists of non-empty
//! trimmed strings, plain strings, and plain bools.

use serde_json::Value;

/// Trim, drop empties, and deduplicate a list of strings, preserving
/// first-seen order. Idempotent on already-clean input.
pub fn clean_list(values: &[String]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::with_capacity(values.len());
    for value in values {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(trimmed.to_string()) {
            out.push(trimmed.to_string());
        }
    }
    out
}

/// Coerce a JSON value into a clean string list.
///
/// Accepts a JSON array of strings or a comma-separated string; null,
/// missing, and anything else yield an empty list.
pub fn list_from_value(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => {
            let raw: Vec<String> = items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect();
            clean_list(&raw)
        }
        Value::String(joined) => {
            let raw: Vec<String> = joined.split(',').map(str::to_string).collect();
            clean_list(&raw)
        }
        _ => Vec::new(),
    }
}

/// Coerce a JSON value into a scalar string; numbers are stringified,
/// everything else defaults to empty.
pub fn string_from_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

/// Coerce a JSON value into a bool; missing/null default to false.
pub fn bool_from_value(value: &Value) -> bool {
    value.as_bool().unwrap_or(false)
}
