//! Safe field extraction from raw graph responses
//!
//! Raw entities arrive as `serde_json::Value` in two textures: nested
//! relations either come as the graph wire shape
//! (`{"edges": [{"node": {..}}]}`) or as already-flattened arrays.
//! These helpers accept both so normalizers never care which client
//! produced the response.

use crate::core::error::SchemaError;
use serde_json::Value;

/// Extract a required string field. Absence (or a non-string value) is
/// a projection/remote contract violation.
pub(crate) fn require_str(
    raw: &Value,
    entity: &'static str,
    key: &str,
) -> Result<String, SchemaError> {
    raw.get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| SchemaError::missing(entity, key))
}

/// Extract an optional string field; absent and null both map to `None`.
pub(crate) fn opt_str(raw: &Value, key: &str) -> Option<String> {
    raw.get(key).and_then(Value::as_str).map(str::to_string)
}

pub(crate) fn opt_i64(raw: &Value, key: &str) -> Option<i64> {
    raw.get(key).and_then(Value::as_i64)
}

pub(crate) fn opt_bool(raw: &Value, key: &str) -> Option<bool> {
    raw.get(key).and_then(Value::as_bool)
}

/// Extract an array of strings, defaulting to empty when the field is
/// absent or null.
pub(crate) fn str_array(raw: &Value, key: &str) -> Vec<String> {
    raw.get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Extract an optional array of strings, preserving the present/absent
/// distinction (used for adversary subtype fields that must not gain a
/// placeholder key).
pub(crate) fn opt_str_array(raw: &Value, key: &str) -> Option<Vec<String>> {
    raw.get(key).and_then(Value::as_array).map(|items| {
        items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect()
    })
}

/// Collect the element nodes of a nested relation.
///
/// Accepts the edge/node wire shape and plain arrays; an absent or null
/// relation yields the neutral empty list.
pub(crate) fn nodes<'a>(raw: &'a Value, key: &str) -> Vec<&'a Value> {
    let Some(relation) = raw.get(key) else {
        return Vec::new();
    };

    if let Some(items) = relation.as_array() {
        return items.iter().collect();
    }

    relation
        .get("edges")
        .and_then(Value::as_array)
        .map(|edges| edges.iter().filter_map(|e| e.get("node")).collect())
        .unwrap_or_default()
}

/// Collect a string field from every node of a nested relation.
pub(crate) fn node_strs(raw: &Value, key: &str, field: &str) -> Vec<String> {
    nodes(raw, key)
        .into_iter()
        .filter_map(|n| n.get(field).and_then(Value::as_str))
        .map(str::to_string)
        .collect()
}

/// An entity's own external-reference URLs.
pub(crate) fn reference_urls(raw: &Value) -> Vec<String> {
    node_strs(raw, "externalReferences", "url")
}
