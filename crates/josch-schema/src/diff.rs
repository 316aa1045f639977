//! Syntactic comparison of two schemas.
//!
//! Both schemas are flattened into single-level maps keyed by dotted paths
//! (`.properties.name.anyOf.0.type`) and compared as maps, so key order in
//! the source text never matters. Empty objects and arrays have no leaves and
//! therefore contribute nothing.

use std::collections::BTreeMap;

use josch_core::SchemaDifference;
use serde_json::Value;

use crate::error::SchemaError;

/// Flatten a JSON object into `.`-prefixed dotted paths to its scalar leaves.
#[must_use]
pub fn flatten(value: &Value) -> BTreeMap<String, Value> {
    let mut flat = BTreeMap::new();
    if let Value::Object(map) = value {
        for (key, child) in map {
            flatten_into(&mut flat, format!(".{key}"), child);
        }
    }
    flat
}

fn flatten_into(flat: &mut BTreeMap<String, Value>, path: String, value: &Value) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                flatten_into(flat, format!("{path}.{key}"), child);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                flatten_into(flat, format!("{path}.{index}"), child);
            }
        }
        scalar => {
            flat.insert(path, scalar.clone());
        }
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn parse_object(schema: &str) -> Result<Value, SchemaError> {
    let value: Value = serde_json::from_str(schema)?;
    if value.is_object() {
        Ok(value)
    } else {
        Err(SchemaError::MalformedInput(
            "schema must be a JSON object".to_string(),
        ))
    }
}

/// Structural difference between `left` and `right`.
///
/// Left-only entries come first, then right-only entries, then paths whose
/// values differ, which are recorded on both sides as `path: (left, right)`.
///
/// # Errors
///
/// Returns `SchemaError::MalformedInput` if either side is not a JSON object.
pub fn diff(left: &str, right: &str) -> Result<SchemaDifference, SchemaError> {
    let left = flatten(&parse_object(left)?);
    let right = flatten(&parse_object(right)?);

    let mut difference = SchemaDifference::default();

    for (path, value) in &left {
        if !right.contains_key(path) {
            difference.add_left(format!("{path}: {}", render(value)));
        }
    }
    for (path, value) in &right {
        if !left.contains_key(path) {
            difference.add_right(format!("{path}: {}", render(value)));
        }
    }
    for (path, value) in &left {
        if let Some(other) = right.get(path) {
            if other != value {
                let both = format!("{path}: ({}, {})", render(value), render(other));
                difference.add_left(both.clone());
                difference.add_right(both);
            }
        }
    }

    Ok(difference)
}
