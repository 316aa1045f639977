//! Enforcement of native `$jsonSchema` validators.
//!
//! The native dialect is draft-04 JSON Schema with `bsonType` in place of
//! (or next to) `type` and a handful of keywords removed. Compiling it means
//! rewriting `bsonType` into plain JSON Schema and rejecting the keywords the
//! store does not accept.

use josch_core::NATIVE_WRAPPER_KEY;
use jsonschema::{Draft, Validator};
use serde_json::{Map, Value, json};

use crate::error::StoreError;

/// Keywords the native dialect refuses.
const REFUSED_KEYWORDS: [&str; 6] = ["$ref", "$schema", "default", "definitions", "format", "id"];

const OBJECT_ID_PATTERN: &str = "^[a-fA-F0-9]{24}$";

/// A compiled native validator.
pub struct NativeValidator {
    validator: Validator,
}

impl NativeValidator {
    /// Compile a `{"$jsonSchema": {...}}` document.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidValidator` if the wrapper is missing, other
    /// top-level operators are present, or the schema uses unknown `bsonType`
    /// aliases or refused keywords.
    pub fn compile(document: &Value) -> Result<Self, StoreError> {
        let wrapper = document
            .as_object()
            .ok_or_else(|| StoreError::InvalidValidator("validator must be an object".into()))?;

        if let Some(other) = wrapper.keys().find(|key| *key != NATIVE_WRAPPER_KEY) {
            return Err(StoreError::InvalidValidator(format!(
                "unsupported validator operator '{other}'"
            )));
        }

        let schema = wrapper
            .get(NATIVE_WRAPPER_KEY)
            .ok_or_else(|| StoreError::InvalidValidator(format!("missing {NATIVE_WRAPPER_KEY}")))?;

        let rewritten = rewrite_schema(schema)?;
        let validator = jsonschema::options()
            .with_draft(Draft::Draft4)
            .build(&rewritten)
            .map_err(|e| StoreError::InvalidValidator(e.to_string()))?;

        Ok(Self { validator })
    }

    /// Check one document.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DocumentValidation` carrying the first violation.
    pub fn check(&self, document: &Value) -> Result<(), StoreError> {
        match self.validator.iter_errors(document).next() {
            None => Ok(()),
            Some(error) => Err(StoreError::DocumentValidation {
                reason: format!("{}: {error}", error.instance_path),
            }),
        }
    }
}

fn rewrite_schema(node: &Value) -> Result<Value, StoreError> {
    let Some(object) = node.as_object() else {
        return Ok(node.clone());
    };

    let mut out = Map::with_capacity(object.len());
    let mut bson_types = None;

    for (key, value) in object {
        if REFUSED_KEYWORDS.contains(&key.as_str()) {
            return Err(StoreError::InvalidValidator(format!(
                "$jsonSchema keyword '{key}' is not currently supported"
            )));
        }
        let rewritten = match key.as_str() {
            "bsonType" => {
                bson_types = Some(bson_type_schema(value)?);
                continue;
            }
            "properties" | "patternProperties" => Value::Object(
                value
                    .as_object()
                    .map(|props| {
                        props
                            .iter()
                            .map(|(name, sub)| Ok((name.clone(), rewrite_schema(sub)?)))
                            .collect::<Result<Map<_, _>, StoreError>>()
                    })
                    .transpose()?
                    .unwrap_or_default(),
            ),
            "allOf" | "anyOf" | "oneOf" => rewrite_each(value)?,
            "items" if value.is_array() => rewrite_each(value)?,
            "items" | "additionalProperties" | "additionalItems" | "not" => rewrite_schema(value)?,
            _ => value.clone(),
        };
        out.insert(key.clone(), rewritten);
    }

    if let Some(types) = bson_types {
        match out.get_mut("allOf").and_then(Value::as_array_mut) {
            Some(all_of) => all_of.push(types),
            None => {
                out.insert("allOf".to_string(), Value::Array(vec![types]));
            }
        }
    }

    Ok(Value::Object(out))
}

fn rewrite_each(value: &Value) -> Result<Value, StoreError> {
    match value.as_array() {
        Some(items) => Ok(Value::Array(
            items.iter().map(rewrite_schema).collect::<Result<_, _>>()?,
        )),
        None => Ok(value.clone()),
    }
}

/// `bsonType: "x"` or `bsonType: ["x", "y"]` as a plain JSON Schema.
fn bson_type_schema(value: &Value) -> Result<Value, StoreError> {
    let names: Vec<&str> = match value {
        Value::String(name) => vec![name.as_str()],
        Value::Array(items) => items
            .iter()
            .map(|item| {
                item.as_str().ok_or_else(|| {
                    StoreError::InvalidValidator(format!(
                        "bsonType entries must be strings: {item}"
                    ))
                })
            })
            .collect::<Result<_, _>>()?,
        other => {
            return Err(StoreError::InvalidValidator(format!(
                "bsonType must be a string or array: {other}"
            )));
        }
    };

    let alternatives = names
        .into_iter()
        .map(bson_alias_schema)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(json!({ "anyOf": alternatives }))
}

fn bson_alias_schema(alias: &str) -> Result<Value, StoreError> {
    let schema = match alias {
        "double" | "decimal" | "number" => json!({ "type": "number" }),
        "int" | "long" => json!({ "type": "integer" }),
        "string" => json!({ "type": "string" }),
        "object" => json!({ "type": "object" }),
        "array" => json!({ "type": "array" }),
        "bool" => json!({ "type": "boolean" }),
        "null" => json!({ "type": "null" }),
        "objectId" => json!({
            "type": "object",
            "required": ["$oid"],
            "properties": { "$oid": { "type": "string", "pattern": OBJECT_ID_PATTERN } }
        }),
        "date" => json!({ "type": "object", "required": ["$date"] }),
        unknown => {
            return Err(StoreError::InvalidValidator(format!(
                "unknown bsonType '{unknown}'"
            )));
        }
    };
    Ok(schema)
}
