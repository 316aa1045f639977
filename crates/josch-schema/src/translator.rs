//! Portable JSON Schema -> native validator translation.
//!
//! The rules, in order:
//! 1. refuse schemas mentioning a keyword the native dialect cannot express;
//! 2. rewrite every `integer` / `Integer` token in the text to `number`
//!    (a plain text substitution, free text included);
//! 3. drop the top-level `$schema`;
//! 4. give `properties._id` a `bsonType` array holding its declared types plus `objectId`;
//! 5. wrap the result as `{"$jsonSchema": ...}`.

use serde_json::{Map, Value};

pub use josch_core::NATIVE_WRAPPER_KEY;

use crate::error::SchemaError;

/// Keywords that make a schema untranslatable, matched as quoted JSON strings.
pub const FORBIDDEN_KEYWORDS: [&str; 10] = [
    "$ref",
    "default",
    "definition",
    "definitions",
    "format",
    "id",
    "links",
    "media",
    "readOnly",
    "pathStart",
];

/// Extra type tag appended to `_id` so store-generated identifiers validate.
const OBJECT_ID_TYPE: &str = "objectId";

/// First forbidden keyword present in the schema text, if any.
#[must_use]
pub fn unsupported_keyword(schema: &str) -> Option<&'static str> {
    FORBIDDEN_KEYWORDS
        .into_iter()
        .find(|keyword| schema.contains(&format!("\"{keyword}\"")))
}

/// Translate a portable schema into a native validator document.
///
/// # Errors
///
/// Returns `SchemaError::UnsupportedKeyword` naming the first forbidden
/// keyword, or `SchemaError::MalformedInput` if the text is not a JSON object.
pub fn translate(schema: &str) -> Result<Value, SchemaError> {
    if let Some(keyword) = unsupported_keyword(schema) {
        return Err(SchemaError::UnsupportedKeyword(keyword));
    }

    let rewritten = schema.replace("integer", "number").replace("Integer", "number");

    let Value::Object(mut root) = serde_json::from_str::<Value>(&rewritten)? else {
        return Err(SchemaError::MalformedInput(
            "schema must be a JSON object".to_string(),
        ));
    };

    root.shift_remove("$schema");

    if let Some(id) = root
        .get_mut("properties")
        .and_then(Value::as_object_mut)
        .and_then(|props| props.get_mut("_id"))
        .and_then(Value::as_object_mut)
    {
        tag_object_id(id);
    }

    let mut validator = Map::with_capacity(1);
    validator.insert(NATIVE_WRAPPER_KEY.to_string(), Value::Object(root));
    Ok(Value::Object(validator))
}

/// [`translate`], serialized compactly.
///
/// # Errors
///
/// Same as [`translate`].
pub fn to_validator(schema: &str) -> Result<String, SchemaError> {
    Ok(translate(schema)?.to_string())
}

fn tag_object_id(id: &mut Map<String, Value>) {
    let mut types = match id.shift_remove("type") {
        Some(Value::Array(types)) => types,
        Some(single) => vec![single],
        None => Vec::new(),
    };
    if !types.iter().any(|t| t == OBJECT_ID_TYPE) {
        types.push(Value::String(OBJECT_ID_TYPE.to_string()));
    }
    id.insert("bsonType".to_string(), Value::Array(types));
}
