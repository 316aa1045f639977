//! Document identifiers.

use std::fmt;

use serde_json::{Value, json};

/// Identifier of a stored document: the value of its `_id` field.
///
/// Identifiers may be any JSON value; object identifiers are represented in
/// extended JSON form `{"$oid": "<24 hex digits>"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentId(Value);

impl DocumentId {
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    /// A fresh random object identifier.
    #[must_use]
    pub fn object_id() -> Self {
        let bits = rand::random::<u128>() >> 32;
        Self(json!({ "$oid": format!("{bits:024x}") }))
    }

    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Canonical key used for equality lookups.
    #[must_use]
    pub fn key(&self) -> String {
        self.0.to_string()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Value> for DocumentId {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
