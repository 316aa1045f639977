//! Schema error types.

use thiserror::Error;

/// Errors from schema translation, loading, and local validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Input was not parseable JSON (or not a JSON object).
    #[error("Malformed JSON: {0}")]
    MalformedInput(String),

    /// The schema uses a keyword the native validator dialect cannot express.
    #[error("Unsupported keyword: {0}")]
    UnsupportedKeyword(&'static str),

    /// The schema declares no dialect josch can validate with.
    #[error("The schema entered is not being supported.")]
    UnsupportedDialect,

    /// The schema is JSON but not a valid schema of its declared draft.
    #[error("{0}")]
    InvalidSchema(String),

    /// The document does not satisfy the schema.
    #[error("{0}")]
    DocumentInvalid(String),
}

impl From<serde_json::Error> for SchemaError {
    fn from(error: serde_json::Error) -> Self {
        Self::MalformedInput(error.to_string())
    }
}
