//! Store error types.

use josch_core::ERROR_PREFIX;
use thiserror::Error;

/// Errors from document store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Collection not found: {0}")]
    CollectionNotFound(String),

    #[error("Collection already exists: {0}")]
    CollectionExists(String),

    /// Identifier already present in the collection.
    #[error("duplicate key error in {collection}: _id {id}")]
    DuplicateKey { collection: String, id: String },

    /// The collection's validator rejected the document.
    #[error("Document failed validation: {reason}")]
    DocumentValidation { reason: String },

    /// Documents must be JSON objects.
    #[error("Document has to be a valid JSON Object")]
    NotAnObject,

    /// The validator document could not be compiled.
    #[error("Parsing of collection validator failed: {0}")]
    InvalidValidator(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StoreError {
    /// Message shown to the orchestration layer.
    ///
    /// A validation rejection is a normal negative answer and carries no
    /// error prefix; everything else does.
    #[must_use]
    pub fn boundary_message(&self) -> String {
        match self {
            Self::DocumentValidation { .. } => "Document failed validation".to_string(),
            Self::DuplicateKey { .. } => format!("{ERROR_PREFIX}Duplicate key found."),
            Self::NotAnObject | Self::Json(_) => {
                format!("{ERROR_PREFIX}Has to be a valid JSON Object.")
            }
            Self::InvalidValidator(reason) => format!(
                "{ERROR_PREFIX}This is not a valid MongoDB Validator. \n \n{reason}"
            ),
            other => format!("{ERROR_PREFIX}{other}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_is_not_an_error_message() {
        let err = StoreError::DocumentValidation {
            reason: "class".to_string(),
        };
        assert_eq!(err.boundary_message(), "Document failed validation");
    }

    #[test]
    fn duplicate_key_is_prefixed() {
        let err = StoreError::DuplicateKey {
            collection: "students".to_string(),
            id: "1".to_string(),
        };
        assert_eq!(err.boundary_message(), "Error! Duplicate key found.");
    }

    #[test]
    fn invalid_validator_names_the_cause() {
        let err = StoreError::InvalidValidator("unknown bsonType 'int32'".to_string());
        let message = err.boundary_message();
        assert!(message.starts_with("Error! This is not a valid MongoDB Validator."));
        assert!(message.ends_with("unknown bsonType 'int32'"));
    }
}
