//! In-process validation against draft-04, draft-06 and draft-07 schemas.

use jsonschema::{ValidationError, Validator};
use serde_json::Value;

use crate::dialect::SchemaDialect;
use crate::error::SchemaError;

/// A compiled portable schema.
pub struct LocalSchema {
    dialect: SchemaDialect,
    validator: Validator,
}

impl LocalSchema {
    /// Compile a portable schema for local validation.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::UnsupportedDialect` unless the text declares one of
    /// the three supported drafts, `SchemaError::MalformedInput` if it is not
    /// JSON, and `SchemaError::InvalidSchema` if it violates its draft's metaschema.
    pub fn compile(schema: &str) -> Result<Self, SchemaError> {
        let dialect = SchemaDialect::detect(schema);
        let draft = dialect.draft().ok_or(SchemaError::UnsupportedDialect)?;

        let value: Value = serde_json::from_str(schema)?;
        let validator = jsonschema::options()
            .with_draft(draft)
            .build(&value)
            .map_err(|e| SchemaError::InvalidSchema(describe(&e)))?;

        Ok(Self { dialect, validator })
    }

    #[must_use]
    pub const fn dialect(&self) -> SchemaDialect {
        self.dialect
    }

    /// Validate one document, reporting the first violation.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::DocumentInvalid` naming the failing location.
    pub fn validate(&self, document: &Value) -> Result<(), SchemaError> {
        match self.validator.iter_errors(document).next() {
            None => Ok(()),
            Some(error) => Err(SchemaError::DocumentInvalid(describe(&error))),
        }
    }

    /// Validate a document given as text.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::MalformedInput` if the text is not JSON, else as [`Self::validate`].
    pub fn validate_str(&self, document: &str) -> Result<(), SchemaError> {
        let value: Value = serde_json::from_str(document)?;
        self.validate(&value)
    }

    #[must_use]
    pub fn is_valid(&self, document: &Value) -> bool {
        self.validator.is_valid(document)
    }
}

/// `#/path/to/field: message`, with `#` alone for the root.
fn describe(error: &ValidationError<'_>) -> String {
    format!("#{}: {error}", error.instance_path)
}
