use josch_core::error_message;
use josch_schema::SchemaError;
use josch_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl ValidationError {
    /// The document was checked and does not satisfy the schema.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::Store(StoreError::DocumentValidation { .. })
                | Self::Schema(SchemaError::DocumentInvalid(_))
        )
    }

    /// Message shown to the orchestration layer.
    #[must_use]
    pub fn boundary_message(&self) -> String {
        match self {
            Self::Store(error) => error.boundary_message(),
            Self::Schema(error) => error_message(error),
        }
    }
}
