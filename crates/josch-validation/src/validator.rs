//! Dispatch of validation requests by schema dialect.

use josch_core::ValidationOutcome;
use josch_schema::{LocalSchema, SchemaDialect, SchemaError};
use josch_store::{DocumentStore, Sampler, StoreError};
use serde_json::Value;
use tracing::debug;

use crate::error::ValidationError;
use crate::quota::{CaptureGuard, MemoryQuota};
use crate::report::{DOCUMENT_VALID, summary};
use crate::scratch::ScratchCollection;

/// How one document fared against a schema.
#[derive(Debug)]
pub enum Verdict {
    Valid,
    /// The schema does not accept the document. Holds the reason.
    Rejected(ValidationError),
}

/// Validates documents held in (or headed for) `store`.
pub struct Validator<'s, S: DocumentStore + ?Sized> {
    store: &'s S,
    quota: MemoryQuota,
}

impl<'s, S: DocumentStore + ?Sized> Validator<'s, S> {
    pub const fn new(store: &'s S, quota: MemoryQuota) -> Self {
        Self { store, quota }
    }

    /// Check one document text against `schema`, keeping the schema's
    /// rejection apart from everything that stopped the check itself.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the schema or document cannot be read,
    /// the dialect is not supported, or the store fails.
    pub fn check_one(&self, document: &str, schema: &str) -> Result<Verdict, ValidationError> {
        let dialect = SchemaDialect::detect(schema);
        debug!(?dialect, "validating document");
        let checked = match dialect {
            SchemaDialect::Native => self.validate_native(document, schema),
            SchemaDialect::Unsupported => Err(SchemaError::UnsupportedDialect.into()),
            _ => LocalSchema::compile(schema)
                .and_then(|local| local.validate_str(document))
                .map_err(ValidationError::from),
        };
        match checked {
            Ok(()) => Ok(Verdict::Valid),
            Err(error) if error.is_rejection() => Ok(Verdict::Rejected(error)),
            Err(error) => Err(error),
        }
    }

    /// Validate one document text against `schema`.
    ///
    /// Never fails: the result is [`DOCUMENT_VALID`], the store's rejection
    /// text, or an error-prefixed message.
    #[must_use]
    pub fn validate_one(&self, document: &str, schema: &str) -> String {
        match self.check_one(document, schema) {
            Ok(Verdict::Valid) => DOCUMENT_VALID.to_string(),
            Ok(Verdict::Rejected(error)) | Err(error) => error.boundary_message(),
        }
    }

    fn validate_native(&self, document: &str, schema: &str) -> Result<(), ValidationError> {
        let validator: Value = serde_json::from_str(schema).map_err(SchemaError::from)?;
        let document: Value = serde_json::from_str(document).map_err(StoreError::from)?;
        let scratch = ScratchCollection::create(self.store, Some(&validator))?;
        self.store.insert_one(scratch.name(), document)?;
        Ok(())
    }

    /// Validate every document of `collection` against `schema`.
    ///
    /// Native validators go through the store in one bulk copy into a scratch
    /// collection; portable schemas are checked locally, document by document,
    /// in insertion order. Failures end up in the outcome's notification.
    #[must_use]
    pub fn validate_all(&self, collection: &str, schema: &str) -> ValidationOutcome {
        let mut capture = CaptureGuard::new(self.quota);
        let run = self
            .store
            .count(collection)
            .map_err(ValidationError::from)
            .and_then(|total| {
                let invalid = match SchemaDialect::detect(schema) {
                    SchemaDialect::Native => self.scan_native(collection, schema, &mut capture)?,
                    SchemaDialect::Unsupported => {
                        return Err(SchemaError::UnsupportedDialect.into());
                    }
                    _ => self.scan_local(collection, schema, &mut capture)?,
                };
                Ok((total, invalid))
            });

        let (invalid_samples, truncated) = capture.into_parts();
        match run {
            Ok((total, invalid_count)) => {
                debug!(collection, total, invalid_count, truncated, "collection validated");
                ValidationOutcome {
                    total,
                    invalid_count,
                    invalid_samples,
                    truncated,
                    notification: summary(total, invalid_count),
                }
            }
            Err(error) => ValidationOutcome {
                notification: error.boundary_message(),
                ..ValidationOutcome::default()
            },
        }
    }

    fn scan_native(
        &self,
        collection: &str,
        schema: &str,
        capture: &mut CaptureGuard,
    ) -> Result<u64, ValidationError> {
        let validator: Value = serde_json::from_str(schema).map_err(SchemaError::from)?;
        let scratch = ScratchCollection::create(self.store, Some(&validator))?;

        let mut invalid = 0u64;
        let mut on_reject = |document: &Value, _: &StoreError| {
            invalid += 1;
            capture.push(document.to_string());
        };
        self.store
            .insert_each(scratch.name(), collection, &mut on_reject)?;
        Ok(invalid)
    }

    fn scan_local(
        &self,
        collection: &str,
        schema: &str,
        capture: &mut CaptureGuard,
    ) -> Result<u64, ValidationError> {
        let local = LocalSchema::compile(schema)?;
        let mut invalid = 0u64;
        for item in Sampler::new(self.store, collection, false)? {
            let Some(document) = item? else {
                continue;
            };
            if !local.is_valid(&document) {
                invalid += 1;
                capture.push(document.to_string());
            }
        }
        Ok(invalid)
    }
}
