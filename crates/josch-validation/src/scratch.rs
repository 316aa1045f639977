//! Disposable collections for server-side validation.

use josch_store::{DocumentStore, StoreError};
use rand::Rng;
use serde_json::Value;
use tracing::{debug, warn};

const SCRATCH_PREFIX: &str = "josch_scratch_";

/// A uniquely named collection that is dropped when the guard goes away.
pub struct ScratchCollection<'s, S: DocumentStore + ?Sized> {
    store: &'s S,
    name: String,
}

impl<'s, S: DocumentStore + ?Sized> ScratchCollection<'s, S> {
    /// Create a fresh scratch collection guarded by `validator`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidValidator` if the store refuses the validator.
    pub fn create(store: &'s S, validator: Option<&Value>) -> Result<Self, StoreError> {
        let name = format!("{SCRATCH_PREFIX}{:016x}", rand::thread_rng().r#gen::<u64>());
        store.create_collection(&name, validator)?;
        debug!(collection = %name, "created scratch collection");
        Ok(Self { store, name })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<S: DocumentStore + ?Sized> Drop for ScratchCollection<'_, S> {
    fn drop(&mut self) {
        if let Err(error) = self.store.drop_collection(&self.name) {
            warn!(collection = %self.name, %error, "failed to drop scratch collection");
        }
    }
}
