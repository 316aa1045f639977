//! # josch-store
//!
//! The document store as seen by the schema pipeline.
//!
//! The pipeline never talks to a database driver directly. It goes through the
//! [`DocumentStore`] trait, which exposes exactly the primitives it needs:
//! identifier-only scans, point lookups, and server-side validation through
//! disposable collections that carry a native `$jsonSchema` validator.
//!
//! [`MemoryStore`] is the in-process implementation used by the CLI (loaded
//! from JSONL files) and by tests. It enforces native validators with strict
//! level and error action, like the real store does.
//!
//! [`Sampler`] walks a collection one document at a time in insertion or
//! uniformly shuffled order.

pub mod error;
pub mod id;
mod jsonl;
pub mod memory;
pub mod native;
pub mod sampler;

pub use error::StoreError;
pub use id::DocumentId;
pub use memory::MemoryStore;
pub use native::NativeValidator;
pub use sampler::Sampler;

use serde_json::Value;

/// Primitives the schema pipeline needs from a document store.
///
/// Implementations are used from one thread per request; `&self` methods
/// may use interior mutability.
pub trait DocumentStore {
    /// Names of all collections.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be read.
    fn collection_names(&self) -> Result<Vec<String>, StoreError>;

    /// Number of documents in a collection.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::CollectionNotFound` for unknown collections.
    fn count(&self, collection: &str) -> Result<u64, StoreError>;

    /// Identifier projection of every document, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::CollectionNotFound` for unknown collections.
    fn document_ids(&self, collection: &str) -> Result<Vec<DocumentId>, StoreError>;

    /// Point lookup of one full document. `Ok(None)` if the identifier no
    /// longer resolves.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::CollectionNotFound` for unknown collections.
    fn find_by_id(&self, collection: &str, id: &DocumentId) -> Result<Option<Value>, StoreError>;

    /// Create a collection, optionally guarded by a native validator document.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::CollectionExists` or `StoreError::InvalidValidator`.
    fn create_collection(&self, name: &str, validator: Option<&Value>) -> Result<(), StoreError>;

    /// Insert one document. Documents without `_id` get a fresh object identifier.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DocumentValidation` if the collection's validator
    /// rejects the document, `StoreError::DuplicateKey` on identifier clash.
    fn insert_one(&self, collection: &str, document: Value) -> Result<DocumentId, StoreError>;

    /// Copy every document of `source` into `target`, checking each against
    /// `target`'s validator. Rejected documents are handed to `on_reject`
    /// and do not abort the copy. Returns the number of accepted documents.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::CollectionNotFound` if either collection is missing.
    fn insert_each(
        &self,
        target: &str,
        source: &str,
        on_reject: &mut dyn FnMut(&Value, &StoreError),
    ) -> Result<u64, StoreError>;

    /// Delete one document by identifier. Returns whether it existed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::CollectionNotFound` for unknown collections.
    fn delete_one(&self, collection: &str, id: &DocumentId) -> Result<bool, StoreError>;

    /// Drop a collection. Dropping a missing collection is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be modified.
    fn drop_collection(&self, name: &str) -> Result<(), StoreError>;
}
