//! One-pass, memory-bounded traversal of a collection.
//!
//! Construction fetches only the identifier projection. Each call to `next`
//! performs a single point lookup, so at most one full document is held at a
//! time. With `randomize` the identifiers are permuted by a Fisher-Yates
//! shuffle, giving every ordering the same probability.

use rand::Rng;
use serde_json::Value;

use crate::error::StoreError;
use crate::id::DocumentId;
use crate::DocumentStore;

pub struct Sampler<'s, S: DocumentStore + ?Sized> {
    store: &'s S,
    collection: String,
    ids: Vec<DocumentId>,
    cursor: usize,
}

impl<'s, S: DocumentStore + ?Sized> Sampler<'s, S> {
    /// Build a sampler using the thread-local random generator.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the identifier scan fails.
    pub fn new(store: &'s S, collection: &str, randomize: bool) -> Result<Self, StoreError> {
        Self::with_rng(store, collection, randomize, &mut rand::thread_rng())
    }

    /// Build a sampler with an explicit random generator (seeded in tests).
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the identifier scan fails.
    pub fn with_rng<R: Rng + ?Sized>(
        store: &'s S,
        collection: &str,
        randomize: bool,
        rng: &mut R,
    ) -> Result<Self, StoreError> {
        let mut ids = store.document_ids(collection)?;
        if randomize {
            shuffle(&mut ids, rng);
        }
        Ok(Self {
            store,
            collection: collection.to_string(),
            ids,
            cursor: 0,
        })
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.cursor < self.ids.len()
    }

    /// Number of identifiers drawn at construction.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The traversal order fixed at construction.
    #[must_use]
    pub fn ids(&self) -> &[DocumentId] {
        &self.ids
    }
}

/// Fisher-Yates: walk from the last slot down, swapping with a uniform `j` in `[0, i]`.
fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

impl<S: DocumentStore + ?Sized> Iterator for Sampler<'_, S> {
    /// `Ok(None)` marks an identifier that vanished after construction.
    type Item = Result<Option<Value>, StoreError>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.ids.get(self.cursor)?;
        self.cursor += 1;

        let found = self.store.find_by_id(&self.collection, id);
        if let Ok(None) = found {
            tracing::warn!(
                collection = %self.collection,
                id = %id,
                "sampled document no longer exists"
            );
        }
        Some(found)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.ids.len() - self.cursor;
        (remaining, Some(remaining))
    }
}
