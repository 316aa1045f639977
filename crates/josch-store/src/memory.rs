//! In-process document store.

use std::collections::{BTreeMap, HashMap};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::{Map, Value};

use crate::error::StoreError;
use crate::id::DocumentId;
use crate::native::NativeValidator;
use crate::DocumentStore;

#[derive(Default)]
struct MemoryCollection {
    /// Documents keyed by insertion sequence, so iteration is insertion order.
    documents: BTreeMap<u64, Value>,
    /// `DocumentId::key()` -> insertion sequence.
    index: HashMap<String, u64>,
    next_seq: u64,
    validator: Option<NativeValidator>,
}

impl MemoryCollection {
    fn insert(&mut self, collection: &str, mut document: Value) -> Result<DocumentId, StoreError> {
        let object = document.as_object_mut().ok_or(StoreError::NotAnObject)?;
        let id = match object.get("_id") {
            Some(existing) => DocumentId::new(existing.clone()),
            None => {
                let id = DocumentId::object_id();
                let mut with_id = Map::with_capacity(object.len() + 1);
                with_id.insert("_id".to_string(), id.as_value().clone());
                with_id.extend(std::mem::take(object));
                *object = with_id;
                id
            }
        };

        let key = id.key();
        if self.index.contains_key(&key) {
            return Err(StoreError::DuplicateKey {
                collection: collection.to_string(),
                id: key,
            });
        }
        if let Some(validator) = &self.validator {
            validator.check(&document)?;
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.documents.insert(seq, document);
        self.index.insert(key, seq);
        Ok(id)
    }
}

/// A document store held entirely in memory.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<BTreeMap<String, MemoryCollection>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create (if needed) a collection and insert every document into it.
    ///
    /// # Errors
    ///
    /// Returns the first `StoreError` raised by an insert.
    pub fn seed<I>(&self, collection: &str, documents: I) -> Result<(), StoreError>
    where
        I: IntoIterator<Item = Value>,
    {
        let mut guard = self.write();
        let target = guard.entry(collection.to_string()).or_default();
        for document in documents {
            target.insert(collection, document)?;
        }
        Ok(())
    }

    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<String, MemoryCollection>> {
        self.collections.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<String, MemoryCollection>> {
        self.collections.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn missing(name: &str) -> StoreError {
    StoreError::CollectionNotFound(name.to_string())
}

impl DocumentStore for MemoryStore {
    fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.read().keys().cloned().collect())
    }

    fn count(&self, collection: &str) -> Result<u64, StoreError> {
        let guard = self.read();
        let coll = guard.get(collection).ok_or_else(|| missing(collection))?;
        Ok(coll.documents.len() as u64)
    }

    fn document_ids(&self, collection: &str) -> Result<Vec<DocumentId>, StoreError> {
        let guard = self.read();
        let coll = guard.get(collection).ok_or_else(|| missing(collection))?;
        Ok(coll
            .documents
            .values()
            .filter_map(|doc| doc.get("_id").cloned().map(DocumentId::new))
            .collect())
    }

    fn find_by_id(&self, collection: &str, id: &DocumentId) -> Result<Option<Value>, StoreError> {
        let guard = self.read();
        let coll = guard.get(collection).ok_or_else(|| missing(collection))?;
        Ok(coll
            .index
            .get(&id.key())
            .and_then(|seq| coll.documents.get(seq))
            .cloned())
    }

    fn create_collection(&self, name: &str, validator: Option<&Value>) -> Result<(), StoreError> {
        let validator = validator.map(NativeValidator::compile).transpose()?;
        let mut guard = self.write();
        if guard.contains_key(name) {
            return Err(StoreError::CollectionExists(name.to_string()));
        }
        guard.insert(
            name.to_string(),
            MemoryCollection {
                validator,
                ..MemoryCollection::default()
            },
        );
        Ok(())
    }

    fn insert_one(&self, collection: &str, document: Value) -> Result<DocumentId, StoreError> {
        let mut guard = self.write();
        let coll = guard.get_mut(collection).ok_or_else(|| missing(collection))?;
        coll.insert(collection, document)
    }

    fn insert_each(
        &self,
        target: &str,
        source: &str,
        on_reject: &mut dyn FnMut(&Value, &StoreError),
    ) -> Result<u64, StoreError> {
        let mut guard = self.write();
        if !guard.contains_key(source) {
            return Err(missing(source));
        }
        // Detach the target so the source can be borrowed alongside it.
        let mut detached = guard.remove(target).ok_or_else(|| missing(target))?;

        let mut accepted = 0u64;
        if let Some(src) = guard.get(source) {
            for document in src.documents.values() {
                match detached.insert(target, document.clone()) {
                    Ok(_) => accepted += 1,
                    Err(error) => on_reject(document, &error),
                }
            }
        }

        guard.insert(target.to_string(), detached);
        Ok(accepted)
    }

    fn delete_one(&self, collection: &str, id: &DocumentId) -> Result<bool, StoreError> {
        let mut guard = self.write();
        let coll = guard.get_mut(collection).ok_or_else(|| missing(collection))?;
        Ok(coll
            .index
            .remove(&id.key())
            .and_then(|seq| coll.documents.remove(&seq))
            .is_some())
    }

    fn drop_collection(&self, name: &str) -> Result<(), StoreError> {
        self.write().remove(name);
        Ok(())
    }
}
