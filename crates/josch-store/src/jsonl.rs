//! Loading collections from JSONL files.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::StoreError;
use crate::memory::MemoryStore;

impl MemoryStore {
    /// Load every `<collection>.jsonl` file in `dir` as a collection.
    ///
    /// Each line is one document. Lines are inserted in file order, so the
    /// file order is the collection's insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the directory or a file cannot be read,
    /// `StoreError::Json` on a malformed line, or any insert error.
    pub fn load_dir(dir: &Path) -> Result<Self, StoreError> {
        let store = Self::new();
        let mut files = fs::read_dir(dir)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<Result<Vec<_>, _>>()?;
        files.sort();

        for path in files {
            if path.extension().and_then(|ext| ext.to_str()) != Some("jsonl") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let documents = serde_jsonlines::json_lines::<Value, _>(&path)?
                .collect::<Result<Vec<_>, _>>()?;
            tracing::debug!(collection = name, documents = documents.len(), "loaded collection");
            store.seed(name, documents)?;
        }

        Ok(store)
    }
}
