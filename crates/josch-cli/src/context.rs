use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use josch_config::JoschConfig;
use josch_store::MemoryStore;

use crate::cli::GlobalFlags;

/// Configuration and store shared by every command.
pub struct AppContext {
    pub config: JoschConfig,
    pub store: Arc<MemoryStore>,
    collection: Option<String>,
}

impl AppContext {
    pub fn init(flags: &GlobalFlags) -> anyhow::Result<Self> {
        let config = JoschConfig::load_with_dotenv().context("failed to load josch configuration")?;

        let data_dir = flags
            .data_dir
            .as_ref()
            .map_or_else(|| config.store.data_dir.clone(), PathBuf::from);
        let store = if data_dir.is_dir() {
            MemoryStore::load_dir(&data_dir)
                .with_context(|| format!("failed to load collections from {}", data_dir.display()))?
        } else {
            tracing::debug!(
                dir = %data_dir.display(),
                "no data directory, starting with an empty store"
            );
            MemoryStore::new()
        };

        let collection = flags.collection.clone().or_else(|| config.store.collection.clone());

        Ok(Self {
            config,
            store: Arc::new(store),
            collection,
        })
    }

    /// The collection commands act on.
    pub fn collection(&self) -> anyhow::Result<&str> {
        self.collection.as_deref().context(
            "no collection selected; pass --collection or set store.collection in .josch/config.toml",
        )
    }
}
