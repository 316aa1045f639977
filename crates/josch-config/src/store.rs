//! Document store configuration for the CLI.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_data_dir() -> PathBuf {
    PathBuf::from(".josch").join("data")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Directory of `<collection>.jsonl` files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Collection used when a command does not name one.
    #[serde(default)]
    pub collection: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            collection: None,
        }
    }
}
