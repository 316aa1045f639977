//! # josch-config
//!
//! Layered configuration loading for josch using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`JOSCH_*` prefix, `__` as separator)
//! 2. Project-level `.josch/config.toml`
//! 3. User-level `~/.config/josch/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `JOSCH_CONTAINMENT__TOOL` -> `containment.tool`,
//! `JOSCH_VALIDATION__SAMPLE_BUDGET_BYTES` -> `validation.sample_budget_bytes`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use josch_config::JoschConfig;
//!
//! let config = JoschConfig::load_with_dotenv().expect("config");
//! println!("containment tool: {}", config.containment.tool);
//! ```

mod containment;
mod error;
mod store;
mod validation;

pub use containment::{
    CURRENT_SCHEMA_FILE, ContainmentConfig, LEGACY_SCHEMA_FILE, LOCK_FILE, RESULT_FILE,
};
pub use error::ConfigError;
pub use store::StoreConfig;
pub use validation::ValidationConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct JoschConfig {
    #[serde(default)]
    pub containment: ContainmentConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

impl JoschConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading a `.env` file from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and check a configuration from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validation.check()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".josch/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("JOSCH_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("josch").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use josch_core::ContainmentToolKind;

    #[test]
    fn default_config_loads() {
        let config = JoschConfig::default();
        assert_eq!(config.containment.tool, ContainmentToolKind::JsonSubSchema);
        assert!(config.containment.install_before_run);
        assert!(config.containment.command.is_none());
        assert_eq!(config.containment.lock_timeout_secs, 300);
        assert!(config.store.collection.is_none());
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = JoschConfig::figment();
        let config = JoschConfig::from_figment(&figment).expect("should extract defaults");
        assert!(config.containment.workspace_dir.ends_with("josch/containment"));
    }
}
