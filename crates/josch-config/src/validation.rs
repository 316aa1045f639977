//! Collection validation configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default ceiling for retained invalid samples: 256 MiB.
const fn default_sample_budget_bytes() -> u64 {
    256 * 1024 * 1024
}

const fn default_reserved_fraction() -> f64 {
    0.10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ValidationConfig {
    /// Ceiling of the memory quota charged by retained invalid samples.
    #[serde(default = "default_sample_budget_bytes")]
    pub sample_budget_bytes: u64,

    /// Share of the ceiling held back from sample capture.
    #[serde(default = "default_reserved_fraction")]
    pub reserved_fraction: f64,
}

impl ValidationConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when `reserved_fraction` is not in `[0, 1)`.
    pub fn check(&self) -> Result<(), ConfigError> {
        if !(0.0..1.0).contains(&self.reserved_fraction) {
            return Err(ConfigError::InvalidValue {
                field: "validation.reserved_fraction".to_string(),
                reason: format!("{} is not in [0, 1)", self.reserved_fraction),
            });
        }
        Ok(())
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            sample_budget_bytes: default_sample_budget_bytes(),
            reserved_fraction: default_reserved_fraction(),
        }
    }
}
