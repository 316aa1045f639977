//! Result of validating a whole collection.

use serde::{Deserialize, Serialize};

/// Outcome of a collection-wide validation run.
///
/// `invalid_samples` is bounded by a memory quota and may hold fewer entries
/// than `invalid_count`; the counter keeps running after the samples stop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    /// Documents considered for the run.
    pub total: u64,
    /// Documents that failed validation.
    pub invalid_count: u64,
    /// Invalid documents as JSON text, in scan order.
    pub invalid_samples: Vec<String>,
    /// Whether sample capture stopped early because the quota was exhausted.
    pub truncated: bool,
    /// Human-readable summary (or a prefixed error message).
    pub notification: String,
}

impl ValidationOutcome {
    #[must_use]
    pub fn valid_count(&self) -> u64 {
        self.total.saturating_sub(self.invalid_count)
    }
}
