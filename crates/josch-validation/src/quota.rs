//! Byte quota for retained invalid-document samples.

use josch_config::ValidationConfig;
use tracing::warn;

/// Ceiling plus a reserved share of it that captures must never eat into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemoryQuota {
    ceiling_bytes: u64,
    reserved_fraction: f64,
}

impl MemoryQuota {
    #[must_use]
    pub const fn new(ceiling_bytes: u64, reserved_fraction: f64) -> Self {
        Self {
            ceiling_bytes,
            reserved_fraction,
        }
    }

    /// Preset for invalid-sample capture during collection validation (10% reserved).
    #[must_use]
    pub const fn collection_capture(ceiling_bytes: u64) -> Self {
        Self::new(ceiling_bytes, 0.10)
    }

    /// Preset for bulk schema inference (50% reserved).
    #[must_use]
    pub const fn inference(ceiling_bytes: u64) -> Self {
        Self::new(ceiling_bytes, 0.50)
    }

    #[must_use]
    pub const fn ceiling_bytes(&self) -> u64 {
        self.ceiling_bytes
    }

    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub fn reserved_bytes(&self) -> u64 {
        (self.ceiling_bytes as f64 * self.reserved_fraction) as u64
    }

    /// Whether another capture may be appended when `used` bytes are already held.
    #[must_use]
    pub fn has_room(&self, used: u64) -> bool {
        let allocated = used.saturating_add(self.reserved_bytes());
        let free = i128::from(self.ceiling_bytes) - i128::from(allocated);
        free > 0 || allocated < self.ceiling_bytes
    }
}

impl From<&ValidationConfig> for MemoryQuota {
    fn from(config: &ValidationConfig) -> Self {
        Self::new(config.sample_budget_bytes, config.reserved_fraction)
    }
}

/// Retains samples until the quota runs out, then only counts.
#[derive(Debug)]
pub struct CaptureGuard {
    quota: MemoryQuota,
    used: u64,
    samples: Vec<String>,
    truncated: bool,
}

impl CaptureGuard {
    #[must_use]
    pub const fn new(quota: MemoryQuota) -> Self {
        Self {
            quota,
            used: 0,
            samples: Vec::new(),
            truncated: false,
        }
    }

    /// Keep `sample` if the quota allows it. Returns whether it was kept.
    pub fn push(&mut self, sample: String) -> bool {
        if !self.quota.has_room(self.used) {
            if !self.truncated {
                warn!(
                    used = self.used,
                    ceiling = self.quota.ceiling_bytes(),
                    "sample quota exhausted, no longer keeping invalid documents"
                );
            }
            self.truncated = true;
            return false;
        }
        self.used = self.used.saturating_add(sample.len() as u64);
        self.samples.push(sample);
        true
    }

    #[must_use]
    pub const fn used_bytes(&self) -> u64 {
        self.used
    }

    #[must_use]
    pub const fn is_truncated(&self) -> bool {
        self.truncated
    }

    #[must_use]
    pub fn into_parts(self) -> (Vec<String>, bool) {
        (self.samples, self.truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reserved_share_is_off_limits() {
        let quota = MemoryQuota::collection_capture(100);
        assert_eq!(quota.reserved_bytes(), 10);
        assert!(quota.has_room(0));
        assert!(quota.has_room(89));
        assert!(!quota.has_room(90));
        assert!(!quota.has_room(500));
    }

    #[test]
    fn inference_reserves_half() {
        let quota = MemoryQuota::inference(100);
        assert!(quota.has_room(49));
        assert!(!quota.has_room(50));
    }

    #[test]
    fn zero_ceiling_keeps_nothing() {
        let mut guard = CaptureGuard::new(MemoryQuota::collection_capture(0));
        assert!(!guard.push("{}".to_string()));
        let (samples, truncated) = guard.into_parts();
        assert!(samples.is_empty());
        assert!(truncated);
    }

    #[test]
    fn stops_keeping_once_quota_is_used() {
        let mut guard = CaptureGuard::new(MemoryQuota::collection_capture(100));
        let sample = "x".repeat(45);
        assert!(guard.push(sample.clone()));
        assert!(guard.push(sample.clone()));
        assert!(!guard.push(sample.clone()));
        assert!(!guard.push(sample));
        assert_eq!(guard.used_bytes(), 90);
        let (samples, truncated) = guard.into_parts();
        assert_eq!(samples.len(), 2);
        assert!(truncated);
    }

    #[test]
    fn built_from_config() {
        let config = ValidationConfig::default();
        let quota = MemoryQuota::from(&config);
        assert_eq!(quota.ceiling_bytes(), config.sample_budget_bytes);
    }
}
