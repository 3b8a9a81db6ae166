//! Per-carousel timing configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::timing;

/// Static timing configuration for a carousel instance. These can be derived
/// from presets (destinations, partners, testimonials) or provided ad-hoc.
///
/// Absent or zero values disable the corresponding behavior: no lock means
/// transitions are instant and never reject requests; no auto-advance means
/// the carousel only moves on user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Lock duration after each accepted move (ms).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_ms: Option<u64>,
    /// Auto-advance period (ms).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_advance_ms: Option<u64>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::destinations_defaults()
    }
}

impl CarouselConfig {
    /// Single-focus 3D orbit: locked transitions, 4s rotation.
    pub const fn destinations_defaults() -> Self {
        Self {
            transition_ms: Some(timing::TRANSITION_MS),
            auto_advance_ms: Some(timing::DESTINATIONS_AUTO_ADVANCE_MS),
        }
    }

    /// Paged grid: instant, unlocked paging and no rotation.
    pub const fn partners_defaults() -> Self {
        Self {
            transition_ms: None,
            auto_advance_ms: None,
        }
    }

    /// Prev/active/next strip: locked transitions, 6s rotation.
    pub const fn testimonials_defaults() -> Self {
        Self {
            transition_ms: Some(timing::TRANSITION_MS),
            auto_advance_ms: Some(timing::TESTIMONIALS_AUTO_ADVANCE_MS),
        }
    }

    /// Lock duration, `None` when transitions are instant.
    pub fn transition(&self) -> Option<Duration> {
        self.transition_ms
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
    }

    /// Auto-advance period, `None` when disabled.
    pub fn auto_advance(&self) -> Option<Duration> {
        self.auto_advance_ms
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
    }

    /// Override the lock duration.
    pub fn with_transition_ms(mut self, ms: Option<u64>) -> Self {
        self.transition_ms = ms;
        self
    }

    /// Override the auto-advance period.
    pub fn with_auto_advance_ms(mut self, ms: Option<u64>) -> Self {
        self.auto_advance_ms = ms;
        self
    }
}
