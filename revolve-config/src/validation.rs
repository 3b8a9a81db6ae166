//! Configuration warnings and guard rails

use revolve_core::{CarouselKey, constants::paging};

use crate::models::SiteConfig;

/// Something in the configuration that was repaired or ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// What happened.
    pub message: String,
    /// How to fix it.
    pub hint: Option<String>,
}

/// Warnings collected while loading.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigWarnings {
    /// In the order they were raised.
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    /// Record a warning without a hint.
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    /// Record a warning with a suggested fix.
    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    /// Whether nothing was flagged.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of warnings.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Append another set.
    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }

    /// Warnings in the order they were raised.
    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.items.iter()
    }
}

/// Check a composed config, repairing what can be repaired.
pub fn apply_guard_rails(config: &mut SiteConfig) -> ConfigWarnings {
    let mut warnings = ConfigWarnings::default();

    if config.partners_page_size == 0 {
        warnings.push_with_hint(
            format!(
                "partners page size of 0 is invalid; using {}",
                paging::PARTNERS_PAGE_SIZE
            ),
            "Set carousels.partners.page_size or REVOLVE_PARTNERS_PAGE_SIZE to a positive value",
        );
        config.partners_page_size = paging::PARTNERS_PAGE_SIZE;
    }

    for key in [
        CarouselKey::Destinations,
        CarouselKey::Partners,
        CarouselKey::Testimonials,
    ] {
        let Some(carousel) = config.carousel(&key) else {
            continue;
        };
        if let (Some(lock), Some(period)) =
            (carousel.transition(), carousel.auto_advance())
            && period < lock
        {
            warnings.push_with_hint(
                format!(
                    "{key}: auto-advance every {}ms is shorter than the {}ms transition; ticks inside the lock are dropped",
                    period.as_millis(),
                    lock.as_millis()
                ),
                format!(
                    "Raise {key} auto_advance_ms to at least transition_ms or set it to 0 to disable auto-advance"
                ),
            );
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use revolve_core::CarouselConfig;

    use super::*;

    #[test]
    fn defaults_pass_cleanly() {
        let mut config = SiteConfig::default();
        assert!(apply_guard_rails(&mut config).is_empty());
    }

    #[test]
    fn zero_page_size_is_reset() {
        let mut config = SiteConfig {
            partners_page_size: 0,
            ..SiteConfig::default()
        };
        let warnings = apply_guard_rails(&mut config);
        assert_eq!(warnings.len(), 1);
        assert_eq!(config.partners_page_size, 4);
    }

    #[test]
    fn auto_advance_inside_the_lock_is_flagged() {
        let mut config = SiteConfig {
            testimonials: CarouselConfig::testimonials_defaults()
                .with_auto_advance_ms(Some(500)),
            ..SiteConfig::default()
        };
        let warnings = apply_guard_rails(&mut config);
        assert_eq!(warnings.len(), 1);
        let warning = &warnings.items[0];
        assert!(warning.message.starts_with("testimonials:"));
        assert!(warning.hint.is_some());
    }

    #[test]
    fn auto_advance_equal_to_the_lock_is_allowed() {
        let mut config = SiteConfig {
            destinations: CarouselConfig::destinations_defaults()
                .with_transition_ms(Some(1_000))
                .with_auto_advance_ms(Some(1_000)),
            ..SiteConfig::default()
        };
        assert!(apply_guard_rails(&mut config).is_empty());
    }

    #[test]
    fn disabled_auto_advance_is_not_flagged() {
        let mut config = SiteConfig {
            destinations: CarouselConfig::destinations_defaults()
                .with_auto_advance_ms(Some(0)),
            ..SiteConfig::default()
        };
        assert!(apply_guard_rails(&mut config).is_empty());
    }
}
