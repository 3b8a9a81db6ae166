//! Resolved configuration

use std::path::PathBuf;

use revolve_core::{CarouselConfig, CarouselKey, constants::paging};

/// `EnvFilter` directive when nothing else is configured.
pub const DEFAULT_LOG_FILTER: &str = "info";
/// Cookie preference store, relative to the working directory.
pub const DEFAULT_PREFERENCES_PATH: &str = "cookie-preferences.json";

/// Fully resolved site configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Orbit timing.
    pub destinations: CarouselConfig,
    /// Paged grid timing.
    pub partners: CarouselConfig,
    /// Testimonial strip timing.
    pub testimonials: CarouselConfig,
    /// Partner cards per page.
    pub partners_page_size: usize,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Where cookie preferences are persisted.
    pub preferences_path: PathBuf,
    /// Sources that contributed.
    pub metadata: ConfigMetadata,
}

/// Where the configuration came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigMetadata {
    /// Config file that was read, if any.
    pub config_path: Option<PathBuf>,
    /// Whether a `.env` file was found and applied.
    pub env_file_loaded: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            destinations: CarouselConfig::destinations_defaults(),
            partners: CarouselConfig::partners_defaults(),
            testimonials: CarouselConfig::testimonials_defaults(),
            partners_page_size: paging::PARTNERS_PAGE_SIZE,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            preferences_path: PathBuf::from(DEFAULT_PREFERENCES_PATH),
            metadata: ConfigMetadata::default(),
        }
    }
}

impl SiteConfig {
    /// Timing for one of the built-in carousels.
    pub fn carousel(&self, key: &CarouselKey) -> Option<&CarouselConfig> {
        match key {
            CarouselKey::Destinations => Some(&self.destinations),
            CarouselKey::Partners => Some(&self.partners),
            CarouselKey::Testimonials => Some(&self.testimonials),
            CarouselKey::Custom(_) => None,
        }
    }

    pub(crate) fn carousel_mut(
        &mut self,
        key: &CarouselKey,
    ) -> Option<&mut CarouselConfig> {
        match key {
            CarouselKey::Destinations => Some(&mut self.destinations),
            CarouselKey::Partners => Some(&mut self.partners),
            CarouselKey::Testimonials => Some(&mut self.testimonials),
            CarouselKey::Custom(_) => None,
        }
    }
}
