//! Shared configuration library for revolve.
//!
//! Configuration is layered: compiled defaults (the carousel presets), then
//! an optional TOML file, then `.env`/environment overrides. Loading never
//! fails on questionable values; those come back as [`ConfigWarnings`] so the
//! caller can log them once its subscriber is installed.

pub mod loader;
pub mod models;
pub mod sources;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, error::ConfigLoadError};
pub use models::{ConfigMetadata, SiteConfig};
pub use sources::{EnvConfig, FileCarouselConfig, FileConfig};
pub use validation::{ConfigWarning, ConfigWarnings};
