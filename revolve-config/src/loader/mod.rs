//! Layered configuration loading
//!
//! Built-in presets are overlaid by a TOML file and then by `REVOLVE_*`
//! environment variables, optionally seeded from a `.env` file.

pub mod error;

use once_cell::sync::Lazy;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

use revolve_core::{CarouselConfig, CarouselKey};

use self::error::ConfigLoadError;
use crate::{
    models::{ConfigMetadata, SiteConfig},
    sources::{EnvCarouselConfig, EnvConfig, FileCarouselConfig, FileConfig},
    validation::{self, ConfigWarnings},
};

static DEFAULT_CONFIG_LOCATIONS: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    vec![
        PathBuf::from("revolve.toml"),
        PathBuf::from("config/revolve.toml"),
    ]
});

/// Inputs for a [`ConfigLoader`].
#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    /// Config file to read; it must exist when given.
    pub config_path: Option<PathBuf>,
    /// `.env` file to read instead of `./.env`.
    pub env_file: Option<PathBuf>,
    /// Use these overrides instead of reading `.env` and the process
    /// environment.
    pub env: Option<EnvConfig>,
}

/// Resolves a [`SiteConfig`] from presets, file and environment.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

/// A loaded configuration and everything worth telling the user about it.
#[derive(Debug)]
pub struct ConfigLoad {
    /// Resolved configuration, guard rails applied.
    pub config: SiteConfig,
    /// Repaired or ignored values.
    pub warnings: ConfigWarnings,
}

impl ConfigLoader {
    /// Loader with default sources.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loader with explicit options.
    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    /// Read this file instead of searching the default locations.
    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    /// Read this `.env` file instead of `./.env`.
    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    /// Use these overrides instead of `.env` and the process environment.
    pub fn with_env(mut self, env: EnvConfig) -> Self {
        self.options.env = Some(env);
        self
    }

    /// Resolve the configuration.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let (env_config, env_file_loaded) = match &self.options.env {
            Some(env) => (env.clone(), false),
            None => {
                let loaded = self.load_env_file()?;
                (EnvConfig::gather(), loaded)
            }
        };

        let (file_config, config_path) = self.load_file_config(&env_config)?;

        let mut warnings = ConfigWarnings::default();
        let mut config = compose_config(
            file_config.unwrap_or_default(),
            &env_config,
            &mut warnings,
        );
        config.metadata = ConfigMetadata {
            config_path,
            env_file_loaded,
        };
        warnings.extend(validation::apply_guard_rails(&mut config));

        debug!(
            config_path = ?config.metadata.config_path,
            env_file_loaded,
            warnings = warnings.len(),
            "configuration loaded"
        );

        Ok(ConfigLoad { config, warnings })
    }

    fn load_env_file(&self) -> Result<bool, ConfigLoadError> {
        let outcome = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path),
            None => dotenvy::dotenv().map(|_| ()),
        };
        match outcome {
            Ok(()) => Ok(true),
            Err(dotenvy::Error::Io(_)) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    fn load_file_config(
        &self,
        env_config: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        let requested = self
            .options
            .config_path
            .clone()
            .or_else(|| env_config.config_path.clone());

        let path = match requested {
            Some(path) if !path.exists() => {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            Some(path) => path,
            None => match DEFAULT_CONFIG_LOCATIONS
                .iter()
                .find(|candidate| candidate.exists())
            {
                Some(found) => found.clone(),
                None => return Ok((None, None)),
            },
        };

        let file_config = read_file_config(&path)?;
        Ok((Some(file_config), Some(path)))
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    let contents =
        fs::read_to_string(path).map_err(|err| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source: err,
        })?;
    toml::from_str(&contents).map_err(|err| ConfigLoadError::Parse {
        path: path.to_path_buf(),
        source: err,
    })
}

fn compose_config(
    file: FileConfig,
    env: &EnvConfig,
    warnings: &mut ConfigWarnings,
) -> SiteConfig {
    let mut config = SiteConfig::default();

    if let Some(filter) = env.log_filter.clone().or(file.log_filter) {
        config.log_filter = filter;
    }
    if let Some(path) = env.preferences_path.clone().or(file.preferences_path)
    {
        config.preferences_path = path;
    }

    let carousels = file.carousels;
    for (key, file_carousel, env_carousel) in [
        (
            CarouselKey::Destinations,
            carousels.destinations,
            &env.destinations,
        ),
        (CarouselKey::Partners, carousels.partners, &env.partners),
        (
            CarouselKey::Testimonials,
            carousels.testimonials,
            &env.testimonials,
        ),
    ] {
        let file_carousel = file_carousel.unwrap_or_default();
        if key == CarouselKey::Partners {
            if let Some(size) = env.partners_page_size.or(file_carousel.page_size)
            {
                config.partners_page_size = size;
            }
        } else if file_carousel.page_size.is_some() {
            warnings.push_with_hint(
                format!("{key}: page_size is ignored"),
                "Only the partners carousel is paged",
            );
        }
        if let Some(target) = config.carousel_mut(&key) {
            *target = overlay(*target, &file_carousel, env_carousel);
        }
    }

    for var in &env.invalid {
        warnings.push_with_hint(
            format!("ignoring {}={:?}: not a valid number", var.name, var.value),
            format!("Unset {} or give it a non-negative integer", var.name),
        );
    }

    config
}

fn overlay(
    base: CarouselConfig,
    file: &FileCarouselConfig,
    env: &EnvCarouselConfig,
) -> CarouselConfig {
    let mut merged = base;
    if let Some(ms) = env.transition_ms.or(file.transition_ms) {
        merged = merged.with_transition_ms(Some(ms));
    }
    if let Some(ms) = env.auto_advance_ms.or(file.auto_advance_ms) {
        merged = merged.with_auto_advance_ms(Some(ms));
    }
    merged
}
