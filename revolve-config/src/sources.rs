//! Raw configuration sources: the TOML file and the environment

use serde::{Deserialize, Serialize};
use std::{path::PathBuf, str::FromStr};

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    /// `EnvFilter` directive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
    /// Cookie preference store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences_path: Option<PathBuf>,
    /// `[carousels.*]` tables.
    #[serde(default)]
    pub carousels: FileCarousels,
}

/// The `[carousels]` table.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileCarousels {
    /// `[carousels.destinations]`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destinations: Option<FileCarouselConfig>,
    /// `[carousels.partners]`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partners: Option<FileCarouselConfig>,
    /// `[carousels.testimonials]`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testimonials: Option<FileCarouselConfig>,
}

/// One `[carousels.<name>]` table. `page_size` is only read for partners.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileCarouselConfig {
    /// Lock after each move (ms); 0 disables.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition_ms: Option<u64>,
    /// Auto-advance period (ms); 0 disables.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_advance_ms: Option<u64>,
    /// Items per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,
}

/// Timing overrides for one carousel taken from the environment.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EnvCarouselConfig {
    /// `REVOLVE_<KEY>_TRANSITION_MS`
    pub transition_ms: Option<u64>,
    /// `REVOLVE_<KEY>_AUTO_ADVANCE_MS`
    pub auto_advance_ms: Option<u64>,
}

/// An environment variable that was set but could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidEnvVar {
    /// Variable name.
    pub name: String,
    /// Raw value as found.
    pub value: String,
}

/// Overrides read from `REVOLVE_*` variables.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EnvConfig {
    /// `REVOLVE_CONFIG`
    pub config_path: Option<PathBuf>,
    /// `REVOLVE_LOG`
    pub log_filter: Option<String>,
    /// `REVOLVE_PREFERENCES_PATH`
    pub preferences_path: Option<PathBuf>,
    /// `REVOLVE_DESTINATIONS_*`
    pub destinations: EnvCarouselConfig,
    /// `REVOLVE_PARTNERS_*`
    pub partners: EnvCarouselConfig,
    /// `REVOLVE_TESTIMONIALS_*`
    pub testimonials: EnvCarouselConfig,
    /// `REVOLVE_PARTNERS_PAGE_SIZE`
    pub partners_page_size: Option<usize>,
    /// Variables that were set but did not parse.
    pub invalid: Vec<InvalidEnvVar>,
}

impl EnvConfig {
    /// Read overrides from the process environment.
    pub fn gather() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read overrides through `lookup`, which maps a variable name to its
    /// value if set.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut reader = EnvReader {
            lookup,
            invalid: Vec::new(),
        };

        let mut env_config = Self {
            config_path: reader.string("REVOLVE_CONFIG").map(PathBuf::from),
            log_filter: reader.string("REVOLVE_LOG"),
            preferences_path: reader
                .string("REVOLVE_PREFERENCES_PATH")
                .map(PathBuf::from),
            destinations: reader.carousel("DESTINATIONS"),
            partners: reader.carousel("PARTNERS"),
            testimonials: reader.carousel("TESTIMONIALS"),
            partners_page_size: reader.parsed("REVOLVE_PARTNERS_PAGE_SIZE"),
            invalid: Vec::new(),
        };
        env_config.invalid = reader.invalid;
        env_config
    }
}

struct EnvReader<F> {
    lookup: F,
    invalid: Vec<InvalidEnvVar>,
}

impl<F> EnvReader<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn string(&self, name: &str) -> Option<String> {
        (self.lookup)(name)
            .map(|raw| raw.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    fn parsed<T: FromStr>(&mut self, name: &str) -> Option<T> {
        let raw = self.string(name)?;
        match raw.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                self.invalid.push(InvalidEnvVar {
                    name: name.to_string(),
                    value: raw,
                });
                None
            }
        }
    }

    fn carousel(&mut self, prefix: &str) -> EnvCarouselConfig {
        EnvCarouselConfig {
            transition_ms: self
                .parsed(&format!("REVOLVE_{prefix}_TRANSITION_MS")),
            auto_advance_ms: self
                .parsed(&format!("REVOLVE_{prefix}_AUTO_ADVANCE_MS")),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(
        vars: &[(&str, &str)],
    ) -> impl Fn(&str) -> Option<String> + use<> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn empty_environment_has_no_overrides() {
        assert_eq!(EnvConfig::from_lookup(|_| None), EnvConfig::default());
    }

    #[test]
    fn reads_carousel_overrides() {
        let env = EnvConfig::from_lookup(lookup(&[
            ("REVOLVE_DESTINATIONS_TRANSITION_MS", "450"),
            ("REVOLVE_TESTIMONIALS_AUTO_ADVANCE_MS", " 8000 "),
            ("REVOLVE_PARTNERS_PAGE_SIZE", "6"),
            ("REVOLVE_LOG", "revolve_core=debug"),
        ]));
        assert_eq!(env.destinations.transition_ms, Some(450));
        assert_eq!(env.testimonials.auto_advance_ms, Some(8000));
        assert_eq!(env.partners_page_size, Some(6));
        assert_eq!(env.log_filter.as_deref(), Some("revolve_core=debug"));
        assert!(env.invalid.is_empty());
    }

    #[test]
    fn unparsable_values_are_collected() {
        let env = EnvConfig::from_lookup(lookup(&[
            ("REVOLVE_PARTNERS_AUTO_ADVANCE_MS", "soon"),
            ("REVOLVE_PARTNERS_PAGE_SIZE", "-1"),
        ]));
        assert_eq!(env.partners.auto_advance_ms, None);
        assert_eq!(env.partners_page_size, None);
        let names: Vec<_> =
            env.invalid.iter().map(|var| var.name.as_str()).collect();
        assert_eq!(
            names,
            ["REVOLVE_PARTNERS_AUTO_ADVANCE_MS", "REVOLVE_PARTNERS_PAGE_SIZE"]
        );
    }

    #[test]
    fn blank_values_are_ignored() {
        let env = EnvConfig::from_lookup(lookup(&[("REVOLVE_LOG", "  ")]));
        assert_eq!(env.log_filter, None);
    }

    #[test]
    fn file_config_parses_carousel_tables() {
        let file: FileConfig = toml::from_str(
            r#"
            log_filter = "warn"

            [carousels.destinations]
            transition_ms = 500
            auto_advance_ms = 0

            [carousels.partners]
            page_size = 3
            "#,
        )
        .unwrap();
        assert_eq!(file.log_filter.as_deref(), Some("warn"));
        let destinations = file.carousels.destinations.unwrap();
        assert_eq!(destinations.transition_ms, Some(500));
        assert_eq!(destinations.auto_advance_ms, Some(0));
        assert_eq!(file.carousels.partners.unwrap().page_size, Some(3));
        assert!(file.carousels.testimonials.is_none());
    }
}
