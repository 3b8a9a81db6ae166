//! Cookie consent preferences
//!
//! Preferences are one JSON record stored under [`PREFERENCES_KEY`] in a
//! string key/value store. Reading is lenient: a category counts as enabled
//! unless the stored record says `false` for it, so a missing or partial
//! record means "everything on".

use std::{
    collections::{BTreeMap, HashMap},
    fmt, fs,
    path::{Path, PathBuf},
    time::SystemTime,
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::{
    error::{Result, SiteError},
    notify::Notification,
};

/// Storage key of the serialized preferences.
pub const PREFERENCES_KEY: &str = "cookiePreferences";
/// Toast shown after a successful save.
pub const SAVED_MESSAGE: &str = "Cookie preferences saved successfully!";

/// A cookie category on the consent form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsentCategory {
    /// Required for the site to work; always on.
    Essential,
    /// Analytics.
    Performance,
    /// Remembered settings.
    Functionality,
    /// Advertising.
    Marketing,
}

impl ConsentCategory {
    /// Categories a visitor can turn off.
    pub const OPTIONAL: [Self; 3] =
        [Self::Performance, Self::Functionality, Self::Marketing];

    /// Field name in the stored record.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Essential => "essential",
            Self::Performance => "performance",
            Self::Functionality => "functionality",
            Self::Marketing => "marketing",
        }
    }
}

impl fmt::Display for ConsentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A visitor's consent choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookiePreferences {
    /// Always `true` once saved.
    pub essential: bool,
    /// Analytics cookies.
    pub performance: bool,
    /// Preference cookies.
    pub functionality: bool,
    /// Advertising cookies.
    pub marketing: bool,
    /// When the visitor last saved; `None` until the first save.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Default for CookiePreferences {
    fn default() -> Self {
        Self {
            essential: true,
            performance: true,
            functionality: true,
            marketing: true,
            timestamp: None,
        }
    }
}

impl CookiePreferences {
    /// Choices for the optional categories; essential is always on.
    pub fn with_choices(
        performance: bool,
        functionality: bool,
        marketing: bool,
    ) -> Self {
        Self {
            performance,
            functionality,
            marketing,
            ..Self::default()
        }
    }

    /// Interpret a stored record. Anything unreadable is treated as an
    /// empty record.
    pub fn from_stored(raw: Option<&str>) -> Self {
        let record = match raw.map(serde_json::from_str::<Value>) {
            None => Value::Null,
            Some(Ok(value)) => value,
            Some(Err(err)) => {
                warn!(%err, "ignoring unreadable cookie preferences");
                Value::Null
            }
        };

        let enabled = |category: ConsentCategory| {
            !matches!(record.get(category.as_str()), Some(Value::Bool(false)))
        };
        let timestamp = record
            .get("timestamp")
            .and_then(Value::as_str)
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|stamp| stamp.with_timezone(&Utc));

        Self {
            essential: true,
            performance: enabled(ConsentCategory::Performance),
            functionality: enabled(ConsentCategory::Functionality),
            marketing: enabled(ConsentCategory::Marketing),
            timestamp,
        }
    }

    /// Whether `category` is allowed. Essential always is.
    pub fn is_enabled(&self, category: ConsentCategory) -> bool {
        match category {
            ConsentCategory::Essential => true,
            ConsentCategory::Performance => self.performance,
            ConsentCategory::Functionality => self.functionality,
            ConsentCategory::Marketing => self.marketing,
        }
    }

    /// Essential cannot be turned off; setting it is a no-op.
    pub fn set(&mut self, category: ConsentCategory, enabled: bool) {
        match category {
            ConsentCategory::Essential => {}
            ConsentCategory::Performance => self.performance = enabled,
            ConsentCategory::Functionality => self.functionality = enabled,
            ConsentCategory::Marketing => self.marketing = enabled,
        }
    }

    /// Optional categories the visitor turned off.
    pub fn disabled_categories(&self) -> Vec<ConsentCategory> {
        ConsentCategory::OPTIONAL
            .into_iter()
            .filter(|category| !self.is_enabled(*category))
            .collect()
    }
}

/// String key/value storage, shaped like browser local storage.
pub trait PreferenceStore {
    /// Value stored under `key`, `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>>;
    /// Store `value` under `key`, replacing what was there.
    fn set(&mut self, key: &str, value: String) -> Result<()>;
}

/// In-process store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// A JSON object of key to string on disk. Writes replace the file
/// atomically; a missing file reads as empty.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store backed by `path`. Nothing is touched until the first access.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(BTreeMap::new());
            }
            Err(source) => {
                return Err(SiteError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        serde_json::from_str(&contents).map_err(|source| {
            SiteError::CorruptStore {
                path: self.path.clone(),
                source,
            }
        })
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(entries)?;
        let io_err = |source| SiteError::Io {
            path: self.path.clone(),
            source,
        };

        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).map_err(io_err)?;

        let nanos = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let tmp_path = parent.join(format!(
            ".{}.tmp.{}",
            self.path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or("preferences"),
            nanos
        ));
        fs::write(&tmp_path, bytes).map_err(io_err)?;
        fs::rename(&tmp_path, &self.path).map_err(io_err)?;
        Ok(())
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value);
        self.write_all(&entries)
    }
}

/// Result of a save: what was stored and the toast to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedPreferences {
    /// The stored record, timestamp included.
    pub preferences: CookiePreferences,
    /// Success toast.
    pub notification: Notification,
}

/// Loads and saves [`CookiePreferences`] through a [`PreferenceStore`].
#[derive(Debug)]
pub struct ConsentManager<S> {
    store: S,
}

impl<S: PreferenceStore> ConsentManager<S> {
    /// Manager over `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Stored preferences, or defaults when nothing usable is stored.
    pub fn load(&self) -> Result<CookiePreferences> {
        let raw = self.store.get(PREFERENCES_KEY)?;
        Ok(CookiePreferences::from_stored(raw.as_deref()))
    }

    /// Store `preferences` stamped with the current time.
    pub fn save(
        &mut self,
        preferences: CookiePreferences,
    ) -> Result<SavedPreferences> {
        self.save_at(preferences, Utc::now())
    }

    /// Store `preferences` stamped with `now`.
    pub fn save_at(
        &mut self,
        preferences: CookiePreferences,
        now: DateTime<Utc>,
    ) -> Result<SavedPreferences> {
        let preferences = CookiePreferences {
            essential: true,
            timestamp: Some(now),
            ..preferences
        };
        let encoded = serde_json::to_string(&preferences)?;
        self.store.set(PREFERENCES_KEY, encoded)?;

        info!(
            performance = preferences.performance,
            functionality = preferences.functionality,
            marketing = preferences.marketing,
            "cookie preferences saved"
        );
        for category in preferences.disabled_categories() {
            debug!(%category, "{category} cookies disabled");
        }

        Ok(SavedPreferences {
            preferences,
            notification: Notification::success(SAVED_MESSAGE),
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::notify::NotificationKind;

    #[test]
    fn missing_record_enables_everything() {
        let prefs = CookiePreferences::from_stored(None);
        assert_eq!(prefs, CookiePreferences::default());
        assert!(prefs.disabled_categories().is_empty());
    }

    #[test]
    fn only_explicit_false_disables() {
        let prefs = CookiePreferences::from_stored(Some(
            r#"{"performance": false, "functionality": "no", "marketing": null}"#,
        ));
        assert!(!prefs.performance);
        assert!(prefs.functionality);
        assert!(prefs.marketing);
        assert_eq!(
            prefs.disabled_categories(),
            vec![ConsentCategory::Performance]
        );
    }

    #[test]
    fn garbage_reads_as_empty() {
        let prefs = CookiePreferences::from_stored(Some("not json"));
        assert_eq!(prefs, CookiePreferences::default());
        let prefs = CookiePreferences::from_stored(Some("[false]"));
        assert_eq!(prefs, CookiePreferences::default());
    }

    #[test]
    fn essential_cannot_be_disabled() {
        let mut prefs = CookiePreferences::from_stored(Some(
            r#"{"essential": false}"#,
        ));
        assert!(prefs.essential);
        prefs.set(ConsentCategory::Essential, false);
        assert!(prefs.is_enabled(ConsentCategory::Essential));
    }

    #[test]
    fn save_round_trips_through_the_store() {
        let mut manager = ConsentManager::new(MemoryStore::new());
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();

        let saved = manager
            .save_at(CookiePreferences::with_choices(false, true, false), now)
            .unwrap();
        assert_eq!(saved.notification.message, SAVED_MESSAGE);
        assert_eq!(saved.notification.kind, NotificationKind::Success);
        assert_eq!(
            saved.preferences.disabled_categories(),
            vec![ConsentCategory::Performance, ConsentCategory::Marketing]
        );

        let raw = manager.store().get(PREFERENCES_KEY).unwrap().unwrap();
        let record: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(record["essential"], Value::Bool(true));
        assert_eq!(record["performance"], Value::Bool(false));
        assert_eq!(record["timestamp"], Value::from("2024-05-01T12:30:00Z"));

        assert_eq!(manager.load().unwrap(), saved.preferences);
    }
}
