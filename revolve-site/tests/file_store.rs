use std::fs;

use revolve_site::{
    ConsentCategory, ConsentManager, CookiePreferences, JsonFileStore,
    PREFERENCES_KEY, PreferenceStore, SiteError,
};
use tempfile::TempDir;

#[test]
fn missing_file_reads_as_defaults() {
    let dir = TempDir::new().unwrap();
    let manager =
        ConsentManager::new(JsonFileStore::new(dir.path().join("prefs.json")));

    let prefs = manager.load().unwrap();
    assert_eq!(prefs, CookiePreferences::default());
}

#[test]
fn saved_preferences_survive_a_new_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("prefs.json");

    let mut manager = ConsentManager::new(JsonFileStore::new(&path));
    manager
        .save(CookiePreferences::with_choices(true, false, true))
        .unwrap();

    let reopened = ConsentManager::new(JsonFileStore::new(&path));
    let prefs = reopened.load().unwrap();
    assert_eq!(
        prefs.disabled_categories(),
        vec![ConsentCategory::Functionality]
    );
    assert!(prefs.timestamp.is_some());

    // Only the target file is left behind.
    let entries: Vec<_> = fs::read_dir(path.parent().unwrap())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("prefs.json")]);
}

#[test]
fn other_keys_are_preserved() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    fs::write(&path, r#"{"theme": "dark"}"#).unwrap();

    let mut store = JsonFileStore::new(&path);
    store.set(PREFERENCES_KEY, "{}".to_string()).unwrap();

    assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    assert_eq!(store.get(PREFERENCES_KEY).unwrap().as_deref(), Some("{}"));
}

#[test]
fn corrupt_store_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    fs::write(&path, "[1, 2, 3]").unwrap();

    let store = JsonFileStore::new(&path);
    let err = store.get(PREFERENCES_KEY).unwrap_err();
    assert!(matches!(err, SiteError::CorruptStore { .. }));
}
