use std::path::Path;

use anyhow::{Context, Result};
use revolve_site::{ConsentManager, CookiePreferences, JsonFileStore};

/// Requested changes; `None` keeps the stored value.
#[derive(Debug, Default, Clone, Copy)]
pub struct Choices {
    pub performance: Option<bool>,
    pub functionality: Option<bool>,
    pub marketing: Option<bool>,
}

pub fn show(path: &Path) -> Result<()> {
    let manager = ConsentManager::new(JsonFileStore::new(path));
    let prefs = manager
        .load()
        .with_context(|| format!("failed to read {}", path.display()))?;
    print(&prefs)
}

pub fn set(path: &Path, choices: Choices) -> Result<()> {
    let mut manager = ConsentManager::new(JsonFileStore::new(path));
    let current = manager
        .load()
        .with_context(|| format!("failed to read {}", path.display()))?;

    let requested = CookiePreferences::with_choices(
        choices.performance.unwrap_or(current.performance),
        choices.functionality.unwrap_or(current.functionality),
        choices.marketing.unwrap_or(current.marketing),
    );
    let saved = manager
        .save(requested)
        .with_context(|| format!("failed to write {}", path.display()))?;

    eprintln!("{}", saved.notification.message);
    print(&saved.preferences)
}

fn print(prefs: &CookiePreferences) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(prefs)?);
    let disabled = prefs.disabled_categories();
    if !disabled.is_empty() {
        let names: Vec<_> = disabled.iter().map(|c| c.as_str()).collect();
        eprintln!("disabled: {}", names.join(", "));
    }
    Ok(())
}
