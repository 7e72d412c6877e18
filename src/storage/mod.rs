//! Preference storage for the theme setting
//!
//! The only persisted state is a small string map, normally holding the
//! `"theme"` key. Stores are async so a host can back them with a file,
//! a browser bridge, or anything else that does I/O.

use crate::runtime::debug;
use crate::types::theme::Theme;
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use std::sync::Mutex;

/// Key under which the theme is stored
pub const THEME_KEY: &str = "theme";

/// Key-value preference store
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Read a value, `None` if it was never set
    async fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    /// Write a value, replacing any previous one
    async fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// Preference store errors
#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("I/O error on preference file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed preference file {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Preference store unavailable: {reason}")]
    Unavailable { reason: String },
}

/// Read the stored theme; missing or unrecognized values fall back to dark
pub async fn load_theme(store: &dyn PreferenceStore) -> anyhow::Result<Theme> {
    let stored = store.get(THEME_KEY).await?;
    let theme = Theme::from_preference(stored.as_deref());
    if let Some(value) = stored.as_deref()
        && value != theme.as_str()
    {
        log::warn!(
            target: debug::STORAGE,
            "[Storage] Ignoring unknown theme '{}', using {}",
            value,
            theme
        );
    }
    Ok(theme)
}

/// Persist the theme
pub async fn save_theme(store: &dyn PreferenceStore, theme: Theme) -> anyhow::Result<()> {
    store.set(THEME_KEY, theme.as_str()).await?;
    log::debug!(target: debug::STORAGE, "[Storage] Saved theme {}", theme);
    Ok(())
}

/// In-memory store, for tests and hosts without persistence
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        if let Ok(mut values) = store.values.lock() {
            values.insert(key.into(), value.into());
        }
        store
    }
}

#[async_trait]
impl PreferenceStore for MemoryPreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        let values = self.values.lock().map_err(|e| PreferenceError::Unavailable {
            reason: format!("Memory store lock poisoned: {e}"),
        })?;
        Ok(values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut values = self.values.lock().map_err(|e| PreferenceError::Unavailable {
            reason: format!("Memory store lock poisoned: {e}"),
        })?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a JSON object on disk
///
/// A missing file reads as empty; writes rewrite the whole object.
#[derive(Debug, Clone)]
pub struct JsonFilePreferenceStore {
    path: PathBuf,
}

impl JsonFilePreferenceStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    async fn read_all(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(PreferenceError::Io {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };
        serde_json::from_str(&content).map_err(|e| PreferenceError::Malformed {
            path: self.path.clone(),
            source: e,
        })
    }
}

#[async_trait]
impl PreferenceStore for JsonFilePreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        let mut values = self.read_all().await?;
        Ok(values.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut values = self.read_all().await?;
        values.insert(key.to_string(), value.to_string());

        let json = serde_json::to_string_pretty(&values).map_err(|e| PreferenceError::Malformed {
            path: self.path.clone(),
            source: e,
        })?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| PreferenceError::Io {
                path: self.path.clone(),
                source: e,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_theme_defaults_to_dark() {
        let store = MemoryPreferenceStore::new();
        assert_eq!(load_theme(&store).await.unwrap(), Theme::Dark);
    }

    #[tokio::test]
    async fn save_then_load_restores_theme() {
        let store = MemoryPreferenceStore::new();
        save_theme(&store, Theme::Light).await.unwrap();

        assert_eq!(store.get(THEME_KEY).await.unwrap(), Some("light".to_string()));
        assert_eq!(load_theme(&store).await.unwrap(), Theme::Light);
    }

    #[tokio::test]
    async fn unknown_stored_theme_falls_back_to_dark() {
        let store = MemoryPreferenceStore::with_value(THEME_KEY, "neon");
        assert_eq!(load_theme(&store).await.unwrap(), Theme::Dark);
    }
}
