//! The theme record kept in persistent storage.
//!
//! Each field is its own storage entry (`theme`, `primary_color`, ...) so
//! other scripts on the page can read them without knowing about this crate.
//! Entries are only ever overwritten, never removed.

use crate::config::StorageKeys;
use crate::env::KeyValueStore;
use crate::event::{SyncTheme, ThemeChange};

/// Scheme and colors as persisted between page loads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistedTheme {
    pub mode: Option<String>,
    pub primary_color: Option<String>,
    pub accent_color: Option<String>,
    pub background_color: Option<String>,
}

impl PersistedTheme {
    /// Reads every entry. Unreadable and empty entries count as absent.
    pub fn load<K: KeyValueStore + ?Sized>(store: &K, keys: &StorageKeys) -> Self {
        Self {
            mode: read(store, &keys.theme),
            primary_color: read(store, &keys.primary_color),
            accent_color: read(store, &keys.accent_color),
            background_color: read(store, &keys.background_color),
        }
    }

    /// Writes every present field. Absent fields leave their entry alone.
    ///
    /// Returns the number of entries written.
    pub fn save<K: KeyValueStore + ?Sized>(&self, store: &mut K, keys: &StorageKeys) -> usize {
        let entries = [
            (&keys.theme, &self.mode),
            (&keys.primary_color, &self.primary_color),
            (&keys.accent_color, &self.accent_color),
            (&keys.background_color, &self.background_color),
        ];

        let mut written = 0;
        for (key, value) in entries {
            let Some(value) = value.as_deref() else {
                continue;
            };
            match store.set_item(key, value) {
                Ok(()) => written += 1,
                Err(err) => {
                    tracing::warn!(key = %key, error = %err, "failed to persist theme entry");
                }
            }
        }
        written
    }

    /// The sync request for this record, if both colors are known.
    pub fn sync_request(&self) -> Option<SyncTheme> {
        match (&self.primary_color, &self.accent_color) {
            (Some(primary), Some(accent)) => Some(SyncTheme {
                primary_color: primary.clone(),
                accent_color: accent.clone(),
                mode: self.mode.clone(),
            }),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.mode.is_none()
            && self.primary_color.is_none()
            && self.accent_color.is_none()
            && self.background_color.is_none()
    }
}

impl From<&ThemeChange> for PersistedTheme {
    fn from(change: &ThemeChange) -> Self {
        Self {
            mode: change.mode.clone(),
            primary_color: change.primary_color.clone(),
            accent_color: change.accent_color.clone(),
            background_color: change.background_color.clone(),
        }
    }
}

fn read<K: KeyValueStore + ?Sized>(store: &K, key: &str) -> Option<String> {
    match store.get_item(key) {
        Ok(value) => value.filter(|v| !v.is_empty()),
        Err(err) => {
            tracing::warn!(key = %key, error = %err, "failed to read theme entry");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MemoryStore;

    fn keys() -> StorageKeys {
        StorageKeys::default()
    }

    #[test]
    fn test_load_empty_store() {
        let theme = PersistedTheme::load(&MemoryStore::new(), &keys());
        assert!(theme.is_empty());
    }

    #[test]
    fn test_load_reads_all_keys() {
        let store = MemoryStore::new()
            .with_item("theme", "dark")
            .with_item("primary_color", "#ff5500")
            .with_item("accent_color", "#3b82f6")
            .with_item("background_color", "#111111");
        let theme = PersistedTheme::load(&store, &keys());
        assert_eq!(theme.mode.as_deref(), Some("dark"));
        assert_eq!(theme.primary_color.as_deref(), Some("#ff5500"));
        assert_eq!(theme.accent_color.as_deref(), Some("#3b82f6"));
        assert_eq!(theme.background_color.as_deref(), Some("#111111"));
    }

    #[test]
    fn test_load_treats_empty_as_absent() {
        let store = MemoryStore::new().with_item("theme", "");
        assert_eq!(PersistedTheme::load(&store, &keys()).mode, None);
    }

    #[test]
    fn test_load_unavailable_store() {
        let theme = PersistedTheme::load(&MemoryStore::unavailable(), &keys());
        assert!(theme.is_empty());
    }

    #[test]
    fn test_save_skips_absent_fields() {
        let mut store = MemoryStore::new().with_item("accent_color", "#000000");
        let theme = PersistedTheme {
            mode: Some("light".into()),
            primary_color: Some("#ff5500".into()),
            ..Default::default()
        };
        assert_eq!(theme.save(&mut store, &keys()), 2);
        assert_eq!(store.get("theme"), Some("light"));
        assert_eq!(store.get("primary_color"), Some("#ff5500"));
        assert_eq!(store.get("accent_color"), Some("#000000"));
        assert_eq!(store.get("background_color"), None);
    }

    #[test]
    fn test_save_to_unavailable_store() {
        let mut store = MemoryStore::unavailable();
        let theme = PersistedTheme {
            mode: Some("dark".into()),
            ..Default::default()
        };
        assert_eq!(theme.save(&mut store, &keys()), 0);
    }

    #[test]
    fn test_save_with_custom_keys() {
        let mut store = MemoryStore::new();
        let keys = StorageKeys {
            theme: "scheme".into(),
            ..StorageKeys::default()
        };
        PersistedTheme {
            mode: Some("dark".into()),
            ..Default::default()
        }
        .save(&mut store, &keys);
        assert_eq!(store.get("scheme"), Some("dark"));
        assert_eq!(store.get("theme"), None);
    }

    #[test]
    fn test_sync_request_needs_both_colors() {
        let mut theme = PersistedTheme {
            primary_color: Some("#ff5500".into()),
            ..Default::default()
        };
        assert!(theme.sync_request().is_none());

        theme.accent_color = Some("#3b82f6".into());
        let sync = theme.sync_request().unwrap();
        assert_eq!(sync.primary_color, "#ff5500");
        assert_eq!(sync.accent_color, "#3b82f6");
        assert_eq!(sync.mode, None);
    }
}
