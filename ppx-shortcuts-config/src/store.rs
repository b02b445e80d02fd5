//! Settings persistence.
//!
//! Covers:
//! - `load` (read, migrate, merge over defaults)
//! - `save` (read-modify-write of a partial update)
//! - `reset` (write defaults back)
//!
//! A save is a plain read-modify-write with no locking: when two saves race,
//! the later write wins.

use crate::error::StorageError;
use crate::migration::migrate_shortcut_settings;
use crate::registry::default_shortcuts;
use crate::settings::{ExtensionSettings, SettingsUpdate, StoredSettings};
use crate::storage::StorageProvider;
use crate::types::{FeatureToggles, Platform};

/// Storage key of the settings record.
pub const STORAGE_KEY: &str = "perplexityUnifiedSettings";

/// Loads and saves [`ExtensionSettings`] through a storage provider.
#[derive(Debug, Clone)]
pub struct SettingsStore<S> {
    storage: S,
    platform: Platform,
}

impl<S: StorageProvider> SettingsStore<S> {
    /// Store for the current platform.
    pub fn new(storage: S) -> Self {
        Self::with_platform(storage, Platform::current())
    }

    pub fn with_platform(storage: S, platform: Platform) -> Self {
        Self { storage, platform }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    async fn read_stored(&self) -> Result<StoredSettings, StorageError> {
        let value = self.storage.get(STORAGE_KEY).await?;
        let mut stored = StoredSettings::from_value(value.as_ref());
        stored.shortcuts = migrate_shortcut_settings(stored.shortcuts);
        Ok(stored)
    }

    /// Read persisted settings merged over defaults.
    ///
    /// Feature toggles and shortcut lists merge key-wise; every stored list
    /// is migrated first.
    pub async fn load(&self) -> Result<ExtensionSettings, StorageError> {
        let stored = self.read_stored().await?;

        let mut feature_toggles = FeatureToggles::default();
        feature_toggles.apply(&stored.feature_toggles);

        let mut shortcuts = default_shortcuts(self.platform);
        let override_count = stored.shortcuts.len();
        shortcuts.extend(stored.shortcuts);

        log::info!(
            "Loaded settings with {} stored shortcut override(s)",
            override_count
        );
        Ok(ExtensionSettings {
            feature_toggles,
            shortcuts,
        })
    }

    /// Apply a partial update and write the full record back.
    ///
    /// Shortcut ids not named in `update` keep their stored (or default)
    /// bindings, and stored keys this version does not know are written back
    /// as found. A failed read aborts before anything is written.
    pub async fn save(&self, update: SettingsUpdate) -> Result<(), StorageError> {
        let current = self.read_stored().await?;

        let mut feature_toggles = FeatureToggles::default();
        feature_toggles.apply(&current.feature_toggles);
        if let Some(toggles) = &update.feature_toggles {
            feature_toggles.apply(toggles);
        }

        let mut shortcuts = default_shortcuts(self.platform);
        shortcuts.extend(current.shortcuts);
        if let Some(partial) = update.shortcuts {
            let partial = migrate_shortcut_settings(partial);
            for id in partial.keys() {
                log::info!("Saving bindings for shortcut '{}'", id);
            }
            shortcuts.extend(partial);
        }

        let next = ExtensionSettings {
            feature_toggles,
            shortcuts,
        };
        let mut value = serde_json::to_value(&next)?;
        current.unknown.restore_into(&mut value);
        self.storage.set(STORAGE_KEY, value).await
    }

    /// Overwrite everything with defaults and return them.
    pub async fn reset(&self) -> Result<ExtensionSettings, StorageError> {
        let defaults = ExtensionSettings::defaults(self.platform);
        self.save(SettingsUpdate::replace_all(&defaults)).await?;
        log::info!("Settings reset to defaults");
        Ok(defaults)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::types::{FeatureCategory, KeyBinding, ShortcutId};
    use serde_json::json;

    #[tokio::test]
    async fn test_load_empty_storage_gives_defaults() {
        let store = SettingsStore::with_platform(MemoryStorage::new(), Platform::Mac);
        let settings = store.load().await.unwrap();
        assert_eq!(settings, ExtensionSettings::defaults(Platform::Mac));
    }

    #[tokio::test]
    async fn test_load_migrates_stored_lists() {
        let storage = MemoryStorage::with_value(
            STORAGE_KEY,
            json!({
                "shortcuts": {
                    "scrollTop": [
                        { "key": "k", "ctrl": true },
                        { "key": "k", "meta": true }
                    ]
                }
            }),
        );
        let store = SettingsStore::with_platform(storage, Platform::Other);
        let settings = store.load().await.unwrap();

        assert_eq!(
            settings.shortcuts[&ShortcutId::ScrollTop],
            vec![KeyBinding::new("k").with_mod()]
        );
        assert!(settings.feature_toggles.vim_scroll);
    }

    #[tokio::test]
    async fn test_save_leaves_other_ids_untouched() {
        let storage = MemoryStorage::new();
        let store = SettingsStore::with_platform(storage.clone(), Platform::Other);

        let custom = KeyBinding::new("b").with_code("KeyB").with_mod();
        store
            .save(SettingsUpdate::new().with_shortcut(ShortcutId::BookmarkChat, vec![custom.clone()]))
            .await
            .unwrap();
        store
            .save(SettingsUpdate::new().with_feature(FeatureCategory::SafeSend, false))
            .await
            .unwrap();

        let settings = store.load().await.unwrap();
        assert_eq!(settings.shortcuts[&ShortcutId::BookmarkChat], vec![custom]);
        assert!(!settings.feature_toggles.safe_send);
        assert!(settings.feature_toggles.other_shortcuts);

        // Full record is written, not just the delta
        let raw = storage.peek(STORAGE_KEY).unwrap();
        assert_eq!(raw["shortcuts"].as_object().unwrap().len(), ShortcutId::ALL.len());
    }

    #[tokio::test]
    async fn test_save_keeps_unknown_stored_keys() {
        let storage = MemoryStorage::with_value(
            STORAGE_KEY,
            json!({
                "theme": "dark",
                "featureToggles": { "vimScroll": false, "darkMode": true },
                "shortcuts": {
                    "launchRockets": [{ "key": "r", "mod": true }],
                    "scroll_top": [{ "key": "g" }]
                }
            }),
        );
        let store = SettingsStore::with_platform(storage.clone(), Platform::Other);
        store
            .save(SettingsUpdate::new().with_feature(FeatureCategory::SafeSend, false))
            .await
            .unwrap();

        let raw = storage.peek(STORAGE_KEY).unwrap();
        assert_eq!(raw["theme"], json!("dark"));
        assert_eq!(raw["featureToggles"]["darkMode"], json!(true));
        assert_eq!(raw["featureToggles"]["vimScroll"], json!(false));
        assert_eq!(raw["featureToggles"]["safeSend"], json!(false));
        assert_eq!(
            raw["shortcuts"]["launchRockets"],
            json!([{ "key": "r", "mod": true }])
        );
        // Not an exact id, so it never overrides scrollTop
        assert_eq!(raw["shortcuts"]["scroll_top"], json!([{ "key": "g" }]));
        assert_eq!(
            raw["shortcuts"]["scrollTop"],
            json!([{ "key": "k", "code": "KeyK", "mod": true }])
        );

        let settings = store.load().await.unwrap();
        assert_eq!(
            settings.shortcuts[&ShortcutId::ScrollTop],
            vec![KeyBinding::new("k").with_code("KeyK").with_mod()]
        );
    }

    #[tokio::test]
    async fn test_reset_restores_defaults() {
        let store = SettingsStore::with_platform(MemoryStorage::new(), Platform::Mac);
        store
            .save(
                SettingsUpdate::new()
                    .with_feature(FeatureCategory::VimScroll, false)
                    .with_shortcut(ShortcutId::ScrollUp, vec![KeyBinding::new("w")]),
            )
            .await
            .unwrap();

        let defaults = store.reset().await.unwrap();
        assert_eq!(store.load().await.unwrap(), defaults);
        assert_eq!(defaults, ExtensionSettings::defaults(Platform::Mac));
    }
}
