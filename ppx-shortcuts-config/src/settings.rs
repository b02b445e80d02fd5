//! Settings records: the in-memory settings, partial updates, and the
//! lenient decoder for whatever is found in storage.

use crate::registry::default_shortcuts;
use crate::types::{
    FeatureCategory, FeatureToggles, FeatureTogglesUpdate, KeyBinding, Platform, ShortcutId,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// User override bindings keyed by shortcut id. Absent ids use defaults.
pub type ShortcutSettings = BTreeMap<ShortcutId, Vec<KeyBinding>>;

/// Full settings record, also the persisted shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionSettings {
    pub feature_toggles: FeatureToggles,
    pub shortcuts: ShortcutSettings,
}

impl ExtensionSettings {
    /// Default toggles plus the default binding of every shortcut.
    pub fn defaults(platform: Platform) -> Self {
        Self {
            feature_toggles: FeatureToggles::default(),
            shortcuts: default_shortcuts(platform),
        }
    }
}

/// Partial settings write.
///
/// Shortcut entries replace the whole binding list of their id; ids not
/// mentioned are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_toggles: Option<FeatureTogglesUpdate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcuts: Option<ShortcutSettings>,
}

impl SettingsUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_feature(mut self, category: FeatureCategory, enabled: bool) -> Self {
        let toggles = self.feature_toggles.unwrap_or_default();
        self.feature_toggles = Some(toggles.with(category, enabled));
        self
    }

    pub fn with_shortcut(mut self, id: ShortcutId, bindings: Vec<KeyBinding>) -> Self {
        self.shortcuts
            .get_or_insert_with(ShortcutSettings::new)
            .insert(id, bindings);
        self
    }

    /// Update that overwrites everything with `settings`.
    pub fn replace_all(settings: &ExtensionSettings) -> Self {
        Self {
            feature_toggles: Some(FeatureTogglesUpdate::from_toggles(&settings.feature_toggles)),
            shortcuts: Some(settings.shortcuts.clone()),
        }
    }
}

/// What could be salvaged from a stored record, before merging with defaults.
///
/// Keys this version does not know are carried in `unknown` so a save can
/// write them back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct StoredSettings {
    pub feature_toggles: FeatureTogglesUpdate,
    pub shortcuts: ShortcutSettings,
    pub unknown: UnknownKeys,
}

/// Stored keys outside the known record shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct UnknownKeys {
    pub record: Map<String, Value>,
    pub feature_toggles: Map<String, Value>,
    pub shortcuts: Map<String, Value>,
}

impl UnknownKeys {
    /// Write the carried keys into `value` wherever it has no entry of its own.
    pub fn restore_into(&self, value: &mut Value) {
        let Some(record) = value.as_object_mut() else {
            return;
        };
        fill_missing(record, &self.record);
        for (field, carried) in [
            ("featureToggles", &self.feature_toggles),
            ("shortcuts", &self.shortcuts),
        ] {
            if let Some(section) = record.get_mut(field).and_then(Value::as_object_mut) {
                fill_missing(section, carried);
            }
        }
    }
}

fn fill_missing(target: &mut Map<String, Value>, carried: &Map<String, Value>) {
    for (key, value) in carried {
        if !target.contains_key(key) {
            target.insert(key.clone(), value.clone());
        }
    }
}

impl StoredSettings {
    /// Decode a stored record without failing.
    ///
    /// Non-bool toggles, non-array binding lists and binding entries that do
    /// not decode are skipped. Shortcut ids must be the exact storage key.
    /// Unknown top-level keys, toggle keys and shortcut ids are kept aside
    /// untouched. A record that is not an object yields nothing.
    pub fn from_value(value: Option<&Value>) -> Self {
        let mut stored = Self::default();
        let Some(value) = value else {
            return stored;
        };
        let Some(record) = value.as_object() else {
            log::warn!("Ignoring stored settings: expected an object, found {value}");
            return stored;
        };

        for (key, value) in record {
            if key != "featureToggles" && key != "shortcuts" {
                stored.unknown.record.insert(key.clone(), value.clone());
            }
        }

        if let Some(toggles) = record.get("featureToggles").and_then(Value::as_object) {
            for (name, value) in toggles {
                let Some(category) = FeatureCategory::ALL
                    .into_iter()
                    .find(|category| category.as_str() == name)
                else {
                    log::debug!("Keeping unknown feature toggle '{name}' as stored");
                    stored.unknown.feature_toggles.insert(name.clone(), value.clone());
                    continue;
                };
                match value.as_bool() {
                    Some(enabled) => {
                        stored.feature_toggles = stored.feature_toggles.with(category, enabled);
                    }
                    None => log::warn!("Ignoring stored toggle '{name}': not a bool"),
                }
            }
        }

        if let Some(shortcuts) = record.get("shortcuts").and_then(Value::as_object) {
            for (name, bindings) in shortcuts {
                let Some(id) = ShortcutId::from_storage_key(name) else {
                    log::warn!("Keeping stored bindings for unknown shortcut '{name}' as stored");
                    stored.unknown.shortcuts.insert(name.clone(), bindings.clone());
                    continue;
                };
                let Some(entries) = bindings.as_array() else {
                    log::warn!("Ignoring stored bindings for '{name}': not a list");
                    continue;
                };
                let decoded = entries
                    .iter()
                    .filter_map(|entry| match serde_json::from_value(entry.clone()) {
                        Ok(binding) => Some(binding),
                        Err(e) => {
                            log::warn!("Skipping malformed binding for '{name}': {e}");
                            None
                        }
                    })
                    .collect();
                stored.shortcuts.insert(id, decoded);
            }
        }

        stored
    }
}
