//! Settings layer for ppx-shortcuts.
//!
//! This crate provides the shortcut catalogue, the settings record and its
//! persistence. It includes:
//!
//! - Key binding, feature toggle and platform types
//! - The static shortcut catalogue and default bindings
//! - Migration of legacy binding shapes
//! - Storage providers (in-memory and file-backed)
//! - The settings store (load / save / reset)

pub mod defaults;
pub mod error;
pub mod migration;
pub mod registry;
pub mod settings;
pub mod storage;
pub mod store;
mod types;

pub use error::StorageError;
pub use migration::{migrate_bindings, migrate_shortcut_settings, normalize_binding, same_combo};
pub use registry::{
    ShortcutDefinition, default_shortcuts, display_bindings, get_bindings, shortcut_definition,
    shortcut_definitions,
};
pub use settings::{ExtensionSettings, SettingsUpdate, ShortcutSettings};
pub use storage::{FileStorage, MemoryStorage, StorageProvider};
pub use store::{STORAGE_KEY, SettingsStore};
pub use types::{
    FeatureCategory, FeatureToggles, FeatureTogglesUpdate, KeyBinding, ModifierForm, Platform,
    ShortcutId,
};
