//! Shortcut handling for ppx-shortcuts.
//!
//! This crate turns key presses into shortcut ids using the bindings held in
//! [`ExtensionSettings`], and covers the editing side as well: recording a
//! binding from a key press, rejecting unusable keys, spotting conflicts and
//! rendering bindings for display.
//!
//! Features:
//! - Mod-form bindings (Cmd on macOS, Ctrl elsewhere)
//! - Physical key code fallback for Alt-remapped and non-US layouts
//! - Chord strings ("Mod+Shift+O", "Ctrl+[KeyK]") for scripting and tests

pub mod capture;
pub mod conflict;
pub mod display;
mod event;
pub mod intercept;
mod matcher;
pub mod parser;
pub mod platform;

pub use capture::{BindingValidationError, RejectedBinding, binding_from_event};
pub use conflict::{bindings_collide, conflict_message, find_conflicting_shortcut};
pub use display::{format_binding, format_bindings};
pub use event::KeyInput;
pub use intercept::{SafeSendAction, blocks_native_shortcut, is_shortcut_dialog_toggle};
pub use matcher::{KeybindingMatcher, matches};
pub use parser::{Chord, ParseError, parse_chord};

use ppx_shortcuts_config::{
    ExtensionSettings, FeatureToggles, KeyBinding, Platform, ShortcutId, get_bindings,
    shortcut_definition,
};

/// Order in which a key press is tried against the shortcuts.
///
/// Half-page scrolls come before single-step scrolls, so a chord bound to
/// both triggers the half-page one.
pub const LOOKUP_ORDER: [ShortcutId; 12] = [
    ShortcutId::ScrollTop,
    ShortcutId::ScrollBottom,
    ShortcutId::ScrollHalfUp,
    ShortcutId::ScrollHalfDown,
    ShortcutId::ScrollUp,
    ShortcutId::ScrollDown,
    ShortcutId::ToggleFocus,
    ShortcutId::OpenNewChat,
    ShortcutId::ToggleTemporaryChat,
    ShortcutId::DeleteChat,
    ShortcutId::BookmarkChat,
    ShortcutId::AddPhotos,
];

/// Effective bindings of every shortcut, ready for key lookup.
///
/// Entries are kept in [`LOOKUP_ORDER`]; when two shortcuts share a chord
/// the earlier one wins.
#[derive(Debug, Clone)]
pub struct ShortcutRegistry {
    platform: Platform,
    toggles: FeatureToggles,
    entries: Vec<RegistryEntry>,
}

#[derive(Debug, Clone)]
struct RegistryEntry {
    id: ShortcutId,
    enabled: bool,
    bindings: Vec<KeyBinding>,
}

impl ShortcutRegistry {
    /// Build a registry from loaded settings.
    pub fn from_settings(settings: &ExtensionSettings, platform: Platform) -> Self {
        let entries: Vec<RegistryEntry> = LOOKUP_ORDER
            .iter()
            .map(|&id| RegistryEntry {
                id,
                enabled: settings
                    .feature_toggles
                    .is_enabled(shortcut_definition(id, platform).category),
                bindings: get_bindings(id, settings, platform).to_vec(),
            })
            .collect();

        for entry in &entries {
            log::debug!(
                "Registered shortcut {} -> {} (enabled: {})",
                entry.id,
                format_bindings(&entry.bindings, platform),
                entry.enabled
            );
        }
        log::info!(
            "Shortcut registry initialized with {} shortcuts ({} enabled) for {}",
            entries.len(),
            entries.iter().filter(|e| e.enabled).count(),
            platform
        );

        Self {
            platform,
            toggles: settings.feature_toggles,
            entries,
        }
    }

    /// Look up the shortcut a key event triggers.
    ///
    /// Shortcuts in disabled categories never match. Auto-repeat presses
    /// match like any other; held scroll keys rely on them, and callers read
    /// `event.repeat` to tell them apart.
    pub fn lookup(&self, event: &KeyInput) -> Option<ShortcutId> {
        let matcher = KeybindingMatcher::new(event, self.platform);
        let id = self
            .entries
            .iter()
            .find(|entry| entry.enabled && matcher.matches_any(&entry.bindings))
            .map(|entry| entry.id)?;
        log::debug!("Key '{}' ({}) matched {}", event.key, event.code, id);
        Some(id)
    }

    /// Effective bindings of a shortcut.
    pub fn bindings(&self, id: ShortcutId) -> &[KeyBinding] {
        self.entry(id)
            .map(|entry| entry.bindings.as_slice())
            .unwrap_or_default()
    }

    /// Whether the shortcut's category is enabled.
    pub fn is_enabled(&self, id: ShortcutId) -> bool {
        self.entry(id).is_some_and(|entry| entry.enabled)
    }

    /// Classify an Enter press under the safe-send toggle.
    pub fn safe_send_action(&self, event: &KeyInput) -> Option<SafeSendAction> {
        intercept::safe_send_action(event, self.platform, &self.toggles)
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Get the number of registered shortcuts.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry has any shortcuts.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, id: ShortcutId) -> Option<&RegistryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }
}
