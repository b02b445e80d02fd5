//! Static shortcut catalogue.
//!
//! The catalogue is built once per platform and never mutated. Its order is
//! the order shortcuts are listed in and the order lookups try them in.

use crate::settings::{ExtensionSettings, ShortcutSettings};
use crate::types::{FeatureCategory, KeyBinding, Platform, ShortcutId};
use std::sync::LazyLock;

/// One entry of the shortcut catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutDefinition {
    pub id: ShortcutId,
    pub category: FeatureCategory,
    /// Message key used by localized front ends
    pub label_message_id: &'static str,
    /// English label
    pub label: &'static str,
    /// Never empty
    pub default_bindings: Vec<KeyBinding>,
}

static MAC_DEFINITIONS: LazyLock<Vec<ShortcutDefinition>> =
    LazyLock::new(|| build_definitions(Platform::Mac));
static OTHER_DEFINITIONS: LazyLock<Vec<ShortcutDefinition>> =
    LazyLock::new(|| build_definitions(Platform::Other));

fn build_definitions(platform: Platform) -> Vec<ShortcutDefinition> {
    ShortcutId::ALL
        .into_iter()
        .map(|id| {
            let (category, label_message_id, label) = describe(id);
            ShortcutDefinition {
                id,
                category,
                label_message_id,
                label,
                default_bindings: crate::defaults::shortcut_bindings(id, platform),
            }
        })
        .collect()
}

fn describe(id: ShortcutId) -> (FeatureCategory, &'static str, &'static str) {
    match id {
        ShortcutId::ScrollTop => (
            FeatureCategory::VimScroll,
            "shortcut_label_scroll_top",
            "Scroll to Top",
        ),
        ShortcutId::ScrollBottom => (
            FeatureCategory::VimScroll,
            "shortcut_label_scroll_bottom",
            "Scroll to Bottom",
        ),
        ShortcutId::ScrollUp => (
            FeatureCategory::VimScroll,
            "shortcut_label_scroll_up",
            "Scroll Up",
        ),
        ShortcutId::ScrollDown => (
            FeatureCategory::VimScroll,
            "shortcut_label_scroll_down",
            "Scroll Down",
        ),
        ShortcutId::ScrollHalfUp => (
            FeatureCategory::VimScroll,
            "shortcut_label_scroll_half_up",
            "Scroll Half Page Up",
        ),
        ShortcutId::ScrollHalfDown => (
            FeatureCategory::VimScroll,
            "shortcut_label_scroll_half_down",
            "Scroll Half Page Down",
        ),
        ShortcutId::ToggleFocus => (
            FeatureCategory::WideScreen,
            "shortcut_label_toggle_focus",
            "Toggle Focus",
        ),
        ShortcutId::OpenNewChat => (
            FeatureCategory::OtherShortcuts,
            "shortcut_label_open_new_chat",
            "Open New Chat",
        ),
        ShortcutId::ToggleTemporaryChat => (
            FeatureCategory::OtherShortcuts,
            "shortcut_label_toggle_temporary_chat",
            "Toggle Account / Incognito",
        ),
        ShortcutId::DeleteChat => (
            FeatureCategory::OtherShortcuts,
            "shortcut_label_delete_chat",
            "Delete Chat",
        ),
        ShortcutId::BookmarkChat => (
            FeatureCategory::OtherShortcuts,
            "shortcut_label_bookmark_chat",
            "Bookmark Chat",
        ),
        ShortcutId::AddPhotos => (
            FeatureCategory::OtherShortcuts,
            "shortcut_label_add_photos",
            "Add Photos & Files",
        ),
    }
}

/// The full catalogue for a platform, in display order.
pub fn shortcut_definitions(platform: Platform) -> &'static [ShortcutDefinition] {
    match platform {
        Platform::Mac => &MAC_DEFINITIONS,
        Platform::Other => &OTHER_DEFINITIONS,
    }
}

/// Catalogue entry for `id`.
pub fn shortcut_definition(id: ShortcutId, platform: Platform) -> &'static ShortcutDefinition {
    // Catalogue is indexed in `ShortcutId::ALL` order.
    &shortcut_definitions(platform)[id as usize]
}

/// Default bindings of every shortcut, keyed by id.
pub fn default_shortcuts(platform: Platform) -> ShortcutSettings {
    shortcut_definitions(platform)
        .iter()
        .map(|def| (def.id, def.default_bindings.clone()))
        .collect()
}

/// Effective bindings for `id`.
///
/// A stored override wins when it is non-empty; an empty list counts as unset.
pub fn get_bindings<'a>(
    id: ShortcutId,
    settings: &'a ExtensionSettings,
    platform: Platform,
) -> &'a [KeyBinding] {
    match settings.shortcuts.get(&id) {
        Some(bindings) if !bindings.is_empty() => bindings,
        _ => &shortcut_definition(id, platform).default_bindings,
    }
}

/// Bindings to show for `id`: nothing while its category is disabled.
pub fn display_bindings<'a>(
    id: ShortcutId,
    settings: &'a ExtensionSettings,
    platform: Platform,
) -> &'a [KeyBinding] {
    let category = shortcut_definition(id, platform).category;
    if !settings.feature_toggles.is_enabled(category) {
        return &[];
    }
    get_bindings(id, settings, platform)
}
