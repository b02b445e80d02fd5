//! Integration tests for ppx-shortcuts-keybindings.
//!
//! These tests exercise the full chord → key press → registry → lookup
//! pipeline, and the record → validate → conflict → save path a settings
//! editor walks through, against an in-memory settings store.

use ppx_shortcuts_config::{
    ExtensionSettings, FeatureCategory, KeyBinding, MemoryStorage, Platform, STORAGE_KEY,
    SettingsStore, SettingsUpdate, ShortcutId,
};
use ppx_shortcuts_keybindings::{
    BindingValidationError, KeyInput, SafeSendAction, ShortcutRegistry, binding_from_event,
    blocks_native_shortcut, find_conflicting_shortcut, format_binding, matches, parse_chord,
};
use serde_json::json;

fn press(chord: &str, platform: Platform) -> KeyInput {
    parse_chord(chord).unwrap().to_key_input(platform)
}

// ---------------------------------------------------------------------------
// Chord → lookup
// ---------------------------------------------------------------------------

#[test]
fn default_chords_resolve_on_both_platforms() {
    let cases = [
        ("Mod+K", ShortcutId::ScrollTop),
        ("Mod+J", ShortcutId::ScrollBottom),
        ("K", ShortcutId::ScrollUp),
        ("J", ShortcutId::ScrollDown),
        ("Shift+K", ShortcutId::ScrollHalfUp),
        ("Shift+J", ShortcutId::ScrollHalfDown),
        ("Shift+Space", ShortcutId::ToggleFocus),
        ("Mod+Shift+O", ShortcutId::OpenNewChat),
        ("Mod+I", ShortcutId::ToggleTemporaryChat),
        ("Mod+Shift+P", ShortcutId::BookmarkChat),
        ("Mod+U", ShortcutId::AddPhotos),
    ];

    for platform in [Platform::Mac, Platform::Other] {
        let registry =
            ShortcutRegistry::from_settings(&ExtensionSettings::defaults(platform), platform);
        for (chord, expected) in cases {
            assert_eq!(
                registry.lookup(&press(chord, platform)),
                Some(expected),
                "{chord} on {platform}"
            );
        }
    }
}

#[test]
fn delete_chat_follows_platform_delete_key() {
    let mac = ShortcutRegistry::from_settings(
        &ExtensionSettings::defaults(Platform::Mac),
        Platform::Mac,
    );
    let other = ShortcutRegistry::from_settings(
        &ExtensionSettings::defaults(Platform::Other),
        Platform::Other,
    );

    assert_eq!(
        mac.lookup(&press("Mod+Shift+Backspace", Platform::Mac)),
        Some(ShortcutId::DeleteChat)
    );
    assert_eq!(mac.lookup(&press("Mod+Shift+Delete", Platform::Mac)), None);
    assert_eq!(
        other.lookup(&press("Mod+Shift+Delete", Platform::Other)),
        Some(ShortcutId::DeleteChat)
    );
}

#[test]
fn secondary_modifier_blocks_mod_bindings() {
    let registry = ShortcutRegistry::from_settings(
        &ExtensionSettings::defaults(Platform::Mac),
        Platform::Mac,
    );
    assert_eq!(registry.lookup(&press("Cmd+Ctrl+K", Platform::Mac)), None);
    // Ctrl alone is not the primary modifier on macOS
    assert_eq!(registry.lookup(&press("Ctrl+K", Platform::Mac)), None);
}

#[test]
fn physical_code_matches_remapped_key() {
    let mut settings = ExtensionSettings::defaults(Platform::Mac);
    settings.shortcuts.insert(
        ShortcutId::BookmarkChat,
        vec![KeyBinding::new("b").with_code("KeyB").with_alt()],
    );
    let registry = ShortcutRegistry::from_settings(&settings, Platform::Mac);

    // Option+B types "∫" on a US Mac layout
    let event = KeyInput::new("∫", "KeyB").with_alt();
    assert_eq!(registry.lookup(&event), Some(ShortcutId::BookmarkChat));
}

// ---------------------------------------------------------------------------
// Intercepts
// ---------------------------------------------------------------------------

#[test]
fn safe_send_and_native_blocks() {
    let registry = ShortcutRegistry::from_settings(
        &ExtensionSettings::defaults(Platform::Other),
        Platform::Other,
    );

    assert_eq!(
        registry.safe_send_action(&press("Mod+Enter", Platform::Other)),
        Some(SafeSendAction::Send)
    );
    assert_eq!(
        registry.safe_send_action(&press("Enter", Platform::Other)),
        Some(SafeSendAction::Newline)
    );
    assert!(blocks_native_shortcut(&press("Mod+;", Platform::Other), Platform::Other));
    assert!(!blocks_native_shortcut(&press("Mod+Shift+K", Platform::Other), Platform::Other));
}

// ---------------------------------------------------------------------------
// Record → validate → conflict
// ---------------------------------------------------------------------------

#[test]
fn recorded_binding_matches_its_own_press() {
    for platform in [Platform::Mac, Platform::Other] {
        for chord in ["Mod+Shift+O", "Alt+[KeyK]", "Shift+Space", "Mod+Shift+Delete", "Mod+/"] {
            let event = press(chord, platform);
            let binding = binding_from_event(&event, platform).unwrap().unwrap();
            assert!(matches(&binding, &event, platform), "{chord} on {platform}");
        }
    }
}

#[test]
fn recording_rejects_unusable_keys() {
    let tab = binding_from_event(&press("Mod+Tab", Platform::Mac), Platform::Mac).unwrap_err();
    assert_eq!(tab.reason, BindingValidationError::ForbiddenKey);

    let esc = binding_from_event(&press("Esc", Platform::Other), Platform::Other).unwrap_err();
    assert_eq!(esc.reason, BindingValidationError::ForbiddenSingle);

    let win = binding_from_event(&press("Win+K", Platform::Other), Platform::Other).unwrap_err();
    assert_eq!(win.reason, BindingValidationError::ForbiddenKey);
}

#[test]
fn recorded_default_chord_conflicts_with_owner() {
    let settings = ExtensionSettings::defaults(Platform::Mac);
    let binding = binding_from_event(&press("Shift+Space", Platform::Mac), Platform::Mac)
        .unwrap()
        .unwrap();

    let owner =
        find_conflicting_shortcut(&binding, ShortcutId::AddPhotos, &settings, Platform::Mac)
            .unwrap();
    assert_eq!(owner.id, ShortcutId::ToggleFocus);
    assert_eq!(format_binding(&binding, Platform::Mac), "⇧ Space");

    let mut disabled = settings.clone();
    disabled.feature_toggles.set(FeatureCategory::WideScreen, false);
    assert!(
        find_conflicting_shortcut(&binding, ShortcutId::AddPhotos, &disabled, Platform::Mac)
            .is_none()
    );
}

// ---------------------------------------------------------------------------
// Store round trip
// ---------------------------------------------------------------------------

#[tokio::test]
async fn saved_binding_drives_lookup_after_reload() {
    let storage = MemoryStorage::new();
    let store = SettingsStore::with_platform(storage.clone(), Platform::Other);

    let binding = binding_from_event(&press("Ctrl+Alt+N", Platform::Other), Platform::Other)
        .unwrap()
        .unwrap();
    store
        .save(SettingsUpdate::new().with_shortcut(ShortcutId::OpenNewChat, vec![binding]))
        .await
        .unwrap();

    let settings = store.load().await.unwrap();
    let registry = ShortcutRegistry::from_settings(&settings, Platform::Other);
    assert_eq!(
        registry.lookup(&press("Ctrl+Alt+N", Platform::Other)),
        Some(ShortcutId::OpenNewChat)
    );
    assert_eq!(registry.lookup(&press("Ctrl+Shift+O", Platform::Other)), None);
}

#[tokio::test]
async fn legacy_meta_binding_migrates_and_matches() {
    // An old record with an explicit Cmd binding and a duplicate mod-form one
    let storage = MemoryStorage::with_value(
        STORAGE_KEY,
        json!({
            "shortcuts": {
                "addPhotos": [
                    { "key": "u", "code": "KeyU", "meta": true },
                    { "key": "U", "code": "KeyU", "mod": true }
                ]
            }
        }),
    );
    let store = SettingsStore::with_platform(storage, Platform::Mac);

    let settings = store.load().await.unwrap();
    assert_eq!(
        settings.shortcuts[&ShortcutId::AddPhotos],
        vec![KeyBinding::new("u").with_code("KeyU").with_mod()]
    );

    let registry = ShortcutRegistry::from_settings(&settings, Platform::Mac);
    assert_eq!(
        registry.lookup(&press("Cmd+U", Platform::Mac)),
        Some(ShortcutId::AddPhotos)
    );
}
