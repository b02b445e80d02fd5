//! Default values for settings.

use crate::types::{FeatureToggles, KeyBinding, Platform, ShortcutId};

/// Every feature starts enabled.
pub fn feature_toggles() -> FeatureToggles {
    FeatureToggles {
        vim_scroll: true,
        wide_screen: true,
        safe_send: true,
        other_shortcuts: true,
    }
}

/// Default chords for a shortcut.
///
/// Every shortcut has at least one default. `deleteChat` follows the
/// platform's "delete" key: Backspace on macOS keyboards, Delete elsewhere.
pub fn shortcut_bindings(id: ShortcutId, platform: Platform) -> Vec<KeyBinding> {
    match id {
        ShortcutId::ScrollTop => vec![KeyBinding::new("k").with_code("KeyK").with_mod()],
        ShortcutId::ScrollBottom => vec![KeyBinding::new("j").with_code("KeyJ").with_mod()],
        ShortcutId::ScrollUp => vec![KeyBinding::new("k").with_code("KeyK")],
        ShortcutId::ScrollDown => vec![KeyBinding::new("j").with_code("KeyJ")],
        ShortcutId::ScrollHalfUp => vec![KeyBinding::new("K").with_code("KeyK").with_shift()],
        ShortcutId::ScrollHalfDown => vec![KeyBinding::new("J").with_code("KeyJ").with_shift()],
        ShortcutId::ToggleFocus => vec![KeyBinding::new(" ").with_code("Space").with_shift()],
        ShortcutId::OpenNewChat => vec![
            KeyBinding::new("O")
                .with_code("KeyO")
                .with_mod()
                .with_shift(),
        ],
        ShortcutId::ToggleTemporaryChat => {
            vec![KeyBinding::new("i").with_code("KeyI").with_mod()]
        }
        ShortcutId::DeleteChat => {
            let key = if platform.is_mac() {
                "Backspace"
            } else {
                "Delete"
            };
            vec![KeyBinding::new(key).with_code(key).with_mod().with_shift()]
        }
        ShortcutId::BookmarkChat => vec![
            KeyBinding::new("P")
                .with_code("KeyP")
                .with_mod()
                .with_shift(),
        ],
        ShortcutId::AddPhotos => vec![KeyBinding::new("u").with_code("KeyU").with_mod()],
    }
}
