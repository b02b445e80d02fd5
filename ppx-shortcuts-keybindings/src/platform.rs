//! Platform-specific key handling.
//!
//! Contains:
//! - Primary/secondary modifier resolution (Cmd on macOS, Ctrl elsewhere)
//! - Modifier key names that never form a chord on their own
//! - Physical key code → key label recovery for Alt-remapped layouts
//! - Modifier labels used when rendering bindings

use crate::event::KeyInput;
use ppx_shortcuts_config::Platform;

/// Logical key values of bare modifier presses.
pub const MODIFIER_KEYS: [&str; 4] = ["Shift", "Control", "Alt", "Meta"];

/// Whether the event holds the platform's primary modifier.
#[inline]
pub fn primary_held(event: &KeyInput, platform: Platform) -> bool {
    platform.primary_held(event.meta, event.ctrl)
}

/// Whether the event holds the platform's secondary modifier.
#[inline]
pub fn secondary_held(event: &KeyInput, platform: Platform) -> bool {
    platform.secondary_held(event.meta, event.ctrl)
}

/// Whether `key` is a bare modifier key value.
pub fn is_modifier_key(key: &str) -> bool {
    MODIFIER_KEYS.contains(&key)
}

/// Recover the US-layout label of a letter or digit key code.
///
/// `"KeyK"` gives `"K"`, `"Digit7"` gives `"7"`; other codes give `None`.
/// With Alt held, some layouts report a different logical key (`"˚"` for
/// Alt+K on macOS), so the code is the better label.
pub fn physical_key_from_code(code: &str) -> Option<&str> {
    if code.len() == 4
        && let Some(letter) = code.strip_prefix("Key")
    {
        return Some(letter);
    }
    if code.len() == 6
        && let Some(digit) = code.strip_prefix("Digit")
    {
        return Some(digit);
    }
    None
}

pub fn meta_label(platform: Platform) -> &'static str {
    if platform.is_mac() { "⌘" } else { "Win" }
}

pub fn ctrl_label(platform: Platform) -> &'static str {
    if platform.is_mac() { "⌃" } else { "Ctrl" }
}

/// Label of the primary modifier.
pub fn mod_label(platform: Platform) -> &'static str {
    if platform.is_mac() {
        meta_label(platform)
    } else {
        ctrl_label(platform)
    }
}

pub fn alt_label(platform: Platform) -> &'static str {
    if platform.is_mac() { "⌥" } else { "Alt" }
}

pub fn shift_label(platform: Platform) -> &'static str {
    if platform.is_mac() { "⇧" } else { "Shift" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_physical_key_from_code() {
        assert_eq!(physical_key_from_code("KeyK"), Some("K"));
        assert_eq!(physical_key_from_code("Digit0"), Some("0"));
        assert_eq!(physical_key_from_code("Keyboard"), None);
        assert_eq!(physical_key_from_code("Space"), None);
        assert_eq!(physical_key_from_code("Digit10"), None);
    }

    #[test]
    fn test_primary_resolution() {
        let cmd = KeyInput::new("k", "KeyK").with_meta();
        let ctrl = KeyInput::new("k", "KeyK").with_ctrl();

        assert!(primary_held(&cmd, Platform::Mac));
        assert!(!primary_held(&ctrl, Platform::Mac));
        assert!(secondary_held(&ctrl, Platform::Mac));

        assert!(primary_held(&ctrl, Platform::Other));
        assert!(secondary_held(&cmd, Platform::Other));
    }

    #[test]
    fn test_labels() {
        assert_eq!(mod_label(Platform::Mac), "⌘");
        assert_eq!(mod_label(Platform::Other), "Ctrl");
        assert_eq!(shift_label(Platform::Other), "Shift");
        assert_eq!(alt_label(Platform::Mac), "⌥");
    }
}
