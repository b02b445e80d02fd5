//! Recording a new binding from a live key press.
//!
//! A press of a bare modifier produces nothing yet; the recorder waits for
//! a non-modifier key. Otherwise a binding is built from the event and
//! validated: some keys can never be shortcuts, and a few need a modifier.

use crate::display::format_binding;
use crate::event::KeyInput;
use crate::platform::{is_modifier_key, primary_held};
use ppx_shortcuts_config::{KeyBinding, ModifierForm, Platform};
use thiserror::Error;

/// Keys that need at least one modifier.
const SINGLE_KEY_REQUIRE_MOD: [&str; 4] = ["Escape", "Esc", "Backspace", "Delete"];
const SINGLE_CODE_REQUIRE_MOD: [&str; 3] = ["Escape", "Backspace", "Delete"];

/// Keys that can never trigger a shortcut: submit/focus keys, input-method
/// keys and lock keys (including the strings Japanese layouts report).
const FORBIDDEN_KEYS: [&str; 30] = [
    "Enter",
    "Return",
    "Tab",
    "Eisu",
    "Alphanumeric",
    "KanaMode",
    "Zenkaku",
    "Hankaku",
    "HankakuZenkaku",
    "Henkan",
    "Convert",
    "NonConvert",
    "Kana",
    "Kanji",
    "Katakana",
    "Hiragana",
    "Romaji",
    "Lang1",
    "Lang2",
    "Lang3",
    "Lang4",
    "Lang5",
    "CapsLock",
    "NumLock",
    "ScrollLock",
    "英数",
    "かな",
    "無変換",
    "変換",
    "半角/全角",
];

const FORBIDDEN_CODES: [&str; 15] = [
    "Enter",
    "NumpadEnter",
    "Tab",
    "Eisu",
    "NonConvert",
    "Convert",
    "KanaMode",
    "Lang1",
    "Lang2",
    "Lang3",
    "Lang4",
    "Lang5",
    "CapsLock",
    "NumLock",
    "ScrollLock",
];

/// Names of the Windows/Super key, compared case-insensitively.
const WINDOWS_KEY_NAMES: [&str; 7] = ["meta", "os", "win", "super", "hyper", "command", "windows"];
const WINDOWS_KEY_CODES: [&str; 6] = [
    "MetaLeft",
    "MetaRight",
    "OSLeft",
    "OSRight",
    "SuperLeft",
    "SuperRight",
];

/// Why a captured binding cannot be saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum BindingValidationError {
    /// The key or combination can never be a shortcut.
    #[error("key cannot be used as a shortcut")]
    ForbiddenKey,
    /// The key must be combined with a modifier.
    #[error("key must be combined with a modifier key")]
    ForbiddenSingle,
}

impl BindingValidationError {
    /// Stable tag, e.g. `"forbidden_key"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            BindingValidationError::ForbiddenKey => "forbidden_key",
            BindingValidationError::ForbiddenSingle => "forbidden_single",
        }
    }
}

/// A binding that was built from an event but failed validation.
///
/// The binding is only reachable through this error, so it cannot be
/// persisted by accident.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason} ({binding:?})")]
pub struct RejectedBinding {
    pub binding: KeyBinding,
    pub reason: BindingValidationError,
}

impl RejectedBinding {
    /// User-facing message naming the rejected combination.
    pub fn message(&self, platform: Platform) -> String {
        let shown = format_binding(&self.binding, platform);
        match self.reason {
            BindingValidationError::ForbiddenKey => {
                format!("\"{shown}\" cannot be used as a shortcut.")
            }
            BindingValidationError::ForbiddenSingle => {
                format!("\"{shown}\" must be combined with a modifier key.")
            }
        }
    }
}

/// Build a candidate binding from a key press.
///
/// Returns `Ok(None)` for a bare modifier press, `Ok(Some(binding))` for a
/// valid combination, and `Err` when validation rejects it.
pub fn binding_from_event(
    event: &KeyInput,
    platform: Platform,
) -> Result<Option<KeyBinding>, RejectedBinding> {
    if is_modifier_key(&event.key) {
        return Ok(None);
    }

    let key = if event.key == "Spacebar" {
        " ".to_string()
    } else {
        event.key.clone()
    };

    let modifier = if primary_held(event, platform) {
        ModifierForm::Mod
    } else {
        ModifierForm::Explicit {
            meta: event.meta,
            ctrl: event.ctrl,
        }
    };

    let binding = KeyBinding {
        key,
        code: (!event.code.is_empty()).then(|| event.code.clone()),
        modifier,
        shift: event.shift,
        alt: event.alt,
    };

    if is_forbidden(&binding, event.meta, platform) {
        log::debug!("Rejected forbidden key '{}' ({})", event.key, event.code);
        return Err(RejectedBinding {
            binding,
            reason: BindingValidationError::ForbiddenKey,
        });
    }

    if requires_modifier(&binding) {
        log::debug!("Rejected bare '{}': needs a modifier", event.key);
        return Err(RejectedBinding {
            binding,
            reason: BindingValidationError::ForbiddenSingle,
        });
    }

    Ok(Some(binding))
}

fn is_forbidden(binding: &KeyBinding, meta_pressed: bool, platform: Platform) -> bool {
    let key_match = FORBIDDEN_KEYS.contains(&binding.key.as_str());
    let code_match = binding
        .code
        .as_deref()
        .is_some_and(|code| FORBIDDEN_CODES.contains(&code));
    key_match || code_match || uses_windows_key(binding, meta_pressed, platform)
}

/// Outside macOS the Windows/Super key belongs to the OS.
fn uses_windows_key(binding: &KeyBinding, meta_pressed: bool, platform: Platform) -> bool {
    if platform.is_mac() {
        return false;
    }
    let key = binding.key.to_lowercase();
    let key_match = WINDOWS_KEY_NAMES.contains(&key.as_str());
    let code_match = binding
        .code
        .as_deref()
        .is_some_and(|code| WINDOWS_KEY_CODES.contains(&code));
    key_match || code_match || meta_pressed
}

fn requires_modifier(binding: &KeyBinding) -> bool {
    if binding.has_modifier() {
        return false;
    }
    let key_match = SINGLE_KEY_REQUIRE_MOD.contains(&binding.key.as_str());
    let code_match = binding
        .code
        .as_deref()
        .is_some_and(|code| SINGLE_CODE_REQUIRE_MOD.contains(&code));
    key_match || code_match
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_modifier_waits() {
        for key in ["Shift", "Control", "Alt", "Meta"] {
            let event = KeyInput::new(key, format!("{key}Left")).with_shift();
            assert_eq!(binding_from_event(&event, Platform::Mac), Ok(None));
            assert_eq!(binding_from_event(&event, Platform::Other), Ok(None));
        }
    }

    #[test]
    fn test_primary_modifier_records_mod_form() {
        let event = KeyInput::new("k", "KeyK").with_meta();
        let binding = binding_from_event(&event, Platform::Mac).unwrap().unwrap();
        assert_eq!(binding, KeyBinding::new("k").with_code("KeyK").with_mod());

        let event = KeyInput::new("k", "KeyK").with_ctrl().with_shift();
        let binding = binding_from_event(&event, Platform::Other).unwrap().unwrap();
        assert_eq!(
            binding,
            KeyBinding::new("k").with_code("KeyK").with_mod().with_shift()
        );
    }

    #[test]
    fn test_ctrl_on_mac_records_explicit() {
        let event = KeyInput::new("k", "KeyK").with_ctrl();
        let binding = binding_from_event(&event, Platform::Mac).unwrap().unwrap();
        assert_eq!(binding.modifier, ModifierForm::Explicit { meta: false, ctrl: true });
    }

    #[test]
    fn test_spacebar_normalized() {
        let event = KeyInput::new("Spacebar", "Space").with_shift();
        let binding = binding_from_event(&event, Platform::Other).unwrap().unwrap();
        assert_eq!(binding.key, " ");
    }

    #[test]
    fn test_empty_code_recorded_as_none() {
        let event = KeyInput::new("k", "").with_alt();
        let binding = binding_from_event(&event, Platform::Other).unwrap().unwrap();
        assert_eq!(binding.code, None);
    }

    #[test]
    fn test_tab_always_forbidden() {
        for event in [
            KeyInput::new("Tab", "Tab"),
            KeyInput::new("Tab", "Tab").with_ctrl(),
            KeyInput::new("Tab", "Tab").with_meta().with_shift(),
        ] {
            for platform in [Platform::Mac, Platform::Other] {
                let err = binding_from_event(&event, platform).unwrap_err();
                assert_eq!(err.reason, BindingValidationError::ForbiddenKey);
            }
        }
    }

    #[test]
    fn test_forbidden_code_with_other_key_value() {
        let event = KeyInput::new("Process", "Lang1").with_ctrl();
        let err = binding_from_event(&event, Platform::Other).unwrap_err();
        assert_eq!(err.reason, BindingValidationError::ForbiddenKey);
    }

    #[test]
    fn test_meta_forbidden_outside_mac() {
        let event = KeyInput::new("k", "KeyK").with_meta();
        let err = binding_from_event(&event, Platform::Other).unwrap_err();
        assert_eq!(err.reason, BindingValidationError::ForbiddenKey);

        let event = KeyInput::new("OS", "OSLeft");
        assert!(binding_from_event(&event, Platform::Other).is_err());
        assert!(binding_from_event(&event, Platform::Mac).is_ok());
    }

    #[test]
    fn test_single_keys_need_modifier() {
        let backspace = KeyInput::new("Backspace", "Backspace");
        let err = binding_from_event(&backspace, Platform::Mac).unwrap_err();
        assert_eq!(err.reason, BindingValidationError::ForbiddenSingle);
        assert_eq!(err.reason.as_str(), "forbidden_single");

        let escape = KeyInput::new("Escape", "Escape");
        assert!(binding_from_event(&escape, Platform::Other).is_err());

        // Any modifier lifts the restriction
        let shift_delete = KeyInput::new("Delete", "Delete").with_shift();
        assert!(binding_from_event(&shift_delete, Platform::Other).unwrap().is_some());
    }

    #[test]
    fn test_rejection_message() {
        let err = binding_from_event(&KeyInput::new("Backspace", "Backspace"), Platform::Mac)
            .unwrap_err();
        assert_eq!(
            err.message(Platform::Mac),
            "\"⌫\" must be combined with a modifier key."
        );

        let err = binding_from_event(&KeyInput::new("Enter", "Enter").with_ctrl(), Platform::Other)
            .unwrap_err();
        assert_eq!(
            err.message(Platform::Other),
            "\"Ctrl + Enter\" cannot be used as a shortcut."
        );
    }
}
