//! Key presses handled outside the shortcut catalogue.
//!
//! - Safe send: Mod+Enter sends, a bare Enter inserts a newline.
//! - The page's own Mod+K / Mod+J / Mod+; shortcuts are swallowed.
//! - Mod+/ toggles the page's shortcut dialog.
//!
//! These only classify; dispatching the resulting action is the host's job,
//! including checking that the chat input has focus.

use crate::event::KeyInput;
use crate::platform::{primary_held, secondary_held};
use ppx_shortcuts_config::{FeatureCategory, FeatureToggles, Platform};

/// What safe-send does with an Enter press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SafeSendAction {
    /// Submit the message.
    Send,
    /// Insert a line break instead of submitting.
    Newline,
}

/// Classify an Enter press under safe-send.
///
/// `None` when the feature is off, the key is not Enter, or the modifier
/// combination should pass through untouched.
pub fn safe_send_action(
    event: &KeyInput,
    platform: Platform,
    toggles: &FeatureToggles,
) -> Option<SafeSendAction> {
    if !toggles.is_enabled(FeatureCategory::SafeSend) || event.key != "Enter" {
        return None;
    }
    if primary_held(event, platform) {
        return Some(SafeSendAction::Send);
    }
    if !event.has_any_modifier() {
        return Some(SafeSendAction::Newline);
    }
    None
}

/// Whether the event is one of the page's built-in Mod shortcuts that would
/// otherwise steal focus (new thread, incognito, focus ask).
pub fn blocks_native_shortcut(event: &KeyInput, platform: Platform) -> bool {
    if !primary_held(event, platform) || event.alt || event.shift {
        return false;
    }
    if secondary_held(event, platform) {
        return false;
    }

    let key = event.key.to_lowercase();
    let code = event.code.as_str();
    let new_thread = key == "k" || code == "KeyK";
    let toggle_incognito = key == ";" || code == "Semicolon";
    let focus_ask = key == "j" || code == "KeyJ";
    new_thread || toggle_incognito || focus_ask
}

/// Whether the event opens or closes the page's shortcut dialog (Mod+/).
pub fn is_shortcut_dialog_toggle(event: &KeyInput, platform: Platform) -> bool {
    primary_held(event, platform) && event.key == "/"
}
