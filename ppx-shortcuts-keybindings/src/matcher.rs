//! Key event matching.
//!
//! Matches `KeyInput` events against stored `KeyBinding`s. The non-modifier
//! key matches by logical key (case-insensitive) or, when the binding has
//! one, by physical key code.

use crate::event::KeyInput;
use crate::platform::{primary_held, secondary_held};
use ppx_shortcuts_config::{KeyBinding, ModifierForm, Platform};

/// Matcher for comparing one key event against bindings.
#[derive(Debug, Clone, Copy)]
pub struct KeybindingMatcher<'a> {
    event: &'a KeyInput,
    platform: Platform,
}

impl<'a> KeybindingMatcher<'a> {
    pub fn new(event: &'a KeyInput, platform: Platform) -> Self {
        Self { event, platform }
    }

    /// Check if this event matches the given binding.
    pub fn matches(&self, binding: &KeyBinding) -> bool {
        self.modifiers_match(binding) && self.key_matches(binding)
    }

    /// Check if this event matches any of the given bindings.
    pub fn matches_any(&self, bindings: &[KeyBinding]) -> bool {
        bindings.iter().any(|binding| self.matches(binding))
    }

    /// Check modifiers, resolving mod-form against the platform.
    ///
    /// Mod-form requires the primary modifier and forbids the secondary one,
    /// so `Mod+K` and `Ctrl+Meta+K` stay distinct. Explicit form compares
    /// Meta and Ctrl exactly. Shift and Alt always compare exactly.
    fn modifiers_match(&self, binding: &KeyBinding) -> bool {
        let event = self.event;
        let primary_ok = match binding.modifier {
            ModifierForm::Mod => {
                primary_held(event, self.platform) && !secondary_held(event, self.platform)
            }
            ModifierForm::Explicit { meta, ctrl } => event.meta == meta && event.ctrl == ctrl,
        };

        primary_ok && event.shift == binding.shift && event.alt == binding.alt
    }

    /// Logical key OR physical code; either is enough.
    fn key_matches(&self, binding: &KeyBinding) -> bool {
        let event = self.event;
        let key_match =
            event.key == binding.key || event.key.to_lowercase() == binding.key.to_lowercase();
        let code_match = binding
            .code
            .as_deref()
            .is_some_and(|code| event.code == code);
        key_match || code_match
    }
}

/// Whether `event` triggers `binding` on `platform`.
pub fn matches(binding: &KeyBinding, event: &KeyInput, platform: Platform) -> bool {
    KeybindingMatcher::new(event, platform).matches(binding)
}
