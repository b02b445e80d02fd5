//! Key binding value types.

use serde::{Deserialize, Serialize};

// ============================================================================
// Keybinding Types
// ============================================================================

/// How a binding expresses its Meta/Ctrl requirement.
///
/// `Mod` is the portable form: it resolves to Cmd on macOS and Ctrl
/// elsewhere. `Explicit` pins the exact Meta and Ctrl state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierForm {
    /// Platform primary modifier (Cmd on macOS, Ctrl elsewhere)
    Mod,
    /// Exact Meta/Ctrl state
    Explicit { meta: bool, ctrl: bool },
}

impl ModifierForm {
    pub const NONE: ModifierForm = ModifierForm::Explicit {
        meta: false,
        ctrl: false,
    };

    pub const fn is_mod(self) -> bool {
        matches!(self, ModifierForm::Mod)
    }
}

impl Default for ModifierForm {
    fn default() -> Self {
        Self::NONE
    }
}

/// One key combination that can trigger a shortcut.
///
/// Persisted as `{ key, code?, mod?, meta?, ctrl?, shift?, alt? }`, where
/// absent flags read as `false`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawKeyBinding", into = "RawKeyBinding")]
pub struct KeyBinding {
    /// Logical key label, e.g. `"k"`, `"K"`, `" "`, `"Enter"`
    pub key: String,
    /// Physical key code, e.g. `"KeyK"`
    pub code: Option<String>,
    pub modifier: ModifierForm,
    pub shift: bool,
    pub alt: bool,
}

impl KeyBinding {
    /// A bare key with no modifiers.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            code: None,
            modifier: ModifierForm::NONE,
            shift: false,
            alt: false,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Require the platform primary modifier.
    pub fn with_mod(mut self) -> Self {
        self.modifier = ModifierForm::Mod;
        self
    }

    /// Require an exact Meta/Ctrl state.
    pub fn with_explicit(mut self, meta: bool, ctrl: bool) -> Self {
        self.modifier = ModifierForm::Explicit { meta, ctrl };
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    pub fn is_mod(&self) -> bool {
        self.modifier.is_mod()
    }

    /// Explicit Meta flag (false for mod-form bindings).
    pub fn meta(&self) -> bool {
        matches!(self.modifier, ModifierForm::Explicit { meta: true, .. })
    }

    /// Explicit Ctrl flag (false for mod-form bindings).
    pub fn ctrl(&self) -> bool {
        matches!(self.modifier, ModifierForm::Explicit { ctrl: true, .. })
    }

    /// True when any modifier (mod, meta, ctrl, shift, alt) is required.
    pub fn has_modifier(&self) -> bool {
        self.modifier != ModifierForm::NONE || self.shift || self.alt
    }
}

/// Wire shape of a binding as stored by the extension.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawKeyBinding {
    key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    #[serde(default, rename = "mod", skip_serializing_if = "is_false")]
    mod_key: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    meta: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    ctrl: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    shift: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    alt: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl From<RawKeyBinding> for KeyBinding {
    fn from(raw: RawKeyBinding) -> Self {
        // `mod` wins over any stray meta/ctrl flags stored next to it
        let modifier = if raw.mod_key {
            ModifierForm::Mod
        } else {
            ModifierForm::Explicit {
                meta: raw.meta,
                ctrl: raw.ctrl,
            }
        };
        Self {
            key: raw.key,
            // An empty code is the same as none
            code: raw.code.filter(|code| !code.is_empty()),
            modifier,
            shift: raw.shift,
            alt: raw.alt,
        }
    }
}

impl From<KeyBinding> for RawKeyBinding {
    fn from(binding: KeyBinding) -> Self {
        let (mod_key, meta, ctrl) = match binding.modifier {
            ModifierForm::Mod => (true, false, false),
            ModifierForm::Explicit { meta, ctrl } => (false, meta, ctrl),
        };
        Self {
            key: binding.key,
            code: binding.code,
            mod_key,
            meta,
            ctrl,
            shift: binding.shift,
            alt: binding.alt,
        }
    }
}
