//! Key event input.
//!
//! `KeyInput` carries the fields of a DOM `KeyboardEvent` that shortcut
//! handling reads: W3C `key` and `code` values plus modifier state. Events
//! from other sources (winit, parsed chord strings) are converted into it.

/// One key press as seen by the matcher.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyInput {
    /// Logical key value, e.g. `"k"`, `"K"`, `" "`, `"Enter"`, `"Shift"`
    pub key: String,
    /// Physical key code, e.g. `"KeyK"`; empty when unknown
    pub code: String,
    pub meta: bool,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    /// Auto-repeat of a held key
    pub repeat: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            code: code.into(),
            ..Self::default()
        }
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
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

    pub fn with_repeat(mut self) -> Self {
        self.repeat = true;
        self
    }

    pub fn has_any_modifier(&self) -> bool {
        self.meta || self.ctrl || self.shift || self.alt
    }
}

#[cfg(feature = "winit")]
mod winit_input {
    use super::KeyInput;
    use winit::event::{KeyEvent, Modifiers};
    use winit::keyboard::{Key, KeyCode, ModifiersState, NamedKey, PhysicalKey};

    impl KeyInput {
        /// Convert a winit key event and the current modifier state.
        pub fn from_winit(event: &KeyEvent, modifiers: &Modifiers) -> Self {
            Self::from_winit_parts(
                &event.logical_key,
                event.physical_key,
                modifiers.state(),
                event.repeat,
            )
        }

        /// Convert the pieces of a winit key event.
        ///
        /// Named keys and key codes map to their W3C names. winit's `Super`
        /// is reported as `Meta`, matching what browsers send.
        pub fn from_winit_parts(
            logical_key: &Key,
            physical_key: PhysicalKey,
            state: ModifiersState,
            repeat: bool,
        ) -> Self {
            Self {
                key: key_value(logical_key),
                code: code_value(physical_key),
                meta: state.super_key(),
                ctrl: state.control_key(),
                shift: state.shift_key(),
                alt: state.alt_key(),
                repeat,
            }
        }
    }

    fn key_value(key: &Key) -> String {
        match key {
            Key::Character(text) => text.to_string(),
            Key::Named(NamedKey::Space) => " ".to_string(),
            Key::Named(NamedKey::Super) => "Meta".to_string(),
            Key::Named(named) => format!("{named:?}"),
            Key::Dead(_) => "Dead".to_string(),
            Key::Unidentified(_) => "Unidentified".to_string(),
        }
    }

    fn code_value(physical_key: PhysicalKey) -> String {
        match physical_key {
            PhysicalKey::Code(KeyCode::SuperLeft) => "MetaLeft".to_string(),
            PhysicalKey::Code(KeyCode::SuperRight) => "MetaRight".to_string(),
            PhysicalKey::Code(code) => format!("{code:?}"),
            PhysicalKey::Unidentified(_) => String::new(),
        }
    }

}
