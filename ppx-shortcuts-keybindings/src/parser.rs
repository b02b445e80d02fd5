//! Chord string parser.
//!
//! Parses human-readable chords like "Mod+Shift+O" into [`Chord`]s, which
//! turn into the [`KeyInput`] a real key press would produce. Physical key
//! codes use brackets: "Ctrl+[KeyK]".

use crate::event::KeyInput;
use ppx_shortcuts_config::Platform;
use std::fmt;
use thiserror::Error;

/// Error type for chord parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ParseError(String);

/// Modifiers named in a chord.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ChordModifiers {
    /// `Mod`: Cmd on macOS, Ctrl elsewhere
    pub primary: bool,
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
    pub shift: bool,
}

/// The non-modifier part of a chord.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParsedKey {
    /// A single character, e.g. 'k', '7', '/'
    Character(char),
    /// A named key with its W3C key and code values
    Named {
        key: &'static str,
        code: &'static str,
    },
    /// A physical key code, e.g. "KeyK"
    Physical(String),
}

/// A parsed chord (modifiers + key).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chord {
    pub modifiers: ChordModifiers,
    pub key: ParsedKey,
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        if self.modifiers.primary {
            parts.push("Mod".to_string());
        }
        if self.modifiers.ctrl {
            parts.push("Ctrl".to_string());
        }
        if self.modifiers.meta {
            parts.push("Meta".to_string());
        }
        if self.modifiers.alt {
            parts.push("Alt".to_string());
        }
        if self.modifiers.shift {
            parts.push("Shift".to_string());
        }

        match &self.key {
            ParsedKey::Character(c) => parts.push(c.to_uppercase().to_string()),
            ParsedKey::Named { key, .. } if *key == " " => parts.push("Space".to_string()),
            ParsedKey::Named { key, .. } => parts.push((*key).to_string()),
            ParsedKey::Physical(code) => parts.push(format!("[{code}]")),
        }

        write!(f, "{}", parts.join("+"))
    }
}

impl Chord {
    /// The key press this chord stands for on `platform`.
    ///
    /// Letters come out lowercase, or uppercase with Shift held, as a
    /// browser reports them.
    pub fn to_key_input(&self, platform: Platform) -> KeyInput {
        let m = self.modifiers;
        let (key, code) = match &self.key {
            ParsedKey::Character(c) => (character_key(*c, m.shift), character_code(*c)),
            ParsedKey::Named { key, code } => ((*key).to_string(), (*code).to_string()),
            ParsedKey::Physical(code) => (physical_key(code, m.shift), code.clone()),
        };

        KeyInput {
            key,
            code,
            meta: m.meta || (m.primary && platform.is_mac()),
            ctrl: m.ctrl || (m.primary && !platform.is_mac()),
            shift: m.shift,
            alt: m.alt,
            repeat: false,
        }
    }
}

/// Parse a chord string into a [`Chord`].
///
/// Supported format: "Modifier+Modifier+Key"
///
/// Modifiers (case-insensitive):
/// - `Mod`, `CmdOrCtrl`, `Primary` - Cmd on macOS, Ctrl elsewhere
/// - `Ctrl`, `Control`
/// - `Alt`, `Option`
/// - `Shift`
/// - `Meta`, `Cmd`, `Command`, `Super`, `Win`
///
/// Keys:
/// - Single characters: `K`, `7`, `/`, `+`
/// - Named keys: `Space`, `Enter`, `Escape`, `Backspace`, `Delete`, arrows, `F1`-`F12`, ...
/// - Physical codes in brackets: `[KeyK]`, `[Digit1]`, `[Semicolon]`
pub fn parse_chord(s: &str) -> Result<Chord, ParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ParseError("Empty chord".to_string()));
    }

    // "Ctrl++" binds the plus key itself
    let (body, plus_key) = match trimmed.strip_suffix("++") {
        Some(rest) => (rest, true),
        None if trimmed == "+" => ("", true),
        None => (trimmed, false),
    };

    let mut parts: Vec<&str> = if body.is_empty() {
        Vec::new()
    } else {
        body.split('+').map(str::trim).collect()
    };
    if plus_key {
        parts.push("+");
    }

    let mut modifiers = ChordModifiers::default();
    let mut key_part = None;

    for (i, part) in parts.iter().enumerate() {
        let is_last = i == parts.len() - 1;
        if part.is_empty() {
            return Err(ParseError(format!("Empty key in chord '{s}'")));
        }

        let is_modifier = match part.to_lowercase().as_str() {
            "mod" | "cmdorctrl" | "primary" => {
                modifiers.primary = true;
                true
            }
            "ctrl" | "control" => {
                modifiers.ctrl = true;
                true
            }
            "alt" | "option" => {
                modifiers.alt = true;
                true
            }
            "shift" => {
                modifiers.shift = true;
                true
            }
            "meta" | "cmd" | "command" | "super" | "win" => {
                modifiers.meta = true;
                true
            }
            _ => false,
        };

        if !is_modifier {
            if key_part.is_some() {
                return Err(ParseError(format!(
                    "Multiple keys specified: already have key, found '{part}'"
                )));
            }
            key_part = Some(*part);
        } else if is_last {
            return Err(ParseError(
                "Chord ends with modifier, no key specified".to_string(),
            ));
        }
    }

    let key_str = key_part.ok_or_else(|| ParseError("No key specified".to_string()))?;
    let key = parse_key(key_str)?;

    Ok(Chord { modifiers, key })
}

fn parse_key(s: &str) -> Result<ParsedKey, ParseError> {
    if s.len() > 2
        && let Some(code) = s.strip_prefix('[').and_then(|rest| rest.strip_suffix(']'))
    {
        return match canonical_code(code) {
            Some(code) => Ok(ParsedKey::Physical(code)),
            None => Err(ParseError(format!("Unknown physical key code: '{code}'"))),
        };
    }

    if let Some((key, code)) = parse_named_key(s) {
        return Ok(ParsedKey::Named { key, code });
    }

    let mut chars = s.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(ParsedKey::Character(c.to_ascii_lowercase()));
    }

    Err(ParseError(format!("Unknown key: '{s}'")))
}

/// Named key aliases to their W3C `(key, code)` values.
fn parse_named_key(s: &str) -> Option<(&'static str, &'static str)> {
    let named = match s.to_lowercase().as_str() {
        "space" | "spacebar" => (" ", "Space"),
        "enter" | "return" => ("Enter", "Enter"),
        "escape" | "esc" => ("Escape", "Escape"),
        "tab" => ("Tab", "Tab"),
        "backspace" => ("Backspace", "Backspace"),
        "delete" | "del" => ("Delete", "Delete"),
        "insert" | "ins" => ("Insert", "Insert"),
        "home" => ("Home", "Home"),
        "end" => ("End", "End"),
        "pageup" | "pgup" => ("PageUp", "PageUp"),
        "pagedown" | "pgdn" => ("PageDown", "PageDown"),
        "up" | "arrowup" => ("ArrowUp", "ArrowUp"),
        "down" | "arrowdown" => ("ArrowDown", "ArrowDown"),
        "left" | "arrowleft" => ("ArrowLeft", "ArrowLeft"),
        "right" | "arrowright" => ("ArrowRight", "ArrowRight"),
        "f1" => ("F1", "F1"),
        "f2" => ("F2", "F2"),
        "f3" => ("F3", "F3"),
        "f4" => ("F4", "F4"),
        "f5" => ("F5", "F5"),
        "f6" => ("F6", "F6"),
        "f7" => ("F7", "F7"),
        "f8" => ("F8", "F8"),
        "f9" => ("F9", "F9"),
        "f10" => ("F10", "F10"),
        "f11" => ("F11", "F11"),
        "f12" => ("F12", "F12"),
        _ => return None,
    };
    Some(named)
}

/// US-layout punctuation and the code of the key that produces it.
const PUNCTUATION_CODES: [(char, &str); 11] = [
    ('`', "Backquote"),
    ('-', "Minus"),
    ('=', "Equal"),
    ('[', "BracketLeft"),
    (']', "BracketRight"),
    ('\\', "Backslash"),
    (';', "Semicolon"),
    ('\'', "Quote"),
    (',', "Comma"),
    ('.', "Period"),
    ('/', "Slash"),
];

/// Codes accepted in bracket syntax besides `KeyX` and `DigitN`.
const NAMED_CODES: [&str; 17] = [
    "Space",
    "Enter",
    "Escape",
    "Tab",
    "Backspace",
    "Delete",
    "Insert",
    "Home",
    "End",
    "PageUp",
    "PageDown",
    "ArrowUp",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "NumpadEnter",
    "IntlBackslash",
];

/// Normalize a physical code's casing, e.g. `"keyk"` to `"KeyK"`.
fn canonical_code(code: &str) -> Option<String> {
    let lower = code.to_lowercase();

    if let Some(letter) = lower.strip_prefix("key")
        && letter.len() == 1
        && letter.chars().all(|c| c.is_ascii_lowercase())
    {
        return Some(format!("Key{}", letter.to_uppercase()));
    }
    if let Some(digit) = lower.strip_prefix("digit")
        && digit.len() == 1
        && digit.chars().all(|c| c.is_ascii_digit())
    {
        return Some(format!("Digit{digit}"));
    }
    if let Some(n) = lower.strip_prefix('f')
        && let Ok(n) = n.parse::<u8>()
        && (1..=12).contains(&n)
    {
        return Some(format!("F{n}"));
    }

    PUNCTUATION_CODES
        .iter()
        .map(|(_, name)| *name)
        .chain(NAMED_CODES)
        .find(|name| name.to_lowercase() == lower)
        .map(str::to_string)
}

fn character_key(c: char, shift: bool) -> String {
    if shift && c.is_ascii_alphabetic() {
        c.to_ascii_uppercase().to_string()
    } else {
        c.to_string()
    }
}

fn character_code(c: char) -> String {
    let c = c.to_ascii_lowercase();
    if c.is_ascii_lowercase() {
        return format!("Key{}", c.to_ascii_uppercase());
    }
    if c.is_ascii_digit() {
        return format!("Digit{c}");
    }
    PUNCTUATION_CODES
        .iter()
        .find(|(p, _)| *p == c)
        .map(|(_, code)| (*code).to_string())
        .unwrap_or_default()
}

/// Logical key for a bracketed code under a US layout.
fn physical_key(code: &str, shift: bool) -> String {
    if let Some(label) = crate::platform::physical_key_from_code(code) {
        return if shift {
            label.to_string()
        } else {
            label.to_lowercase()
        };
    }
    if code == "Space" {
        return " ".to_string();
    }
    if code == "NumpadEnter" {
        return "Enter".to_string();
    }
    PUNCTUATION_CODES
        .iter()
        .find(|(_, name)| *name == code)
        .map(|(p, _)| p.to_string())
        .unwrap_or_else(|| code.to_string())
}
