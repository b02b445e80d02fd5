//! Human-readable rendering of bindings.
//!
//! Tokens come out in a fixed order: primary modifier (or explicit Ctrl,
//! then Meta), Alt, Shift, then the key label. Mac uses the usual symbols
//! (`⌘ ⌃ ⌥ ⇧`) and joins tokens with a space; other platforms spell them out
//! and join with `" + "`.

use crate::platform::{alt_label, ctrl_label, meta_label, mod_label, physical_key_from_code, shift_label};
use ppx_shortcuts_config::{KeyBinding, ModifierForm, Platform};

/// Display label for a logical key value.
pub fn format_key_label(key: &str, platform: Platform) -> String {
    let label = match key {
        " " | "Space" => "Space",
        "Enter" => "Enter",
        "ArrowUp" => "↑",
        "ArrowDown" => "↓",
        "ArrowLeft" => "←",
        "ArrowRight" => "→",
        "Meta" => meta_label(platform),
        "Control" => ctrl_label(platform),
        "Alt" => alt_label(platform),
        "Shift" => shift_label(platform),
        "Backspace" => "⌫",
        "Delete" => "⌦",
        other => other,
    };
    label.to_string()
}

/// Ordered display tokens for one binding.
pub fn binding_tokens(binding: &KeyBinding, platform: Platform) -> Vec<String> {
    let mut tokens = Vec::new();

    match binding.modifier {
        ModifierForm::Mod => tokens.push(mod_label(platform).to_string()),
        ModifierForm::Explicit { meta, ctrl } => {
            if ctrl {
                tokens.push(ctrl_label(platform).to_string());
            }
            if meta {
                tokens.push(meta_label(platform).to_string());
            }
        }
    }

    if binding.alt {
        tokens.push(alt_label(platform).to_string());
    }
    if binding.shift {
        tokens.push(shift_label(platform).to_string());
    }

    let physical_key = if binding.alt {
        binding.code.as_deref().and_then(physical_key_from_code)
    } else {
        None
    };
    tokens.push(match physical_key {
        Some(label) => label.to_string(),
        None => format_key_label(&binding.key, platform),
    });

    tokens
}

/// One binding as a single string, e.g. `"Ctrl + Shift + O"` or `"⌘ ⇧ O"`.
pub fn format_binding(binding: &KeyBinding, platform: Platform) -> String {
    let joiner = if platform.is_mac() { " " } else { " + " };
    binding_tokens(binding, platform).join(joiner)
}

/// Several bindings separated by `" / "`; empty for no bindings.
pub fn format_bindings(bindings: &[KeyBinding], platform: Platform) -> String {
    bindings
        .iter()
        .map(|binding| format_binding(binding, platform))
        .collect::<Vec<_>>()
        .join(" / ")
}
