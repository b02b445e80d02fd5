//! Migration of stored binding lists to the canonical form.
//!
//! Applied to every stored list on every read and write:
//! 1. Bindings carrying Meta collapse to mod-form. A Ctrl-only explicit
//!    binding is left as is, even on platforms where Ctrl is primary.
//! 2. Bindings denoting the same combo are de-duplicated, preferring the
//!    mod-form entry.

use crate::settings::ShortcutSettings;
use crate::types::{KeyBinding, ModifierForm};

/// Collapse Meta-carrying bindings to mod-form.
pub fn normalize_binding(binding: KeyBinding) -> KeyBinding {
    match binding.modifier {
        ModifierForm::Explicit { meta: true, .. } => KeyBinding {
            modifier: ModifierForm::Mod,
            ..binding
        },
        _ => binding,
    }
}

/// Whether two bindings denote the same combo for de-duplication.
///
/// Keys compare case-insensitively; codes only when both sides have one;
/// shift and alt exactly. Meta/Ctrl/Mod are not compared.
pub fn same_combo(a: &KeyBinding, b: &KeyBinding) -> bool {
    let key_match = a.key.to_lowercase() == b.key.to_lowercase();
    let code_match = match (&a.code, &b.code) {
        (Some(a_code), Some(b_code)) => a_code == b_code,
        _ => true,
    };
    key_match && code_match && a.shift == b.shift && a.alt == b.alt
}

/// Normalize and de-duplicate a binding list.
///
/// On a collision the first mod-form entry wins; a mod-form entry replaces
/// an earlier explicit one in place. The result never holds two colliding
/// entries, so migrating twice changes nothing.
pub fn migrate_bindings(bindings: Vec<KeyBinding>) -> Vec<KeyBinding> {
    let mut result: Vec<KeyBinding> = Vec::with_capacity(bindings.len());

    for binding in bindings.into_iter().map(normalize_binding) {
        let Some(index) = result
            .iter()
            .position(|candidate| same_combo(candidate, &binding))
        else {
            result.push(binding);
            continue;
        };

        if result[index].is_mod() || !binding.is_mod() {
            continue;
        }

        // A code-less replacement can collide with entries kept after it.
        let mut position = 0;
        result.retain(|candidate| {
            let keep = position <= index || !same_combo(candidate, &binding);
            position += 1;
            keep
        });
        result[index] = binding;
    }

    result
}

/// Migrate every list in a shortcut map.
pub fn migrate_shortcut_settings(shortcuts: ShortcutSettings) -> ShortcutSettings {
    shortcuts
        .into_iter()
        .map(|(id, bindings)| (id, migrate_bindings(bindings)))
        .collect()
}
