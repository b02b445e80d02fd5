//! Detecting when a new binding is already taken by another shortcut.

use ppx_shortcuts_config::{
    ExtensionSettings, KeyBinding, ModifierForm, Platform, ShortcutDefinition, ShortcutId,
    get_bindings, shortcut_definitions,
};

/// A binding with its modifiers resolved for one platform.
#[derive(Debug, PartialEq, Eq)]
struct ResolvedChord {
    meta: bool,
    ctrl: bool,
    shift: bool,
    alt: bool,
    key: String,
    code: String,
}

impl ResolvedChord {
    fn new(binding: &KeyBinding, platform: Platform) -> Self {
        let (meta, ctrl) = match binding.modifier {
            ModifierForm::Mod => (platform.is_mac(), !platform.is_mac()),
            ModifierForm::Explicit { meta, ctrl } => (meta, ctrl),
        };
        Self {
            meta,
            ctrl,
            shift: binding.shift,
            alt: binding.alt,
            key: binding.key.to_lowercase(),
            code: binding.code.clone().unwrap_or_default(),
        }
    }
}

/// Whether two bindings would fire on the same key press on `platform`.
///
/// Modifiers must be identical once `Mod` is resolved; then either the keys
/// match case-insensitively or both have the same non-empty code.
pub fn bindings_collide(a: &KeyBinding, b: &KeyBinding, platform: Platform) -> bool {
    let a = ResolvedChord::new(a, platform);
    let b = ResolvedChord::new(b, platform);

    let modifiers_match =
        a.meta == b.meta && a.ctrl == b.ctrl && a.shift == b.shift && a.alt == b.alt;
    let key_match = a.key == b.key;
    let code_match = !a.code.is_empty() && !b.code.is_empty() && a.code == b.code;
    modifiers_match && (key_match || code_match)
}

/// First other shortcut, in catalogue order, whose effective bindings collide
/// with `binding`. Shortcuts in disabled categories are ignored.
pub fn find_conflicting_shortcut(
    binding: &KeyBinding,
    current: ShortcutId,
    settings: &ExtensionSettings,
    platform: Platform,
) -> Option<&'static ShortcutDefinition> {
    shortcut_definitions(platform).iter().find(|def| {
        def.id != current
            && settings.feature_toggles.is_enabled(def.category)
            && get_bindings(def.id, settings, platform)
                .iter()
                .any(|existing| bindings_collide(existing, binding, platform))
    })
}

/// User-facing message for a conflict.
pub fn conflict_message(binding: &KeyBinding, owner: &ShortcutDefinition, platform: Platform) -> String {
    format!(
        "\"{}\" is already assigned to {}.",
        crate::display::format_binding(binding, platform),
        owner.label
    )
}
