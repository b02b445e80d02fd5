//! Settings value types.
//!
//! Split by domain:
//! - `feature`    — FeatureCategory, FeatureToggles, FeatureTogglesUpdate
//! - `keybinding` — KeyBinding, ModifierForm
//! - `platform`   — Platform
//! - `shortcut`   — ShortcutId

pub mod feature;
pub mod keybinding;
pub mod platform;
pub mod shortcut;

pub use feature::{FeatureCategory, FeatureToggles, FeatureTogglesUpdate};
pub use keybinding::{KeyBinding, ModifierForm};
pub use platform::Platform;
pub use shortcut::ShortcutId;
