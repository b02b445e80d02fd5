//! Shortcut identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of one shortcut in the catalogue.
///
/// Variant order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShortcutId {
    ScrollTop,
    ScrollBottom,
    ScrollUp,
    ScrollDown,
    ScrollHalfUp,
    ScrollHalfDown,
    ToggleFocus,
    OpenNewChat,
    ToggleTemporaryChat,
    DeleteChat,
    BookmarkChat,
    AddPhotos,
}

impl ShortcutId {
    pub const ALL: [ShortcutId; 12] = [
        ShortcutId::ScrollTop,
        ShortcutId::ScrollBottom,
        ShortcutId::ScrollUp,
        ShortcutId::ScrollDown,
        ShortcutId::ScrollHalfUp,
        ShortcutId::ScrollHalfDown,
        ShortcutId::ToggleFocus,
        ShortcutId::OpenNewChat,
        ShortcutId::ToggleTemporaryChat,
        ShortcutId::DeleteChat,
        ShortcutId::BookmarkChat,
        ShortcutId::AddPhotos,
    ];

    /// Storage key, e.g. `"scrollTop"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            ShortcutId::ScrollTop => "scrollTop",
            ShortcutId::ScrollBottom => "scrollBottom",
            ShortcutId::ScrollUp => "scrollUp",
            ShortcutId::ScrollDown => "scrollDown",
            ShortcutId::ScrollHalfUp => "scrollHalfUp",
            ShortcutId::ScrollHalfDown => "scrollHalfDown",
            ShortcutId::ToggleFocus => "toggleFocus",
            ShortcutId::OpenNewChat => "openNewChat",
            ShortcutId::ToggleTemporaryChat => "toggleTemporaryChat",
            ShortcutId::DeleteChat => "deleteChat",
            ShortcutId::BookmarkChat => "bookmarkChat",
            ShortcutId::AddPhotos => "addPhotos",
        }
    }
}

impl ShortcutId {
    /// Exact storage key lookup, with none of the `FromStr` leniency.
    pub fn from_storage_key(key: &str) -> Option<Self> {
        ShortcutId::ALL.into_iter().find(|id| id.as_str() == key)
    }
}

impl fmt::Display for ShortcutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShortcutId {
    type Err = String;

    /// Accepts the storage key (`scrollTop`) or a kebab/snake spelling
    /// (`scroll-top`, `scroll_top`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        ShortcutId::ALL
            .into_iter()
            .find(|id| id.as_str().to_lowercase() == normalized)
            .ok_or_else(|| format!("unknown shortcut '{s}'"))
    }
}
