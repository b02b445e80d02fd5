//! Feature categories and their on/off switches.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A toggleable group of shortcuts sharing one switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FeatureCategory {
    VimScroll,
    WideScreen,
    SafeSend,
    OtherShortcuts,
}

impl FeatureCategory {
    pub const ALL: [FeatureCategory; 4] = [
        FeatureCategory::VimScroll,
        FeatureCategory::WideScreen,
        FeatureCategory::SafeSend,
        FeatureCategory::OtherShortcuts,
    ];

    /// Storage key, e.g. `"vimScroll"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            FeatureCategory::VimScroll => "vimScroll",
            FeatureCategory::WideScreen => "wideScreen",
            FeatureCategory::SafeSend => "safeSend",
            FeatureCategory::OtherShortcuts => "otherShortcuts",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            FeatureCategory::VimScroll => "Vim-like Scroll",
            FeatureCategory::WideScreen => "Wide Screen / Focus",
            FeatureCategory::SafeSend => "Send with Cmd/Ctrl + Enter",
            FeatureCategory::OtherShortcuts => "Other Shortcuts",
        }
    }
}

impl fmt::Display for FeatureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeatureCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        FeatureCategory::ALL
            .into_iter()
            .find(|category| category.as_str().to_lowercase() == normalized)
            .ok_or_else(|| format!("unknown feature '{s}'"))
    }
}

/// Enabled state per feature category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureToggles {
    pub vim_scroll: bool,
    pub wide_screen: bool,
    pub safe_send: bool,
    pub other_shortcuts: bool,
}

impl Default for FeatureToggles {
    fn default() -> Self {
        crate::defaults::feature_toggles()
    }
}

impl FeatureToggles {
    pub fn is_enabled(&self, category: FeatureCategory) -> bool {
        match category {
            FeatureCategory::VimScroll => self.vim_scroll,
            FeatureCategory::WideScreen => self.wide_screen,
            FeatureCategory::SafeSend => self.safe_send,
            FeatureCategory::OtherShortcuts => self.other_shortcuts,
        }
    }

    pub fn set(&mut self, category: FeatureCategory, enabled: bool) {
        let slot = match category {
            FeatureCategory::VimScroll => &mut self.vim_scroll,
            FeatureCategory::WideScreen => &mut self.wide_screen,
            FeatureCategory::SafeSend => &mut self.safe_send,
            FeatureCategory::OtherShortcuts => &mut self.other_shortcuts,
        };
        *slot = enabled;
    }

    /// Overlay the fields present in `update`.
    pub fn apply(&mut self, update: &FeatureTogglesUpdate) {
        for category in FeatureCategory::ALL {
            if let Some(enabled) = update.get(category) {
                self.set(category, enabled);
            }
        }
    }
}

/// Partial feature toggles; `None` leaves the current value alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureTogglesUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vim_scroll: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wide_screen: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safe_send: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_shortcuts: Option<bool>,
}

impl FeatureTogglesUpdate {
    pub fn get(&self, category: FeatureCategory) -> Option<bool> {
        match category {
            FeatureCategory::VimScroll => self.vim_scroll,
            FeatureCategory::WideScreen => self.wide_screen,
            FeatureCategory::SafeSend => self.safe_send,
            FeatureCategory::OtherShortcuts => self.other_shortcuts,
        }
    }

    pub fn with(mut self, category: FeatureCategory, enabled: bool) -> Self {
        let slot = match category {
            FeatureCategory::VimScroll => &mut self.vim_scroll,
            FeatureCategory::WideScreen => &mut self.wide_screen,
            FeatureCategory::SafeSend => &mut self.safe_send,
            FeatureCategory::OtherShortcuts => &mut self.other_shortcuts,
        };
        *slot = Some(enabled);
        self
    }

    /// Update that sets every category.
    pub fn from_toggles(toggles: &FeatureToggles) -> Self {
        FeatureCategory::ALL
            .into_iter()
            .fold(Self::default(), |update, category| {
                update.with(category, toggles.is_enabled(category))
            })
    }
}
