//! Platform family for modifier resolution.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Platform family that decides what the abstract `Mod` modifier means.
///
/// - `Mac`: `Mod` is Cmd (Meta); Ctrl is the secondary modifier.
/// - `Other`: `Mod` is Ctrl; Meta (the Windows/Super key) is the secondary modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Mac,
    Other,
}

impl Platform {
    /// The platform this binary was compiled for.
    pub const fn current() -> Self {
        #[cfg(target_os = "macos")]
        {
            Platform::Mac
        }
        #[cfg(not(target_os = "macos"))]
        {
            Platform::Other
        }
    }

    pub const fn is_mac(self) -> bool {
        matches!(self, Platform::Mac)
    }

    /// Whether the platform's primary modifier is held, given raw meta/ctrl state.
    #[inline]
    pub const fn primary_held(self, meta: bool, ctrl: bool) -> bool {
        match self {
            Platform::Mac => meta,
            Platform::Other => ctrl,
        }
    }

    /// Whether the platform's secondary modifier is held, given raw meta/ctrl state.
    #[inline]
    pub const fn secondary_held(self, meta: bool, ctrl: bool) -> bool {
        match self {
            Platform::Mac => ctrl,
            Platform::Other => meta,
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Mac => write!(f, "mac"),
            Platform::Other => write!(f, "other"),
        }
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mac" | "macos" | "darwin" => Ok(Platform::Mac),
            "other" | "linux" | "windows" | "win" => Ok(Platform::Other),
            _ => Err(format!("unknown platform '{s}' (expected 'mac' or 'other')")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_and_secondary() {
        assert!(Platform::Mac.primary_held(true, false));
        assert!(!Platform::Mac.primary_held(false, true));
        assert!(Platform::Mac.secondary_held(false, true));

        assert!(Platform::Other.primary_held(false, true));
        assert!(!Platform::Other.primary_held(true, false));
        assert!(Platform::Other.secondary_held(true, false));
    }

    #[test]
    fn test_parse_platform() {
        assert_eq!("Mac".parse::<Platform>(), Ok(Platform::Mac));
        assert_eq!("linux".parse::<Platform>(), Ok(Platform::Other));
        assert!("amiga".parse::<Platform>().is_err());
    }
}
