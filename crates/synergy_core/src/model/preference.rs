//! Display preference model.

use serde::{Deserialize, Serialize};

/// Process-wide light/dark display mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayPreference {
    #[default]
    Light,
    Dark,
}

impl DisplayPreference {
    /// Stable persisted string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parses a persisted string. Unknown input yields `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Flips `Light` and `Dark`.
///
/// Pure; callers persist the result through a `PreferenceStore`.
pub fn toggle(current: DisplayPreference) -> DisplayPreference {
    match current {
        DisplayPreference::Light => DisplayPreference::Dark,
        DisplayPreference::Dark => DisplayPreference::Light,
    }
}
