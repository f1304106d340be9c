//! Dark mode toggle.
//!
//! The stored mode is written verbatim to `data-bs-theme` on the root
//! element. An empty mode leaves Bootstrap on its default (light) palette,
//! and any other mode is passed through as a custom Bootstrap color mode.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::error::UiError;
use crate::prefs::{DARKMODE_KEY, PreferenceStore};

pub const TOGGLE_SELECTOR: &str = "#toggle-dark-mode";
pub const THEME_ATTRIBUTE: &str = "data-bs-theme";
/// Toggle children carrying a `value` are the per-mode icons.
pub const OPTION_SELECTOR: &str = "[value]";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Theme {
    /// No preference stored.
    #[default]
    Unset,
    Light,
    Dark,
    /// A color mode the page defines itself, e.g. `auto` or `blue`.
    Custom(String),
}

impl Theme {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "" => Self::Unset,
            "light" => Self::Light,
            "dark" => Self::Dark,
            other => Self::Custom(other.to_owned()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unset => "",
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Custom(mode) => mode,
        }
    }

    /// Dark goes light; anything else goes dark.
    #[must_use]
    pub fn toggled(&self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light | Self::Unset | Self::Custom(_) => Self::Dark,
        }
    }

    pub fn load(store: &dyn PreferenceStore) -> Self {
        store.get(DARKMODE_KEY).map_or(Self::Unset, |raw| Self::parse(&raw))
    }

    pub fn persist(&self, store: &dyn PreferenceStore) -> Result<(), UiError> {
        store.set(DARKMODE_KEY, self.as_str())
    }

    /// Whether the toggle option with `value` should be shown.
    #[must_use]
    pub fn shows_option(&self, value: &str) -> bool {
        value == self.as_str()
    }
}
