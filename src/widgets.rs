//! Bootstrap components activated from markup: tooltips, toasts, offcanvas.

#[cfg(test)]
#[path = "widgets_test.rs"]
mod widgets_test;

pub const TOOLTIP_SELECTOR: &str = "[data-bs-toggle=\"tooltip\"]";
pub const TOAST_SELECTOR: &str = ".toast:not(.toaster)";

/// Component constructors exposed on `window.bootstrap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Tooltip,
    Toast,
    Offcanvas,
}

impl Component {
    /// Property name under `window.bootstrap`.
    #[must_use]
    pub fn global_name(self) -> &'static str {
        match self {
            Self::Tooltip => "Tooltip",
            Self::Toast => "Toast",
            Self::Offcanvas => "Offcanvas",
        }
    }
}

/// Title to set on a tooltip trigger that has none: its trimmed text.
#[must_use]
pub fn fallback_title(existing: Option<&str>, inner_text: &str) -> Option<String> {
    match existing {
        Some(_) => None,
        None => Some(inner_text.trim().to_owned()),
    }
}
