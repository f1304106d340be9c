//! Sidebar minimenu and responsive layout.
//!
//! The collapsed ("minimenu") state is a body class persisted per browser.
//! Below the mobile breakpoint the sidebar becomes a Bootstrap offcanvas;
//! above it the sidebar is docked and forced visible again in case an
//! offcanvas hid it before the window grew.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use crate::error::UiError;
use crate::prefs::{MINIMENU_KEY, PreferenceStore};

pub const SIDEBAR_SELECTOR: &str = "#sidebar";
pub const TOGGLE_SELECTOR: &str = ".js-sidebar-toggle";
pub const CTA_SELECTOR: &str = ".sidebar-cta-content";
pub const MINIMENU_CLASS: &str = "minimenu";
pub const OFFCANVAS_CLASS: &str = "offcanvas";
/// Custom property holding 1% of the real viewport height.
pub const VIEWPORT_UNIT_PROPERTY: &str = "--vh";

/// Whether the user left the sidebar collapsed.
pub fn minimenu_preferred(store: &dyn PreferenceStore) -> bool {
    store.get(MINIMENU_KEY).is_some_and(|v| !v.is_empty())
}

/// Record the collapsed state after a toggle.
pub fn persist_minimenu(store: &dyn PreferenceStore, collapsed: bool) -> Result<(), UiError> {
    if collapsed { store.set(MINIMENU_KEY, "1") } else { store.remove(MINIMENU_KEY) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarLayout {
    /// Always-visible column.
    Docked,
    /// Slide-in panel toggled by Bootstrap.
    Offcanvas,
}

impl SidebarLayout {
    #[must_use]
    pub fn for_width(width: f64, mobile_size: f64) -> Self {
        if width > mobile_size { Self::Docked } else { Self::Offcanvas }
    }
}

/// Value for [`VIEWPORT_UNIT_PROPERTY`].
#[must_use]
pub fn viewport_unit(inner_height: f64) -> String {
    format!("{}px", inner_height * 0.01)
}
