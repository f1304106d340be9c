//! Dropdowns driven by plain `.dropdown-toggle` triggers.
//!
//! Bootstrap handles `[data-bs-toggle]` dropdowns itself. For the rest, the
//! trigger's click toggles the menu's `show` class, mirrors it into
//! `aria-expanded`, and, for menus marked `dropdown-fixed`, requests a
//! reposition through the [`crate::attach`] subsystem. Fixed menus are
//! placed with a CSS transform that cancels out the scroll of their
//! containers.

#[cfg(test)]
#[path = "dropdown_test.rs"]
mod dropdown_test;

use crate::scroll::Offset;

pub const TOGGLE_SELECTOR: &str = ".dropdown-toggle:not([data-bs-toggle])";
pub const ALIAS_SELECTOR: &str = ".dropdown-alias";
pub const MENU_SELECTOR: &str = ".dropdown-menu";
pub const SHOW_CLASS: &str = "show";
pub const FIXED_CLASS: &str = "dropdown-fixed";
pub const DROPUP_CLASS: &str = "dropup";

/// Markup flags read once at initialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropdownFlags {
    /// Trigger's parent has `dropup`: the menu opens above the trigger.
    pub dropup: bool,
    /// Menu has `dropdown-fixed`: positioned by the attacher.
    pub fixed: bool,
}

/// DOM changes the browser layer applies after a trigger click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEffects {
    pub open: bool,
    pub aria_expanded: &'static str,
    /// Inline transform for a non-fixed dropup menu.
    pub transform: Option<String>,
    /// Blur the focused element so the next click reopens cleanly.
    pub blur: bool,
    /// Dispatch `update_position` on the menu.
    pub request_position: bool,
}

/// Open/closed state of one dropdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropdownState {
    pub flags: DropdownFlags,
    pub open: bool,
}

impl DropdownState {
    #[must_use]
    pub fn new(flags: DropdownFlags, open: bool) -> Self {
        Self { flags, open }
    }

    #[must_use]
    pub fn aria_expanded(&self) -> &'static str {
        aria_expanded(self.open)
    }

    /// Handle a click on the trigger.
    pub fn click(&mut self, trigger_height: f64) -> ClickEffects {
        self.open = !self.open;
        let transform = (self.flags.dropup && !self.flags.fixed).then(|| static_dropup_transform(trigger_height));
        ClickEffects {
            open: self.open,
            aria_expanded: self.aria_expanded(),
            transform,
            blur: !self.open,
            request_position: self.flags.fixed,
        }
    }

    /// Trigger lost focus.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Transform for a fixed menu given its containers' scroll offset.
    #[must_use]
    pub fn fixed_transform(&self, trigger_height: f64, offset: Offset) -> String {
        fixed_transform(self.flags.dropup, trigger_height, offset)
    }
}

#[must_use]
pub fn aria_expanded(open: bool) -> &'static str {
    if open { "true" } else { "false" }
}

/// Lift a dropup menu above its trigger.
#[must_use]
pub fn static_dropup_transform(trigger_height: f64) -> String {
    format!("translateY(calc(-100% - {trigger_height}px))")
}

/// Vertical component of a fixed menu's translation.
#[must_use]
pub fn fixed_offset_y(dropup: bool, trigger_height: f64, y: f64) -> String {
    if dropup {
        let lift = trigger_height + y;
        if lift < 0.0 {
            format!("calc(-100% + {}px)", -lift)
        } else {
            format!("calc(-100% - {}px)", lift + 0.0)
        }
    } else {
        negated_px(y)
    }
}

/// Full `transform` value for a fixed menu.
#[must_use]
pub fn fixed_transform(dropup: bool, trigger_height: f64, offset: Offset) -> String {
    format!("translate({}, {})", negated_px(offset.x), fixed_offset_y(dropup, trigger_height, offset.y))
}

/// `-value` as a CSS length. Negative scroll (RTL, overscroll) comes out positive.
fn negated_px(value: f64) -> String {
    // Adding zero turns `-0` into `0`.
    format!("{}px", -value + 0.0)
}
