//! Client-side behavior for the admini admin theme.
//!
//! This crate is compiled to WebAssembly and runs in the browser alongside
//! Bootstrap. It owns the theme's interactive glue: the collapsible sidebar,
//! responsive layout, persisted dismissible alerts, tooltip/toast
//! activation, dark mode, and dropdown menus that stay anchored to their
//! trigger inside scrolling containers.
//!
//! Everything except [`browser`] is plain Rust over small traits
//! ([`scroll::ScrollTree`], [`debounce::Scheduler`], [`attach::EventSource`],
//! [`prefs::PreferenceStore`]) so it can be tested natively without a DOM.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`scroll`] | Scroll offset of an element's scrollable ancestors |
//! | [`attach`] | Repositions a target when anything scrolls or resizes |
//! | [`debounce`] | Trailing-edge debouncing over an abstract timer |
//! | [`dropdown`] | Dropdown open state, ARIA, and fixed-menu transforms |
//! | [`prefs`] | Persisted preference store |
//! | [`sidebar`] | Minimenu and responsive sidebar layout |
//! | [`alerts`] | Dismissible alerts that stay dismissed |
//! | [`theme`] | Dark mode |
//! | [`widgets`] | Bootstrap tooltips, toasts, offcanvas |
//! | [`config`] | Page-level settings |
//! | [`error`] | Error types |
//! | [`browser`] | web-sys bindings and the wasm entry point (feature `browser`) |

pub mod alerts;
pub mod attach;
pub mod config;
pub mod debounce;
pub mod dropdown;
pub mod error;
pub mod prefs;
pub mod scroll;
pub mod sidebar;
pub mod theme;
pub mod widgets;

#[cfg(feature = "browser")]
pub mod browser;

#[cfg(test)]
mod test_utils;

pub use error::{ConfigError, UiError};
