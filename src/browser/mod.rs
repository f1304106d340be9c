//! Browser bindings: web-sys implementations of the core traits and the
//! wasm entry point.
//!
//! | Module | Role |
//! |--------|------|
//! | [`dom`] | Live DOM as a [`crate::scroll::ScrollTree`] |
//! | [`timer`] | `setTimeout` scheduler for debouncing |
//! | [`events`] | Permanent DOM listeners and the attacher's event source |
//! | [`storage`] | `localStorage` preference store |
//! | [`bootstrap`] | Calls into `window.bootstrap` |
//! | [`ui`] | [`ui::AdminUi`], which wires every feature |

pub mod bootstrap;
pub mod dom;
pub mod events;
pub mod storage;
pub mod timer;
pub mod ui;

use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::config::UiConfig;
use crate::error::UiError;
use crate::prefs::{MemoryStore, PreferenceStore};

/// Install logging and run every theme behavior on the current document.
///
/// Call once the DOM is ready.
#[wasm_bindgen(js_name = init)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str(&UiError::MissingWindow.to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str(&UiError::MissingDocument.to_string()))?;

    let config = match document.document_element() {
        Some(root) => UiConfig::from_lookup(|name| root.get_attribute(name)),
        None => Ok(UiConfig::default()),
    };
    let level = config.as_ref().map_or(crate::config::DEFAULT_LOG_LEVEL, |c| c.log_level);
    if console_log::init_with_level(level).is_err() {
        log::debug!("logger already installed");
    }
    let config = config.unwrap_or_else(|e| {
        log::warn!("invalid config, using defaults: {e}");
        UiConfig::default()
    });

    let store: Rc<dyn PreferenceStore> = match storage::LocalStorage::from_window(&window) {
        Ok(local) => Rc::new(local),
        Err(e) => {
            log::warn!("preferences will not persist: {e}");
            Rc::new(MemoryStore::new())
        }
    };

    ui::AdminUi::new(window, document, config, store).init();
    Ok(())
}
