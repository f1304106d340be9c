//! Persisted UI preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! Features read their preference at init and write it back on user toggle.
//! The store is injected so the browser layer can back it with
//! `localStorage` while tests use [`MemoryStore`].

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

use std::cell::RefCell;
use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::UiError;

pub const MINIMENU_KEY: &str = "minimenu";
pub const DARKMODE_KEY: &str = "darkmode";
pub const DISMISSED_ALERTS_KEY: &str = "dismissed_alerts";

/// String key/value store that survives a page reload.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), UiError>;
    fn remove(&self, key: &str) -> Result<(), UiError>;
}

/// Non-persistent store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), UiError> {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), UiError> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}

/// Decode the JSON value stored under `key`, if any.
pub fn load_json<T: DeserializeOwned>(store: &dyn PreferenceStore, key: &str) -> Result<Option<T>, UiError> {
    match store.get(key) {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Encode `value` as JSON under `key`.
pub fn save_json<T: Serialize>(store: &dyn PreferenceStore, key: &str, value: &T) -> Result<(), UiError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}
