//! `localStorage`-backed [`PreferenceStore`].

use web_sys::{Storage, Window};

use crate::error::UiError;
use crate::prefs::PreferenceStore;

pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// Fails when storage is disabled (private mode, sandboxed frames).
    pub fn from_window(window: &Window) -> Result<Self, UiError> {
        let storage = window
            .local_storage()
            .map_err(|e| UiError::Storage(format!("{e:?}")))?
            .ok_or_else(|| UiError::Storage("localStorage unavailable".into()))?;
        Ok(Self { storage })
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        match self.storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("localStorage read {key} failed: {e:?}");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), UiError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| UiError::Storage(format!("write {key}: {e:?}")))
    }

    fn remove(&self, key: &str) -> Result<(), UiError> {
        self.storage
            .remove_item(key)
            .map_err(|e| UiError::Storage(format!("remove {key}: {e:?}")))
    }
}
