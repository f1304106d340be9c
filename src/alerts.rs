//! Dismissible alerts that stay dismissed.
//!
//! Alerts rendered with an `id` remember being closed: the id is appended to
//! a JSON array in the preference store and the alert is hidden on the next
//! page load.

#[cfg(test)]
#[path = "alerts_test.rs"]
mod alerts_test;

use crate::error::UiError;
use crate::prefs::{DISMISSED_ALERTS_KEY, PreferenceStore, load_json, save_json};

pub const ALERT_SELECTOR: &str = ".alert-dismissible[id]";
/// Bootstrap event fired once the close transition has finished.
pub const CLOSED_EVENT: &str = "closed.bs.alert";

/// Ids of alerts the user closed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DismissedAlerts {
    ids: Vec<String>,
}

impl DismissedAlerts {
    /// Read the stored list. A malformed value is logged and treated as empty.
    pub fn load(store: &dyn PreferenceStore) -> Self {
        match load_json::<Vec<String>>(store, DISMISSED_ALERTS_KEY) {
            Ok(ids) => Self { ids: ids.unwrap_or_default() },
            Err(e) => {
                log::warn!("ignoring stored dismissed alerts: {e}");
                Self::default()
            }
        }
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|known| known == id)
    }

    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Record `id` and persist the list. Re-reads the store first so alerts
    /// closed from other handlers on the same page are kept.
    pub fn dismiss(store: &dyn PreferenceStore, id: &str) -> Result<Self, UiError> {
        let mut current = Self::load(store);
        if !current.contains(id) {
            current.ids.push(id.to_owned());
        }
        save_json(store, DISMISSED_ALERTS_KEY, &current.ids)?;
        Ok(current)
    }
}
