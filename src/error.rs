//! Error types shared by the preference store and the browser layer.
//!
//! The positioning core (resolver, attacher, debouncer) is infallible; only
//! storage and DOM glue can fail, and `init` logs those failures per feature
//! instead of aborting the page.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure raised while wiring a UI feature or touching persisted state.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("no global window")]
    MissingWindow,
    #[error("window has no document")]
    MissingDocument,
    #[error("storage error: {0}")]
    Storage(String),
    #[error("javascript error: {0}")]
    Js(String),
    #[error("malformed preference value: {0}")]
    Prefs(#[from] serde_json::Error),
}

/// Invalid value found while reading [`crate::config::UiConfig`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unsupported log level: {0}")]
    InvalidLogLevel(String),
}

#[cfg(feature = "browser")]
impl From<wasm_bindgen::JsValue> for UiError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
