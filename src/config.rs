//! Page-level configuration read from `data-admini-*` attributes.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use crate::debounce::DEFAULT_DELAY_MS;
use crate::error::ConfigError;

pub const DEFAULT_MOBILE_SIZE: f64 = 768.0;
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

pub const MOBILE_SIZE_ATTR: &str = "data-admini-mobile-size";
pub const DEBOUNCE_MS_ATTR: &str = "data-admini-debounce-ms";
pub const LOG_LEVEL_ATTR: &str = "data-admini-log-level";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiConfig {
    /// Widths at or below this are laid out for mobile.
    pub mobile_size: f64,
    /// Quiet period for resize and reposition handlers.
    pub debounce_ms: u32,
    pub log_level: log::Level,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mobile_size: DEFAULT_MOBILE_SIZE,
            debounce_ms: DEFAULT_DELAY_MS,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl UiConfig {
    /// Build config from attribute lookups.
    ///
    /// Optional:
    /// - `data-admini-mobile-size`: default 768
    /// - `data-admini-debounce-ms`: default 0
    /// - `data-admini-log-level`: `error`..`trace`, default `info`
    ///
    /// Unparseable numbers fall back to their default, as does a mobile size
    /// that is not a positive finite width. An unknown log level is an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mobile_size = parse_valid(lookup(MOBILE_SIZE_ATTR), DEFAULT_MOBILE_SIZE, |w: &f64| {
            w.is_finite() && *w > 0.0
        });
        let debounce_ms = parse_valid(lookup(DEBOUNCE_MS_ATTR), DEFAULT_DELAY_MS, |_| true);
        let log_level = match lookup(LOG_LEVEL_ATTR) {
            Some(raw) => log::Level::from_str(raw.trim()).map_err(|_| ConfigError::InvalidLogLevel(raw))?,
            None => DEFAULT_LOG_LEVEL,
        };
        Ok(Self { mobile_size, debounce_ms, log_level })
    }
}

fn parse_valid<T: FromStr>(raw: Option<String>, default: T, valid: impl Fn(&T) -> bool) -> T {
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) if valid(&value) => value,
        _ => {
            log::warn!("ignoring config value {raw:?}");
            default
        }
    }
}
