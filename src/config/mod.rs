//! Preference store for location acquisition.
//!
//! Preferences are read from `almanac-geo.toml` in the user's configuration
//! directory. Every key is optional and falls back to the defaults in
//! [`crate::common::constants`]:
//!
//! ```toml
//! #[Acquisition]
//! location_timeout = 60        # Seconds to wait for a fix (1-600)
//! allow_last_known = true      # Accept a cached fix instead of waiting
//! reverse_geocode = true       # Look up place names for acquired fixes
//!
//! #[Timezone]
//! default_timezone = "Europe/Berlin"  # Zone applied when override is on
//! default_timezone_override = false   # Replace resolved zones with the default
//!
//! #[Configured position]
//! latitude = 52.5200           # Position reported by the configured source
//! longitude = 13.4050
//! place_name = "Berlin"        # Address returned by the configured geocoder
//! country_code = "DE"
//! country_name = "Germany"
//! state = "Berlin"
//! ```
//!
//! The locater and geocoder only see the read-only [`Preferences`] view.
//! [`SharedPreferences`] lets a caller swap the underlying values between
//! sessions; readers always observe the latest values.

pub mod loading;
pub mod validation;

use serde::Deserialize;
use std::sync::RwLock;
use std::time::Duration;

use crate::common::constants::*;

pub use loading::{get_config_path, get_custom_config_dir, load, load_from_path, set_config_dir};
pub use validation::validate_config;

/// Read-only preference view consumed by the locater and geocoder.
pub trait Preferences: Send + Sync {
    /// How long a session waits before reporting a timeout.
    fn location_timeout(&self) -> Duration;

    /// Whether a cached last-known fix may satisfy a session.
    fn allow_last_known(&self) -> bool;

    /// Whether acquired fixes are passed to the geocoding service.
    fn reverse_geocode(&self) -> bool;

    /// The user's default zone id, if configured.
    fn default_timezone(&self) -> Option<String>;

    /// Whether the default zone replaces the resolved zone.
    fn default_timezone_override(&self) -> bool;

    /// The zone id that replaces resolved selections.
    ///
    /// # Returns
    /// The default zone id while the override is enabled, `None` otherwise.
    fn timezone_override(&self) -> Option<String> {
        if self.default_timezone_override() {
            self.default_timezone()
        } else {
            None
        }
    }
}

/// Configuration file contents.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    pub location_timeout: Option<u64>, // seconds
    pub allow_last_known: Option<bool>,
    pub reverse_geocode: Option<bool>,
    pub default_timezone: Option<String>,
    pub default_timezone_override: Option<bool>,

    /// Position reported by the configured positioning source.
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    /// Address reported by the configured geocoding service.
    pub place_name: Option<String>,
    pub country_code: Option<String>,
    pub country_name: Option<String>,
    pub state: Option<String>,
}

impl Config {
    /// Load the configuration from the active configuration directory.
    ///
    /// # Returns
    /// The validated configuration, or defaults when no file exists.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load() -> anyhow::Result<Self> {
        load()
    }

    /// Whether a configured position is available for the `locate` command.
    pub fn has_position(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }

    /// Log the effective values as an indented block.
    pub fn log_config(&self) {
        log_block_start!("Loaded configuration");
        log_indented!("Location timeout: {}s", self.location_timeout().as_secs());
        log_indented!(
            "Last known fix: {}",
            if self.allow_last_known() { "allowed" } else { "ignored" }
        );
        log_indented!(
            "Reverse geocoding: {}",
            if self.reverse_geocode() { "enabled" } else { "disabled" }
        );

        match (self.default_timezone(), self.default_timezone_override()) {
            (Some(zone), true) => log_indented!("Default timezone: {zone} (override)"),
            (Some(zone), false) => log_indented!("Default timezone: {zone}"),
            (None, _) => {}
        }

        if let (Some(lat), Some(lon)) = (self.latitude, self.longitude) {
            log_indented!("Configured position: {lat:.4}, {lon:.4}");
        }
        if let Some(ref name) = self.place_name {
            log_indented!("Configured place: {name}");
        }
    }
}

impl Preferences for Config {
    fn location_timeout(&self) -> Duration {
        Duration::from_secs(self.location_timeout.unwrap_or(DEFAULT_LOCATION_TIMEOUT))
    }

    fn allow_last_known(&self) -> bool {
        self.allow_last_known.unwrap_or(DEFAULT_ALLOW_LAST_KNOWN)
    }

    fn reverse_geocode(&self) -> bool {
        self.reverse_geocode.unwrap_or(DEFAULT_REVERSE_GEOCODE)
    }

    fn default_timezone(&self) -> Option<String> {
        self.default_timezone
            .as_deref()
            .map(str::trim)
            .filter(|zone| !zone.is_empty())
            .map(str::to_string)
    }

    fn default_timezone_override(&self) -> bool {
        self.default_timezone_override.unwrap_or(DEFAULT_TIMEZONE_OVERRIDE)
    }
}

/// Preferences that can be replaced while readers hold a reference.
#[derive(Debug, Default)]
pub struct SharedPreferences {
    inner: RwLock<Config>,
}

impl SharedPreferences {
    pub fn new(config: Config) -> Self {
        Self {
            inner: RwLock::new(config),
        }
    }

    /// Replace the stored values. Later reads observe the new values.
    pub fn replace(&self, config: Config) {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *guard = config;
    }

    /// Apply an in-place change to the stored values.
    pub fn update(&self, change: impl FnOnce(&mut Config)) {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        change(&mut *guard);
    }

    /// Copy of the values as of this call.
    pub fn snapshot(&self) -> Config {
        self.read(Config::clone)
    }

    fn read<T>(&self, f: impl FnOnce(&Config) -> T) -> T {
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        f(&*guard)
    }
}

impl Preferences for SharedPreferences {
    fn location_timeout(&self) -> Duration {
        self.read(Config::location_timeout)
    }

    fn allow_last_known(&self) -> bool {
        self.read(Config::allow_last_known)
    }

    fn reverse_geocode(&self) -> bool {
        self.read(Config::reverse_geocode)
    }

    fn default_timezone(&self) -> Option<String> {
        self.read(Config::default_timezone)
    }

    fn default_timezone_override(&self) -> bool {
        self.read(Config::default_timezone_override)
    }
}

#[cfg(test)]
mod tests;
