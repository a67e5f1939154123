//! Application-wide constants and defaults.
//!
//! Preference defaults and limits, provider names, and the geographic
//! constants used by timezone resolution live here so that configuration
//! validation, the locater and the resolver agree on a single value.

// # Preference Defaults

/// Default location acquisition timeout in seconds.
pub const DEFAULT_LOCATION_TIMEOUT: u64 = 60;
/// Shortest accepted location timeout in seconds.
pub const MINIMUM_LOCATION_TIMEOUT: u64 = 1;
/// Longest accepted location timeout in seconds.
pub const MAXIMUM_LOCATION_TIMEOUT: u64 = 600;

pub const DEFAULT_ALLOW_LAST_KNOWN: bool = true;
pub const DEFAULT_REVERSE_GEOCODE: bool = true;
pub const DEFAULT_TIMEZONE_OVERRIDE: bool = false;

// # Positioning Providers

/// Satellite positioning provider name.
pub const GPS_PROVIDER: &str = "gps";
/// Cell/Wi-Fi network positioning provider name.
pub const NETWORK_PROVIDER: &str = "network";

// # Geocoding

/// Only the first address returned by a geocoding service is ever used.
pub const GEOCODER_MAX_RESULTS: usize = 1;

// # Timezone Resolution

/// Longitude dividing Mountain (west) from Central (east) time in Texas.
pub const TEXAS_SPLIT_LONGITUDE: f64 = -104.9172;

/// Zone id returned by the platform for unrecognized identifiers.
pub const FALLBACK_ZONE_ID: &str = "GMT";

/// Zone id that always sorts first among candidates.
pub const UTC_ZONE_ID: &str = "UTC";

// # Configuration Files

pub const CONFIG_DIR_NAME: &str = "almanac-geo";
pub const CONFIG_FILE_NAME: &str = "almanac-geo.toml";

// # Exit Codes

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

// # Test Constants

#[cfg(any(test, feature = "testing-support"))]
pub mod test_constants {
    /// Greenwich, used where the exact location does not matter.
    pub const TEST_GREENWICH_LATITUDE: f64 = 51.4769;
    pub const TEST_GREENWICH_LONGITUDE: f64 = -0.0005;

    /// Melbourne, Victoria.
    pub const TEST_MELBOURNE_LATITUDE: f64 = -37.8136;
    pub const TEST_MELBOURNE_LONGITUDE: f64 = 144.9631;

    /// El Paso, Texas (west of the Mountain/Central split).
    pub const TEST_EL_PASO_LONGITUDE: f64 = -106.4850;
    /// Austin, Texas (east of the split).
    pub const TEST_AUSTIN_LONGITUDE: f64 = -97.7431;
    pub const TEST_TEXAS_LATITUDE: f64 = 31.0;

    /// Short timeout in seconds for race tests.
    pub const TEST_SHORT_TIMEOUT: u64 = 1;
}
