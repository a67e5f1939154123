//! Address lookup and timezone assignment for coordinates.
//!
//! [`ReverseGeocoder`] combines an optional [`GeocodingService`] with the
//! [`crate::timezone::TimezoneResolver`] to produce [`LocationResult`]s.

pub mod result;
pub mod reverse;
pub mod service;

pub use result::LocationResult;
pub use reverse::ReverseGeocoder;
pub use service::{Address, ConfiguredGeocoder, GeocodingError, GeocodingService};

#[cfg(test)]
pub use service::MockGeocodingService;
