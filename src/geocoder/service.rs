//! Geocoding collaborator interface.

use thiserror::Error;

#[cfg(test)]
use mockall::automock;

use crate::config::Config;

/// One address returned by a geocoding service. Any field may be missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Address {
    pub locality: Option<String>,
    pub feature_name: Option<String>,
    pub country_code: Option<String>,
    pub country_name: Option<String>,
    pub admin_area: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeocodingError {
    #[error("geocoding service is unavailable")]
    Unavailable,

    #[error("permission to use the geocoding service was denied")]
    PermissionDenied,

    #[error("geocoding service failed: {0}")]
    Service(String),
}

/// Forward and reverse address lookup.
///
/// Implementations may return more than `max_results` addresses; callers
/// only use the first.
#[cfg_attr(test, automock)]
pub trait GeocodingService: Send + Sync {
    fn from_location(
        &self,
        latitude: f64,
        longitude: f64,
        max_results: usize,
    ) -> Result<Vec<Address>, GeocodingError>;

    fn from_name(&self, query: &str, max_results: usize) -> Result<Vec<Address>, GeocodingError>;
}

/// Geocoding service answering every lookup with the address from the
/// preferences file.
#[derive(Debug, Clone)]
pub struct ConfiguredGeocoder {
    address: Address,
}

impl ConfiguredGeocoder {
    pub fn new(address: Address) -> Self {
        Self { address }
    }

    /// Build from the `place_name`, `country_*` and `state` keys. Returns
    /// `None` when none of them are set.
    pub fn from_config(config: &Config) -> Option<Self> {
        let address = Address {
            locality: config.place_name.clone(),
            feature_name: None,
            country_code: config.country_code.clone(),
            country_name: config.country_name.clone(),
            admin_area: config.state.clone(),
            latitude: config.latitude,
            longitude: config.longitude,
        };

        let has_address = address.locality.is_some()
            || address.country_code.is_some()
            || address.country_name.is_some()
            || address.admin_area.is_some();

        has_address.then(|| Self::new(address))
    }
}

impl GeocodingService for ConfiguredGeocoder {
    fn from_location(
        &self,
        _latitude: f64,
        _longitude: f64,
        max_results: usize,
    ) -> Result<Vec<Address>, GeocodingError> {
        Ok(std::iter::once(self.address.clone())
            .take(max_results)
            .collect())
    }

    fn from_name(&self, query: &str, max_results: usize) -> Result<Vec<Address>, GeocodingError> {
        let query = query.trim().to_lowercase();
        let matches = [&self.address.locality, &self.address.country_name, &self.address.admin_area]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&query));

        if query.is_empty() || !matches {
            return Ok(Vec::new());
        }
        Ok(std::iter::once(self.address.clone())
            .take(max_results)
            .collect())
    }
}
