use std::sync::Arc;

use super::result::LocationResult;
use super::service::{Address, GeocodingError, GeocodingService};
use crate::common::constants::GEOCODER_MAX_RESULTS;
use crate::config::Preferences;
use crate::geo::Coordinate;
use crate::timezone::TimezoneResolver;

/// Turns coordinates into [`LocationResult`]s, and place names into
/// coordinates.
///
/// The geocoding service is optional. Without it, or when it fails, results
/// carry only geographic data plus whatever zones resolve without a country.
pub struct ReverseGeocoder {
    service: Option<Arc<dyn GeocodingService>>,
    resolver: Arc<TimezoneResolver>,
    preferences: Arc<dyn Preferences>,
    debug_enabled: bool,
}

impl ReverseGeocoder {
    pub fn new(
        service: Option<Arc<dyn GeocodingService>>,
        resolver: Arc<TimezoneResolver>,
        preferences: Arc<dyn Preferences>,
        debug_enabled: bool,
    ) -> Self {
        Self {
            service,
            resolver,
            preferences,
            debug_enabled,
        }
    }

    pub fn resolver(&self) -> &TimezoneResolver {
        &self.resolver
    }

    /// Resolve a coordinate to a named location with candidate zones.
    /// Geocoding failures degrade the result; they are never returned.
    ///
    /// # Arguments
    /// * `coordinate` - Position of the winning fix
    ///
    /// # Returns
    /// A result with address fields when the service answered, zone
    /// candidates and the selected zone.
    pub fn resolve(&self, coordinate: Coordinate) -> LocationResult {
        let mut result = LocationResult::from_coordinate(coordinate);

        if let Some(address) = self.lookup_address(&coordinate) {
            apply_address(&mut result, &address);
        }

        self.resolve_time_zones(&mut result);
        result
    }

    fn lookup_address(&self, coordinate: &Coordinate) -> Option<Address> {
        let service = self.service.as_ref()?;

        if !self.preferences.reverse_geocode() {
            return None;
        }

        let latitude = coordinate.latitude().value();
        let longitude = coordinate.longitude().value();

        match service.from_location(latitude, longitude, GEOCODER_MAX_RESULTS) {
            Ok(addresses) => {
                let address = addresses.into_iter().next();
                if address.is_none() && self.debug_enabled {
                    log_debug!("No address found for {}", coordinate.to_abbreviated());
                }
                address
            }
            Err(e) => {
                if self.debug_enabled {
                    log_warning!("Reverse geocoding failed, using coordinates only: {e}");
                }
                None
            }
        }
    }

    /// Forward geocoding. Each returned address becomes a result with its own
    /// zone candidates; the default-zone override is read on every call.
    pub fn search(&self, query: &str) -> Result<Vec<LocationResult>, GeocodingError> {
        let service = self.service.as_ref().ok_or(GeocodingError::Unavailable)?;

        let addresses = service.from_name(query, GEOCODER_MAX_RESULTS)?;

        let results = addresses
            .into_iter()
            .take(GEOCODER_MAX_RESULTS)
            .filter_map(|address| {
                let (Some(lat), Some(lon)) = (address.latitude, address.longitude) else {
                    if self.debug_enabled {
                        log_debug!("Skipping search result without a position");
                    }
                    return None;
                };

                let coordinate = match Coordinate::new(lat, lon) {
                    Ok(coordinate) => coordinate,
                    Err(e) => {
                        if self.debug_enabled {
                            log_warning!("Skipping search result with invalid position: {e}");
                        }
                        return None;
                    }
                };

                let mut result = LocationResult::from_coordinate(coordinate);
                apply_address(&mut result, &address);
                self.resolve_time_zones(&mut result);
                Some(result)
            })
            .collect();

        Ok(results)
    }

    fn resolve_time_zones(&self, result: &mut LocationResult) {
        result.time_zones = self.resolver.resolve_candidates(
            &result.coordinate,
            result.country_code.as_deref(),
            result.state.as_deref(),
        );

        let override_zone_id = self.preferences.timezone_override();
        result.time_zone = self
            .resolver
            .select_zone(&result.time_zones, override_zone_id.as_deref());

        if self.debug_enabled
            && let Some(zone_id) = override_zone_id
            && result.time_zone.as_ref().is_none_or(|zone| zone.id() != zone_id)
        {
            log_warning!("Default timezone '{zone_id}' could not be resolved");
        }

        if self.debug_enabled {
            log_debug!(
                "{} zone candidate(s) for {}, selected: {}",
                result.time_zones.len(),
                result.coordinate.to_abbreviated(),
                result
                    .time_zone
                    .as_ref()
                    .map_or("none", |zone| zone.id())
            );
        }
    }
}

/// Copy the non-empty address fields onto a result.
///
/// The name prefers the locality. When a distinct feature name is also
/// present the two are joined as `feature, locality`.
fn apply_address(result: &mut LocationResult, address: &Address) {
    let locality = non_empty(&address.locality);
    let feature = non_empty(&address.feature_name);

    result.name = match (feature, locality) {
        (Some(feature), Some(locality)) if feature != locality => {
            Some(format!("{feature}, {locality}"))
        }
        (_, Some(locality)) => Some(locality.to_string()),
        (Some(feature), None) => Some(feature.to_string()),
        (None, None) => None,
    };

    result.country_code = non_empty(&address.country_code).map(str::to_string);
    result.country_name = non_empty(&address.country_name).map(str::to_string);
    result.state = non_empty(&address.admin_area).map(str::to_string);
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|value| !value.is_empty())
}
