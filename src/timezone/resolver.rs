use std::collections::HashMap;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use once_cell::sync::Lazy;

use super::candidate::TimezoneCandidate;
use super::system::detect_device_zone_id;
use super::tables::{CATCH_ALL_STATE, COUNTRY_ZONES, STATE_ZONES, ZONE_CATALOGUE};
use crate::common::constants::{FALLBACK_ZONE_ID, TEXAS_SPLIT_LONGITUDE, UTC_ZONE_ID};
use crate::geo::Coordinate;

static COUNTRY_INDEX: Lazy<HashMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| COUNTRY_ZONES.iter().copied().collect());

static STATE_INDEX: Lazy<HashMap<String, &'static [&'static str]>> = Lazy::new(|| {
    STATE_ZONES
        .iter()
        .map(|&(country, state, zones)| (state_key(country, state), zones))
        .collect()
});

static CITY_INDEX: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| ZONE_CATALOGUE.iter().copied().collect());

fn state_key(country: &str, state: &str) -> String {
    format!("{country}:{state}")
}

/// Candidate zone ids for a location, before they are checked against the
/// timezone database.
///
/// Rules, first match wins:
/// 1. the country has a single rule set in the country table
/// 2. Texas splits at longitude -104.9172: strictly west is Mountain, the
///    rest (boundary included) is Central
/// 3. the `(country, state)` entry
/// 4. the country's catch-all entry
/// 5. nothing
pub fn possible_zone_ids(
    coordinate: &Coordinate,
    country_code: Option<&str>,
    state: Option<&str>,
) -> &'static [&'static str] {
    let Some(country) = country_code.map(str::trim).filter(|code| !code.is_empty()) else {
        return &[];
    };
    let country = country.to_ascii_uppercase();

    if let Some(zones) = COUNTRY_INDEX.get(country.as_str()).copied() {
        return zones;
    }

    let state = state.map(str::trim).filter(|state| !state.is_empty());

    if country == "US" && state == Some("Texas") {
        return if coordinate.longitude().value() < TEXAS_SPLIT_LONGITUDE {
            &["US/Mountain"]
        } else {
            &["US/Central"]
        };
    }

    if let Some(zones) = state.and_then(|state| STATE_INDEX.get(&state_key(&country, state)).copied()) {
        return zones;
    }

    STATE_INDEX
        .get(&state_key(&country, CATCH_ALL_STATE))
        .copied()
        .unwrap_or(&[])
}

/// City label for a catalogued zone id.
pub fn cities_for(id: &str) -> Option<&'static str> {
    CITY_INDEX.get(id).copied()
}

/// Look a zone up by id. A lookup that silently lands on the generic `GMT`
/// zone for some other id counts as not found.
fn lookup_zone(id: &str) -> Option<Tz> {
    let zone: Tz = id.trim().parse().ok()?;
    if zone.name() == FALLBACK_ZONE_ID && id.trim() != FALLBACK_ZONE_ID {
        return None;
    }
    Some(zone)
}

/// Maps locations and ids to [`TimezoneCandidate`]s.
#[derive(Debug, Clone)]
pub struct TimezoneResolver {
    device_zone_id: String,
}

impl Default for TimezoneResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl TimezoneResolver {
    /// Resolver whose fallback is the detected device zone, or UTC when the
    /// device zone cannot be determined.
    pub fn new() -> Self {
        Self::from_detection(detect_device_zone_id())
    }

    /// Build a resolver from the outcome of device zone detection.
    ///
    /// # Arguments
    /// * `detected` - Result of [`detect_device_zone_id`]
    ///
    /// # Returns
    /// A resolver falling back to the detected zone, or to UTC on failure.
    /// The failure itself is left to the caller to report.
    pub fn from_detection(detected: anyhow::Result<String>) -> Self {
        Self::with_device_zone(detected.unwrap_or_else(|_| UTC_ZONE_ID.to_string()))
    }

    /// Resolver with a fixed device zone.
    ///
    /// # Arguments
    /// * `device_zone_id` - Zone id retried when a lookup falls back to the device
    pub fn with_device_zone(device_zone_id: impl Into<String>) -> Self {
        Self {
            device_zone_id: device_zone_id.into(),
        }
    }

    pub fn device_zone_id(&self) -> &str {
        &self.device_zone_id
    }

    /// The zone selected for a location.
    ///
    /// # Arguments
    /// * `candidates` - Candidates resolved for the location
    /// * `override_zone_id` - Zone id replacing the selection, if any
    ///
    /// # Returns
    /// The override zone when it resolves, else the only candidate, else `None`.
    pub fn select_zone(
        &self,
        candidates: &[TimezoneCandidate],
        override_zone_id: Option<&str>,
    ) -> Option<TimezoneCandidate> {
        override_zone_id
            .and_then(|id| self.get_timezone(id, true))
            .or_else(|| match candidates {
                [only] => Some(only.clone()),
                _ => None,
            })
    }

    /// Candidate timezones for a location, in table order, with offsets as of
    /// now. Ids unknown to the timezone database are skipped.
    pub fn resolve_candidates(
        &self,
        coordinate: &Coordinate,
        country_code: Option<&str>,
        state: Option<&str>,
    ) -> Vec<TimezoneCandidate> {
        self.resolve_candidates_at(coordinate, country_code, state, Utc::now())
    }

    pub fn resolve_candidates_at(
        &self,
        coordinate: &Coordinate,
        country_code: Option<&str>,
        state: Option<&str>,
        instant: DateTime<Utc>,
    ) -> Vec<TimezoneCandidate> {
        possible_zone_ids(coordinate, country_code, state)
            .iter()
            .filter_map(|id| self.get_timezone_at(id, false, instant))
            .collect()
    }

    /// Resolve a zone id. When the id is unknown and `fallback_to_device`
    /// is set, the device zone is tried once.
    pub fn get_timezone(&self, id: &str, fallback_to_device: bool) -> Option<TimezoneCandidate> {
        self.get_timezone_at(id, fallback_to_device, Utc::now())
    }

    pub fn get_timezone_at(
        &self,
        id: &str,
        fallback_to_device: bool,
        instant: DateTime<Utc>,
    ) -> Option<TimezoneCandidate> {
        match lookup_zone(id) {
            Some(zone) => Some(TimezoneCandidate::at(zone, cities_for(zone.name()), instant)),
            None if fallback_to_device => self.get_timezone_at(&self.device_zone_id, false, instant),
            None => None,
        }
    }

    /// Every catalogued zone, in catalogue order.
    pub fn get_all_timezones(&self) -> Vec<TimezoneCandidate> {
        self.get_all_timezones_at(Utc::now())
    }

    pub fn get_all_timezones_at(&self, instant: DateTime<Utc>) -> Vec<TimezoneCandidate> {
        ZONE_CATALOGUE
            .iter()
            .filter_map(|(id, _)| self.get_timezone_at(id, false, instant))
            .collect()
    }
}
