use serde::Serialize;

use crate::geo::Coordinate;
use crate::timezone::TimezoneCandidate;

/// A geocoded location: where it is, what it is called, and which zones it
/// may be in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationResult {
    pub coordinate: Coordinate,
    pub name: Option<String>,
    pub country_code: Option<String>,
    pub country_name: Option<String>,
    pub state: Option<String>,
    /// Candidate zones in resolution order. May be empty.
    pub time_zones: Vec<TimezoneCandidate>,
    /// The selected zone: the only candidate, or the user's override.
    pub time_zone: Option<TimezoneCandidate>,
}

impl LocationResult {
    /// A result carrying only the coordinate.
    pub fn from_coordinate(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            name: None,
            country_code: None,
            country_name: None,
            state: None,
            time_zones: Vec::new(),
            time_zone: None,
        }
    }

    /// Name for display, falling back to the formatted coordinate.
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => self.coordinate.to_string(),
        }
    }
}
