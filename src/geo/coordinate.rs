//! Latitude/longitude pairs and their persisted textual form.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::angle::{Accuracy, Latitude, Longitude, Punctuation};
use super::error::AngleError;

/// An immutable geographic coordinate.
///
/// The persisted form is `DDMMSS[N|S] DDDMMSS[E|W]`, e.g. `513026N 0000739W`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    latitude: Latitude,
    longitude: Longitude,
}

impl Coordinate {
    /// Build a coordinate from signed decimal degrees.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, AngleError> {
        Ok(Self {
            latitude: Latitude::from_degrees(latitude)?,
            longitude: Longitude::from_degrees(longitude)?,
        })
    }

    pub fn from_parts(latitude: Latitude, longitude: Longitude) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Build a coordinate from separately formatted latitude and longitude.
    pub fn from_strings(latitude: &str, longitude: &str) -> Result<Self, AngleError> {
        Ok(Self {
            latitude: Latitude::parse(latitude)?,
            longitude: Longitude::parse(longitude)?,
        })
    }

    /// Parse a combined string such as `513026N 0000739W` or
    /// `51°30′26″N, 000°07′39″W`. The latitude must come first.
    pub fn parse(text: &str) -> Result<Self, AngleError> {
        let split = text
            .char_indices()
            .find(|(_, c)| matches!(c.to_ascii_uppercase(), 'N' | 'S'))
            .map(|(index, c)| index + c.len_utf8())
            .ok_or_else(|| AngleError::Malformed {
                kind: "coordinate",
                text: text.to_string(),
            })?;

        let (latitude, rest) = text.split_at(split);
        let longitude = rest.trim_start_matches(|c: char| c == ',' || c.is_whitespace());
        Self::from_strings(latitude, longitude)
    }

    pub fn latitude(&self) -> &Latitude {
        &self.latitude
    }

    pub fn longitude(&self) -> &Longitude {
        &self.longitude
    }

    /// Persisted seconds-accuracy form without punctuation.
    pub fn to_abbreviated(&self) -> String {
        format!(
            "{} {}",
            self.latitude.to_abbreviated(),
            self.longitude.to_abbreviated()
        )
    }

    pub fn to_formatted(&self, accuracy: Accuracy, punctuation: Punctuation) -> String {
        format!(
            "{} {}",
            self.latitude.format(accuracy, punctuation),
            self.longitude.format(accuracy, punctuation)
        )
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_formatted(Accuracy::Seconds, Punctuation::Standard))
    }
}

impl FromStr for Coordinate {
    type Err = AngleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Coordinate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_abbreviated())
    }
}

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Coordinate::parse(&text).map_err(D::Error::custom)
    }
}
