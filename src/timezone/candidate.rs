use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, FixedOffset, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::common::constants::UTC_ZONE_ID;

/// A resolvable timezone together with its UTC offset at a given instant
/// and an optional city label for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimezoneCandidate {
    id: String,
    cities: Option<String>,
    offset_seconds: i32,
    #[serde(skip)]
    zone: Tz,
}

impl TimezoneCandidate {
    /// Capture `zone` with the offset in effect at `instant`.
    pub fn at(zone: Tz, cities: Option<&str>, instant: DateTime<Utc>) -> Self {
        let offset_seconds = zone
            .offset_from_utc_datetime(&instant.naive_utc())
            .fix()
            .local_minus_utc();

        Self {
            id: zone.name().to_string(),
            cities: cities.map(str::to_string),
            offset_seconds,
            zone,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn cities(&self) -> Option<&str> {
        self.cities.as_deref()
    }

    pub fn zone(&self) -> Tz {
        self.zone
    }

    pub fn offset_seconds(&self) -> i32 {
        self.offset_seconds
    }

    pub fn offset(&self) -> FixedOffset {
        // Offsets produced by chrono-tz are always within a day.
        FixedOffset::east_opt(self.offset_seconds).unwrap_or_else(|| Utc.fix())
    }

    pub fn is_utc(&self) -> bool {
        self.id == UTC_ZONE_ID
    }

    /// Offset as `+HH:MM` / `-HH:MM`.
    pub fn format_offset(&self) -> String {
        let sign = if self.offset_seconds < 0 { '-' } else { '+' };
        let total = self.offset_seconds.unsigned_abs();
        format!("{sign}{:02}:{:02}", total / 3600, (total % 3600) / 60)
    }

    /// `(UTC+10:00) Sydney, Melbourne, Canberra`, with the zone id in place
    /// of the cities when no label is known.
    pub fn display_name(&self) -> String {
        let label = self.cities.as_deref().unwrap_or(&self.id);
        format!("(UTC{}) {label}", self.format_offset())
    }

    /// Display position: UTC first, then ascending offset.
    pub fn display_cmp(&self, other: &Self) -> Ordering {
        other
            .is_utc()
            .cmp(&self.is_utc())
            .then(self.offset_seconds.cmp(&other.offset_seconds))
    }
}

impl Ord for TimezoneCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.display_cmp(other)
            .then_with(|| self.id.cmp(&other.id))
            .then_with(|| self.cities.cmp(&other.cities))
    }
}

impl PartialOrd for TimezoneCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TimezoneCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

/// Stable sort into display order. Candidates sharing an offset keep their
/// relative order.
pub fn sort_for_display(candidates: &mut [TimezoneCandidate]) {
    candidates.sort_by(TimezoneCandidate::display_cmp);
}
