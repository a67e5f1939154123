//! Timezone resolution for acquired locations.
//!
//! A location's country code and state are mapped through static tables to
//! an ordered list of candidate IANA zones. Each candidate carries its UTC
//! offset at the time of resolution and, for catalogued zones, a city label
//! for display. Zone data comes from `chrono-tz`.

pub mod candidate;
pub mod resolver;
pub mod system;
mod tables;

pub use candidate::{TimezoneCandidate, sort_for_display};
pub use resolver::{TimezoneResolver, cities_for, possible_zone_ids};
pub use system::detect_device_zone_id;
