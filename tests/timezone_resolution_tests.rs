use almanac_geo::common::constants::TEXAS_SPLIT_LONGITUDE;
use almanac_geo::geo::Coordinate;
use almanac_geo::timezone::{TimezoneResolver, possible_zone_ids};
use chrono::{TimeZone, Utc};
use proptest::prelude::*;

fn coordinate(lat: f64, lon: f64) -> Coordinate {
    Coordinate::new(lat, lon).unwrap()
}

/// Country codes covering every resolution rule, plus unknown and blank codes
fn country_strategy() -> impl Strategy<Value = Option<&'static str>> {
    prop_oneof![
        Just(None),
        Just(Some("US")),
        Just(Some("us")),
        Just(Some("AU")),
        Just(Some("CA")),
        Just(Some("BR")),
        Just(Some("RU")),
        Just(Some("GB")),
        Just(Some("JP")),
        Just(Some("ZZ")),
        Just(Some("")),
    ]
}

fn state_strategy() -> impl Strategy<Value = Option<&'static str>> {
    prop_oneof![
        Just(None),
        Just(Some("Texas")),
        Just(Some("California")),
        Just(Some("Victoria")),
        Just(Some("Queensland")),
        Just(Some("Ontario")),
        Just(Some("Nowhere")),
    ]
}

proptest! {
    /// Same inputs, same ordered list
    #[test]
    fn test_resolution_is_deterministic(
        lat in -90.0f64..=90.0,
        lon in -180.0f64..=180.0,
        country in country_strategy(),
        state in state_strategy(),
    ) {
        let at = coordinate(lat, lon);
        let first = possible_zone_ids(&at, country, state);
        let second = possible_zone_ids(&at, country, state);
        prop_assert_eq!(first, second);
    }

    /// Country-level entries ignore the coordinate and the state
    #[test]
    fn test_country_rule_wins(
        lat in -90.0f64..=90.0,
        lon in -180.0f64..=180.0,
        state in state_strategy(),
    ) {
        prop_assert_eq!(
            possible_zone_ids(&coordinate(lat, lon), Some("JP"), state),
            &["Asia/Tokyo"][..]
        );
    }

    #[test]
    fn test_west_texas_is_mountain(lon in -106.65f64..TEXAS_SPLIT_LONGITUDE) {
        prop_assert_eq!(
            possible_zone_ids(&coordinate(31.5, lon), Some("US"), Some("Texas")),
            &["US/Mountain"][..]
        );
    }

    #[test]
    fn test_east_texas_is_central(lon in TEXAS_SPLIT_LONGITUDE..-93.5f64) {
        prop_assert_eq!(
            possible_zone_ids(&coordinate(31.5, lon), Some("US"), Some("Texas")),
            &["US/Central"][..]
        );
    }
}

#[test]
fn test_texas_reference_longitudes() {
    let west = possible_zone_ids(&coordinate(31.0, -105.0), Some("US"), Some("Texas"));
    let east = possible_zone_ids(&coordinate(31.0, -104.0), Some("US"), Some("Texas"));
    assert_eq!(west, ["US/Mountain"]);
    assert_eq!(east, ["US/Central"]);
}

#[test]
fn test_australian_states() {
    let melbourne = coordinate(-37.8136, 144.9631);

    assert_eq!(
        possible_zone_ids(&melbourne, Some("AU"), Some("Victoria")),
        ["Australia/Sydney"]
    );
    assert_eq!(
        possible_zone_ids(&melbourne, Some("AU"), None),
        [
            "Australia/Adelaide",
            "Australia/Brisbane",
            "Australia/Darwin",
            "Australia/Hobart",
            "Australia/Perth",
            "Australia/Sydney",
        ]
    );
}

#[test]
fn test_resolver_builds_candidates_in_table_order() {
    let resolver = TimezoneResolver::with_device_zone("UTC");
    let january = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
    let candidates =
        resolver.resolve_candidates_at(&coordinate(-25.0, 135.0), Some("AU"), None, january);

    let ids: Vec<&str> = candidates.iter().map(|c| c.id()).collect();
    assert_eq!(ids.len(), 6);
    assert_eq!(ids[0], "Australia/Adelaide");
    assert_eq!(candidates[0].display_name(), "(UTC+10:30) Adelaide");
}

#[test]
fn test_unknown_zone_falls_back_to_device_once() {
    let resolver = TimezoneResolver::with_device_zone("Europe/Oslo");
    let found = resolver.get_timezone("Not/AZone", true).unwrap();
    assert_eq!(found.id(), "Europe/Oslo");
    assert!(resolver.get_timezone("Not/AZone", false).is_none());
}
