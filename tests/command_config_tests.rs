use almanac_geo::args::ZonesQuery;
use almanac_geo::commands::{self, zones};
use almanac_geo::common::constants::CONFIG_FILE_NAME;
use almanac_geo::common::logger::Log;
use almanac_geo::config::Preferences;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

// The configuration directory is set once per process, so this file holds a
// single test.
#[test]
fn test_config_dir_flows_into_zones_command() {
    Log::set_enabled(false);
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "location_timeout = 5\n\
         default_timezone = \"Europe/Berlin\"\n\
         default_timezone_override = true\n",
    )
    .unwrap();

    let config_dir = dir.path().to_string_lossy().into_owned();
    let config = commands::load_config(Some(config_dir.clone()), false).unwrap();
    assert_eq!(config.location_timeout(), Duration::from_secs(5));
    assert_eq!(config.timezone_override().as_deref(), Some("Europe/Berlin"));

    // A second directory is refused.
    assert!(commands::load_config(Some(config_dir), false).is_err());

    zones::handle_zones_command(&config, &ZonesQuery::All, false, false).unwrap();
}
