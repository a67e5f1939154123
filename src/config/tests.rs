use super::validation::validate_config;
use super::*;
use serial_test::serial;
use std::fs;
use tempfile::tempdir;

fn write_config(dir: &std::path::Path, content: &str) -> std::path::PathBuf {
    let path = dir.join(CONFIG_FILE_NAME);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_defaults_when_keys_missing() {
    let config = Config::default();
    assert_eq!(
        config.location_timeout(),
        Duration::from_secs(DEFAULT_LOCATION_TIMEOUT)
    );
    assert_eq!(config.allow_last_known(), DEFAULT_ALLOW_LAST_KNOWN);
    assert_eq!(config.reverse_geocode(), DEFAULT_REVERSE_GEOCODE);
    assert_eq!(config.default_timezone(), None);
    assert!(!config.default_timezone_override());
    assert!(!config.has_position());
}

#[test]
fn test_load_from_path_parses_all_keys() {
    let dir = tempdir().unwrap();
    let path = write_config(
        dir.path(),
        r#"
location_timeout = 15
allow_last_known = false
reverse_geocode = false
default_timezone = "Europe/Berlin"
default_timezone_override = true
latitude = 52.52
longitude = 13.405
place_name = "Berlin"
country_code = "DE"
country_name = "Germany"
state = "Berlin"
"#,
    );

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.location_timeout(), Duration::from_secs(15));
    assert!(!config.allow_last_known());
    assert!(!config.reverse_geocode());
    assert_eq!(config.default_timezone().as_deref(), Some("Europe/Berlin"));
    assert!(config.default_timezone_override());
    assert!(config.has_position());
    assert_eq!(config.country_code.as_deref(), Some("DE"));
}

#[test]
fn test_load_from_path_rejects_bad_toml() {
    let dir = tempdir().unwrap();
    let path = write_config(dir.path(), "location_timeout = \"soon\"");
    let error = load_from_path(&path).unwrap_err();
    assert!(format!("{error:#}").contains("Failed to parse config"));
}

#[test]
fn test_load_from_missing_path_fails() {
    let dir = tempdir().unwrap();
    assert!(load_from_path(&dir.path().join("absent.toml")).is_err());
}

#[test]
#[serial]
fn test_load_without_file_uses_defaults() {
    let temp_dir = tempdir().unwrap();

    let original = std::env::var("XDG_CONFIG_HOME").ok();
    unsafe {
        std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());
    }

    let result = Config::load();

    unsafe {
        match original {
            Some(val) => std::env::set_var("XDG_CONFIG_HOME", val),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
    }

    assert_eq!(result.unwrap(), Config::default());
}

#[test]
#[serial]
fn test_config_path_uses_xdg_config_home() {
    let temp_dir = tempdir().unwrap();

    let original = std::env::var("XDG_CONFIG_HOME").ok();
    unsafe {
        std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());
    }

    let path = get_config_path();

    unsafe {
        match original {
            Some(val) => std::env::set_var("XDG_CONFIG_HOME", val),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
    }

    // dirs only honors XDG_CONFIG_HOME on Linux
    if cfg!(target_os = "linux") && get_custom_config_dir().is_none() {
        assert_eq!(
            path.unwrap(),
            temp_dir.path().join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
        );
    }
}

#[test]
fn test_validation_timeout_range() {
    for timeout in [MINIMUM_LOCATION_TIMEOUT, DEFAULT_LOCATION_TIMEOUT, MAXIMUM_LOCATION_TIMEOUT] {
        let config = Config {
            location_timeout: Some(timeout),
            ..Default::default()
        };
        assert!(validate_config(&config).is_ok(), "timeout {timeout} should be valid");
    }

    for timeout in [0, MAXIMUM_LOCATION_TIMEOUT + 1] {
        let config = Config {
            location_timeout: Some(timeout),
            ..Default::default()
        };
        let error = validate_config(&config).unwrap_err().to_string();
        assert!(error.contains("location_timeout"), "unexpected error: {error}");
    }
}

#[test]
fn test_timezone_override_requires_flag() {
    let mut config = Config {
        default_timezone: Some(" Europe/Berlin ".to_string()),
        ..Default::default()
    };
    assert_eq!(config.timezone_override(), None);

    config.default_timezone_override = Some(true);
    assert_eq!(config.timezone_override().as_deref(), Some("Europe/Berlin"));

    let shared = SharedPreferences::new(config);
    shared.update(|c| c.default_timezone_override = Some(false));
    assert_eq!(shared.timezone_override(), None);
}

#[test]
fn test_validation_position() {
    let valid = Config {
        latitude: Some(-37.8136),
        longitude: Some(144.9631),
        ..Default::default()
    };
    assert!(validate_config(&valid).is_ok());

    let off_globe = Config {
        latitude: Some(91.0),
        longitude: Some(0.0),
        ..Default::default()
    };
    assert!(validate_config(&off_globe).is_err());

    let half = Config {
        latitude: Some(10.0),
        ..Default::default()
    };
    assert!(validate_config(&half).is_err());
}

#[test]
fn test_validation_default_timezone() {
    let known = Config {
        default_timezone: Some("America/Chicago".to_string()),
        default_timezone_override: Some(true),
        ..Default::default()
    };
    assert!(validate_config(&known).is_ok());

    let unknown = Config {
        default_timezone: Some("Mars/Olympus_Mons".to_string()),
        ..Default::default()
    };
    assert!(validate_config(&unknown).is_err());

    let override_without_zone = Config {
        default_timezone_override: Some(true),
        ..Default::default()
    };
    assert!(validate_config(&override_without_zone).is_err());
}

#[test]
fn test_validation_country_code() {
    let bad = Config {
        country_code: Some("USA".to_string()),
        ..Default::default()
    };
    assert!(validate_config(&bad).is_err());
}

#[test]
fn test_shared_preferences_observe_replacement() {
    let shared = SharedPreferences::new(Config::default());
    assert!(!shared.default_timezone_override());

    shared.update(|config| {
        config.default_timezone = Some("Asia/Tokyo".to_string());
        config.default_timezone_override = Some(true);
    });
    assert!(shared.default_timezone_override());
    assert_eq!(shared.default_timezone().as_deref(), Some("Asia/Tokyo"));

    shared.replace(Config::default());
    assert!(!shared.default_timezone_override());
    assert_eq!(shared.snapshot(), Config::default());
}

#[test]
fn test_blank_default_timezone_is_unset() {
    let config = Config {
        default_timezone: Some("   ".to_string()),
        ..Default::default()
    };
    assert_eq!(config.default_timezone(), None);
}
