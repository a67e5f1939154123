//! Command-line command handlers for almanac-geo.
//!
//! Each command is implemented in its own submodule. The helpers here render
//! the value types every command prints, either through the logger or as JSON.

pub mod coords;
pub mod help;
pub mod locate;
pub mod zones;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::{self, Config};
use crate::geocoder::LocationResult;
use crate::timezone::{TimezoneCandidate, TimezoneResolver, detect_device_zone_id};

/// Apply a `--config` directory and load the preferences file.
///
/// # Arguments
/// * `config_dir` - Directory given with `--config`, if any
/// * `debug_enabled` - Whether to log the loaded values
///
/// # Errors
/// Returns an error if the directory was already set or the file is invalid.
pub fn load_config(config_dir: Option<String>, debug_enabled: bool) -> Result<Config> {
    if let Some(dir) = config_dir {
        config::set_config_dir(Some(dir))?;
    }
    let config = Config::load()?;
    if debug_enabled {
        config.log_config();
    }
    Ok(config)
}

/// Resolver for the device's own zone.
///
/// A detection failure falls back to UTC and is only reported when `report`
/// is set, so JSON output stays parseable.
pub(crate) fn device_resolver(report: bool) -> TimezoneResolver {
    resolver_from_detection(detect_device_zone_id(), report)
}

fn resolver_from_detection(detected: Result<String>, report: bool) -> TimezoneResolver {
    if report && let Err(ref e) = detected {
        log_pipe!();
        log_warning!("Could not detect the device timezone, using UTC: {e}");
    }
    TimezoneResolver::from_detection(detected)
}

/// Print `value` as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    crate::common::logger::write_output(&format!("{json}\n"));
    Ok(())
}

/// Lines describing a candidate list, marking the selected zone.
pub(crate) fn candidate_lines(
    candidates: &[TimezoneCandidate],
    selected: Option<&TimezoneCandidate>,
) -> Vec<String> {
    candidates
        .iter()
        .map(|candidate| {
            let marker = if selected.is_some_and(|s| s.id() == candidate.id()) {
                "*"
            } else {
                " "
            };
            format!("{marker} {} [{}]", candidate.display_name(), candidate.id())
        })
        .collect()
}

/// Log a location result as a block.
pub(crate) fn log_location_result(result: &LocationResult) {
    log_block_start!("Location: {}", result.display_name());
    log_indented!("Coordinate: {}", result.coordinate);
    log_indented!("Abbreviated: {}", result.coordinate.to_abbreviated());
    match (&result.country_name, &result.country_code) {
        (Some(name), Some(code)) => log_indented!("Country: {name} ({code})"),
        (Some(name), None) => log_indented!("Country: {name}"),
        (None, Some(code)) => log_indented!("Country: {code}"),
        (None, None) => {}
    }
    if let Some(ref state) = result.state {
        log_indented!("State: {state}");
    }

    if result.time_zones.is_empty() && result.time_zone.is_none() {
        log_indented!("Timezone: unknown");
        return;
    }
    if let Some(ref zone) = result.time_zone {
        log_indented!("Timezone: {}", zone.display_name());
    }
    if result.time_zones.len() > 1 {
        log_indented!("Candidates:");
        for line in candidate_lines(&result.time_zones, result.time_zone.as_ref()) {
            log_indented!("  {line}");
        }
    }
}
