//! Implementation of the zones command.
//!
//! Lists the candidate timezones for a location, or the whole catalogue with
//! `--all`. When the preferences enable the default timezone override, the
//! override zone is shown as the selection.

use anyhow::{Context, Result};

use crate::args::ZonesQuery;
use crate::config::{Config, Preferences};
use crate::geo::{Coordinate, Latitude, Longitude};
use crate::timezone::{TimezoneCandidate, TimezoneResolver, sort_for_display};

/// Parse a command-line angle: signed decimal degrees or any arc notation
/// with a hemisphere letter.
pub fn parse_coordinate_args(latitude: &str, longitude: &str) -> Result<Coordinate> {
    let lat = match latitude.trim().parse::<f64>() {
        Ok(value) => Latitude::from_degrees(value),
        Err(_) => Latitude::parse(latitude),
    }
    .with_context(|| format!("Invalid latitude '{latitude}'"))?;

    let lon = match longitude.trim().parse::<f64>() {
        Ok(value) => Longitude::from_degrees(value),
        Err(_) => Longitude::parse(longitude),
    }
    .with_context(|| format!("Invalid longitude '{longitude}'"))?;

    Ok(Coordinate::from_parts(lat, lon))
}

/// Candidates for a query together with the zone that would be selected.
pub fn zones_for_query(
    resolver: &TimezoneResolver,
    preferences: &dyn Preferences,
    query: &ZonesQuery,
) -> Result<(Vec<TimezoneCandidate>, Option<TimezoneCandidate>)> {
    let mut candidates = match query {
        ZonesQuery::All => resolver.get_all_timezones(),
        ZonesQuery::At {
            latitude,
            longitude,
            country_code,
            state,
        } => {
            let coordinate = parse_coordinate_args(latitude, longitude)?;
            resolver.resolve_candidates(&coordinate, country_code.as_deref(), state.as_deref())
        }
    };

    // The catalogue is never a location's candidate list.
    let selectable: &[TimezoneCandidate] = match query {
        ZonesQuery::All => &[],
        ZonesQuery::At { .. } => &candidates,
    };
    let selected = resolver.select_zone(selectable, preferences.timezone_override().as_deref());

    sort_for_display(&mut candidates);
    Ok((candidates, selected))
}

/// Handle the zones command from the CLI.
pub fn handle_zones_command(
    config: &Config,
    query: &ZonesQuery,
    json: bool,
    debug_enabled: bool,
) -> Result<()> {
    let resolver = super::device_resolver(!json);
    if debug_enabled && !json {
        log_pipe!();
        log_debug!("Device timezone: {}", resolver.device_zone_id());
    }

    let (candidates, selected) = zones_for_query(&resolver, config, query)?;

    if json {
        return super::print_json(&serde_json::json!({
            "time_zones": candidates,
            "time_zone": selected,
        }));
    }

    log_version!();
    match query {
        ZonesQuery::All => log_block_start!("Known timezones ({}):", candidates.len()),
        ZonesQuery::At { .. } if candidates.is_empty() => {
            log_block_start!("No timezone is known for this location");
        }
        ZonesQuery::At { .. } => log_block_start!("Candidate timezones ({}):", candidates.len()),
    }
    for line in super::candidate_lines(&candidates, selected.as_ref()) {
        log_indented!("{line}");
    }
    if let Some(zone) = selected {
        log_pipe!();
        log_info!("Selected: {}", zone.display_name());
    }
    log_end!();
    Ok(())
}

/// Display detailed help for the zones command (help subcommand)
pub fn display_help() {
    log_version!();
    log_block_start!("zones - List candidate timezones");
    log_block_start!("Usage:");
    log_indented!("almanac-geo zones [--json] <latitude> <longitude> [country] [state]");
    log_indented!("almanac-geo zones [--json] --all");
    log_block_start!("Arguments:");
    log_indented!("latitude   Decimal degrees (-37.81) or arc notation (37°48′49″S)");
    log_indented!("longitude  Decimal degrees (144.96) or arc notation (144°57′47″E)");
    log_indented!("country    ISO 3166 two-letter country code");
    log_indented!("state      State or province name, for countries spanning zones");
    log_block_start!("Examples:");
    log_indented!("almanac-geo zones 31.76 -106.48 US Texas");
    log_indented!("almanac-geo zones -37.81 144.96 AU Victoria");
    log_end!();
}
