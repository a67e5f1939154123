//! Configuration validation functionality.
//!
//! Rejects values the locater or resolver could not act on: timeouts outside
//! the accepted window, positions off the globe, and unknown zone ids.

use anyhow::Result;
use chrono_tz::Tz;

use super::Config;
use crate::common::constants::*;
use crate::geo::Coordinate;

/// Validate a loaded configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    if let Some(timeout) = config.location_timeout
        && !(MINIMUM_LOCATION_TIMEOUT..=MAXIMUM_LOCATION_TIMEOUT).contains(&timeout)
    {
        anyhow::bail!(
            "location_timeout ({} seconds) must be between {} and {} seconds",
            timeout,
            MINIMUM_LOCATION_TIMEOUT,
            MAXIMUM_LOCATION_TIMEOUT
        );
    }

    if let Some(lat) = config.latitude
        && !(-90.0..=90.0).contains(&lat)
    {
        anyhow::bail!("latitude must be between -90 and 90 degrees (got {})", lat);
    }

    if let Some(lon) = config.longitude
        && !(-180.0..=180.0).contains(&lon)
    {
        anyhow::bail!(
            "longitude must be between -180 and 180 degrees (got {})",
            lon
        );
    }

    match (config.latitude, config.longitude) {
        (Some(lat), Some(lon)) => {
            Coordinate::new(lat, lon)
                .map_err(|e| anyhow::anyhow!("Configured position is invalid: {e}"))?;
        }
        (Some(_), None) => anyhow::bail!("latitude is set but longitude is missing"),
        (None, Some(_)) => anyhow::bail!("longitude is set but latitude is missing"),
        (None, None) => {}
    }

    if let Some(ref zone) = config.default_timezone {
        validate_zone_id(zone)?;
    }

    if config.default_timezone_override == Some(true) && config.default_timezone.is_none() {
        anyhow::bail!("default_timezone_override is enabled but no default_timezone is set");
    }

    if let Some(ref code) = config.country_code
        && (code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()))
    {
        anyhow::bail!(
            "country_code '{}' must be a two-letter ISO 3166 code",
            code
        );
    }

    Ok(())
}

/// Check that a zone id names a zone in the timezone database.
pub(crate) fn validate_zone_id(zone: &str) -> Result<()> {
    let trimmed = zone.trim();
    if trimmed.is_empty() {
        anyhow::bail!("default_timezone must not be empty");
    }
    trimmed.parse::<Tz>().map_err(|_| {
        anyhow::anyhow!(
            "default_timezone '{}' is not a known timezone (expected an id like 'Europe/Berlin')",
            zone
        )
    })?;
    Ok(())
}
