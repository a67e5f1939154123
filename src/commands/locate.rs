//! Implementation of the locate command.
//!
//! Runs one location session against the position and address configured in
//! the preferences file, then prints the single outcome. SIGINT or SIGTERM
//! cancels the session while it waits.

use anyhow::{Result, bail};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::Duration;

use crate::common::utils::private_path;
use crate::config::{Config, Preferences, SharedPreferences, get_config_path};
use crate::geocoder::{ConfiguredGeocoder, GeocodingService, ReverseGeocoder};
use crate::io::signals::setup_signal_handler;
use crate::locater::{
    ChannelListener, ConfiguredPositioning, LocationOutcome, LocationType, Locater,
    PositioningService,
};

/// How often the wait loop checks for a shutdown signal.
const SIGNAL_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Wait for the session outcome. Returns `None` when the wait was
/// interrupted, after cancelling the session.
pub fn wait_for_outcome(
    locater: &Locater,
    outcomes: &Receiver<LocationOutcome>,
    running: &AtomicBool,
) -> Option<LocationOutcome> {
    loop {
        if !running.load(Ordering::SeqCst) {
            locater.cancel();
            return None;
        }
        match outcomes.recv_timeout(SIGNAL_POLL_INTERVAL) {
            Ok(outcome) => return Some(outcome),
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => return None,
        }
    }
}

/// Handle the locate command from the CLI.
pub fn handle_locate_command(
    config: Config,
    allow_last_known: bool,
    json: bool,
    debug_enabled: bool,
) -> Result<()> {
    let service = ConfiguredPositioning::from_config(&config)
        .map(|positioning| Arc::new(positioning) as Arc<dyn PositioningService>);
    let geocoding = ConfiguredGeocoder::from_config(&config)
        .map(|geocoder| Arc::new(geocoder) as Arc<dyn GeocodingService>);

    if !json {
        log_version!();
    }
    if service.is_none() {
        let path = get_config_path()
            .map(|p| private_path(&p))
            .unwrap_or_else(|_| "the configuration file".to_string());
        bail!("No position configured. Set latitude and longitude in {path}");
    }

    let timeout = config.location_timeout();
    let preferences: Arc<dyn Preferences> = Arc::new(SharedPreferences::new(config));
    let geocoder = Arc::new(ReverseGeocoder::new(
        geocoding,
        Arc::new(super::device_resolver(!json)),
        Arc::clone(&preferences),
        debug_enabled,
    ));
    let (listener, outcomes) = ChannelListener::new();
    let locater = Locater::new(
        service,
        geocoder,
        preferences,
        Arc::new(listener),
        debug_enabled,
    );

    let signal_state = setup_signal_handler(debug_enabled)?;

    let location_type = locater.start(allow_last_known);
    if location_type == LocationType::Unavailable {
        bail!("No positioning provider is available");
    }
    if !json {
        match location_type {
            LocationType::Unknown => log_block_start!(
                "Locating via GPS and network providers (timeout {}s)...",
                timeout.as_secs()
            ),
            _ => log_block_start!(
                "Locating via {location_type} provider (timeout {}s)...",
                timeout.as_secs()
            ),
        }
    }

    let Some(outcome) = wait_for_outcome(&locater, &outcomes, &signal_state.running) else {
        if !json {
            log_block_start!("Location request cancelled");
            log_end!();
        }
        return Ok(());
    };

    if json {
        let location = match &outcome {
            LocationOutcome::Received(result) => Some(result.as_ref()),
            _ => None,
        };
        super::print_json(&serde_json::json!({
            "outcome": outcome.label(),
            "location": location,
        }))?;
    }

    match outcome {
        LocationOutcome::Received(result) => {
            if !json {
                super::log_location_result(&result);
                log_end!();
            }
            Ok(())
        }
        LocationOutcome::Error => bail!("The positioning provider failed"),
        LocationOutcome::Timeout => {
            bail!("No location fix within {}s", timeout.as_secs())
        }
    }
}

/// Display detailed help for the locate command (help subcommand)
pub fn display_help() {
    log_version!();
    log_block_start!("locate - Acquire the configured location");
    log_block_start!("Usage: almanac-geo locate [--no-last-known] [--json]");
    log_block_start!("Options:");
    log_indented!("--no-last-known  Ignore cached fixes and wait for a live one");
    log_indented!("-j, --json       Print the outcome as JSON");
    log_block_start!("Description:");
    log_indented!("Reports the position set by 'latitude' and 'longitude' in the");
    log_indented!("configuration file, named by 'place_name', 'country_code' and");
    log_indented!("'state' when present, with its candidate timezones. Waits at");
    log_indented!("most 'location_timeout' seconds; Ctrl-C cancels the request.");
    log_end!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::constants::*;
    use crate::locater::testing::FakePositioningService;
    use crate::timezone::TimezoneResolver;

    fn locater_for(
        service: Arc<FakePositioningService>,
    ) -> (Locater, Receiver<LocationOutcome>) {
        let preferences: Arc<dyn Preferences> = Arc::new(Config::default());
        let geocoder = Arc::new(ReverseGeocoder::new(
            None,
            Arc::new(TimezoneResolver::with_device_zone("UTC")),
            Arc::clone(&preferences),
            false,
        ));
        let (listener, outcomes) = ChannelListener::new();
        let locater = Locater::new(
            Some(service as Arc<dyn PositioningService>),
            geocoder,
            preferences,
            Arc::new(listener),
            false,
        );
        (locater, outcomes)
    }

    #[test]
    fn test_wait_returns_outcome() {
        let service = Arc::new(FakePositioningService::with_gps_and_network());
        let (locater, outcomes) = locater_for(Arc::clone(&service));
        locater.start(false);
        service.emit_fix(GPS_PROVIDER, 10.0, 20.0);

        let running = AtomicBool::new(true);
        let outcome = wait_for_outcome(&locater, &outcomes, &running);
        assert!(matches!(outcome, Some(LocationOutcome::Received(_))));
    }

    #[test]
    fn test_wait_cancels_when_interrupted() {
        let service = Arc::new(FakePositioningService::with_gps_and_network());
        let (locater, outcomes) = locater_for(Arc::clone(&service));
        locater.start(false);

        let running = AtomicBool::new(false);
        assert_eq!(wait_for_outcome(&locater, &outcomes, &running), None);
        assert_eq!(
            locater.state(),
            crate::locater::SessionState::Cancelled
        );
        assert_eq!(service.total_active_subscriptions(), 0);
    }

    #[test]
    fn test_locate_without_position_fails() {
        crate::common::logger::Log::set_enabled(false);
        let error = handle_locate_command(Config::default(), true, false, false).unwrap_err();
        assert!(format!("{error}").contains("No position configured"));
    }
}
