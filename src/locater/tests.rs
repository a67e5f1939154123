use super::testing::FakePositioningService;
use super::*;
use crate::common::constants::test_constants::*;
use crate::config::Config;
use crate::geocoder::{Address, GeocodingError, GeocodingService, LocationResult};
use crate::timezone::TimezoneResolver;
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread::ThreadId;
use std::time::{Duration, Instant};

const WAIT: Duration = Duration::from_secs(5);
const QUIET: Duration = Duration::from_millis(300);

struct Harness {
    service: Arc<FakePositioningService>,
    locater: Locater,
    outcomes: Receiver<LocationOutcome>,
}

impl Harness {
    fn new(service: FakePositioningService, config: Config) -> Self {
        Self::with_geocoding(service, config, None)
    }

    fn with_geocoding(
        service: FakePositioningService,
        config: Config,
        geocoding: Option<Arc<dyn GeocodingService>>,
    ) -> Self {
        let service = Arc::new(service);
        let preferences: Arc<dyn Preferences> = Arc::new(config);
        let geocoder = Arc::new(ReverseGeocoder::new(
            geocoding,
            Arc::new(TimezoneResolver::with_device_zone("UTC")),
            Arc::clone(&preferences),
            false,
        ));
        let (listener, outcomes) = ChannelListener::new();
        let locater = Locater::new(
            Some(service.clone() as Arc<dyn PositioningService>),
            geocoder,
            preferences,
            Arc::new(listener),
            false,
        );
        Self {
            service,
            locater,
            outcomes,
        }
    }

    fn next_outcome(&self) -> LocationOutcome {
        self.outcomes
            .recv_timeout(WAIT)
            .expect("an outcome should be delivered")
    }

    fn assert_quiet(&self, wait: Duration) {
        match self.outcomes.recv_timeout(wait) {
            Err(RecvTimeoutError::Timeout) => {}
            other => panic!("expected no further outcome, got {other:?}"),
        }
    }
}

fn short_timeout() -> Config {
    Config {
        location_timeout: Some(TEST_SHORT_TIMEOUT),
        ..Default::default()
    }
}

fn long_timeout() -> Config {
    Config {
        location_timeout: Some(60),
        ..Default::default()
    }
}

fn received(outcome: LocationOutcome) -> LocationResult {
    match outcome {
        LocationOutcome::Received(result) => *result,
        other => panic!("expected a received location, got {other:?}"),
    }
}

#[test]
fn test_no_service_is_unavailable() {
    let (listener, outcomes) = ChannelListener::new();
    let preferences: Arc<dyn Preferences> = Arc::new(Config::default());
    let geocoder = Arc::new(ReverseGeocoder::new(
        None,
        Arc::new(TimezoneResolver::with_device_zone("UTC")),
        Arc::clone(&preferences),
        false,
    ));
    let locater = Locater::new(None, geocoder, preferences, Arc::new(listener), false);

    assert_eq!(locater.start(true), LocationType::Unavailable);
    assert_eq!(locater.state(), SessionState::Idle);
    assert_eq!(
        outcomes.recv_timeout(QUIET),
        Err(RecvTimeoutError::Timeout)
    );
}

#[test]
fn test_no_matching_provider_is_unavailable() {
    let service = FakePositioningService::new()
        .with_provider(GPS_PROVIDER, false)
        .with_provider(NETWORK_PROVIDER, false);
    let harness = Harness::new(service, short_timeout());

    assert_eq!(harness.locater.start(true), LocationType::Unavailable);
    harness.assert_quiet(Duration::from_millis(1500));
    assert_eq!(harness.service.subscribe_calls(GPS_PROVIDER), 0);
}

#[test]
fn test_network_only_fix_is_received_once() {
    let service = FakePositioningService::new()
        .with_provider(GPS_PROVIDER, false)
        .with_provider(NETWORK_PROVIDER, true);
    let harness = Harness::new(service, short_timeout());

    assert_eq!(harness.locater.start(true), LocationType::Network);
    assert_eq!(harness.service.active_subscriptions(NETWORK_PROVIDER), 1);
    assert_eq!(harness.service.active_subscriptions(GPS_PROVIDER), 0);

    harness
        .service
        .emit_fix(NETWORK_PROVIDER, TEST_MELBOURNE_LATITUDE, TEST_MELBOURNE_LONGITUDE);

    let result = received(harness.next_outcome());
    assert_eq!(
        result.coordinate,
        Coordinate::new(TEST_MELBOURNE_LATITUDE, TEST_MELBOURNE_LONGITUDE).unwrap()
    );
    assert_eq!(harness.locater.state(), SessionState::Received);
    assert_eq!(harness.service.total_active_subscriptions(), 0);

    // The watchdog was interrupted, so its timeout never arrives.
    harness.assert_quiet(Duration::from_millis(1500));
}

#[test]
fn test_silent_providers_time_out_once() {
    let harness = Harness::new(FakePositioningService::with_gps_and_network(), short_timeout());

    let started = Instant::now();
    assert_eq!(harness.locater.start(true), LocationType::Unknown);
    assert_eq!(harness.service.active_subscriptions(GPS_PROVIDER), 1);
    assert_eq!(harness.service.active_subscriptions(NETWORK_PROVIDER), 1);

    assert_eq!(harness.next_outcome(), LocationOutcome::Timeout);
    assert!(started.elapsed() >= Duration::from_secs(TEST_SHORT_TIMEOUT));
    assert_eq!(harness.locater.state(), SessionState::Timeout);
    assert_eq!(harness.service.total_active_subscriptions(), 0);
    assert_eq!(harness.service.unsubscribe_calls(GPS_PROVIDER), 1);
    assert_eq!(harness.service.unsubscribe_calls(NETWORK_PROVIDER), 1);

    harness.assert_quiet(QUIET);
}

#[test]
fn test_second_provider_fix_is_ignored() {
    let harness = Harness::new(FakePositioningService::with_gps_and_network(), long_timeout());
    assert_eq!(harness.locater.start(false), LocationType::Unknown);

    harness.service.emit_fix(NETWORK_PROVIDER, 10.0, 20.0);
    harness.service.emit_fix(GPS_PROVIDER, 11.0, 21.0);

    let result = received(harness.next_outcome());
    assert_eq!(result.coordinate, Coordinate::new(10.0, 20.0).unwrap());
    harness.assert_quiet(QUIET);
}

#[test]
fn test_cached_gps_fix_preferred_over_network() {
    let service = FakePositioningService::with_gps_and_network()
        .with_last_known(GPS_PROVIDER, 1.0, 2.0)
        .with_last_known(NETWORK_PROVIDER, 3.0, 4.0);
    let harness = Harness::new(service, long_timeout());

    assert_eq!(harness.locater.start(true), LocationType::Gps);
    let result = received(harness.next_outcome());
    assert_eq!(result.coordinate, Coordinate::new(1.0, 2.0).unwrap());
    assert_eq!(harness.service.subscribe_calls(GPS_PROVIDER), 0);
    assert_eq!(harness.service.subscribe_calls(NETWORK_PROVIDER), 0);
}

#[test]
fn test_cached_network_fix_when_gps_has_none() {
    let service = FakePositioningService::with_gps_and_network()
        .with_last_known(NETWORK_PROVIDER, 3.0, 4.0);
    let harness = Harness::new(service, long_timeout());

    assert_eq!(harness.locater.start(true), LocationType::Network);
    let result = received(harness.next_outcome());
    assert_eq!(result.coordinate, Coordinate::new(3.0, 4.0).unwrap());
}

#[test]
fn test_cached_fix_is_delivered_on_another_thread() {
    struct ThreadRecorder {
        thread: Mutex<Option<ThreadId>>,
    }

    impl LocationListener for ThreadRecorder {
        fn location_received(&self, _result: LocationResult) {
            *self.thread.lock().unwrap() = Some(thread::current().id());
        }
        fn location_error(&self) {}
        fn location_timeout(&self) {}
    }

    let service = Arc::new(
        FakePositioningService::with_gps_and_network().with_last_known(GPS_PROVIDER, 1.0, 2.0),
    );
    let recorder = Arc::new(ThreadRecorder {
        thread: Mutex::new(None),
    });
    let preferences: Arc<dyn Preferences> = Arc::new(long_timeout());
    let geocoder = Arc::new(ReverseGeocoder::new(
        None,
        Arc::new(TimezoneResolver::with_device_zone("UTC")),
        Arc::clone(&preferences),
        false,
    ));
    let locater = Locater::new(
        Some(service as Arc<dyn PositioningService>),
        geocoder,
        preferences,
        recorder.clone(),
        false,
    );

    assert_eq!(locater.start(true), LocationType::Gps);

    let deadline = Instant::now() + WAIT;
    let delivered_on = loop {
        if let Some(id) = *recorder.thread.lock().unwrap() {
            break id;
        }
        assert!(Instant::now() < deadline, "cached fix was never delivered");
        thread::sleep(Duration::from_millis(10));
    };
    assert_ne!(delivered_on, thread::current().id());
}

#[test]
fn test_last_known_skipped_when_not_allowed() {
    let service = FakePositioningService::with_gps_and_network()
        .with_last_known(GPS_PROVIDER, 1.0, 2.0);
    let harness = Harness::new(service, long_timeout());

    assert_eq!(harness.locater.start(false), LocationType::Unknown);
    assert_eq!(harness.service.subscribe_calls(GPS_PROVIDER), 1);
    harness.assert_quiet(QUIET);
}

#[test]
fn test_last_known_skipped_by_preference() {
    let service = FakePositioningService::with_gps_and_network()
        .with_last_known(GPS_PROVIDER, 1.0, 2.0);
    let config = Config {
        allow_last_known: Some(false),
        ..long_timeout()
    };
    let harness = Harness::new(service, config);

    assert_eq!(harness.locater.start(true), LocationType::Unknown);
    harness.assert_quiet(QUIET);
}

#[test]
fn test_primary_disabled_is_an_error() {
    let harness = Harness::new(FakePositioningService::with_gps_and_network(), long_timeout());
    harness.locater.start(false);

    harness.service.set_enabled(GPS_PROVIDER, false);
    assert_eq!(harness.next_outcome(), LocationOutcome::Error);
    assert_eq!(harness.locater.state(), SessionState::Error);
    assert_eq!(harness.service.total_active_subscriptions(), 0);
    harness.assert_quiet(QUIET);
}

#[test]
fn test_secondary_disabled_is_ignored() {
    let harness = Harness::new(FakePositioningService::with_gps_and_network(), long_timeout());
    harness.locater.start(false);

    harness.service.set_enabled(NETWORK_PROVIDER, false);
    harness.assert_quiet(QUIET);
    assert_eq!(harness.locater.state(), SessionState::Started);

    harness.service.emit_fix(GPS_PROVIDER, 5.0, 6.0);
    let result = received(harness.next_outcome());
    assert_eq!(result.coordinate, Coordinate::new(5.0, 6.0).unwrap());
}

#[test]
fn test_primary_out_of_service_is_an_error() {
    let harness = Harness::new(FakePositioningService::with_gps_and_network(), long_timeout());
    harness.locater.start(false);

    harness
        .service
        .set_status(GPS_PROVIDER, ProviderStatus::TemporarilyUnavailable);
    harness.assert_quiet(QUIET);

    harness
        .service
        .set_status(NETWORK_PROVIDER, ProviderStatus::OutOfService);
    harness.assert_quiet(QUIET);

    harness
        .service
        .set_status(GPS_PROVIDER, ProviderStatus::OutOfService);
    assert_eq!(harness.next_outcome(), LocationOutcome::Error);
}

#[test]
fn test_failing_lookup_treated_as_unavailable_provider() {
    let service = FakePositioningService::new()
        .with_provider(NETWORK_PROVIDER, true)
        .with_provider(GPS_PROVIDER, true)
        .with_failing_provider(GPS_PROVIDER);
    let harness = Harness::new(service, long_timeout());

    assert_eq!(harness.locater.start(true), LocationType::Network);
    assert_eq!(harness.service.subscribe_calls(GPS_PROVIDER), 0);
}

#[test]
fn test_missing_gps_provider_does_not_block_network() {
    let service = FakePositioningService::new().with_provider(NETWORK_PROVIDER, true);
    let harness = Harness::new(service, long_timeout());

    assert_eq!(harness.locater.start(true), LocationType::Network);
}

#[test]
fn test_refused_subscription_is_unavailable() {
    let service = FakePositioningService::with_gps_and_network().refusing_subscriptions();
    let harness = Harness::new(service, short_timeout());

    assert_eq!(harness.locater.start(false), LocationType::Unavailable);
    assert_eq!(harness.locater.state(), SessionState::Cancelled);
    harness.assert_quiet(Duration::from_millis(1500));
}

#[test]
fn test_invalid_fix_is_an_error() {
    let harness = Harness::new(FakePositioningService::with_gps_and_network(), long_timeout());
    harness.locater.start(false);

    harness.service.emit_fix(GPS_PROVIDER, 95.0, 0.0);
    assert_eq!(harness.next_outcome(), LocationOutcome::Error);
    assert_eq!(harness.service.total_active_subscriptions(), 0);
}

#[test]
fn test_geocoder_panic_becomes_error() {
    struct PanickingGeocoder;

    impl GeocodingService for PanickingGeocoder {
        fn from_location(&self, _: f64, _: f64, _: usize) -> Result<Vec<Address>, GeocodingError> {
            panic!("geocoder exploded");
        }
        fn from_name(&self, _: &str, _: usize) -> Result<Vec<Address>, GeocodingError> {
            Ok(Vec::new())
        }
    }

    let harness = Harness::with_geocoding(
        FakePositioningService::with_gps_and_network(),
        long_timeout(),
        Some(Arc::new(PanickingGeocoder)),
    );
    harness.locater.start(false);

    harness.service.emit_fix(GPS_PROVIDER, 1.0, 1.0);
    assert_eq!(harness.next_outcome(), LocationOutcome::Error);
    assert_eq!(harness.locater.state(), SessionState::Error);
    harness.assert_quiet(QUIET);
}

#[test]
fn test_cancel_is_idempotent_and_silent() {
    let harness = Harness::new(FakePositioningService::with_gps_and_network(), short_timeout());

    harness.locater.cancel();
    assert_eq!(harness.locater.state(), SessionState::Idle);

    harness.locater.start(false);
    harness.locater.cancel();
    harness.locater.cancel();
    assert_eq!(harness.locater.state(), SessionState::Cancelled);
    assert_eq!(harness.service.total_active_subscriptions(), 0);

    // Late events and the interrupted watchdog stay silent.
    harness.service.emit_fix(GPS_PROVIDER, 1.0, 1.0);
    harness.assert_quiet(Duration::from_millis(1500));
    harness.locater.cancel();
}

#[test]
fn test_cancel_after_outcome_keeps_outcome() {
    let harness = Harness::new(FakePositioningService::with_gps_and_network(), long_timeout());
    harness.locater.start(false);
    harness.service.emit_fix(GPS_PROVIDER, 1.0, 1.0);
    received(harness.next_outcome());

    harness.locater.cancel();
    assert_eq!(harness.locater.state(), SessionState::Received);
    harness.assert_quiet(QUIET);
}

#[test]
fn test_restart_replaces_previous_watchdog() {
    let harness = Harness::new(FakePositioningService::with_gps_and_network(), short_timeout());

    harness.locater.start(false);
    thread::sleep(Duration::from_millis(500));
    let restarted = Instant::now();
    harness.locater.start(false);

    // Only the second session's watchdog fires, one full timeout after restart.
    assert_eq!(harness.next_outcome(), LocationOutcome::Timeout);
    assert!(restarted.elapsed() >= Duration::from_secs(TEST_SHORT_TIMEOUT));
    harness.assert_quiet(QUIET);

    assert_eq!(harness.service.subscribe_calls(GPS_PROVIDER), 2);
    assert_eq!(harness.service.total_active_subscriptions(), 0);
}

#[test]
fn test_dropping_locater_releases_subscriptions() {
    let harness = Harness::new(FakePositioningService::with_gps_and_network(), long_timeout());
    harness.locater.start(false);
    assert_eq!(harness.service.total_active_subscriptions(), 2);

    let Harness {
        service, locater, ..
    } = harness;
    drop(locater);
    assert_eq!(service.total_active_subscriptions(), 0);
}

#[test]
fn test_fix_during_subscribe_is_delivered_once() {
    let service = FakePositioningService::with_gps_and_network()
        .with_fix_on_subscribe(GPS_PROVIDER, 48.8566, 2.3522);
    let harness = Harness::new(service, short_timeout());

    assert_eq!(harness.locater.start(false), LocationType::Unknown);

    let result = received(harness.next_outcome());
    assert_eq!(result.coordinate, Coordinate::new(48.8566, 2.3522).unwrap());
    harness.assert_quiet(Duration::from_millis(1500));

    assert_eq!(harness.locater.state(), SessionState::Received);
    assert_eq!(harness.service.unsubscribe_calls(GPS_PROVIDER), 1);
    assert_eq!(harness.service.unsubscribe_calls(NETWORK_PROVIDER), 1);
    assert_eq!(harness.service.total_active_subscriptions(), 0);
}

#[test]
fn test_fix_during_network_subscribe_releases_subscription() {
    let service = FakePositioningService::new()
        .with_provider(GPS_PROVIDER, false)
        .with_provider(NETWORK_PROVIDER, true)
        .with_fix_on_subscribe(NETWORK_PROVIDER, -33.8688, 151.2093);
    let harness = Harness::new(service, short_timeout());

    assert_eq!(harness.locater.start(false), LocationType::Network);
    assert!(matches!(harness.next_outcome(), LocationOutcome::Received(_)));
    harness.assert_quiet(Duration::from_millis(1500));
    assert_eq!(harness.service.active_subscriptions(NETWORK_PROVIDER), 0);
}
