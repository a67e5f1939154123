//! Location acquisition.
//!
//! A [`Locater`] races up to two positioning providers against a timeout and
//! reports exactly one outcome per session to its [`LocationListener`]:
//!
//! 1. a cached last-known fix, when allowed, delivered on its own thread
//! 2. otherwise the best provider, plus the network provider when it is a
//!    different, enabled provider
//! 3. a watchdog that reports a timeout when no provider answers in time
//!
//! Every event source claims the session through a single compare-and-set
//! (see [`session::Session::finish`]). The winner tears down subscriptions
//! and the watchdog; later events find the session finished and stop.

pub mod configured;
pub mod listener;
pub mod provider;
pub mod session;
#[cfg(any(test, feature = "testing-support"))]
pub mod testing;
pub mod watchdog;

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};
use std::thread;

use crate::common::constants::{GPS_PROVIDER, NETWORK_PROVIDER};
use crate::config::Preferences;
use crate::geo::Coordinate;
use crate::geocoder::ReverseGeocoder;

pub use configured::ConfiguredPositioning;
pub use listener::{ChannelListener, LocationListener, LocationOutcome};
pub use provider::{
    Criteria, Fix, PositioningService, ProviderAccuracy, ProviderError, ProviderListener,
    ProviderStatus, Subscription,
};
pub use session::{Role, Session, SessionState};
pub use watchdog::{Watchdog, WatchdogToken};

/// What a started session is attempting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationType {
    /// Satellite positioning only.
    Gps,
    /// Network positioning only.
    Network,
    /// Providers are racing, or the provider kind is not known.
    Unknown,
    /// Nothing can be attempted; no callback will follow.
    Unavailable,
}

impl fmt::Display for LocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LocationType::Gps => "GPS",
            LocationType::Network => "network",
            LocationType::Unknown => "unknown",
            LocationType::Unavailable => "unavailable",
        };
        f.write_str(name)
    }
}

impl LocationType {
    fn for_provider(provider: &str) -> Self {
        match provider {
            GPS_PROVIDER => LocationType::Gps,
            NETWORK_PROVIDER => LocationType::Network,
            _ => LocationType::Unknown,
        }
    }
}

/// Races positioning providers and delivers one outcome per session.
///
/// The locater is `Sync`; [`cancel`](Self::cancel) may be called from any
/// thread while a session runs.
pub struct Locater {
    inner: Arc<Inner>,
}

struct Inner {
    service: Option<Arc<dyn PositioningService>>,
    geocoder: Arc<ReverseGeocoder>,
    preferences: Arc<dyn Preferences>,
    listener: Arc<dyn LocationListener>,
    current: Mutex<Option<Arc<Session>>>,
    watchdog: Mutex<Option<Watchdog>>,
    next_session_id: AtomicU64,
    debug_enabled: bool,
}

impl Locater {
    /// Create a locater.
    ///
    /// # Arguments
    /// * `service` - Positioning service, `None` when positioning is unavailable
    /// * `geocoder` - Turns a winning fix into a [`LocationResult`](crate::geocoder::LocationResult)
    /// * `preferences` - Timeout and last-known settings, read per session
    /// * `listener` - Receives exactly one outcome per session
    /// * `debug_enabled` - Whether to log session progress
    pub fn new(
        service: Option<Arc<dyn PositioningService>>,
        geocoder: Arc<ReverseGeocoder>,
        preferences: Arc<dyn Preferences>,
        listener: Arc<dyn LocationListener>,
        debug_enabled: bool,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                service,
                geocoder,
                preferences,
                listener,
                current: Mutex::new(None),
                watchdog: Mutex::new(None),
                next_session_id: AtomicU64::new(1),
                debug_enabled,
            }),
        }
    }

    /// Begin a session and report what it is attempting. The outcome arrives
    /// later through the listener, never synchronously from this call.
    ///
    /// Any session already in progress is cancelled first.
    ///
    /// # Arguments
    /// * `allow_last_known` - Whether a cached fix may satisfy the session,
    ///   subject to the preference of the same name
    ///
    /// # Returns
    /// The provider the session races on, or `Unavailable` when no callback
    /// will follow.
    pub fn start(&self, allow_last_known: bool) -> LocationType {
        self.cancel();

        let inner = &self.inner;
        let Some(service) = inner.service.clone() else {
            if inner.debug_enabled {
                log_debug!("No positioning service available");
            }
            return LocationType::Unavailable;
        };

        if allow_last_known
            && inner.preferences.allow_last_known()
            && let Some(location_type) = self.start_from_last_known(&service)
        {
            return location_type;
        }

        self.start_live(&service)
    }

    /// Cancel the current session. Idempotent and safe from any thread.
    pub fn cancel(&self) {
        let session = self.inner.current_session();
        match session {
            Some(session) => {
                if session.finish(SessionState::Cancelled) && self.inner.debug_enabled {
                    log_debug!("Location session {} cancelled", session.id());
                }
                self.inner.teardown(&session);
            }
            None => self.inner.stop_watchdog(None),
        }
    }

    /// State of the most recent session, or `Idle` before the first one.
    pub fn state(&self) -> SessionState {
        self.inner
            .current_session()
            .map_or(SessionState::Idle, |session| session.state())
    }

    fn start_from_last_known(&self, service: &Arc<dyn PositioningService>) -> Option<LocationType> {
        let inner = &self.inner;
        let fix = [GPS_PROVIDER, NETWORK_PROVIDER]
            .into_iter()
            .find_map(|provider| inner.cached_fix(service.as_ref(), provider))?;
        let location_type = LocationType::for_provider(&fix.provider);

        let session = inner.begin_session();
        let weak = Arc::downgrade(&self.inner);
        let delivery_session = Arc::clone(&session);

        let spawned = thread::Builder::new()
            .name(format!("locater-last-known-{}", session.id()))
            .spawn(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.handle_fix(&delivery_session, fix);
                }
            });

        match spawned {
            Ok(_) => {
                if inner.debug_enabled {
                    log_debug!("Delivering cached fix for session {}", session.id());
                }
                Some(location_type)
            }
            Err(e) => {
                // Fall back to live updates with a fresh session.
                if inner.debug_enabled {
                    log_warning!("Could not deliver cached fix: {e}");
                }
                session.finish(SessionState::Cancelled);
                None
            }
        }
    }

    fn start_live(&self, service: &Arc<dyn PositioningService>) -> LocationType {
        let inner = &self.inner;

        let network_enabled = inner.provider_enabled(service.as_ref(), NETWORK_PROVIDER);
        let gps_enabled = inner.provider_enabled(service.as_ref(), GPS_PROVIDER);

        let coarse = inner.best_provider(service.as_ref(), &Criteria::COARSE);
        let fine = inner.best_provider(service.as_ref(), &Criteria::FINE);
        let Some(primary) = fine.or(coarse) else {
            if inner.debug_enabled {
                log_debug!(
                    "No positioning provider matches (gps: {gps_enabled}, network: {network_enabled})"
                );
            }
            return LocationType::Unavailable;
        };

        let session = inner.begin_session();
        let timeout = inner.preferences.location_timeout();

        let weak = Arc::downgrade(&self.inner);
        let watchdog_session = Arc::clone(&session);
        // Held until the handle is stored, so an early expiry still finds it.
        let mut slot = inner.lock_watchdog();
        let spawned = Watchdog::spawn(session.id(), timeout, move |token| {
            if let Some(inner) = weak.upgrade() {
                inner.handle_timeout(&watchdog_session, &token);
            }
        });
        match spawned {
            Ok(watchdog) => {
                *slot = Some(watchdog);
                drop(slot);
                if inner.debug_enabled {
                    log_debug!(
                        "Watchdog started for session {} ({}s)",
                        session.id(),
                        timeout.as_secs()
                    );
                }
            }
            Err(e) => {
                drop(slot);
                if inner.debug_enabled {
                    log_warning!("Could not start location watchdog: {e}");
                }
                session.finish(SessionState::Cancelled);
                return LocationType::Unavailable;
            }
        }

        if !inner.subscribe(service, &session, &primary, Role::Primary) {
            if session.finish(SessionState::Cancelled) && inner.debug_enabled {
                log_debug!("Session {} abandoned, primary provider refused", session.id());
            }
            inner.teardown(&session);
            return LocationType::Unavailable;
        }

        let racing = primary != NETWORK_PROVIDER
            && network_enabled
            && inner.subscribe(service, &session, NETWORK_PROVIDER, Role::Secondary);

        if racing {
            LocationType::Unknown
        } else {
            LocationType::for_provider(&primary)
        }
    }
}

impl Drop for Locater {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl Inner {
    fn current_session(&self) -> Option<Arc<Session>> {
        self.current
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn lock_watchdog(&self) -> std::sync::MutexGuard<'_, Option<Watchdog>> {
        self.watchdog.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn begin_session(&self) -> Arc<Session> {
        let id = self.next_session_id.fetch_add(1, Ordering::Relaxed);
        let session = Arc::new(Session::new(id));
        *self.current.lock().unwrap_or_else(|e| e.into_inner()) = Some(Arc::clone(&session));
        if self.debug_enabled {
            log_debug!("Location session {id} started");
        }
        session
    }

    fn provider_enabled(&self, service: &dyn PositioningService, provider: &str) -> bool {
        match service.is_provider_enabled(provider) {
            Ok(enabled) => enabled,
            Err(e) => {
                if self.debug_enabled {
                    log_warning!("Treating provider '{provider}' as unavailable: {e}");
                }
                false
            }
        }
    }

    fn best_provider(&self, service: &dyn PositioningService, criteria: &Criteria) -> Option<String> {
        match service.best_provider(criteria, true) {
            Ok(provider) => provider,
            Err(e) => {
                if self.debug_enabled {
                    log_warning!("Provider lookup for {:?} accuracy failed: {e}", criteria.accuracy);
                }
                None
            }
        }
    }

    fn cached_fix(&self, service: &dyn PositioningService, provider: &str) -> Option<Fix> {
        match service.last_known_fix(provider) {
            Ok(fix) => fix,
            Err(e) => {
                if self.debug_enabled {
                    log_warning!("No cached fix from '{provider}': {e}");
                }
                None
            }
        }
    }

    /// Register a sink for `provider`. Returns whether the provider is now
    /// part of the session.
    fn subscribe(
        self: &Arc<Self>,
        service: &Arc<dyn PositioningService>,
        session: &Arc<Session>,
        provider: &str,
        role: Role,
    ) -> bool {
        let sink = Arc::new(SessionSink {
            inner: Arc::downgrade(self),
            session: Arc::clone(session),
            role,
        });

        match service.subscribe(provider, sink) {
            Ok(subscription) => {
                if self.debug_enabled {
                    log_debug!(
                        "Subscribed to '{provider}' as {role:?} for session {}",
                        session.id()
                    );
                }
                if let Err(late) = session.track(subscription) {
                    // The session finished while subscribing.
                    service.unsubscribe(&late);
                }
                true
            }
            Err(e) => {
                if self.debug_enabled {
                    log_warning!("Could not subscribe to '{provider}': {e}");
                }
                false
            }
        }
    }

    /// Stop the watchdog and drop every subscription of a finished session.
    fn teardown(&self, session: &Session) {
        self.stop_watchdog(Some(session.id()));

        let subscriptions = session.drain_subscriptions();
        if subscriptions.is_empty() {
            return;
        }
        if let Some(service) = &self.service {
            for subscription in &subscriptions {
                service.unsubscribe(subscription);
            }
        }
        if self.debug_enabled {
            log_debug!(
                "Released {} subscription(s) for session {}",
                subscriptions.len(),
                session.id()
            );
        }
    }

    /// Interrupt the watchdog, limited to one session when `session_id` is set.
    fn stop_watchdog(&self, session_id: Option<u64>) {
        let stopped = {
            let mut slot = self.lock_watchdog();
            match (&*slot, session_id) {
                (Some(watchdog), Some(id)) if watchdog.session_id() != id => None,
                _ => slot.take(),
            }
        };
        if stopped.is_some() && self.debug_enabled {
            log_debug!("Watchdog interrupted");
        }
    }

    fn handle_fix(&self, session: &Arc<Session>, fix: Fix) {
        let coordinate = match Coordinate::new(fix.latitude, fix.longitude) {
            Ok(coordinate) => coordinate,
            Err(e) => {
                if session.finish(SessionState::Error) {
                    if self.debug_enabled {
                        log_warning!("Discarding invalid fix from '{}': {e}", fix.provider);
                    }
                    self.teardown(session);
                    self.notify(|listener| listener.location_error());
                }
                return;
            }
        };

        if !session.finish(SessionState::Received) {
            if self.debug_enabled {
                log_debug!(
                    "Ignoring fix from '{}' for finished session {}",
                    fix.provider,
                    session.id()
                );
            }
            return;
        }
        self.teardown(session);

        if self.debug_enabled {
            log_debug!(
                "Session {} won by '{}' at {}",
                session.id(),
                fix.provider,
                coordinate.to_abbreviated()
            );
        }

        let geocoder = Arc::clone(&self.geocoder);
        match panic::catch_unwind(AssertUnwindSafe(|| geocoder.resolve(coordinate))) {
            Ok(result) => self.notify(move |listener| listener.location_received(result)),
            Err(_) => {
                if self.debug_enabled {
                    log_error!(
                        "Geocoding panicked while resolving {}",
                        coordinate.to_abbreviated()
                    );
                }
                session.downgrade_to_error();
                self.notify(|listener| listener.location_error());
            }
        }
    }

    fn handle_provider_lost(&self, session: &Session, provider: &str, role: Role, reason: &str) {
        if role == Role::Secondary {
            if self.debug_enabled {
                log_debug!("Ignoring secondary provider '{provider}' {reason}");
            }
            return;
        }

        if !session.finish(SessionState::Error) {
            return;
        }
        if self.debug_enabled {
            log_debug!("Primary provider '{provider}' {reason}, ending session {}", session.id());
        }
        self.teardown(session);
        self.notify(|listener| listener.location_error());
    }

    fn handle_timeout(&self, session: &Session, token: &Arc<WatchdogToken>) {
        let current = {
            let mut slot = self.lock_watchdog();
            let current = slot.as_ref().is_some_and(|watchdog| watchdog.is(token));
            if current {
                slot.take();
            }
            current
        };

        if !current {
            if self.debug_enabled {
                log_debug!("Stale watchdog for session {} expired", token.session_id());
            }
            return;
        }

        if !session.finish(SessionState::Timeout) {
            return;
        }
        if self.debug_enabled {
            log_debug!("Session {} timed out", session.id());
        }
        self.teardown(session);
        self.notify(|listener| listener.location_timeout());
    }

    /// Invoke the listener, containing any panic on the calling thread.
    fn notify(&self, deliver: impl FnOnce(&dyn LocationListener)) {
        let listener = self.listener.as_ref();
        if panic::catch_unwind(AssertUnwindSafe(|| deliver(listener))).is_err()
            && self.debug_enabled
        {
            log_error!("Location listener panicked while handling an outcome");
        }
    }
}

/// Provider listener bound to one session and role.
struct SessionSink {
    inner: Weak<Inner>,
    session: Arc<Session>,
    role: Role,
}

impl SessionSink {
    fn with_inner(&self, f: impl FnOnce(&Inner)) {
        if self.session.is_finished() {
            return;
        }
        if let Some(inner) = self.inner.upgrade() {
            f(inner.as_ref());
        }
    }
}

impl ProviderListener for SessionSink {
    fn on_fix(&self, fix: Fix) {
        self.with_inner(|inner| inner.handle_fix(&self.session, fix));
    }

    fn on_provider_disabled(&self, provider: &str) {
        self.with_inner(|inner| {
            inner.handle_provider_lost(&self.session, provider, self.role, "disabled")
        });
    }

    fn on_provider_enabled(&self, provider: &str) {
        self.with_inner(|inner| {
            if inner.debug_enabled {
                log_debug!("Provider '{provider}' enabled");
            }
        });
    }

    fn on_status_changed(&self, provider: &str, status: ProviderStatus) {
        if status == ProviderStatus::OutOfService {
            self.with_inner(|inner| {
                inner.handle_provider_lost(&self.session, provider, self.role, "out of service")
            });
        }
    }
}

#[cfg(test)]
mod tests;
