//! Scriptable positioning service for tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use super::provider::{
    Criteria, Fix, PositioningService, ProviderAccuracy, ProviderError, ProviderListener,
    ProviderStatus, Subscription,
};
use crate::common::constants::{GPS_PROVIDER, NETWORK_PROVIDER};

#[derive(Debug, Clone, Default)]
struct FakeProvider {
    enabled: bool,
    last_known: Option<Fix>,
    failing: bool,
    fix_on_subscribe: Option<Fix>,
}

#[derive(Default)]
struct FakeState {
    providers: Vec<(String, FakeProvider)>,
    listeners: Vec<(Subscription, Arc<dyn ProviderListener>)>,
    subscribe_calls: HashMap<String, usize>,
    unsubscribe_calls: HashMap<String, usize>,
    refuse_subscriptions: bool,
}

impl FakeState {
    fn provider(&self, name: &str) -> Option<&FakeProvider> {
        self.providers
            .iter()
            .find(|(provider, _)| provider == name)
            .map(|(_, provider)| provider)
    }

    fn provider_mut(&mut self, name: &str) -> &mut FakeProvider {
        let index = match self.providers.iter().position(|(provider, _)| provider == name) {
            Some(index) => index,
            None => {
                self.providers.push((name.to_string(), FakeProvider::default()));
                self.providers.len() - 1
            }
        };
        &mut self.providers[index].1
    }

    fn lookup(&self, name: &str) -> Result<&FakeProvider, ProviderError> {
        match self.provider(name) {
            Some(provider) if provider.failing => {
                Err(ProviderError::Service(format!("{name} lookup failed")))
            }
            Some(provider) => Ok(provider),
            None => Err(ProviderError::UnknownProvider(name.to_string())),
        }
    }

    fn listeners_for(&self, name: &str) -> Vec<Arc<dyn ProviderListener>> {
        self.listeners
            .iter()
            .filter(|(subscription, _)| subscription.provider() == name)
            .map(|(_, listener)| Arc::clone(listener))
            .collect()
    }
}

/// In-memory [`PositioningService`] whose providers are driven by the test.
///
/// Listener callbacks run on the thread calling `emit_fix`, `set_enabled`,
/// `set_status` or, for a fix configured with `with_fix_on_subscribe`,
/// `subscribe`. The internal lock is never held during a callback.
#[derive(Default)]
pub struct FakePositioningService {
    state: Mutex<FakeState>,
    next_id: AtomicU64,
}

impl FakePositioningService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or reconfigure) a provider.
    pub fn with_provider(self, name: &str, enabled: bool) -> Self {
        self.lock().provider_mut(name).enabled = enabled;
        self
    }

    /// Both standard providers enabled.
    pub fn with_gps_and_network() -> Self {
        Self::new()
            .with_provider(GPS_PROVIDER, true)
            .with_provider(NETWORK_PROVIDER, true)
    }

    pub fn with_last_known(self, name: &str, latitude: f64, longitude: f64) -> Self {
        self.lock().provider_mut(name).last_known = Some(Fix::new(name, latitude, longitude));
        self
    }

    /// Make every lookup of `name` fail with a service error.
    pub fn with_failing_provider(self, name: &str) -> Self {
        self.lock().provider_mut(name).failing = true;
        self
    }

    /// Report a fix from inside `subscribe`, on the subscribing thread.
    pub fn with_fix_on_subscribe(self, name: &str, latitude: f64, longitude: f64) -> Self {
        self.lock().provider_mut(name).fix_on_subscribe = Some(Fix::new(name, latitude, longitude));
        self
    }

    /// Reject every subscription request.
    pub fn refusing_subscriptions(self) -> Self {
        self.lock().refuse_subscriptions = true;
        self
    }

    /// Deliver a fix to every listener subscribed to `name`.
    pub fn emit_fix(&self, name: &str, latitude: f64, longitude: f64) {
        let listeners = self.lock().listeners_for(name);
        for listener in listeners {
            listener.on_fix(Fix::new(name, latitude, longitude));
        }
    }

    /// Enable or disable a provider, notifying its listeners.
    pub fn set_enabled(&self, name: &str, enabled: bool) {
        let listeners = {
            let mut state = self.lock();
            state.provider_mut(name).enabled = enabled;
            state.listeners_for(name)
        };
        for listener in listeners {
            if enabled {
                listener.on_provider_enabled(name);
            } else {
                listener.on_provider_disabled(name);
            }
        }
    }

    pub fn set_status(&self, name: &str, status: ProviderStatus) {
        let listeners = self.lock().listeners_for(name);
        for listener in listeners {
            listener.on_status_changed(name, status);
        }
    }

    /// Subscriptions currently registered for `name`.
    pub fn active_subscriptions(&self, name: &str) -> usize {
        self.lock().listeners_for(name).len()
    }

    pub fn total_active_subscriptions(&self) -> usize {
        self.lock().listeners.len()
    }

    pub fn subscribe_calls(&self, name: &str) -> usize {
        self.lock().subscribe_calls.get(name).copied().unwrap_or(0)
    }

    pub fn unsubscribe_calls(&self, name: &str) -> usize {
        self.lock().unsubscribe_calls.get(name).copied().unwrap_or(0)
    }

    fn lock(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl PositioningService for FakePositioningService {
    fn is_provider_enabled(&self, provider: &str) -> Result<bool, ProviderError> {
        self.lock().lookup(provider).map(|provider| provider.enabled)
    }

    /// Fine accuracy prefers GPS, coarse prefers network; either falls back
    /// to the other provider.
    fn best_provider(
        &self,
        criteria: &Criteria,
        enabled_only: bool,
    ) -> Result<Option<String>, ProviderError> {
        let order = match criteria.accuracy {
            ProviderAccuracy::Fine => [GPS_PROVIDER, NETWORK_PROVIDER],
            ProviderAccuracy::Coarse => [NETWORK_PROVIDER, GPS_PROVIDER],
        };

        let state = self.lock();
        Ok(order
            .into_iter()
            .find(|name| match state.provider(name) {
                Some(provider) => !provider.failing && (provider.enabled || !enabled_only),
                None => false,
            })
            .map(str::to_string))
    }

    fn last_known_fix(&self, provider: &str) -> Result<Option<Fix>, ProviderError> {
        self.lock()
            .lookup(provider)
            .map(|provider| provider.last_known.clone())
    }

    fn subscribe(
        &self,
        provider: &str,
        listener: Arc<dyn ProviderListener>,
    ) -> Result<Subscription, ProviderError> {
        let (subscription, immediate) = {
            let mut state = self.lock();
            *state.subscribe_calls.entry(provider.to_string()).or_default() += 1;

            if state.refuse_subscriptions {
                return Err(ProviderError::PermissionDenied(provider.to_string()));
            }
            let immediate = state.lookup(provider)?.fix_on_subscribe.clone();

            let id = self.next_id.fetch_add(1, Ordering::Relaxed);
            let subscription = Subscription::new(id, provider);
            state
                .listeners
                .push((subscription.clone(), Arc::clone(&listener)));
            (subscription, immediate)
        };

        if let Some(fix) = immediate {
            listener.on_fix(fix);
        }
        Ok(subscription)
    }

    fn unsubscribe(&self, subscription: &Subscription) {
        let mut state = self.lock();
        *state
            .unsubscribe_calls
            .entry(subscription.provider().to_string())
            .or_default() += 1;
        state
            .listeners
            .retain(|(registered, _)| registered != subscription);
    }
}
