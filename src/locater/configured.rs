//! Positioning service backed by the preferences file.
//!
//! Reports the configured position as a network fix, both as the cached
//! last-known fix and as the first live update after subscribing.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;

use super::provider::{
    Criteria, Fix, PositioningService, ProviderError, ProviderListener, Subscription,
};
use crate::common::constants::NETWORK_PROVIDER;
use crate::config::Config;

pub struct ConfiguredPositioning {
    fix: Fix,
    next_id: AtomicU64,
    active: Arc<Mutex<HashSet<u64>>>,
}

impl ConfiguredPositioning {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            fix: Fix::new(NETWORK_PROVIDER, latitude, longitude),
            next_id: AtomicU64::new(1),
            active: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// `None` when the configuration has no position.
    pub fn from_config(config: &Config) -> Option<Self> {
        match (config.latitude, config.longitude) {
            (Some(lat), Some(lon)) => Some(Self::new(lat, lon)),
            _ => None,
        }
    }

    fn check(provider: &str) -> Result<(), ProviderError> {
        if provider == NETWORK_PROVIDER {
            Ok(())
        } else {
            Err(ProviderError::UnknownProvider(provider.to_string()))
        }
    }
}

impl PositioningService for ConfiguredPositioning {
    fn is_provider_enabled(&self, provider: &str) -> Result<bool, ProviderError> {
        Self::check(provider).map(|()| true)
    }

    fn best_provider(
        &self,
        _criteria: &Criteria,
        _enabled_only: bool,
    ) -> Result<Option<String>, ProviderError> {
        Ok(Some(NETWORK_PROVIDER.to_string()))
    }

    fn last_known_fix(&self, provider: &str) -> Result<Option<Fix>, ProviderError> {
        Self::check(provider)?;
        Ok(Some(self.fix.clone()))
    }

    fn subscribe(
        &self,
        provider: &str,
        listener: Arc<dyn ProviderListener>,
    ) -> Result<Subscription, ProviderError> {
        Self::check(provider)?;

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.active
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(id);

        let active = Arc::clone(&self.active);
        let fix = Fix::new(NETWORK_PROVIDER, self.fix.latitude, self.fix.longitude);
        let spawned = thread::Builder::new()
            .name("configured-position".to_string())
            .spawn(move || {
                let subscribed = active
                    .lock()
                    .unwrap_or_else(|e| e.into_inner())
                    .contains(&id);
                if subscribed {
                    listener.on_fix(fix);
                }
            });

        let subscription = Subscription::new(id, provider);
        if let Err(e) = spawned {
            self.unsubscribe(&subscription);
            return Err(ProviderError::Service(e.to_string()));
        }
        Ok(subscription)
    }

    fn unsubscribe(&self, subscription: &Subscription) {
        self.active
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&subscription.id());
    }
}
