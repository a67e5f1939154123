//! Positioning collaborator interface.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;

/// A position reading from one provider.
#[derive(Debug, Clone, PartialEq)]
pub struct Fix {
    pub provider: String,
    pub latitude: f64,
    pub longitude: f64,
    pub accuracy_m: Option<f32>,
    pub time: DateTime<Utc>,
}

impl Fix {
    pub fn new(provider: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            provider: provider.into(),
            latitude,
            longitude,
            accuracy_m: None,
            time: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderAccuracy {
    Coarse,
    Fine,
}

/// Selection criteria for [`PositioningService::best_provider`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Criteria {
    pub accuracy: ProviderAccuracy,
}

impl Criteria {
    pub const COARSE: Criteria = Criteria {
        accuracy: ProviderAccuracy::Coarse,
    };
    pub const FINE: Criteria = Criteria {
        accuracy: ProviderAccuracy::Fine,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderStatus {
    Available,
    TemporarilyUnavailable,
    OutOfService,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProviderError {
    #[error("unknown positioning provider '{0}'")]
    UnknownProvider(String),

    #[error("permission to use positioning provider '{0}' was denied")]
    PermissionDenied(String),

    #[error("positioning service failed: {0}")]
    Service(String),
}

/// Handle for one live-update registration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Subscription {
    id: u64,
    provider: String,
}

impl Subscription {
    pub fn new(id: u64, provider: impl Into<String>) -> Self {
        Self {
            id,
            provider: provider.into(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }
}

/// Receives live updates for one subscription.
///
/// Callbacks may arrive on any thread, including the thread that called
/// [`PositioningService::subscribe`].
pub trait ProviderListener: Send + Sync {
    fn on_fix(&self, fix: Fix);
    fn on_provider_disabled(&self, provider: &str);
    fn on_provider_enabled(&self, provider: &str);
    fn on_status_changed(&self, provider: &str, status: ProviderStatus);
}

/// Platform positioning service.
///
/// Implementations must not hold internal locks while invoking listener
/// callbacks.
pub trait PositioningService: Send + Sync {
    fn is_provider_enabled(&self, provider: &str) -> Result<bool, ProviderError>;

    /// Name of the best provider meeting `criteria`, if any.
    fn best_provider(
        &self,
        criteria: &Criteria,
        enabled_only: bool,
    ) -> Result<Option<String>, ProviderError>;

    /// Most recent cached fix from `provider`.
    fn last_known_fix(&self, provider: &str) -> Result<Option<Fix>, ProviderError>;

    fn subscribe(
        &self,
        provider: &str,
        listener: Arc<dyn ProviderListener>,
    ) -> Result<Subscription, ProviderError>;

    fn unsubscribe(&self, subscription: &Subscription);
}
