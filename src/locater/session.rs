//! Per-attempt session state and its single-assignment outcome slot.

use std::fmt;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU8, Ordering};

use super::provider::Subscription;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SessionState {
    Idle = 0,
    Started = 1,
    Received = 2,
    Error = 3,
    Timeout = 4,
    Cancelled = 5,
}

impl SessionState {
    fn from_u8(value: u8) -> Self {
        match value {
            1 => SessionState::Started,
            2 => SessionState::Received,
            3 => SessionState::Error,
            4 => SessionState::Timeout,
            5 => SessionState::Cancelled,
            _ => SessionState::Idle,
        }
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, SessionState::Idle | SessionState::Started)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionState::Idle => "idle",
            SessionState::Started => "started",
            SessionState::Received => "received",
            SessionState::Error => "error",
            SessionState::Timeout => "timeout",
            SessionState::Cancelled => "cancelled",
        };
        f.write_str(name)
    }
}

/// Which part a subscription plays in the race.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The selected provider. Losing it ends the session with an error.
    Primary,
    /// The opportunistic network provider. Losing it is ignored.
    Secondary,
}

/// One acquisition attempt.
///
/// The state moves from `Started` to exactly one terminal state through a
/// compare-and-set, so only one event source ever wins.
pub struct Session {
    id: u64,
    state: AtomicU8,
    subscriptions: Mutex<Vec<Subscription>>,
}

impl Session {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            state: AtomicU8::new(SessionState::Started as u8),
            subscriptions: Mutex::new(Vec::new()),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn state(&self) -> SessionState {
        SessionState::from_u8(self.state.load(Ordering::Acquire))
    }

    pub fn is_finished(&self) -> bool {
        self.state().is_terminal()
    }

    /// Claim the outcome. Returns `true` for the single caller that moved
    /// the session out of `Started`.
    pub fn finish(&self, outcome: SessionState) -> bool {
        debug_assert!(outcome.is_terminal());
        self.state
            .compare_exchange(
                SessionState::Started as u8,
                outcome as u8,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok()
    }

    /// Record that the winner of a `Received` claim could not deliver a
    /// result. Only the caller whose [`finish`](Self::finish) succeeded may
    /// call this.
    pub(crate) fn downgrade_to_error(&self) {
        let _ = self.state.compare_exchange(
            SessionState::Received as u8,
            SessionState::Error as u8,
            Ordering::AcqRel,
            Ordering::Acquire,
        );
    }

    /// Keep a subscription for teardown. When the session has already
    /// finished the subscription is handed back so the caller can cancel it.
    pub fn track(&self, subscription: Subscription) -> Result<(), Subscription> {
        let mut subscriptions = self.subscriptions.lock().unwrap_or_else(|e| e.into_inner());
        if self.is_finished() {
            return Err(subscription);
        }
        subscriptions.push(subscription);
        Ok(())
    }

    /// Remove and return every tracked subscription.
    pub fn drain_subscriptions(&self) -> Vec<Subscription> {
        let mut subscriptions = self.subscriptions.lock().unwrap_or_else(|e| e.into_inner());
        std::mem::take(&mut *subscriptions)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("state", &self.state())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;
    use std::thread;

    #[test]
    fn test_only_one_finish_succeeds() {
        let session = Session::new(1);
        assert!(session.finish(SessionState::Timeout));
        assert!(!session.finish(SessionState::Received));
        assert!(!session.finish(SessionState::Cancelled));
        assert_eq!(session.state(), SessionState::Timeout);
    }

    #[test]
    fn test_concurrent_finish_has_one_winner() {
        for _ in 0..50 {
            let session = Arc::new(Session::new(1));
            let winners = Arc::new(AtomicUsize::new(0));
            let outcomes = [
                SessionState::Received,
                SessionState::Error,
                SessionState::Timeout,
                SessionState::Cancelled,
            ];

            let handles: Vec<_> = outcomes
                .into_iter()
                .map(|outcome| {
                    let session = session.clone();
                    let winners = winners.clone();
                    thread::spawn(move || {
                        if session.finish(outcome) {
                            winners.fetch_add(1, Ordering::SeqCst);
                        }
                    })
                })
                .collect();

            for handle in handles {
                handle.join().unwrap();
            }
            assert_eq!(winners.load(Ordering::SeqCst), 1);
            assert!(session.is_finished());
        }
    }

    #[test]
    fn test_track_after_finish_returns_subscription() {
        let session = Session::new(7);
        assert!(session.track(Subscription::new(1, "gps")).is_ok());

        session.finish(SessionState::Cancelled);
        let late = Subscription::new(2, "network");
        assert_eq!(session.track(late.clone()), Err(late));

        let drained = session.drain_subscriptions();
        assert_eq!(drained, vec![Subscription::new(1, "gps")]);
        assert!(session.drain_subscriptions().is_empty());
    }

    #[test]
    fn test_downgrade_only_affects_received() {
        let session = Session::new(3);
        session.finish(SessionState::Timeout);
        session.downgrade_to_error();
        assert_eq!(session.state(), SessionState::Timeout);

        let session = Session::new(4);
        session.finish(SessionState::Received);
        session.downgrade_to_error();
        assert_eq!(session.state(), SessionState::Error);
    }
}
