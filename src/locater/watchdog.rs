//! Session timeout thread.
//!
//! The thread waits on a channel with a timeout. Dropping the [`Watchdog`]
//! drops the sender, which wakes the thread with a disconnect and ends it
//! without firing.

use std::io;
use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

/// Identity of one watchdog instance, compared by pointer.
#[derive(Debug)]
pub struct WatchdogToken {
    session_id: u64,
}

impl WatchdogToken {
    pub fn session_id(&self) -> u64 {
        self.session_id
    }
}

/// Handle owning a running watchdog thread.
#[derive(Debug)]
pub struct Watchdog {
    token: Arc<WatchdogToken>,
    _stop: Sender<()>,
}

impl Watchdog {
    /// Spawn a watchdog for `session_id`. After `timeout` elapses without an
    /// interrupt, `on_expire` runs on the watchdog thread with the token.
    pub fn spawn<F>(session_id: u64, timeout: Duration, on_expire: F) -> io::Result<Self>
    where
        F: FnOnce(Arc<WatchdogToken>) + Send + 'static,
    {
        let token = Arc::new(WatchdogToken { session_id });
        let (stop, wait) = mpsc::channel::<()>();
        let thread_token = Arc::clone(&token);

        thread::Builder::new()
            .name(format!("locater-watchdog-{session_id}"))
            .spawn(move || match wait.recv_timeout(timeout) {
                Err(RecvTimeoutError::Timeout) => on_expire(thread_token),
                // Interrupted by replacement or cancellation
                Ok(()) | Err(RecvTimeoutError::Disconnected) => {}
            })?;

        Ok(Self { token, _stop: stop })
    }

    pub fn token(&self) -> &Arc<WatchdogToken> {
        &self.token
    }

    pub fn is(&self, token: &Arc<WatchdogToken>) -> bool {
        Arc::ptr_eq(&self.token, token)
    }

    pub fn session_id(&self) -> u64 {
        self.token.session_id
    }
}
