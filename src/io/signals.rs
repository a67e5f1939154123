//! Signal handling for interactive commands.
//!
//! SIGINT and SIGTERM clear a shared `running` flag, so a command waiting on
//! a location session can cancel it and exit cleanly instead of being killed
//! mid-session.

use anyhow::{Context, Result};
use signal_hook::{
    consts::signal::{SIGINT, SIGTERM},
    iterator::Signals,
};
use std::{
    sync::Arc,
    sync::atomic::{AtomicBool, Ordering},
    thread,
};

/// Signal handling state shared between threads
pub struct SignalState {
    /// Cleared once a shutdown signal arrives
    pub running: Arc<AtomicBool>,
}

fn signal_name(signal: i32) -> &'static str {
    match signal {
        SIGINT => "SIGINT",
        SIGTERM => "SIGTERM",
        _ => "signal",
    }
}

/// Record a shutdown request. Returns whether this was the first one.
fn request_shutdown(running: &AtomicBool) -> bool {
    running.swap(false, Ordering::SeqCst)
}

/// Install SIGINT/SIGTERM handlers and start the handler thread.
///
/// # Arguments
/// * `debug_enabled` - Whether to log received signals
///
/// # Returns
/// The state whose `running` flag the handler clears.
pub fn setup_signal_handler(debug_enabled: bool) -> Result<SignalState> {
    let running = Arc::new(AtomicBool::new(true));

    let mut signals =
        Signals::new([SIGINT, SIGTERM]).context("failed to register signal handlers")?;

    let running_clone = Arc::clone(&running);
    thread::Builder::new()
        .name("signal-handler".to_string())
        .spawn(move || {
            for sig in signals.forever() {
                let first = request_shutdown(&running_clone);
                if debug_enabled {
                    log_pipe!();
                    if first {
                        log_debug!("Received {}", signal_name(sig));
                    } else {
                        log_debug!("Received {} again, shutdown already pending", signal_name(sig));
                    }
                }
            }
        })
        .context("failed to start signal handler thread")?;

    Ok(SignalState { running })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shutdown_clears_running() {
        let running = AtomicBool::new(true);

        assert!(request_shutdown(&running));
        assert!(!running.load(Ordering::SeqCst));
    }

    #[test]
    fn test_repeated_shutdown_is_reported() {
        let running = AtomicBool::new(true);

        assert!(request_shutdown(&running));
        assert!(!request_shutdown(&running));
        assert!(!running.load(Ordering::SeqCst));
    }

    #[test]
    fn test_signal_names() {
        assert_eq!(signal_name(SIGINT), "SIGINT");
        assert_eq!(signal_name(SIGTERM), "SIGTERM");
        assert_eq!(signal_name(0), "signal");
    }
}
