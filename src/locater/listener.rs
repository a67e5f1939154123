use std::sync::mpsc::{self, Receiver, Sender};

use crate::geocoder::LocationResult;

/// Receives the single outcome of a location session.
///
/// Exactly one method is called per session, at most once.
pub trait LocationListener: Send + Sync {
    fn location_received(&self, result: LocationResult);
    fn location_error(&self);
    fn location_timeout(&self);
}

/// Outcome of a location session as a value.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationOutcome {
    Received(Box<LocationResult>),
    Error,
    Timeout,
}

impl LocationOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            LocationOutcome::Received(_) => "received",
            LocationOutcome::Error => "error",
            LocationOutcome::Timeout => "timeout",
        }
    }
}

/// Listener forwarding outcomes over a channel.
#[derive(Debug)]
pub struct ChannelListener {
    sender: Sender<LocationOutcome>,
}

impl ChannelListener {
    pub fn new() -> (Self, Receiver<LocationOutcome>) {
        let (sender, receiver) = mpsc::channel();
        (Self { sender }, receiver)
    }

    fn send(&self, outcome: LocationOutcome) {
        // The receiver may already be gone when the caller stopped waiting.
        let _ = self.sender.send(outcome);
    }
}

impl LocationListener for ChannelListener {
    fn location_received(&self, result: LocationResult) {
        self.send(LocationOutcome::Received(Box::new(result)));
    }

    fn location_error(&self) {
        self.send(LocationOutcome::Error);
    }

    fn location_timeout(&self) {
        self.send(LocationOutcome::Timeout);
    }
}
