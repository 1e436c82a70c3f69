//! Notification channel
//!
//! Components never talk to each other directly; they hand a message to a
//! `Mediator`, which relays it to the output sink tagged with the sender.

use sdk::errors::EngineError;
use sdk::sink::OutputSink;
use std::fmt::Display;
use tracing::debug;

/// Relays messages between participants
pub trait Mediator {
    /// Deliver `message` on behalf of `sender`
    fn communicate(
        &self,
        sender: &dyn Display,
        message: &str,
        sink: &mut dyn OutputSink,
    ) -> Result<(), EngineError>;
}

/// Mediator that announces every relayed message on the output sink
#[derive(Debug, Default, Clone, Copy)]
pub struct NotificationChannel;

impl NotificationChannel {
    pub fn new() -> Self {
        Self
    }
}

impl Mediator for NotificationChannel {
    fn communicate(
        &self,
        sender: &dyn Display,
        message: &str,
        sink: &mut dyn OutputSink,
    ) -> Result<(), EngineError> {
        debug!(sender = %sender, "Relaying message");
        sink.emit("mediator", &format!("{} sends message: {}", sender, message))
    }
}
