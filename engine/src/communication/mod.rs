//! Communication sessions
//!
//! Every outbound communication follows the same lifecycle: open the
//! channel, send the payload, close the channel. A [`CommunicationChannel`]
//! supplies the three step bodies; [`CommunicationSession::communicate`]
//! owns the ordering and always runs each step exactly once, in that order.
//! Channels cannot skip or reorder steps because they never drive
//! themselves.
//!
//! If a step fails to write its output, the remaining steps are not run and
//! the error is returned.
//!
//! # Examples
//!
//! ```
//! use examhub_engine::communication::{CommunicationSession, EmailChannel};
//! use sdk::MemorySink;
//!
//! let mut session = CommunicationSession::new(EmailChannel);
//! let mut sink = MemorySink::new();
//! session.communicate("Important message", &mut sink).unwrap();
//!
//! assert_eq!(
//!     sink.texts(),
//!     vec![
//!         "Opening email channel",
//!         "Sending email: Important message",
//!         "Closing email channel",
//!     ]
//! );
//! ```

use sdk::errors::EngineError;
use sdk::sink::OutputSink;
use tracing::debug;

/// Step bodies of a communication lifecycle
pub trait CommunicationChannel {
    /// Short name used in logs
    fn name(&self) -> &str;

    fn open_channel(&mut self, sink: &mut dyn OutputSink) -> Result<(), EngineError>;

    fn send_message(&mut self, message: &str, sink: &mut dyn OutputSink)
        -> Result<(), EngineError>;

    fn close_channel(&mut self, sink: &mut dyn OutputSink) -> Result<(), EngineError>;
}

/// Drives a channel through open, send and close
#[derive(Debug)]
pub struct CommunicationSession<C> {
    channel: C,
}

impl<C: CommunicationChannel> CommunicationSession<C> {
    pub fn new(channel: C) -> Self {
        Self { channel }
    }

    /// Deliver `message` over the channel
    pub fn communicate(
        &mut self,
        message: &str,
        sink: &mut dyn OutputSink,
    ) -> Result<(), EngineError> {
        debug!(channel = self.channel.name(), "Starting communication");
        self.channel.open_channel(sink)?;
        self.channel.send_message(message, sink)?;
        self.channel.close_channel(sink)?;
        debug!(channel = self.channel.name(), "Communication finished");
        Ok(())
    }

    pub fn into_channel(self) -> C {
        self.channel
    }
}

/// Email delivery
#[derive(Debug, Default, Clone, Copy)]
pub struct EmailChannel;

impl CommunicationChannel for EmailChannel {
    fn name(&self) -> &str {
        "email"
    }

    fn open_channel(&mut self, sink: &mut dyn OutputSink) -> Result<(), EngineError> {
        sink.emit("session", "Opening email channel")
    }

    fn send_message(
        &mut self,
        message: &str,
        sink: &mut dyn OutputSink,
    ) -> Result<(), EngineError> {
        sink.emit("session", &format!("Sending email: {}", message))
    }

    fn close_channel(&mut self, sink: &mut dyn OutputSink) -> Result<(), EngineError> {
        sink.emit("session", "Closing email channel")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdk::sink::MemorySink;

    #[derive(Default)]
    struct RecordingChannel {
        steps: Vec<String>,
    }

    impl CommunicationChannel for RecordingChannel {
        fn name(&self) -> &str {
            "recording"
        }

        fn open_channel(&mut self, _sink: &mut dyn OutputSink) -> Result<(), EngineError> {
            self.steps.push("open".to_string());
            Ok(())
        }

        fn send_message(
            &mut self,
            message: &str,
            _sink: &mut dyn OutputSink,
        ) -> Result<(), EngineError> {
            self.steps.push(format!("send:{}", message));
            Ok(())
        }

        fn close_channel(&mut self, _sink: &mut dyn OutputSink) -> Result<(), EngineError> {
            self.steps.push("close".to_string());
            Ok(())
        }
    }

    struct FailingSink;

    impl OutputSink for FailingSink {
        fn emit(&mut self, _source: &str, _line: &str) -> Result<(), EngineError> {
            Err(EngineError::Io(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "closed",
            )))
        }
    }

    #[test]
    fn test_email_emits_three_lines_in_order() {
        let mut session = CommunicationSession::new(EmailChannel);
        let mut sink = MemorySink::new();
        session.communicate("Important message", &mut sink).unwrap();

        assert_eq!(
            sink.texts(),
            vec![
                "Opening email channel",
                "Sending email: Important message",
                "Closing email channel",
            ]
        );
        assert!(sink.lines().iter().all(|l| l.source == "session"));
    }

    #[test]
    fn test_steps_run_once_each_per_call() {
        let mut session = CommunicationSession::new(RecordingChannel::default());
        let mut sink = MemorySink::new();

        session.communicate("first", &mut sink).unwrap();
        session.communicate("second", &mut sink).unwrap();

        assert_eq!(
            session.into_channel().steps,
            vec![
                "open",
                "send:first",
                "close",
                "open",
                "send:second",
                "close"
            ]
        );
    }

    #[test]
    fn test_write_failure_stops_lifecycle() {
        let mut session = CommunicationSession::new(EmailChannel);
        let err = session.communicate("lost", &mut FailingSink).unwrap_err();
        assert!(matches!(err, EngineError::Io(_)));
    }
}
