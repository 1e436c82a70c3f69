//! Real-time notifications
//!
//! A [`RealtimeObserver`] is pushed messages as they happen. There is no
//! subscription registry: whoever holds an observer calls `update` on it.

use sdk::errors::EngineError;
use sdk::sink::OutputSink;

/// Receiver of pushed messages
pub trait RealtimeObserver {
    fn update(&self, message: &str, sink: &mut dyn OutputSink) -> Result<(), EngineError>;
}

/// Observer that echoes updates to the output sink
#[derive(Debug, Default, Clone, Copy)]
pub struct RealtimeListener;

impl RealtimeListener {
    pub fn new() -> Self {
        Self
    }
}

impl RealtimeObserver for RealtimeListener {
    fn update(&self, message: &str, sink: &mut dyn OutputSink) -> Result<(), EngineError> {
        sink.emit("listener", &format!("Real-time update: {}", message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdk::sink::MemorySink;

    #[test]
    fn test_update_line() {
        let mut sink = MemorySink::new();
        RealtimeListener::new()
            .update("New message in real-time", &mut sink)
            .unwrap();

        assert_eq!(sink.texts(), vec!["Real-time update: New message in real-time"]);
        assert_eq!(sink.lines()[0].source, "listener");
    }

    #[test]
    fn test_each_update_is_one_line() {
        let listener = RealtimeListener;
        let mut sink = MemorySink::new();
        listener.update("a", &mut sink).unwrap();
        listener.update("b", &mut sink).unwrap();

        assert_eq!(sink.texts(), vec!["Real-time update: a", "Real-time update: b"]);
    }
}
