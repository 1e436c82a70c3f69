//! Output sink trait
//!
//! Every component writes its lines through an `OutputSink` instead of
//! printing directly, so the binary can pick a rendering (text or JSON) and
//! tests can capture exactly what was emitted and in which order.

use crate::errors::EngineError;
use crate::types::EmittedLine;

/// Destination for component output
pub trait OutputSink {
    /// Emit a single line attributed to `source`
    fn emit(&mut self, source: &str, line: &str) -> Result<(), EngineError>;
}

/// Sink that keeps every emitted line in memory
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Vec<EmittedLine>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All emitted lines in emission order
    pub fn lines(&self) -> &[EmittedLine] {
        &self.lines
    }

    /// Just the rendered text of each line
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.line.as_str()).collect()
    }

    pub fn into_lines(self) -> Vec<EmittedLine> {
        self.lines
    }
}

impl OutputSink for MemorySink {
    fn emit(&mut self, source: &str, line: &str) -> Result<(), EngineError> {
        self.lines.push(EmittedLine::new(source, line));
        Ok(())
    }
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn emit(&mut self, source: &str, line: &str) -> Result<(), EngineError> {
        (**self).emit(source, line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_preserves_order() {
        let mut sink = MemorySink::new();
        sink.emit("a", "first").unwrap();
        sink.emit("b", "second").unwrap();

        assert_eq!(sink.texts(), vec!["first", "second"]);
        assert_eq!(sink.lines()[1].source, "b");
    }

    #[test]
    fn test_emit_through_mut_reference() {
        fn write_one(mut sink: impl OutputSink) {
            sink.emit("x", "via ref").unwrap();
        }

        let mut sink = MemorySink::new();
        write_one(&mut sink);
        assert_eq!(sink.into_lines().len(), 1);
    }
}
