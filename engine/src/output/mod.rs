//! Console output
//!
//! `ConsoleSink` renders component lines either as plain text (one line per
//! emission) or as newline-delimited JSON records for machine consumption.

use sdk::errors::EngineError;
use sdk::sink::OutputSink;
use sdk::types::EmittedLine;
use std::io::{self, Write};

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for machine consumption
    Json,
}

/// Sink writing to any `io::Write` in the chosen format
pub struct ConsoleSink<W: Write> {
    writer: W,
    format: OutputFormat,
}

impl ConsoleSink<io::Stdout> {
    /// Sink over the process standard output
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(io::stdout(), format)
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for ConsoleSink<W> {
    fn emit(&mut self, source: &str, line: &str) -> Result<(), EngineError> {
        match self.format {
            OutputFormat::Text => writeln!(self.writer, "{}", line)?,
            OutputFormat::Json => {
                let record = EmittedLine::new(source, line);
                serde_json::to_writer(&mut self.writer, &record)?;
                writeln!(self.writer)?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}
