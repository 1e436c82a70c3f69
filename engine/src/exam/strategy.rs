//! Exam delivery modes

use clap::ValueEnum;
use sdk::errors::EngineError;
use sdk::sink::OutputSink;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How an exam is delivered to candidates
pub trait ExamModeStrategy {
    fn conduct_exam(&self, sink: &mut dyn OutputSink) -> Result<(), EngineError>;
}

/// Exam taken through the web portal
#[derive(Debug, Default, Clone, Copy)]
pub struct OnlineExam;

impl ExamModeStrategy for OnlineExam {
    fn conduct_exam(&self, sink: &mut dyn OutputSink) -> Result<(), EngineError> {
        sink.emit("strategy", "Conducting online exam")
    }
}

/// Exam taken on paper in an exam hall
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineExam;

impl ExamModeStrategy for OfflineExam {
    fn conduct_exam(&self, sink: &mut dyn OutputSink) -> Result<(), EngineError> {
        sink.emit("strategy", "Conducting offline exam")
    }
}

/// Configurable exam mode (`online` or `offline`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExamMode {
    #[default]
    Online,
    Offline,
}

impl ExamMode {
    /// Strategy implementing this mode
    pub fn strategy(self) -> Box<dyn ExamModeStrategy> {
        match self {
            ExamMode::Online => Box::new(OnlineExam),
            ExamMode::Offline => Box::new(OfflineExam),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExamMode::Online => "online",
            ExamMode::Offline => "offline",
        }
    }
}

impl fmt::Display for ExamMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
