//! Exam assembly and conduct
//!
//! An [`ExamConductor`] is the single entry point for running an exam: it
//! takes any [`ExamAssembler`], keeps hold of it, and asks it to build the
//! question set. How the exam is then delivered is chosen separately through
//! an [`ExamModeStrategy`](strategy::ExamModeStrategy).

pub mod strategy;

pub use strategy::{ExamMode, ExamModeStrategy, OfflineExam, OnlineExam};

use sdk::errors::EngineError;
use sdk::sink::OutputSink;
use tracing::debug;

/// Anything that can build the questions of an exam
pub trait ExamAssembler {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Build the question set
    fn build_questions(&self, sink: &mut dyn OutputSink) -> Result<(), EngineError>;
}

/// Assembler for message-based exams
#[derive(Debug, Default, Clone, Copy)]
pub struct MessageAssembler;

impl MessageAssembler {
    pub fn new() -> Self {
        Self
    }
}

impl ExamAssembler for MessageAssembler {
    fn name(&self) -> &str {
        "message"
    }

    fn build_questions(&self, sink: &mut dyn OutputSink) -> Result<(), EngineError> {
        sink.emit("assembler", "Building message questions")
    }
}

/// Front door to the exam system
#[derive(Default)]
pub struct ExamConductor {
    assembler: Option<Box<dyn ExamAssembler>>,
}

impl ExamConductor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `assembler` and have it build the questions
    pub fn conduct_exam(
        &mut self,
        assembler: Box<dyn ExamAssembler>,
        sink: &mut dyn OutputSink,
    ) -> Result<(), EngineError> {
        debug!(assembler = assembler.name(), "Conducting exam");
        let assembler = self.assembler.insert(assembler);
        assembler.build_questions(sink)
    }

    /// The assembler used by the last `conduct_exam` call
    pub fn assembler(&self) -> Option<&dyn ExamAssembler> {
        self.assembler.as_deref()
    }
}
