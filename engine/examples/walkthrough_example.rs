//! Example wiring the exam system components by hand
//!
//! Run with: cargo run --example walkthrough_example

use examhub_engine::communication::{CommunicationSession, EmailChannel};
use examhub_engine::exam::{ExamConductor, ExamMode, MessageAssembler};
use examhub_engine::mediator::{Mediator, NotificationChannel};
use examhub_engine::observer::{RealtimeListener, RealtimeObserver};
use examhub_engine::output::{ConsoleSink, OutputFormat};
use examhub_engine::settings::ThemeRegistry;
use examhub_engine::stakeholders::{roster, StakeholderCursor};
use sdk::OutputSink;

fn main() -> anyhow::Result<()> {
    let mut sink = ConsoleSink::stdout(OutputFormat::Text);

    // A local registry instead of the global one
    let registry = ThemeRegistry::with_theme("High Contrast");
    registry.report(&mut sink)?;

    NotificationChannel::new().communicate(&"Examiner", "Papers are ready", &mut sink)?;

    let mut conductor = ExamConductor::new();
    conductor.conduct_exam(Box::new(MessageAssembler::new()), &mut sink)?;
    ExamMode::Offline.strategy().conduct_exam(&mut sink)?;

    let mut cursor = StakeholderCursor::new(roster(3));
    while cursor.next().is_some() {
        sink.emit(
            "cursor",
            &format!("Stakeholder {} of 3", cursor.consumed()),
        )?;
    }
    assert_eq!(cursor.next(), None);

    CommunicationSession::new(EmailChannel).communicate("Exam starts at 9:00", &mut sink)?;
    RealtimeListener::new().update("Hall B is open", &mut sink)?;

    Ok(())
}
