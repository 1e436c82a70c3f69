//! Command handlers for CLI operations
//!
//! Each handler builds the components it needs, runs one operation on each
//! and writes through the given sink. The theme registry is passed in rather
//! than looked up, so callers decide whether the global registry is used.

use anyhow::{Context, Result};
use sdk::sink::OutputSink;
use tracing::{debug, info};

use crate::communication::{CommunicationSession, EmailChannel};
use crate::config::Config;
use crate::exam::{ExamConductor, ExamMode, MessageAssembler};
use crate::mediator::{Mediator, NotificationChannel};
use crate::observer::{RealtimeListener, RealtimeObserver};
use crate::settings::ThemeRegistry;
use crate::stakeholders::{checked_roster, visit_all, StakeholderCursor};

/// Run every component once, in the fixed walkthrough order
pub fn handle_demo(
    config: &Config,
    registry: &ThemeRegistry,
    sink: &mut dyn OutputSink,
) -> Result<()> {
    info!("Starting walkthrough");
    let walkthrough = &config.walkthrough;

    registry.report(sink)?;

    NotificationChannel::new().communicate(
        &walkthrough.sender,
        &walkthrough.mediator_message,
        sink,
    )?;

    run_exam(config.exam.mode, sink)?;

    let mut cursor = StakeholderCursor::new(checked_roster(walkthrough.stakeholders)?);
    let visited = visit_all(&mut cursor);
    debug!(visited, "Stakeholder traversal finished");

    CommunicationSession::new(EmailChannel).communicate(&walkthrough.email_message, sink)?;

    RealtimeListener::new().update(&walkthrough.realtime_message, sink)?;

    info!("Walkthrough complete");
    Ok(())
}

/// Optionally replace the theme, then report it
pub fn handle_theme(
    registry: &ThemeRegistry,
    set: Option<String>,
    sink: &mut dyn OutputSink,
) -> Result<()> {
    if let Some(theme) = set {
        registry.set_theme(theme);
    }
    registry.report(sink)?;
    Ok(())
}

/// Relay one message through the notification channel
pub fn handle_mediate(sender: &str, message: &str, sink: &mut dyn OutputSink) -> Result<()> {
    NotificationChannel::new().communicate(&sender, message, sink)?;
    Ok(())
}

/// Assemble an exam and conduct it in `mode`
pub fn handle_exam(mode: ExamMode, sink: &mut dyn OutputSink) -> Result<()> {
    run_exam(mode, sink)
}

/// Walk a roster of `count` stakeholders and report how many were visited
pub fn handle_stakeholders(count: usize, sink: &mut dyn OutputSink) -> Result<()> {
    let mut cursor = StakeholderCursor::new(checked_roster(count)?);
    let visited = visit_all(&mut cursor);
    sink.emit("cursor", &format!("Visited {} stakeholders", visited))?;
    Ok(())
}

/// Send one message through an email session
pub fn handle_communicate(message: &str, sink: &mut dyn OutputSink) -> Result<()> {
    CommunicationSession::new(EmailChannel).communicate(message, sink)?;
    Ok(())
}

/// Push one update to the real-time listener
pub fn handle_notify(message: &str, sink: &mut dyn OutputSink) -> Result<()> {
    RealtimeListener::new().update(message, sink)?;
    Ok(())
}

/// Print the effective configuration as TOML, one sink line per TOML line
pub fn handle_config(config: &Config, sink: &mut dyn OutputSink) -> Result<()> {
    let rendered = config
        .to_toml_string()
        .context("Failed to render configuration")?;
    for line in rendered.lines() {
        sink.emit("config", line)?;
    }
    Ok(())
}

fn run_exam(mode: ExamMode, sink: &mut dyn OutputSink) -> Result<()> {
    let mut conductor = ExamConductor::new();
    conductor.conduct_exam(Box::new(MessageAssembler::new()), sink)?;

    debug!(mode = %mode, "Selected exam strategy");
    mode.strategy().conduct_exam(sink)?;
    Ok(())
}
