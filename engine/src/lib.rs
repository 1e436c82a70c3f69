//! Examhub Engine Library
//!
//! This library provides the components of the examhub exam system.
//! It is used by both the main binary and integration tests.

/// Configuration management module
pub mod config;

/// Theme registry module
pub mod settings;

/// Notification channel between participants
pub mod mediator;

/// Exam assembly, conduct and delivery modes
pub mod exam;

/// Stakeholder traversal module
pub mod stakeholders;

/// Communication session lifecycle
pub mod communication;

/// Real-time notification module
pub mod observer;

/// Console output rendering
pub mod output;

/// Telemetry and Observability
pub mod telemetry;

/// CLI interface module
pub mod cli;

/// Command handlers module
pub mod handlers;
