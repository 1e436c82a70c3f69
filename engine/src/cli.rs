//! CLI interface for examhub
//!
//! This module provides the command-line interface using clap's derive API.
//! Running without a subcommand performs the full walkthrough.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::exam::ExamMode;

/// Examhub exam and case management walkthrough
///
/// Runs the exam system components one after another and prints what each
/// of them does.
#[derive(Parser, Debug)]
#[command(name = "examhub")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log: Option<String>,

    /// Specify alternate configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run every component once (default)
    Demo,

    /// Show the current theme, optionally changing it first
    Theme {
        /// New theme for this run
        #[arg(long, value_name = "THEME")]
        set: Option<String>,
    },

    /// Relay a message through the notification channel
    Mediate {
        /// Who sends the message
        sender: String,
        /// The message to relay
        message: String,
    },

    /// Assemble and conduct an exam
    Exam {
        /// Delivery mode (defaults to the configured mode)
        #[arg(long, value_enum)]
        mode: Option<ExamMode>,
    },

    /// Walk the stakeholder roster once
    Stakeholders {
        /// Roster size (defaults to the configured size)
        #[arg(short, long)]
        count: Option<usize>,
    },

    /// Send a message through an email session
    Communicate {
        /// The message to send
        message: String,
    },

    /// Push a real-time update to the listener
    Notify {
        /// The update to push
        message: String,
    },

    /// Print the effective configuration
    Config,
}
