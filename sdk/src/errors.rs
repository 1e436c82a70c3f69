//! Error types and handling
//!
//! This module provides the error types used throughout the examhub engine.
//! Components themselves never fail; every error here comes from the edges
//! of the program (writing to the output sink, reading configuration).
//! All errors implement the `ErrorExt` trait which provides user-friendly
//! hints and indicates whether errors are recoverable.

use thiserror::Error;

/// Trait for examhub error extensions
///
/// This trait provides additional context for errors, including user-friendly
/// hints and recoverability information. All engine errors implement this trait.
pub trait ErrorExt {
    /// Returns a user-friendly hint for the error
    fn user_hint(&self) -> &str;

    /// Returns whether the error is recoverable
    ///
    /// Recoverable errors can be fixed by the user (for example by editing
    /// the configuration file) and the command run again.
    fn is_recoverable(&self) -> bool;
}

/// Main engine error type
///
/// # Examples
///
/// ```
/// use sdk::errors::{EngineError, ErrorExt};
///
/// let error = EngineError::Config("unknown log level".to_string());
/// println!("Hint: {}", error.user_hint());
/// assert!(error.is_recoverable());
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Rejected command input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Output rendering errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    // Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ErrorExt for EngineError {
    fn user_hint(&self) -> &str {
        match self {
            Self::Config(_) => "Check your config.toml file for errors",
            Self::InvalidInput(_) => "Check the command arguments and try again",
            Self::Serialization(_) => "Output could not be encoded. Try without --json",
            Self::Io(_) => "Writing output failed. Check that stdout is still open",
        }
    }

    fn is_recoverable(&self) -> bool {
        match self {
            Self::Io(_) => false,
            Self::Config(_) | Self::InvalidInput(_) | Self::Serialization(_) => true,
        }
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
