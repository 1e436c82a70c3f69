//! Examhub SDK
//!
//! Shared library providing traits and types for examhub components.
//! This crate is used by the engine and by anything embedding its components.

/// Error types and handling
pub mod errors;

/// Output sink trait and in-memory sink
pub mod sink;

/// Shared domain types
pub mod types;

// Re-export commonly used types
pub use errors::{EngineError, ErrorExt};
pub use sink::{MemorySink, OutputSink};
pub use types::{EmittedLine, Stakeholder};
