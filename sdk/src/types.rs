//! Shared domain types

use serde::{Deserialize, Serialize};

/// A participant of the exam system (student, examiner, case officer).
///
/// Stakeholders are opaque: the system only ever counts and traverses them,
/// so the type carries no attributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Stakeholder;

impl Stakeholder {
    pub fn new() -> Self {
        Self
    }
}

/// One line written by a component to the output sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmittedLine {
    /// Component that produced the line (e.g. "mediator", "session")
    pub source: String,

    /// The rendered line, without trailing newline
    pub line: String,
}

impl EmittedLine {
    pub fn new(source: impl Into<String>, line: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            line: line.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stakeholders_are_indistinguishable() {
        assert_eq!(Stakeholder::new(), Stakeholder::default());
    }

    #[test]
    fn test_emitted_line_json_shape() {
        let line = EmittedLine::new("listener", "Real-time update: ping");
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["source"], "listener");
        assert_eq!(json["line"], "Real-time update: ping");
    }
}
