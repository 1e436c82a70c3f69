//! Stakeholder traversal
//!
//! [`StakeholderCursor`] walks a fixed list exactly once, front to back.
//! After the last element it keeps returning `None`: the cursor has no
//! reset and never wraps around.

use sdk::errors::EngineError;
use sdk::types::Stakeholder;
use std::iter::FusedIterator;
use tracing::debug;

/// Single-pass cursor over an owned list
#[derive(Debug, Clone)]
pub struct StakeholderCursor<T = Stakeholder> {
    items: Vec<T>,
    // Always <= items.len()
    index: usize,
}

impl<T> StakeholderCursor<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items, index: 0 }
    }

    /// Whether another call to `next` will yield an element
    pub fn has_next(&self) -> bool {
        self.index < self.items.len()
    }

    /// Number of elements already yielded
    pub fn consumed(&self) -> usize {
        self.index
    }

    /// Number of elements still to be yielded
    pub fn remaining(&self) -> usize {
        self.items.len() - self.index
    }
}

impl<T: Clone> Iterator for StakeholderCursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = self.items.get(self.index)?.clone();
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for StakeholderCursor<T> {}

impl<T: Clone> FusedIterator for StakeholderCursor<T> {}

/// Largest roster `checked_roster` will build
pub const MAX_ROSTER_SIZE: usize = 100_000;

/// A roster of `count` stakeholders
pub fn roster(count: usize) -> Vec<Stakeholder> {
    vec![Stakeholder::new(); count]
}

/// A roster of `count` stakeholders, refusing sizes above [`MAX_ROSTER_SIZE`]
pub fn checked_roster(count: usize) -> Result<Vec<Stakeholder>, EngineError> {
    if count > MAX_ROSTER_SIZE {
        return Err(EngineError::InvalidInput(format!(
            "Roster of {} stakeholders exceeds the limit of {}",
            count, MAX_ROSTER_SIZE
        )));
    }
    Ok(roster(count))
}

/// Drain the cursor and return how many stakeholders were visited
pub fn visit_all<T: Clone>(cursor: &mut StakeholderCursor<T>) -> usize {
    let mut visited = 0;
    while cursor.next().is_some() {
        visited += 1;
        debug!(consumed = cursor.consumed(), "Visited stakeholder");
    }
    visited
}
