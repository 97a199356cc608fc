//! Line state history.
//!
//! Classification only ever looks one line back, so [`LineHistory`]
//! keeps the count of recorded lines and the most recent state.

use crate::enums::LineState;

/// Append-only record of the line states of one conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineHistory {
    len: usize,
    last: Option<LineState>,
}

impl LineHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the state of the next processed line.
    pub fn push(&mut self, state: LineState) {
        self.len += 1;
        self.last = Some(state);
    }

    /// State of the most recently processed line.
    pub fn last(&self) -> Option<LineState> {
        self.last
    }

    /// Number of lines processed so far.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the previous line was a bullet at exactly `indent`.
    pub fn continues_bullet(&self, indent: usize) -> bool {
        self.last == Some(LineState::Bullet(indent))
    }
}
