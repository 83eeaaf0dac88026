//! Per-player undo stack.

use serde::Serialize;

/// The prior score values of one player, oldest first.
///
/// The bottom entry is the initial score and is never popped, so the stack
/// always holds at least one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScoreStack {
    entries: Vec<i64>,
}

impl ScoreStack {
    /// Creates a stack seeded with the initial score.
    pub fn new(initial: i64) -> Self {
        Self {
            entries: vec![initial],
        }
    }

    /// Records the score held before a mutation.
    pub fn push(&mut self, score: i64) {
        self.entries.push(score);
    }

    /// Pops the most recent prior score, unless only the initial entry remains.
    pub fn pop(&mut self) -> Option<i64> {
        if self.entries.len() > 1 {
            self.entries.pop()
        } else {
            None
        }
    }

    /// Whether there is any change left to undo.
    pub fn can_undo(&self) -> bool {
        self.entries.len() > 1
    }

    /// Number of entries, including the initial one.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the initial entry is never removed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.entries
    }
}

impl Default for ScoreStack {
    fn default() -> Self {
        Self::new(0)
    }
}
