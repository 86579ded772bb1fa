//! Navigable sequence of board snapshots.
//!
//! Entry 0 is the initial position. Committing after navigating back drops
//! every entry beyond the cursor, so redo information is lost once a new
//! move is made.

use crate::board::Board;

#[derive(Clone, Debug)]
pub struct History {
    entries: Vec<Board>,
    cursor: usize,
}

impl History {
    /// Start a history holding only `initial`.
    pub fn new(initial: Board) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    /// Board at the cursor.
    pub fn current(&self) -> &Board {
        &self.entries[self.cursor]
    }

    /// Truncate everything after the cursor, append `board` and move onto it.
    pub fn commit(&mut self, board: Board) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(board);
        self.cursor = self.entries.len() - 1;
    }

    /// Step back one entry. Returns `false` (and does nothing) at the start.
    pub fn back(&mut self) -> bool {
        if !self.can_back() {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Step forward one entry. Returns `false` (and does nothing) at the end.
    pub fn forward(&mut self) -> bool {
        if !self.can_forward() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// True if there is an earlier entry.
    pub fn can_back(&self) -> bool {
        self.cursor > 0
    }

    /// True if there is a later entry to redo.
    pub fn can_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Index of the current entry.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of snapshots, the initial position included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: a history holds at least its initial position.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Every snapshot, including those after the cursor.
    pub fn entries(&self) -> &[Board] {
        &self.entries
    }
}
