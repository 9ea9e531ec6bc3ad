//! Undo/redo stacks over board snapshots.

use crate::board::BoardSnapshot;

const MAX_UNDO_HISTORY: usize = 50;

/// Linear undo/redo history.
///
/// The top of the undo stack always mirrors the current board state
/// while the stack is non-empty; `undo` therefore restores from the new
/// top after popping, not from the popped entry. An empty undo stack
/// means the board is in its initial blank state.
#[derive(Debug, Clone, Default)]
pub struct History {
    undo_stack: Vec<BoardSnapshot>,
    redo_stack: Vec<BoardSnapshot>,
}

impl History {
    pub fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// Record a new state. Clears the redo stack and drops the oldest
    /// entry once the cap is reached.
    pub fn commit(&mut self, snapshot: BoardSnapshot) {
        self.redo_stack.clear();
        self.undo_stack.push(snapshot);
        if self.undo_stack.len() > MAX_UNDO_HISTORY {
            self.undo_stack.remove(0);
        }
    }

    /// Step back. Returns the snapshot to restore, or None if there is
    /// nothing to undo.
    pub fn undo(&mut self) -> Option<BoardSnapshot> {
        let current = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        Some(self.undo_stack.last().cloned().unwrap_or_default())
    }

    /// Step forward. Returns the snapshot to restore, or None if there
    /// is nothing to redo.
    pub fn redo(&mut self) -> Option<BoardSnapshot> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(next.clone());
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of states currently held on the undo stack.
    pub fn depth(&self) -> usize {
        self.undo_stack.len()
    }
}
