//! Snapshot-based linear undo/redo.
//!
//! Whole-buffer snapshots keep restore semantics trivial: undo/redo swap the
//! entire document and cursor in one move. Both stacks are bounded by the
//! configured depth with FIFO eviction, so a long session can always undo
//! the most recent `depth` edits and never grows without bound.

use chisel_text::{LineBuffer, Position};
use tracing::trace;

/// Default number of snapshots retained on each stack.
pub const HISTORY_DEPTH: usize = 100;

/// A full copy of the document and cursor at one point in time.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub buffer: LineBuffer,
    pub cursor: Position,
}

/// Bounded undo/redo stacks over [`Snapshot`]s.
///
/// Every mutating edit records the pre-mutation state and clears the redo
/// stack — history is linear, never branching.
#[derive(Debug)]
pub struct History {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    depth: usize,
}

impl History {
    pub fn new(depth: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            depth,
        }
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Record the pre-mutation state. Call before mutating the buffer; evicts
    /// the oldest snapshot when the stack is at depth and clears redo.
    pub fn record(&mut self, buffer: &LineBuffer, cursor: Position) {
        let snap = Snapshot {
            buffer: buffer.clone(),
            cursor,
        };
        push_bounded(&mut self.undo_stack, snap, self.depth);
        trace!(
            target: "state.history",
            undo_depth = self.undo_stack.len(),
            redo_depth = self.redo_stack.len(),
            "record"
        );
        self.redo_stack.clear();
    }

    /// Pop the most recent snapshot into the current state, saving the
    /// pre-undo state onto redo (same bounds). Returns false when there is
    /// nothing to undo.
    pub fn undo(&mut self, buffer: &mut LineBuffer, cursor: &mut Position) -> bool {
        let Some(snap) = self.undo_stack.pop() else {
            return false;
        };
        let current = Snapshot {
            buffer: buffer.clone(),
            cursor: *cursor,
        };
        push_bounded(&mut self.redo_stack, current, self.depth);
        *buffer = snap.buffer;
        *cursor = snap.cursor;
        trace!(
            target: "state.history",
            undo_depth = self.undo_stack.len(),
            redo_depth = self.redo_stack.len(),
            "undo"
        );
        true
    }

    /// Mirror of [`Self::undo`], moving a snapshot from redo back onto undo.
    pub fn redo(&mut self, buffer: &mut LineBuffer, cursor: &mut Position) -> bool {
        let Some(snap) = self.redo_stack.pop() else {
            return false;
        };
        let current = Snapshot {
            buffer: buffer.clone(),
            cursor: *cursor,
        };
        push_bounded(&mut self.undo_stack, current, self.depth);
        *buffer = snap.buffer;
        *cursor = snap.cursor;
        trace!(
            target: "state.history",
            undo_depth = self.undo_stack.len(),
            redo_depth = self.redo_stack.len(),
            "redo"
        );
        true
    }
}

fn push_bounded(stack: &mut Vec<Snapshot>, snap: Snapshot, depth: usize) {
    if stack.len() >= depth {
        if depth == 0 {
            return;
        }
        let _ = stack.remove(0);
        trace!(target: "state.history", "snapshot_evicted");
    }
    stack.push(snap);
}
