//! Editor session state.
//!
//! [`EditorState`] is the single owned aggregate a session operates on:
//! document buffer, cursor, optional selection, clipboard, undo/redo history
//! and the dirty flag. There is no hidden global state; the engine mutates
//! exactly one of these per session and the renderer reads it.

use std::path::PathBuf;

use chisel_text::{LineBuffer, Position};
use tracing::trace;

mod clipboard;
mod history;
mod selection;

pub use clipboard::{CLIPBOARD_CAPACITY, Clipboard};
pub use history::{HISTORY_DEPTH, History, Snapshot};
pub use selection::Selection;

pub struct EditorState {
    buffer: LineBuffer,
    pub cursor: Position,
    selection: Option<Selection>,
    clipboard: Clipboard,
    history: History,
    pub dirty: bool,
    pub file_name: Option<PathBuf>,
}

impl EditorState {
    /// Session state over `buffer` with default history depth and clipboard
    /// capacity.
    pub fn new(buffer: LineBuffer) -> Self {
        Self::with_limits(buffer, HISTORY_DEPTH, CLIPBOARD_CAPACITY)
    }

    pub fn with_limits(
        buffer: LineBuffer,
        history_depth: usize,
        clipboard_capacity: usize,
    ) -> Self {
        Self {
            buffer,
            cursor: Position::origin(),
            selection: None,
            clipboard: Clipboard::new(clipboard_capacity),
            history: History::new(history_depth),
            dirty: false,
            file_name: None,
        }
    }

    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut LineBuffer {
        &mut self.buffer
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// The active selection span in ascending order, clamped into the
    /// current buffer bounds. `None` when no selection is active.
    pub fn selection_span(&self) -> Option<(Position, Position)> {
        let sel = self.selection?;
        let (mut start, mut end) = sel.normalized();
        self.buffer.clamp(&mut start);
        self.buffer.clamp(&mut end);
        Some((start, end))
    }

    /// Activate a selection anchored at the cursor, or discard the active
    /// one. Returns true if a selection is active afterwards.
    pub fn toggle_selection(&mut self) -> bool {
        match self.selection {
            Some(_) => {
                self.selection = None;
                false
            }
            None => {
                self.selection = Some(Selection::at(self.cursor));
                true
            }
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Re-point the live endpoint of an active selection at the cursor.
    /// Called by the engine after every event so the span follows the cursor
    /// while extending.
    pub fn track_selection_head(&mut self) {
        if let Some(sel) = &mut self.selection {
            sel.head = self.cursor;
        }
    }

    /// Copy the selected span into the clipboard: from the start column on
    /// the first line to end-of-line, full lines in between, up to the end
    /// column on the last line, joined with `\n`. Returns false (and leaves
    /// the clipboard untouched) when no selection is active. The selection
    /// itself is left to the caller.
    pub fn copy_selection(&mut self) -> bool {
        let Some((start, end)) = self.selection_span() else {
            return false;
        };
        let mut out = String::new();
        for line in start.line..=end.line {
            let content = self.buffer.line(line).unwrap_or("");
            let from = if line == start.line { start.col } else { 0 };
            let to = if line == end.line {
                end.col
            } else {
                content.chars().count()
            };
            out.extend(content.chars().skip(from).take(to.saturating_sub(from)));
            if line < end.line {
                out.push('\n');
            }
        }
        trace!(target: "state.clipboard", chars = out.chars().count(), "copy");
        self.clipboard.store(&out);
        true
    }

    pub fn clipboard_mut(&mut self) -> &mut Clipboard {
        &mut self.clipboard
    }

    /// Record the pre-mutation snapshot. Every mutating edit calls this
    /// before touching the buffer; it also forgets any redoable future.
    pub fn push_undo_snapshot(&mut self) {
        self.history.record(&self.buffer, self.cursor);
    }

    /// Restore the most recent snapshot. Clears the selection — a restored
    /// buffer may not contain the selected span anymore.
    pub fn undo(&mut self) -> bool {
        let done = self.history.undo(&mut self.buffer, &mut self.cursor);
        if done {
            self.selection = None;
        }
        done
    }

    /// Mirror of [`Self::undo`].
    pub fn redo(&mut self) -> bool {
        let done = self.history.redo(&mut self.buffer, &mut self.cursor);
        if done {
            self.selection = None;
        }
        done
    }
}
