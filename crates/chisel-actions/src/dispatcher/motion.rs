//! Arrow-key cursor movement.
//!
//! Vertical moves preserve the column where the target line allows it and
//! clamp to the target's content length otherwise. Horizontal moves wrap:
//! right at end-of-line continues at the start of the next line, left at
//! start-of-line continues at the end of the previous one. Moves off the
//! document edge are no-ops.

use chisel_state::EditorState;
use tracing::trace;

use super::DispatchResult;

pub(crate) fn up(state: &mut EditorState) -> DispatchResult {
    if state.cursor.line == 0 {
        return DispatchResult::clean();
    }
    state.cursor.line -= 1;
    let len = state.buffer().line_char_len(state.cursor.line);
    state.cursor.col = state.cursor.col.min(len);
    trace!(target: "actions.dispatch", op = "up", line = state.cursor.line, col = state.cursor.col, "motion");
    DispatchResult::dirty()
}

pub(crate) fn down(state: &mut EditorState) -> DispatchResult {
    if state.cursor.line + 1 >= state.buffer().line_count() {
        return DispatchResult::clean();
    }
    state.cursor.line += 1;
    let len = state.buffer().line_char_len(state.cursor.line);
    state.cursor.col = state.cursor.col.min(len);
    trace!(target: "actions.dispatch", op = "down", line = state.cursor.line, col = state.cursor.col, "motion");
    DispatchResult::dirty()
}

pub(crate) fn left(state: &mut EditorState) -> DispatchResult {
    if state.cursor.col > 0 {
        state.cursor.col -= 1;
    } else if state.cursor.line > 0 {
        state.cursor.line -= 1;
        state.cursor.col = state.buffer().line_char_len(state.cursor.line);
    } else {
        return DispatchResult::clean();
    }
    trace!(target: "actions.dispatch", op = "left", line = state.cursor.line, col = state.cursor.col, "motion");
    DispatchResult::dirty()
}

pub(crate) fn right(state: &mut EditorState) -> DispatchResult {
    let len = state.buffer().line_char_len(state.cursor.line);
    if state.cursor.col < len {
        state.cursor.col += 1;
    } else if state.cursor.line + 1 < state.buffer().line_count() {
        state.cursor.line += 1;
        state.cursor.col = 0;
    } else {
        return DispatchResult::clean();
    }
    trace!(target: "actions.dispatch", op = "right", line = state.cursor.line, col = state.cursor.col, "motion");
    DispatchResult::dirty()
}
