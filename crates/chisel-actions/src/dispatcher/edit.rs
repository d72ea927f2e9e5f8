//! Text mutation arms (insert/newline/backspace/forward delete).
//!
//! Each arm records the pre-mutation snapshot first, then delegates the
//! mutation to the buffer primitive, which enforces the saturating capacity
//! policy. The snapshot is taken even when the mutation subsequently
//! saturates to a no-op — mutating *operations* push history, whatever the
//! buffer then does with them.

use chisel_state::EditorState;
use tracing::trace;

use super::DispatchResult;

pub(crate) fn insert_char(state: &mut EditorState, ch: char) -> DispatchResult {
    if ch.is_control() {
        return DispatchResult::clean();
    }
    state.push_undo_snapshot();
    let mut pos = state.cursor;
    state.buffer_mut().insert_char(&mut pos, ch);
    state.cursor = pos;
    state.dirty = true;
    trace!(target: "actions.dispatch", op = "insert_char", line = pos.line, col = pos.col, "edit");
    DispatchResult::dirty()
}

pub(crate) fn insert_newline(state: &mut EditorState) -> DispatchResult {
    state.push_undo_snapshot();
    let mut pos = state.cursor;
    state.buffer_mut().split_line(&mut pos);
    state.cursor = pos;
    state.dirty = true;
    trace!(target: "actions.dispatch", op = "insert_newline", line = pos.line, col = pos.col, "edit");
    DispatchResult::dirty()
}

pub(crate) fn backspace(state: &mut EditorState) -> DispatchResult {
    state.push_undo_snapshot();
    let mut pos = state.cursor;
    state.buffer_mut().delete_char_before(&mut pos);
    state.cursor = pos;
    state.dirty = true;
    trace!(target: "actions.dispatch", op = "backspace", line = pos.line, col = pos.col, "edit");
    DispatchResult::dirty()
}

pub(crate) fn delete_forward(state: &mut EditorState) -> DispatchResult {
    state.push_undo_snapshot();
    let mut pos = state.cursor;
    state.buffer_mut().delete_char_at(&mut pos);
    state.cursor = pos;
    state.dirty = true;
    trace!(target: "actions.dispatch", op = "delete_forward", line = pos.line, col = pos.col, "edit");
    DispatchResult::dirty()
}
