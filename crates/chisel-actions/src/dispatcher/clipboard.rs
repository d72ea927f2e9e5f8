//! Selection toggle, copy and paste arms.

use chisel_state::EditorState;
use tracing::trace;

use super::DispatchResult;

pub(crate) fn toggle_selection(state: &mut EditorState) -> DispatchResult {
    let active = state.toggle_selection();
    trace!(target: "actions.dispatch", op = "toggle_selection", active, "selection");
    DispatchResult::dirty()
}

/// Copy the selected span into the clipboard and drop the selection. A copy
/// without an active selection is a no-op; the clipboard keeps its previous
/// content.
pub(crate) fn copy(state: &mut EditorState) -> DispatchResult {
    if !state.copy_selection() {
        return DispatchResult::clean();
    }
    state.clear_selection();
    trace!(target: "actions.dispatch", op = "copy", chars = state.clipboard().text().chars().count(), "selection");
    DispatchResult::dirty()
}

/// Insert the clipboard at the cursor. Records history, drops any active
/// selection, and leaves the cursor at the end of the inserted block. A
/// paste from an empty clipboard is a no-op and pushes nothing.
pub(crate) fn paste(state: &mut EditorState) -> DispatchResult {
    if state.clipboard().is_empty() {
        return DispatchResult::clean();
    }
    state.push_undo_snapshot();
    state.clear_selection();
    let text = state.clipboard().text().to_string();
    let mut pos = state.cursor;
    state.buffer_mut().insert_block(&mut pos, &text);
    state.cursor = pos;
    state.dirty = true;
    trace!(target: "actions.dispatch", op = "paste", line = pos.line, col = pos.col, "edit");
    DispatchResult::dirty()
}
