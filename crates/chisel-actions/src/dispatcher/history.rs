//! Undo / redo arms. Empty-stack requests are silently ignored.

use chisel_state::EditorState;
use tracing::trace;

use super::DispatchResult;

pub(crate) fn undo(state: &mut EditorState) -> DispatchResult {
    if state.undo() {
        trace!(target: "actions.dispatch", op = "undo", "history");
        DispatchResult::dirty()
    } else {
        DispatchResult::clean()
    }
}

pub(crate) fn redo(state: &mut EditorState) -> DispatchResult {
    if state.redo() {
        trace!(target: "actions.dispatch", op = "redo", "history");
        DispatchResult::dirty()
    } else {
        DispatchResult::clean()
    }
}
