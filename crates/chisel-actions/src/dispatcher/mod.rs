//! Dispatcher applying one [`KeyEvent`] to mutable editor state.
//!
//! Decomposed into focused submodules:
//! * `motion`    - arrow-key cursor movement
//! * `edit`      - text mutation (insert/newline/backspace/delete)
//! * `clipboard` - selection toggle, copy, paste
//! * `history`   - undo / redo
//!
//! History policy: every mutating arm (character insert, newline, backspace,
//! forward delete, paste) records the pre-mutation snapshot and clears redo
//! before touching the buffer. Navigation, selection toggle and copy do not.
//!
//! Selection tracking: the dispatcher's final act on every event is to
//! re-point an active selection's live endpoint at the cursor, so the span
//! follows the cursor through motions and edits alike.

use chisel_events::KeyEvent;
use chisel_state::EditorState;

mod clipboard;
mod edit;
mod history;
mod motion;

/// Result of dispatching a single event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    /// Something visible changed; the caller should redraw.
    pub dirty: bool,
    /// The session is over; the caller persists the buffer and returns.
    pub quit: bool,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self {
            dirty: true,
            quit: false,
        }
    }
    pub fn clean() -> Self {
        Self {
            dirty: false,
            quit: false,
        }
    }
    pub fn quit() -> Self {
        Self {
            dirty: false,
            quit: true,
        }
    }
}

/// Apply `event` to `state`. Never fails; boundary input clamps or no-ops.
pub fn dispatch(event: KeyEvent, state: &mut EditorState) -> DispatchResult {
    let result = match event {
        KeyEvent::Char(c) => edit::insert_char(state, c),
        KeyEvent::Enter => edit::insert_newline(state),
        KeyEvent::Backspace => edit::backspace(state),
        KeyEvent::DeleteForward => edit::delete_forward(state),
        KeyEvent::Up => motion::up(state),
        KeyEvent::Down => motion::down(state),
        KeyEvent::Left => motion::left(state),
        KeyEvent::Right => motion::right(state),
        KeyEvent::Undo => history::undo(state),
        KeyEvent::Redo => history::redo(state),
        KeyEvent::ToggleSelection => clipboard::toggle_selection(state),
        KeyEvent::Copy => clipboard::copy(state),
        KeyEvent::Paste => clipboard::paste(state),
        KeyEvent::Commit => DispatchResult::quit(),
    };
    state.track_selection_head();
    result
}
