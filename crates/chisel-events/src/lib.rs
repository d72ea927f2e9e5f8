//! Decoded key-event vocabulary shared by the input layer and the engine.
//!
//! Mapping raw terminal byte sequences (escape-prefixed arrows, control
//! codes) onto these variants is the input collaborator's job; the engine
//! only ever sees this enum.

use anyhow::Result;

/// One decoded key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    /// A printable character to insert at the cursor.
    Char(char),
    Enter,
    Backspace,
    DeleteForward,
    Up,
    Down,
    Left,
    Right,
    Undo,
    Redo,
    Copy,
    Paste,
    ToggleSelection,
    /// Save the buffer and end the session.
    Commit,
}

impl KeyEvent {
    /// True for the arrow keys — the events whose only effect is moving the
    /// cursor.
    pub fn is_motion(self) -> bool {
        matches!(self, Self::Up | Self::Down | Self::Left | Self::Right)
    }
}

/// Blocking source of decoded key events, one per call.
pub trait KeySource {
    fn next_key(&mut self) -> Result<KeyEvent>;
}
