//! Pure crossterm → [`KeyEvent`] mapping.

use chisel_events::KeyEvent;
use crossterm::event::{KeyCode, KeyEvent as RawKey, KeyEventKind, KeyModifiers};

/// Map one raw key event onto the engine vocabulary.
///
/// Bindings: printable chars insert; Ctrl+U undo, Ctrl+R redo, Ctrl+X copy,
/// Ctrl+V paste, Ctrl+B selection toggle; Esc commits (save and exit).
/// Release events and unknown chords map to `None`.
pub fn translate(key: &RawKey) -> Option<KeyEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('u') => Some(KeyEvent::Undo),
            KeyCode::Char('r') => Some(KeyEvent::Redo),
            KeyCode::Char('x') => Some(KeyEvent::Copy),
            KeyCode::Char('v') => Some(KeyEvent::Paste),
            KeyCode::Char('b') => Some(KeyEvent::ToggleSelection),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Char(c) => Some(KeyEvent::Char(c)),
        KeyCode::Enter => Some(KeyEvent::Enter),
        KeyCode::Backspace => Some(KeyEvent::Backspace),
        KeyCode::Delete => Some(KeyEvent::DeleteForward),
        KeyCode::Up => Some(KeyEvent::Up),
        KeyCode::Down => Some(KeyEvent::Down),
        KeyCode::Left => Some(KeyEvent::Left),
        KeyCode::Right => Some(KeyEvent::Right),
        KeyCode::Esc => Some(KeyEvent::Commit),
        _ => None,
    }
}
