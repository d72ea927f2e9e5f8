#![allow(dead_code)] // Shared across the integration-test binaries; each uses a subset.

use chisel_actions::dispatch;
use chisel_events::KeyEvent;
use chisel_state::EditorState;
use chisel_text::{BufferLimits, LineBuffer, Position};

/// State over the given lines with default limits, cursor at origin.
pub fn state_from(lines: &[&str]) -> EditorState {
    let (buffer, dropped) = LineBuffer::from_text(&lines.join("\n"), BufferLimits::default());
    assert_eq!(dropped, 0, "fixture must fit the default limits");
    EditorState::new(buffer)
}

/// State with explicit buffer/history/clipboard bounds for saturation tests.
pub fn state_with_limits(
    lines: &[&str],
    limits: BufferLimits,
    history_depth: usize,
    clipboard_capacity: usize,
) -> EditorState {
    let (buffer, _) = LineBuffer::from_text(&lines.join("\n"), limits);
    EditorState::with_limits(buffer, history_depth, clipboard_capacity)
}

/// Place the cursor, panicking on positions the fixture buffer cannot hold.
pub fn move_to(state: &mut EditorState, line: usize, col: usize) {
    assert!(line < state.buffer().line_count(), "fixture line out of range");
    assert!(
        col <= state.buffer().line_char_len(line),
        "fixture col out of range"
    );
    state.cursor = Position::new(line, col);
}

pub fn apply_all(state: &mut EditorState, events: &[KeyEvent]) {
    for &ev in events {
        dispatch(ev, state);
    }
}

/// Feed a string through the engine as individual character events.
pub fn type_str(state: &mut EditorState, text: &str) {
    for ch in text.chars() {
        dispatch(KeyEvent::Char(ch), state);
    }
}

pub fn lines(state: &EditorState) -> Vec<String> {
    state
        .buffer()
        .iter()
        .map(|l| l.content().to_string())
        .collect()
}
