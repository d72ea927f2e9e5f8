//! Character, newline and delete edits through the dispatcher.

mod common;

use chisel_actions::dispatch;
use chisel_events::KeyEvent;
use chisel_text::{BufferLimits, Position};
use common::{lines, move_to, state_from, state_with_limits, type_str};
use pretty_assertions::assert_eq;

#[test]
fn insert_char_at_line_end() {
    let mut st = state_from(&["abc"]);
    move_to(&mut st, 0, 3);
    dispatch(KeyEvent::Char('d'), &mut st);
    assert_eq!(lines(&st), vec!["abcd"]);
    assert_eq!(st.cursor, Position::new(0, 4));
}

#[test]
fn backspace_at_line_start_merges_lines() {
    let mut st = state_from(&["abc", "def"]);
    move_to(&mut st, 1, 0);
    dispatch(KeyEvent::Backspace, &mut st);
    assert_eq!(lines(&st), vec!["abcdef"]);
    assert_eq!(st.cursor, Position::new(0, 3));
}

#[test]
fn enter_splits_line_at_cursor() {
    let mut st = state_from(&["abcd"]);
    move_to(&mut st, 0, 2);
    dispatch(KeyEvent::Enter, &mut st);
    assert_eq!(lines(&st), vec!["ab", "cd"]);
    assert_eq!(st.cursor, Position::new(1, 0));
}

#[test]
fn delete_forward_at_line_end_merges_next() {
    let mut st = state_from(&["ab", "cd"]);
    move_to(&mut st, 0, 2);
    dispatch(KeyEvent::DeleteForward, &mut st);
    assert_eq!(lines(&st), vec!["abcd"]);
    assert_eq!(st.cursor, Position::new(0, 2));
}

#[test]
fn typing_advances_the_cursor() {
    let mut st = state_from(&[""]);
    type_str(&mut st, "hello");
    assert_eq!(lines(&st), vec!["hello"]);
    assert_eq!(st.cursor, Position::new(0, 5));
}

#[test]
fn insert_into_full_line_leaves_line_and_cursor_unchanged() {
    let limits = BufferLimits {
        max_lines: 10,
        line_capacity: 4,
    };
    // "abc" occupies the full budget (capacity - 1).
    let mut st = state_with_limits(&["abc"], limits, 100, 10_000);
    move_to(&mut st, 0, 3);
    dispatch(KeyEvent::Char('x'), &mut st);
    assert_eq!(lines(&st), vec!["abc"]);
    assert_eq!(st.cursor, Position::new(0, 3));
}

#[test]
fn enter_at_max_lines_is_a_noop() {
    let limits = BufferLimits {
        max_lines: 2,
        line_capacity: 256,
    };
    let mut st = state_with_limits(&["ab", "cd"], limits, 100, 10_000);
    move_to(&mut st, 0, 1);
    dispatch(KeyEvent::Enter, &mut st);
    assert_eq!(lines(&st), vec!["ab", "cd"]);
    assert_eq!(st.cursor, Position::new(0, 1));
}

#[test]
fn control_chars_do_not_insert() {
    let mut st = state_from(&["ab"]);
    move_to(&mut st, 0, 1);
    dispatch(KeyEvent::Char('\u{7}'), &mut st);
    assert_eq!(lines(&st), vec!["ab"]);
    assert_eq!(st.cursor, Position::new(0, 1));
    // No history entry either: the event never counted as an edit.
    assert_eq!(st.history().undo_depth(), 0);
}

#[test]
fn backspace_at_origin_is_a_noop() {
    let mut st = state_from(&["abc"]);
    dispatch(KeyEvent::Backspace, &mut st);
    assert_eq!(lines(&st), vec!["abc"]);
    assert_eq!(st.cursor, Position::origin());
}

#[test]
fn motion_wraps_across_line_boundaries() {
    let mut st = state_from(&["ab", "cd"]);
    move_to(&mut st, 0, 2);
    dispatch(KeyEvent::Right, &mut st);
    assert_eq!(st.cursor, Position::new(1, 0));
    dispatch(KeyEvent::Left, &mut st);
    assert_eq!(st.cursor, Position::new(0, 2));
}

#[test]
fn vertical_motion_clamps_column() {
    let mut st = state_from(&["abcdef", "ab"]);
    move_to(&mut st, 0, 5);
    dispatch(KeyEvent::Down, &mut st);
    assert_eq!(st.cursor, Position::new(1, 2));
    dispatch(KeyEvent::Up, &mut st);
    // Column does not spring back; it was clamped.
    assert_eq!(st.cursor, Position::new(0, 2));
}

#[test]
fn motion_at_document_edges_is_a_noop() {
    let mut st = state_from(&["ab"]);
    dispatch(KeyEvent::Up, &mut st);
    dispatch(KeyEvent::Left, &mut st);
    assert_eq!(st.cursor, Position::origin());
    move_to(&mut st, 0, 2);
    dispatch(KeyEvent::Down, &mut st);
    dispatch(KeyEvent::Right, &mut st);
    assert_eq!(st.cursor, Position::new(0, 2));
}
