//! The editing session: terminal ownership and the event loop.
//!
//! One key event is fully processed — dispatch, then redraw — before the
//! next is read. The loop's external contract: given the initial buffer and
//! the event sequence, the final buffer and cursor are deterministic, and
//! the file is saved exactly once, on `Commit`.

use anyhow::Result;
use chisel_actions::dispatch;
use chisel_config::Config;
use chisel_events::KeySource;
use chisel_input::TerminalKeySource;
use chisel_render::{Renderer, TerminalSession};
use chisel_state::EditorState;
use chisel_text::LineBuffer;
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::storage::{self, StorageError};

/// Open `path` (missing files start as an empty document), run the editor,
/// save on commit.
pub fn run(path: &Path, config: &Config) -> Result<()> {
    let (mut state, dropped) = open_state(path, config)?;
    if dropped > 0 {
        println!(
            "note: file exceeds {} lines; {dropped} dropped",
            config.buffer_limits().max_lines
        );
    }
    println!("Editing {}. Press Enter to start...", path.display());
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;

    let mut terminal = TerminalSession::new();
    terminal.enter()?;
    let mut keys = TerminalKeySource::new();
    let mut renderer = Renderer::stdout();
    let result = event_loop(&mut state, &mut keys, &mut renderer, path);
    terminal.leave()?;
    if result.is_ok() {
        println!("File saved successfully.");
    }
    result
}

fn open_state(path: &Path, config: &Config) -> Result<(EditorState, usize)> {
    let limits = config.buffer_limits();
    let (buffer, dropped) = match storage::load(path, limits) {
        Ok(loaded) => (loaded.buffer, loaded.dropped_lines),
        Err(StorageError::NotFound(_)) => (LineBuffer::new(limits), 0),
        Err(e) => return Err(e.into()),
    };
    let mut state =
        EditorState::with_limits(buffer, config.history_depth(), config.clipboard_capacity());
    state.file_name = Some(path.to_path_buf());
    Ok((state, dropped))
}

/// Render, read, dispatch; on quit, persist and return. The renderer runs
/// once per processed event.
fn event_loop<S, W>(
    state: &mut EditorState,
    keys: &mut S,
    renderer: &mut Renderer<W>,
    path: &Path,
) -> Result<()>
where
    S: KeySource,
    W: Write,
{
    renderer.draw(state)?;
    loop {
        let key = keys.next_key()?;
        let outcome = dispatch(key, state);
        if outcome.quit {
            storage::save(path, state.buffer())?;
            state.dirty = false;
            info!(target: "session", path = %path.display(), lines = state.buffer().line_count(), "saved");
            return Ok(());
        }
        renderer.draw(state)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chisel_events::KeyEvent;
    use chisel_text::BufferLimits;

    /// Scripted key source for loop tests; panics if the loop reads past the
    /// end of the script.
    struct Script(std::vec::IntoIter<KeyEvent>);

    impl Script {
        fn new(events: &[KeyEvent]) -> Self {
            Self(events.to_vec().into_iter())
        }
    }

    impl KeySource for Script {
        fn next_key(&mut self) -> Result<KeyEvent> {
            Ok(self.0.next().expect("script exhausted before Commit"))
        }
    }

    fn run_script(initial: &str, events: &[KeyEvent]) -> String {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.c");
        std::fs::write(&path, initial).unwrap();
        let (buffer, _) = LineBuffer::from_text(initial, BufferLimits::default());
        let mut state = EditorState::new(buffer);
        let mut keys = Script::new(events);
        let mut renderer = Renderer::new(Vec::new());
        event_loop(&mut state, &mut keys, &mut renderer, &path).unwrap();
        std::fs::read_to_string(&path).unwrap()
    }

    #[test]
    fn commit_saves_exactly_once_and_stops_reading() {
        // Events after Commit would panic the script if the loop kept going.
        let saved = run_script(
            "ab",
            &[KeyEvent::Char('x'), KeyEvent::Commit],
        );
        assert_eq!(saved, "xab");
    }

    #[test]
    fn same_script_is_deterministic() {
        let events = [
            KeyEvent::Char('h'),
            KeyEvent::Enter,
            KeyEvent::Char('i'),
            KeyEvent::Undo,
            KeyEvent::Redo,
            KeyEvent::Commit,
        ];
        let a = run_script("seed", &events);
        let b = run_script("seed", &events);
        assert_eq!(a, b);
    }

    #[test]
    fn edits_before_commit_reach_the_file() {
        let saved = run_script(
            "one\ntwo",
            &[
                KeyEvent::Down,
                KeyEvent::Right,
                KeyEvent::Right,
                KeyEvent::Right,
                KeyEvent::Char('!'),
                KeyEvent::Commit,
            ],
        );
        assert_eq!(saved, "one\ntwo!");
    }
}
