//! Raw terminal input decoding.
//!
//! Translates crossterm key events into the engine's [`KeyEvent`] vocabulary
//! and provides the blocking [`TerminalKeySource`]. All terminal-protocol
//! concerns (escape sequences, modifier chords, key-release filtering) end
//! here; the engine never sees them.

use anyhow::Result;
use chisel_events::{KeyEvent, KeySource};
use crossterm::event::{self, Event};
use tracing::trace;

mod translate;

pub use translate::translate;

/// Blocking key source over the crossterm event stream. Non-key events
/// (resize, mouse, focus) are skipped; unknown chords are ignored.
#[derive(Debug, Default)]
pub struct TerminalKeySource;

impl TerminalKeySource {
    pub fn new() -> Self {
        Self
    }
}

impl KeySource for TerminalKeySource {
    fn next_key(&mut self) -> Result<KeyEvent> {
        loop {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(ev) = translate(&key) {
                        trace!(target: "input.key", ?ev, "decoded");
                        return Ok(ev);
                    }
                }
                other => {
                    trace!(target: "input.key", ?other, "non_key_event_skipped");
                }
            }
        }
    }
}
