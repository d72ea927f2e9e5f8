//! Screen painting over crossterm.
//!
//! The renderer is a read-only consumer of the editor state: it clears the
//! screen, prints the help header, paints each buffer line through the
//! highlighter (whole rows in reverse video while they fall inside the
//! selection span), and parks the terminal cursor on the editing position.
//! Columns map 1:1 onto screen cells — the documents this editor targets are
//! ASCII C sources.

use anyhow::Result;
use chisel_highlight::{TokenKind, highlight};
use chisel_state::EditorState;
use crossterm::{
    cursor::{MoveTo, Show},
    queue,
    style::{Attribute, Color, Print, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::{Stdout, Write, stdout};
use tracing::trace;

mod terminal;

pub use terminal::TerminalSession;

/// Rows occupied by the help header above the text area.
pub const HEADER_ROWS: u16 = 3;

const HELP_LINE_1: &str = "chisel - Esc to save and exit, Ctrl+U undo, Ctrl+R redo";
const HELP_LINE_2: &str = "Ctrl+X copy, Ctrl+V paste, Ctrl+B start/end selection";

pub struct Renderer<W: Write> {
    out: W,
}

impl Renderer<Stdout> {
    pub fn stdout() -> Self {
        Self::new(stdout())
    }
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Paint the whole frame and flush. Called once per processed event.
    pub fn draw(&mut self, state: &EditorState) -> Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        queue!(self.out, Print(HELP_LINE_1), MoveTo(0, 1), Print(HELP_LINE_2))?;

        for (idx, line) in state.buffer().iter().enumerate() {
            let row = HEADER_ROWS.saturating_add(cell(idx));
            queue!(self.out, MoveTo(0, row))?;
            let selected = state.selection().is_some_and(|s| s.covers_line(idx));
            if selected {
                queue!(self.out, SetAttribute(Attribute::Reverse))?;
            }
            self.draw_spans(line.content())?;
            if selected {
                queue!(self.out, SetAttribute(Attribute::NoReverse))?;
            }
        }

        let cursor_row = HEADER_ROWS.saturating_add(cell(state.cursor.line));
        let cursor_col = cell(state.cursor.col);
        queue!(self.out, MoveTo(cursor_col, cursor_row), Show)?;
        self.out.flush()?;
        trace!(
            target: "render",
            lines = state.buffer().line_count(),
            selected = state.selection().is_some(),
            "frame"
        );
        Ok(())
    }

    // Colors restore via `Color::Reset` (SGR 39) rather than `ResetColor`
    // (SGR 0): a full reset would also drop the reverse-video attribute on
    // selected rows.
    fn draw_spans(&mut self, content: &str) -> Result<()> {
        for span in highlight(content) {
            match span.kind {
                TokenKind::Plain => queue!(self.out, Print(span.text))?,
                TokenKind::Keyword => {
                    queue!(
                        self.out,
                        SetAttribute(Attribute::Bold),
                        SetForegroundColor(Color::Blue),
                        Print(span.text),
                        SetForegroundColor(Color::Reset),
                        SetAttribute(Attribute::NormalIntensity)
                    )?;
                }
                kind => {
                    queue!(
                        self.out,
                        SetForegroundColor(color_for(kind)),
                        Print(span.text),
                        SetForegroundColor(Color::Reset)
                    )?;
                }
            }
        }
        Ok(())
    }
}

fn color_for(kind: TokenKind) -> Color {
    match kind {
        TokenKind::StringLit => Color::DarkGreen,
        TokenKind::Number => Color::DarkYellow,
        TokenKind::Comment => Color::DarkCyan,
        TokenKind::Keyword => Color::Blue,
        TokenKind::Plain => Color::Reset,
    }
}

fn cell(idx: usize) -> u16 {
    u16::try_from(idx).unwrap_or(u16::MAX)
}
