//! Bounded line-buffer document model.
//!
//! The document is a vector of [`Line`]s, each a `String` of content plus a
//! preserved trailing-newline marker. Capacities are fixed at construction
//! via [`BufferLimits`] and every mutation saturates against them: an edit
//! that would overflow a line or the document degrades to a no-op or a
//! truncated write, never an error. Columns are raw `char` counts.

use tracing::trace;

/// A position inside a buffer expressed as (line index, char offset within
/// that line's content). The trailing-newline marker is not addressable; the
/// column ranges over `0..=content_len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
    pub fn origin() -> Self {
        Self { line: 0, col: 0 }
    }
}

/// Capacity bounds enforced by every mutating buffer operation.
///
/// `line_capacity` is the per-line slot budget counted the way the original
/// storage format counts it: writes keep content chars plus the
/// trailing-newline marker strictly below `line_capacity`, leaving one slot
/// spare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferLimits {
    pub max_lines: usize,
    pub line_capacity: usize,
}

impl BufferLimits {
    pub const DEFAULT_MAX_LINES: usize = 100;
    pub const DEFAULT_LINE_CAPACITY: usize = 256;
}

impl Default for BufferLimits {
    fn default() -> Self {
        Self {
            max_lines: Self::DEFAULT_MAX_LINES,
            line_capacity: Self::DEFAULT_LINE_CAPACITY,
        }
    }
}

/// One document line: content (no trailing line break — that lives in the
/// marker) plus the marker recording whether the line ended with a newline
/// in the source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    text: String,
    newline: bool,
}

impl Line {
    fn empty() -> Self {
        Self {
            text: String::new(),
            newline: false,
        }
    }

    fn from_physical(raw: &str) -> Self {
        let newline = raw.ends_with('\n');
        let mut text = raw.strip_suffix('\n').unwrap_or(raw).to_string();
        if text.ends_with('\r') {
            text.pop();
        }
        Self { text, newline }
    }

    /// Line content without the trailing-newline marker.
    pub fn content(&self) -> &str {
        &self.text
    }

    /// True if the line carried a trailing newline in the source file (or
    /// gained one through a split).
    pub fn has_newline(&self) -> bool {
        self.newline
    }

    /// Content length in chars (marker excluded). This is the maximum valid
    /// cursor column on the line.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Occupied slots: content chars plus the marker.
    fn slots(&self) -> usize {
        self.char_len() + usize::from(self.newline)
    }
}

/// Byte offset of char index `col` in `text`, clamping past-the-end columns
/// to the end of the string.
fn byte_at(text: &str, col: usize) -> usize {
    text.char_indices()
        .nth(col)
        .map_or(text.len(), |(idx, _)| idx)
}

/// The in-memory document: an ordered, bounded sequence of lines.
///
/// Invariants outside of transient mutation:
/// * `1 <= line_count <= limits.max_lines`
/// * every line satisfies `slots <= limits.line_capacity` — inserts and
///   merges keep the spare slot (`slots < line_capacity`); a split of a full
///   line may land exactly on the capacity when the prefix gains its marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<Line>,
    limits: BufferLimits,
}

impl LineBuffer {
    /// An empty document: a single empty line.
    pub fn new(limits: BufferLimits) -> Self {
        Self {
            lines: vec![Line::empty()],
            limits,
        }
    }

    /// Build a buffer from file content, one [`Line`] per physical line.
    ///
    /// Lines beyond `limits.max_lines` are dropped; the count of dropped
    /// lines is returned so the caller can surface the truncation. Overlong
    /// lines are truncated to the line budget.
    pub fn from_text(text: &str, limits: BufferLimits) -> (Self, usize) {
        let mut lines = Vec::new();
        let mut dropped = 0usize;
        for raw in text.split_inclusive('\n') {
            if lines.len() == limits.max_lines {
                dropped += 1;
                continue;
            }
            let mut line = Line::from_physical(raw);
            let budget = limits
                .line_capacity
                .saturating_sub(1 + usize::from(line.newline));
            if line.char_len() > budget {
                trace!(
                    target: "text.buffer",
                    line = lines.len(),
                    chars = line.char_len(),
                    budget,
                    "load_line_truncated"
                );
                line.text = line.text.chars().take(budget).collect();
            }
            lines.push(line);
        }
        if lines.is_empty() {
            lines.push(Line::empty());
        }
        (Self { lines, limits }, dropped)
    }

    pub fn limits(&self) -> BufferLimits {
        self.limits
    }

    /// Number of lines, always at least 1.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Content of line `idx` (marker excluded).
    pub fn line(&self, idx: usize) -> Option<&str> {
        self.lines.get(idx).map(Line::content)
    }

    /// Char length of line `idx`'s content, 0 for out-of-range indices.
    pub fn line_char_len(&self, idx: usize) -> usize {
        self.lines.get(idx).map_or(0, Line::char_len)
    }

    /// True if line `idx` carries a trailing-newline marker.
    pub fn has_newline(&self, idx: usize) -> bool {
        self.lines.get(idx).is_some_and(Line::has_newline)
    }

    /// Iterate the lines in order (used by save and rendering).
    pub fn iter(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    /// Clamp `pos` into the valid cursor range for this buffer.
    pub fn clamp(&self, pos: &mut Position) {
        if pos.line >= self.lines.len() {
            pos.line = self.lines.len() - 1;
        }
        let max = self.lines[pos.line].char_len();
        if pos.col > max {
            pos.col = max;
        }
    }

    /// Insert one char at `pos`, shifting the suffix right and advancing the
    /// column. No-op when the line's slot budget is spent or `ch` is a line
    /// break (line content never contains `\n` / `\r`).
    pub fn insert_char(&mut self, pos: &mut Position, ch: char) {
        if ch == '\n' || ch == '\r' {
            return;
        }
        self.clamp(pos);
        let budget = self.limits.line_capacity.saturating_sub(1);
        let line = &mut self.lines[pos.line];
        if line.slots() >= budget {
            trace!(
                target: "text.buffer",
                line = pos.line,
                budget,
                "insert_char_saturated"
            );
            return;
        }
        let at = byte_at(&line.text, pos.col);
        line.text.insert(at, ch);
        pos.col += 1;
    }

    /// Split the line at `pos`: the prefix keeps the line and gains a newline
    /// marker, the suffix moves to a new line below (inheriting the old
    /// marker), and the cursor lands at the start of the new line. No-op when
    /// the document is at `max_lines`.
    pub fn split_line(&mut self, pos: &mut Position) {
        if self.lines.len() >= self.limits.max_lines {
            trace!(target: "text.buffer", lines = self.lines.len(), "split_line_saturated");
            return;
        }
        self.clamp(pos);
        let line = &mut self.lines[pos.line];
        let at = byte_at(&line.text, pos.col);
        let suffix = line.text.split_off(at);
        let new_line = Line {
            text: suffix,
            newline: line.newline,
        };
        line.newline = true;
        self.lines.insert(pos.line + 1, new_line);
        pos.line += 1;
        pos.col = 0;
    }

    /// Delete the char before `pos` (backspace). At start-of-line, merges the
    /// line into the previous one when the combined content fits the line
    /// budget; the cursor lands at the previous line's old content end. No-op
    /// at the buffer origin or when the merge would not fit.
    pub fn delete_char_before(&mut self, pos: &mut Position) {
        self.clamp(pos);
        if pos.col > 0 {
            let line = &mut self.lines[pos.line];
            let at = byte_at(&line.text, pos.col - 1);
            line.text.remove(at);
            pos.col -= 1;
            return;
        }
        if pos.line == 0 {
            return;
        }
        let prev_len = self.lines[pos.line - 1].char_len();
        if prev_len + self.lines[pos.line].slots() >= self.limits.line_capacity {
            trace!(target: "text.buffer", line = pos.line, "merge_previous_saturated");
            return;
        }
        let removed = self.lines.remove(pos.line);
        let prev = &mut self.lines[pos.line - 1];
        prev.text.push_str(&removed.text);
        prev.newline = removed.newline;
        pos.line -= 1;
        pos.col = prev_len;
    }

    /// Delete the char at `pos` (forward delete). At end-of-line, merges the
    /// following line into the current one under the same combined-length
    /// guard as [`Self::delete_char_before`]; the cursor does not move. No-op
    /// at the end of the document or when the merge would not fit.
    pub fn delete_char_at(&mut self, pos: &mut Position) {
        self.clamp(pos);
        let len = self.lines[pos.line].char_len();
        if pos.col < len {
            let line = &mut self.lines[pos.line];
            let at = byte_at(&line.text, pos.col);
            line.text.remove(at);
            return;
        }
        if pos.line + 1 >= self.lines.len() {
            return;
        }
        let next_slots = self.lines[pos.line + 1].slots();
        if len + next_slots >= self.limits.line_capacity {
            trace!(target: "text.buffer", line = pos.line, "merge_next_saturated");
            return;
        }
        let removed = self.lines.remove(pos.line + 1);
        let line = &mut self.lines[pos.line];
        line.text.push_str(&removed.text);
        line.newline = removed.newline;
    }

    /// Insert multi-line text at `pos` (the paste primitive).
    ///
    /// The text is split on every `\n` (empty fragments survive). The first
    /// fragment inserts in place; each following fragment splits the current
    /// line at the insertion point and continues on the new line, so the
    /// suffix of the original line ends up after the pasted block. Line
    /// growth clamps at `max_lines` (further fragments keep writing into the
    /// current line) and every fragment truncates to the line's remaining
    /// budget.
    pub fn insert_block(&mut self, pos: &mut Position, text: &str) {
        self.clamp(pos);
        for (i, frag) in text.split('\n').enumerate() {
            if i > 0 {
                if self.lines.len() < self.limits.max_lines {
                    self.split_line(pos);
                } else {
                    trace!(target: "text.buffer", lines = self.lines.len(), "insert_block_growth_saturated");
                }
            }
            self.insert_fragment(pos, frag);
        }
    }

    fn insert_fragment(&mut self, pos: &mut Position, frag: &str) {
        let budget = self.limits.line_capacity.saturating_sub(1);
        let line = &mut self.lines[pos.line];
        let room = budget.saturating_sub(line.slots());
        let taken: String = frag.chars().take(room).collect();
        if taken.is_empty() {
            if !frag.is_empty() {
                trace!(target: "text.buffer", line = pos.line, "insert_fragment_saturated");
            }
            return;
        }
        let at = byte_at(&line.text, pos.col);
        let count = taken.chars().count();
        line.text.insert_str(at, &taken);
        pos.col += count;
    }
}
