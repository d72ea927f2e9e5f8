//! Single-slot bounded clipboard.

use tracing::trace;

/// Default clipboard capacity in chars.
pub const CLIPBOARD_CAPACITY: usize = 10_000;

/// The most recent copied span, `\n`-joined for multi-line content.
///
/// Each copy overwrites the whole blob; paste reads it without consuming, so
/// one copy can feed any number of pastes. Stores beyond the capacity
/// truncate silently.
#[derive(Debug)]
pub struct Clipboard {
    text: String,
    capacity: usize,
}

impl Clipboard {
    pub fn new(capacity: usize) -> Self {
        Self {
            text: String::new(),
            capacity,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the clipboard content, truncating to the char capacity.
    pub fn store(&mut self, text: &str) {
        let chars = text.chars().count();
        if chars > self.capacity {
            trace!(
                target: "state.clipboard",
                chars,
                capacity = self.capacity,
                "store_truncated"
            );
            self.text = text.chars().take(self.capacity).collect();
        } else {
            self.text = text.to_string();
        }
    }
}

impl Default for Clipboard {
    fn default() -> Self {
        Self::new(CLIPBOARD_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let c = Clipboard::default();
        assert!(c.is_empty());
        assert_eq!(c.text(), "");
    }

    #[test]
    fn store_overwrites_wholesale() {
        let mut c = Clipboard::default();
        c.store("first");
        c.store("second");
        assert_eq!(c.text(), "second");
    }

    #[test]
    fn store_truncates_to_capacity() {
        let mut c = Clipboard::new(4);
        c.store("abcdef");
        assert_eq!(c.text(), "abcd");
    }

    #[test]
    fn multi_line_content_is_preserved() {
        let mut c = Clipboard::default();
        c.store("one\ntwo\n");
        assert_eq!(c.text(), "one\ntwo\n");
    }
}
