//! Rudimentary C syntax highlighting.
//!
//! A pure single-line scanner: no cross-line state, no escapes, no
//! preprocessor awareness. Each line maps to a sequence of styled spans the
//! renderer (or any other consumer) turns into colors. Classes: `//`
//! comments to end-of-line, double-quoted string literals (unterminated
//! literals run to end-of-line), the C keyword set, numeric literals, and
//! plain text for everything else.

/// Style class of a [`Span`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Plain,
    Keyword,
    StringLit,
    Comment,
    Number,
}

/// A styled slice of the input line. Concatenating the spans of a line in
/// order reproduces the line exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
}

/// The C keyword set.
pub const C_KEYWORDS: [&str; 32] = [
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "int", "long", "register", "return", "short",
    "signed", "sizeof", "static", "struct", "switch", "typedef", "union", "unsigned", "void",
    "volatile", "while",
];

fn is_keyword(word: &str) -> bool {
    C_KEYWORDS.contains(&word)
}

fn push_plain<'a>(spans: &mut Vec<Span<'a>>, line: &'a str, from: usize, to: usize) {
    if from < to {
        spans.push(Span {
            text: &line[from..to],
            kind: TokenKind::Plain,
        });
    }
}

/// Scan one line into styled spans.
pub fn highlight(line: &str) -> Vec<Span<'_>> {
    let mut spans = Vec::new();
    let chars: Vec<(usize, char)> = line.char_indices().collect();
    let len = line.len();
    let mut plain_start = 0usize;
    let mut i = 0usize;

    while i < chars.len() {
        let (off, ch) = chars[i];

        if ch == '/' && matches!(chars.get(i + 1), Some((_, '/'))) {
            push_plain(&mut spans, line, plain_start, off);
            spans.push(Span {
                text: &line[off..],
                kind: TokenKind::Comment,
            });
            return spans;
        }

        if ch == '"' {
            push_plain(&mut spans, line, plain_start, off);
            let mut j = i + 1;
            while j < chars.len() && chars[j].1 != '"' {
                j += 1;
            }
            let end = if j < chars.len() {
                chars[j].0 + chars[j].1.len_utf8()
            } else {
                len
            };
            spans.push(Span {
                text: &line[off..end],
                kind: TokenKind::StringLit,
            });
            plain_start = end;
            i = j + 1;
            continue;
        }

        if ch == '_' || ch.is_ascii_alphabetic() {
            let mut j = i + 1;
            while j < chars.len() && (chars[j].1 == '_' || chars[j].1.is_ascii_alphanumeric()) {
                j += 1;
            }
            let end = chars.get(j).map_or(len, |&(o, _)| o);
            if is_keyword(&line[off..end]) {
                push_plain(&mut spans, line, plain_start, off);
                spans.push(Span {
                    text: &line[off..end],
                    kind: TokenKind::Keyword,
                });
                plain_start = end;
            }
            i = j;
            continue;
        }

        if ch.is_ascii_digit() {
            let mut j = i + 1;
            while j < chars.len() && (chars[j].1.is_ascii_digit() || chars[j].1 == '.') {
                j += 1;
            }
            let end = chars.get(j).map_or(len, |&(o, _)| o);
            push_plain(&mut spans, line, plain_start, off);
            spans.push(Span {
                text: &line[off..end],
                kind: TokenKind::Number,
            });
            plain_start = end;
            i = j;
            continue;
        }

        i += 1;
    }

    push_plain(&mut spans, line, plain_start, len);
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(line: &str) -> Vec<(String, TokenKind)> {
        highlight(line)
            .into_iter()
            .map(|s| (s.text.to_string(), s.kind))
            .collect()
    }

    #[test]
    fn spans_reassemble_the_line() {
        let line = "int x = \"s\"; // done";
        let joined: String = highlight(line).iter().map(|s| s.text).collect();
        assert_eq!(joined, line);
    }

    #[test]
    fn keyword_at_line_start() {
        assert_eq!(
            kinds("return x;"),
            vec![
                ("return".into(), TokenKind::Keyword),
                (" x;".into(), TokenKind::Plain),
            ]
        );
    }

    #[test]
    fn keyword_between_plain_text() {
        assert_eq!(
            kinds("x = sizeof(y)"),
            vec![
                ("x = ".into(), TokenKind::Plain),
                ("sizeof".into(), TokenKind::Keyword),
                ("(y)".into(), TokenKind::Plain),
            ]
        );
    }

    #[test]
    fn identifier_containing_keyword_is_plain() {
        assert_eq!(kinds("interned"), vec![("interned".into(), TokenKind::Plain)]);
        assert_eq!(kinds("my_int"), vec![("my_int".into(), TokenKind::Plain)]);
    }

    #[test]
    fn identifier_with_digits_is_not_a_number() {
        assert_eq!(kinds("int9"), vec![("int9".into(), TokenKind::Plain)]);
    }

    #[test]
    fn string_literal_includes_quotes() {
        assert_eq!(
            kinds("s = \"hi\";"),
            vec![
                ("s = ".into(), TokenKind::Plain),
                ("\"hi\"".into(), TokenKind::StringLit),
                (";".into(), TokenKind::Plain),
            ]
        );
    }

    #[test]
    fn unterminated_string_runs_to_end_of_line() {
        assert_eq!(
            kinds("s = \"oops"),
            vec![
                ("s = ".into(), TokenKind::Plain),
                ("\"oops".into(), TokenKind::StringLit),
            ]
        );
    }

    #[test]
    fn keywords_inside_strings_are_not_highlighted() {
        assert_eq!(
            kinds("\"int\""),
            vec![("\"int\"".into(), TokenKind::StringLit)]
        );
    }

    #[test]
    fn comment_swallows_rest_of_line() {
        assert_eq!(
            kinds("x; // \"quote\" int 42"),
            vec![
                ("x; ".into(), TokenKind::Plain),
                ("// \"quote\" int 42".into(), TokenKind::Comment),
            ]
        );
    }

    #[test]
    fn slash_in_string_does_not_start_comment() {
        assert_eq!(
            kinds("\"a//b\" c"),
            vec![
                ("\"a//b\"".into(), TokenKind::StringLit),
                (" c".into(), TokenKind::Plain),
            ]
        );
    }

    #[test]
    fn number_literals() {
        assert_eq!(
            kinds("x = 42;"),
            vec![
                ("x = ".into(), TokenKind::Plain),
                ("42".into(), TokenKind::Number),
                (";".into(), TokenKind::Plain),
            ]
        );
        assert_eq!(
            kinds("y = 3.14"),
            vec![
                ("y = ".into(), TokenKind::Plain),
                ("3.14".into(), TokenKind::Number),
            ]
        );
    }

    #[test]
    fn empty_line_yields_no_spans() {
        assert!(highlight("").is_empty());
    }

    #[test]
    fn trailing_keyword() {
        assert_eq!(
            kinds("} while"),
            vec![
                ("} ".into(), TokenKind::Plain),
                ("while".into(), TokenKind::Keyword),
            ]
        );
    }
}
