//! Splitting text into word and delimiter segments.
//!
//! This module cuts text into the raw segments that the tokenizer later
//! re-merges into hyphenated compounds. Separators are consumed, every other
//! character belongs to exactly one segment.

use crate::delimiters::{is_separator, DELIMITER_RE};
use crate::token::{Token, TokenKind};

/// A segment of text with its kind and character span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// The segment text, borrowed from the input
    pub text: &'a str,
    /// Starting character offset in the original string
    pub start: usize,
    /// Character offset one past the last character
    pub end: usize,
    /// `Word` or `Punct`
    pub kind: TokenKind,
}

impl<'a> Segment<'a> {
    /// Create a new segment
    pub fn new(text: &'a str, start: usize, end: usize, kind: TokenKind) -> Self {
        Segment {
            text,
            start,
            end,
            kind,
        }
    }

    /// Whether `next` starts exactly where this segment ends
    pub fn touches(&self, next: &Segment<'_>) -> bool {
        self.end == next.start
    }

    /// Convert into an owned token
    pub fn to_token(&self) -> Token {
        Token::new(self.text, self.start, self.end, self.kind)
    }
}

/// Segmenter for Russian text
pub struct Segmenter<'a> {
    text: &'a str,
}

impl<'a> Segmenter<'a> {
    /// Create a new segmenter for the given string
    pub fn new(text: &'a str) -> Self {
        Segmenter { text }
    }

    /// Cut the text into segments.
    ///
    /// Each delimiter becomes its own segment, separators are dropped and the
    /// text between them becomes a `Word` segment. A pair of ASCII hyphens
    /// (`--`) counts as one hyphen: the second one is dropped like a separator.
    pub fn make_segments(&self) -> Vec<Segment<'a>> {
        let text = self.text;
        let mut segments = Vec::new();

        // End of the previous delimiter match, in bytes and in chars
        let mut last_byte = 0;
        let mut last_char = 0;
        // An emitted '-' that may still absorb a directly following '-'
        let mut open_hyphen = false;

        for m in DELIMITER_RE.find_iter(text) {
            let start_char = last_char + text[last_byte..m.start()].chars().count();

            if m.start() > last_byte {
                segments.push(Segment::new(
                    &text[last_byte..m.start()],
                    last_char,
                    start_char,
                    TokenKind::Word,
                ));
                open_hyphen = false;
            }

            let delim = m.as_str();
            let end_char = start_char + delim.chars().count();

            if delim.chars().all(is_separator) {
                open_hyphen = false;
            } else if delim == "-" && open_hyphen {
                open_hyphen = false;
            } else {
                open_hyphen = delim == "-";
                segments.push(Segment::new(delim, start_char, end_char, TokenKind::Punct));
            }

            last_byte = m.end();
            last_char = end_char;
        }

        if last_byte < text.len() {
            let tail = &text[last_byte..];
            segments.push(Segment::new(
                tail,
                last_char,
                last_char + tail.chars().count(),
                TokenKind::Word,
            ));
        }

        segments
    }
}
