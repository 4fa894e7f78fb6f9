//! Character classification for Russian text segmentation.
//!
//! Every character is either part of a word, a delimiter (punctuation that is
//! emitted as its own segment) or a separator (whitespace that only splits and
//! never appears in the output).

use once_cell::sync::Lazy;
use regex::Regex;

/// Punctuation characters that always form single-character segments.
pub const DELIMITER_CHARS: &str =
    "‼≠™®•·[¡+<>`~;.,‚?!-…№”“„{}|‹›/'\"–—_:‑«»*]()‘’≈";

/// Separators that are not covered by Unicode `White_Space`.
///
/// The no-break spaces and the hair space are whitespace already; the word
/// joiner is not.
const EXTRA_SEPARATORS: &[char] = &[
    '\u{00A0}', // NO-BREAK SPACE
    '\u{202F}', // NARROW NO-BREAK SPACE
    '\u{2060}', // WORD JOINER
    '\u{200A}', // HAIR SPACE
];

/// Matches exactly one delimiter or separator character.
pub static DELIMITER_RE: Lazy<Regex> = Lazy::new(|| {
    let extra: String = EXTRA_SEPARATORS.iter().collect();
    let pattern = format!(r"[{}{}\s]", regex::escape(DELIMITER_CHARS), extra);
    Regex::new(&pattern).expect("Invalid delimiter regex")
});

/// Class of a single character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Part of a word
    Word,
    /// Punctuation emitted as its own segment
    Delimiter,
    /// Whitespace, consumed while splitting
    Separator,
}

/// Whether `c` separates words without being emitted.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || EXTRA_SEPARATORS.contains(&c)
}

/// Whether `c` is a punctuation delimiter.
pub fn is_delimiter(c: char) -> bool {
    DELIMITER_CHARS.contains(c)
}

/// Get the class of a character
pub fn classify(c: char) -> CharClass {
    if is_separator(c) {
        CharClass::Separator
    } else if is_delimiter(c) {
        CharClass::Delimiter
    } else {
        CharClass::Word
    }
}
