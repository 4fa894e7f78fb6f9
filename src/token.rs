//! Token representation for Russian text.
//!
//! A Token is the output unit of tokenization: a word, a punctuation mark, or a
//! hyphenated compound merged from several segments.

use serde::{Deserialize, Serialize};

/// The kind of a segment or token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TokenKind {
    /// Run of word characters between delimiters
    #[default]
    Word,
    /// Single punctuation delimiter
    Punct,
    /// Several contiguous segments merged into a registered compound
    Compound,
}

impl TokenKind {
    /// Convert to a string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Word => "WORD",
            TokenKind::Punct => "PUNCT",
            TokenKind::Compound => "COMPOUND",
        }
    }
}

/// A single token from the tokenization process
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Token {
    /// The text of the token, exactly as it appears in the input
    pub text: String,

    /// Starting character offset in the original string
    pub start: usize,

    /// Character offset one past the last character
    pub end: usize,

    /// What produced this token
    pub kind: TokenKind,
}

impl Token {
    /// Create a token with text and character span
    pub fn new(text: impl Into<String>, start: usize, end: usize, kind: TokenKind) -> Self {
        Token {
            text: text.into(),
            start,
            end,
            kind,
        }
    }

    /// Length in characters
    pub fn len_chars(&self) -> usize {
        self.end - self.start
    }

    /// `(text, start, end)` view of the token
    pub fn as_tuple(&self) -> (&str, usize, usize) {
        (&self.text, self.start, self.end)
    }

    /// Check if this token was merged from several segments
    pub fn is_compound(&self) -> bool {
        self.kind == TokenKind::Compound
    }

    /// Check if this is punctuation
    pub fn is_punct(&self) -> bool {
        self.kind == TokenKind::Punct
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
