//! # rutokenizer-rs
//!
//! A fast Russian word tokenizer written in Rust.
//!
//! Text is split on whitespace and punctuation, then hyphenated compounds such
//! as "что-либо" or "по-японски" are re-joined using a lexicon of known
//! compounds, preferring the longest registered match.
//!
//! ## Quick Start
//!
//! ```rust
//! use rutokenizer::{LexiconBuilder, Tokenizer};
//!
//! let mut builder = LexiconBuilder::new();
//! builder.add_prefix("что", 1, 1).unwrap();
//! builder.add_compound("что-либо");
//! let lexicon = builder.build();
//!
//! let tokenizer = Tokenizer::new(lexicon);
//! assert_eq!(
//!     tokenizer.tokenize("Сделай что-либо!"),
//!     vec!["Сделай", "что-либо", "!"]
//! );
//!
//! for token in tokenizer.tokenize_with_positions("Сделай что-либо!") {
//!     println!("{} [{}, {})", token.text, token.start, token.end);
//! }
//! ```
//!
//! ## Loading a Lexicon
//!
//! Lexicons are JSON files (optionally gzip-compressed), see [`lexicon`]:
//!
//! ```no_run
//! use rutokenizer::{Lexicon, Tokenizer};
//!
//! let lexicon = Lexicon::load("lexicon.json.gz")?;
//! let tokenizer = Tokenizer::new(lexicon);
//! # Ok::<(), rutokenizer::LoadError>(())
//! ```
//!
//! ## Python Bindings
//!
//! This library can be compiled as a Python extension module with the `python` feature.

pub mod delimiters;
pub mod error;
pub mod lexicon;
pub mod lexicon_path;
pub mod segmenter;
pub mod token;
pub mod tokenizer;

// Python bindings (only compiled when the "python" feature is enabled)
#[cfg(feature = "python")]
pub mod python;

// Re-export main types for convenience
pub use delimiters::{classify, CharClass};
pub use error::{LoadError, TokenizerError};
pub use lexicon::{Lexicon, LexiconBuilder, PrefixRange};
pub use segmenter::{Segment, Segmenter};
pub use token::{Token, TokenKind};
pub use tokenizer::{SimpleTokenizer, Tokenizer};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_pipeline() {
        let json = r#"{
            "prefix_hyphen": {"по": [1, 1], "куда": [1, 1]},
            "words_with_hyphen": ["по-японски", "куда-нибудь"]
        }"#;
        let lexicon = Lexicon::from_json_str(json).unwrap();
        let tokenizer = Tokenizer::new(lexicon);

        let text = "Говорит по-японски, идёт куда-нибудь.";
        let tokens = tokenizer.tokenize_with_positions(text);

        assert_eq!(
            tokenizer.tokenize(text),
            vec!["Говорит", "по-японски", ",", "идёт", "куда-нибудь", "."]
        );
        assert_eq!(tokens[1].as_tuple(), ("по-японски", 8, 18));
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Punct));
    }

    #[test]
    fn test_simple_tokenizer() {
        let tokens = SimpleTokenizer::tokenize("по-японски,");

        // word, hyphen, word, comma
        assert_eq!(tokens.len(), 4);
    }
}
