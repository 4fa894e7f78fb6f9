//! Error types.
//!
//! Loading a lexicon is the only fallible step: once a [`Tokenizer`](crate::Tokenizer)
//! exists, tokenization is total over every input string.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or building a [`Lexicon`](crate::Lexicon).
#[derive(Error, Debug)]
pub enum LoadError {
    /// The lexicon file does not exist
    #[error("lexicon not found: {}", .0.display())]
    NotFound(PathBuf),
    /// The lexicon file exists but could not be read or decompressed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// The lexicon file is not valid JSON or does not have the expected shape
    #[error("invalid lexicon data: {0}")]
    Json(#[from] serde_json::Error),
    /// A prefix entry has `min > max`
    #[error("invalid range for prefix '{prefix}': min {min} > max {max}")]
    InvalidRange {
        prefix: String,
        min: usize,
        max: usize,
    },
    /// Two prefix keys fold to the same lowercase word
    #[error("duplicate prefix '{0}' after lowercasing")]
    DuplicatePrefix(String),
    /// A prefix entry has an empty key
    #[error("empty prefix key in lexicon")]
    EmptyPrefix,
    /// One of the two lexicon tables is empty
    #[error("lexicon has no {0}")]
    EmptyLexicon(&'static str),
}

/// Errors raised by tokenizer front-ends that load their lexicon lazily.
#[derive(Error, Debug)]
pub enum TokenizerError {
    /// Tokenization was requested before a lexicon was loaded
    #[error("lexicon is not loaded, call load() before tokenizing")]
    NotLoaded,
    /// Loading the lexicon failed
    #[error(transparent)]
    Load(#[from] LoadError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_display() {
        let err = LoadError::InvalidRange {
            prefix: "что".to_string(),
            min: 3,
            max: 1,
        };
        assert_eq!(
            err.to_string(),
            "invalid range for prefix 'что': min 3 > max 1"
        );

        let err = LoadError::NotFound(PathBuf::from("/nowhere/lexicon.json"));
        assert!(err.to_string().contains("/nowhere/lexicon.json"));
    }

    #[test]
    fn test_tokenizer_error_wraps_load_error() {
        let err: TokenizerError = LoadError::EmptyLexicon("compounds").into();
        assert_eq!(err.to_string(), "lexicon has no compounds");
        assert!(TokenizerError::NotLoaded.to_string().contains("load()"));
    }
}
