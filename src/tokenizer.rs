//! The main tokenizer implementing greedy compound merging.
//!
//! This module takes segmented text and uses the Lexicon to re-join segments
//! that form registered hyphenated compounds, producing a list of tokens.

use std::sync::Arc;

use log::trace;

use crate::lexicon::Lexicon;
use crate::segmenter::{Segment, Segmenter};
use crate::token::{Token, TokenKind};

/// The main tokenizer
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// The compound lexicon (shared reference)
    lexicon: Arc<Lexicon>,
}

impl Tokenizer {
    /// Create a new tokenizer with the given lexicon
    pub fn new(lexicon: Lexicon) -> Self {
        Tokenizer {
            lexicon: Arc::new(lexicon),
        }
    }

    /// Create a new tokenizer with a shared lexicon reference
    pub fn with_arc(lexicon: Arc<Lexicon>) -> Self {
        Tokenizer { lexicon }
    }

    /// Get a reference to the lexicon
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Get the Arc reference to the lexicon (for sharing)
    pub fn lexicon_arc(&self) -> Arc<Lexicon> {
        Arc::clone(&self.lexicon)
    }

    /// Tokenize a string into token texts
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.tokenize_with_positions(text)
            .into_iter()
            .map(|token| token.text)
            .collect()
    }

    /// Tokenize a string, keeping the character span of every token
    pub fn tokenize_with_positions(&self, text: &str) -> Vec<Token> {
        let segments = Segmenter::new(text).make_segments();
        self.merge_segments(&segments)
    }

    /// Merge pre-segmented text into tokens
    pub fn merge_segments(&self, segments: &[Segment<'_>]) -> Vec<Token> {
        let mut tokens = Vec::with_capacity(segments.len());
        let mut i = 0;

        while i < segments.len() {
            match self.longest_compound(segments, i) {
                Some((token, next_i)) => {
                    tokens.push(token);
                    i = next_i;
                }
                None => {
                    tokens.push(segments[i].to_token());
                    i += 1;
                }
            }
        }

        tokens
    }

    /// Find the longest registered compound starting at segment `start_i`
    ///
    /// A compound with extra length `l` spans `l + 2` contiguous segments.
    fn longest_compound(&self, segments: &[Segment<'_>], start_i: usize) -> Option<(Token, usize)> {
        let first = &segments[start_i];
        let range = self.lexicon.lookup_prefix(&first.text.to_lowercase())?;
        // Longest extra length that still fits in the remaining segments
        let available = segments.len().checked_sub(start_i + 2)?;

        for extra in range.longest_first(available) {
            let end_i = start_i + extra + 2;
            let run = &segments[start_i..end_i];
            if !run.windows(2).all(|w| w[0].touches(&w[1])) {
                continue;
            }

            let aggregate: String = run.iter().map(|s| s.text).collect();
            if self.lexicon.contains_compound(&aggregate.to_lowercase()) {
                trace!("Merged compound '{}' ({} segments)", aggregate, run.len());
                let end = run[run.len() - 1].end;
                return Some((
                    Token::new(aggregate, first.start, end, TokenKind::Compound),
                    end_i,
                ));
            }
        }

        None
    }
}

/// A tokenizer that doesn't use a lexicon (just segments)
pub struct SimpleTokenizer;

impl SimpleTokenizer {
    /// Split text into word and punctuation tokens without merging compounds
    pub fn tokenize(text: &str) -> Vec<Token> {
        Segmenter::new(text)
            .make_segments()
            .iter()
            .map(Segment::to_token)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::LexiconBuilder;

    fn make_test_lexicon() -> Lexicon {
        let mut builder = LexiconBuilder::new();
        builder.add_prefix("что", 1, 1).unwrap();
        builder.add_prefix("из", 1, 1).unwrap();
        builder.add_prefix("уйди", 1, 1).unwrap();
        builder.add_prefix("т", 0, 2).unwrap();
        builder.add_prefix("бок", 1, 3).unwrap();
        builder
            .add_compound("что-либо")
            .add_compound("что-то")
            .add_compound("из-за")
            .add_compound("т.")
            .add_compound("т.е.")
            .add_compound("бок-о")
            .add_compound("бок-о-бок");
        builder.build()
    }

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_merges_compound() {
        let tokenizer = Tokenizer::new(make_test_lexicon());
        let tokens = tokenizer.tokenize_with_positions("Я  сплю, мечтаю-ка  что-либо.");

        assert_eq!(
            texts(&tokens),
            vec!["Я", "сплю", ",", "мечтаю", "-", "ка", "что-либо", "."]
        );
        assert_eq!(tokens[0].as_tuple(), ("Я", 0, 1));
        assert_eq!(tokens[6].as_tuple(), ("что-либо", 20, 28));
        assert_eq!(tokens[6].kind, TokenKind::Compound);
        assert_eq!(tokens[7].as_tuple(), (".", 28, 29));
    }

    #[test]
    fn test_prefix_without_compound_falls_back() {
        let tokenizer = Tokenizer::new(make_test_lexicon());
        assert_eq!(tokenizer.tokenize("уйди-ка"), vec!["уйди", "-", "ка"]);
    }

    #[test]
    fn test_longest_match_wins() {
        let tokenizer = Tokenizer::new(make_test_lexicon());

        assert_eq!(tokenizer.tokenize("т.е. так"), vec!["т.е.", "так"]);
        assert_eq!(tokenizer.tokenize("т. Иванов"), vec!["т.", "Иванов"]);
        assert_eq!(tokenizer.tokenize("бок-о-бок"), vec!["бок-о-бок"]);
        assert_eq!(tokenizer.tokenize("бок-о-"), vec!["бок-о", "-"]);
    }

    #[test]
    fn test_case_is_preserved() {
        let tokenizer = Tokenizer::new(make_test_lexicon());
        assert_eq!(tokenizer.tokenize("Из-За угла"), vec!["Из-За", "угла"]);
    }

    #[test]
    fn test_no_merge_across_separator() {
        let tokenizer = Tokenizer::new(make_test_lexicon());
        assert_eq!(tokenizer.tokenize("что - либо"), vec!["что", "-", "либо"]);
        assert_eq!(tokenizer.tokenize("что--либо"), vec!["что", "-", "либо"]);
    }

    #[test]
    fn test_candidate_past_end_is_skipped() {
        let tokenizer = Tokenizer::new(make_test_lexicon());
        assert_eq!(tokenizer.tokenize("из-"), vec!["из", "-"]);
        assert_eq!(tokenizer.tokenize("из"), vec!["из"]);
    }

    #[test]
    fn test_huge_range_is_bounded_by_input() {
        let mut builder = LexiconBuilder::new();
        builder.add_prefix("что", 0, usize::MAX).unwrap();
        builder.add_compound("что-то");
        let tokenizer = Tokenizer::new(builder.build());

        assert_eq!(tokenizer.tokenize("что-то"), vec!["что-то"]);
        assert_eq!(tokenizer.tokenize("что"), vec!["что"]);
        assert_eq!(tokenizer.tokenize("ну что"), vec!["ну", "что"]);
    }

    #[test]
    fn test_min_longer_than_input() {
        let mut builder = LexiconBuilder::new();
        builder.add_prefix("бок", 3, 3).unwrap();
        builder.add_compound("бок-о-бок");
        let tokenizer = Tokenizer::new(builder.build());

        assert_eq!(tokenizer.tokenize("бок-о"), vec!["бок", "-", "о"]);
        assert_eq!(tokenizer.tokenize("бок-о-бок"), vec!["бок-о-бок"]);
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = Tokenizer::new(make_test_lexicon());
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize_with_positions("").is_empty());
    }

    #[test]
    fn test_simple_tokenizer() {
        let tokens = SimpleTokenizer::tokenize("что-либо.");

        assert_eq!(texts(&tokens), vec!["что", "-", "либо", "."]);
        assert_eq!(tokens[1].kind, TokenKind::Punct);
        assert_eq!(tokens[2].as_tuple(), ("либо", 4, 8));
    }

    #[test]
    fn test_arc_sharing() {
        let tokenizer1 = Tokenizer::new(make_test_lexicon());
        let tokenizer2 = Tokenizer::with_arc(tokenizer1.lexicon_arc());

        assert_eq!(
            tokenizer1.tokenize("что-то из-за"),
            tokenizer2.tokenize("что-то из-за")
        );
        assert_eq!(Arc::strong_count(&tokenizer1.lexicon_arc()), 3);
    }
}
