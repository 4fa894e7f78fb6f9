//! Lexicon of hyphenated compounds.
//!
//! The lexicon answers two questions during tokenization: can this word begin
//! a compound (and how many further segments may follow it), and is a given
//! concatenation of segments a registered compound.
//!
//! # Source Format
//!
//! A JSON object with two tables, optionally gzip-compressed:
//!
//! ```text
//! {
//!   "prefix_hyphen": { "что": [1, 1], "т": [0, 2] },
//!   "words_with_hyphen": ["что-либо", "что-то", "т.", "т.е."]
//! }
//! ```
//!
//! A prefix range `[min, max]` counts the segments after the prefix minus one,
//! so `"из-за"` (three segments) is reached with an extra length of 1.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fs;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::lexicon_path;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Inclusive range of extra segment counts a prefix can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrefixRange {
    pub min: usize,
    pub max: usize,
}

impl PrefixRange {
    /// Create a range, rejecting `min > max`
    pub fn new(min: usize, max: usize) -> Option<Self> {
        (min <= max).then_some(PrefixRange { min, max })
    }

    /// Extra lengths to probe, longest first, none above `cap`
    pub fn longest_first(&self, cap: usize) -> impl Iterator<Item = usize> {
        (self.min..=self.max.min(cap)).rev()
    }
}

/// On-disk shape of the lexicon
#[derive(Deserialize)]
struct LexiconFile {
    prefix_hyphen: HashMap<String, (usize, usize)>,
    words_with_hyphen: Vec<String>,
}

/// Borrowed, ordered view used when writing a lexicon out
#[derive(Serialize)]
struct LexiconFileRef<'a> {
    prefix_hyphen: BTreeMap<&'a str, (usize, usize)>,
    words_with_hyphen: BTreeSet<&'a str>,
}

/// Immutable lookup tables for compound detection
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    /// Lowercase prefix word to its extra-length range
    prefixes: HashMap<String, PrefixRange>,
    /// Lowercase full compounds
    compounds: HashSet<String>,
}

impl Lexicon {
    /// Range for a lowercase prefix word, if it can begin a compound
    pub fn lookup_prefix(&self, word_lower: &str) -> Option<PrefixRange> {
        self.prefixes.get(word_lower).copied()
    }

    /// Check if a lowercase candidate is a registered compound
    pub fn contains_compound(&self, candidate_lower: &str) -> bool {
        self.compounds.contains(candidate_lower)
    }

    /// Number of prefix words
    pub fn prefix_count(&self) -> usize {
        self.prefixes.len()
    }

    /// Number of compounds
    pub fn compound_count(&self) -> usize {
        self.compounds.len()
    }

    /// Check if both tables are empty
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty() && self.compounds.is_empty()
    }

    /// Parse a lexicon from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        Self::from_bytes(json.as_bytes())
    }

    /// Parse a lexicon from raw bytes, gzip-compressed or plain JSON
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LoadError> {
        let file: LexiconFile = if bytes.starts_with(&GZIP_MAGIC) {
            debug!("Decompressing gzip lexicon ({} bytes)", bytes.len());
            let mut json = Vec::new();
            GzDecoder::new(bytes).read_to_end(&mut json)?;
            serde_json::from_slice(&json)?
        } else {
            serde_json::from_slice(bytes)?
        };

        let mut builder = LexiconBuilder::new();
        for (prefix, (min, max)) in file.prefix_hyphen {
            if builder.has_prefix(&prefix) {
                return Err(LoadError::DuplicatePrefix(prefix.to_lowercase()));
            }
            builder.add_prefix(&prefix, min, max)?;
        }
        for compound in &file.words_with_hyphen {
            builder.add_compound(compound);
        }
        let lexicon = builder.build();

        if lexicon.prefixes.is_empty() {
            return Err(LoadError::EmptyLexicon("prefixes"));
        }
        if lexicon.compounds.is_empty() {
            return Err(LoadError::EmptyLexicon("compounds"));
        }

        Ok(lexicon)
    }

    /// Read a lexicon from any reader
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, LoadError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_bytes(&bytes)
    }

    /// Load a lexicon file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(LoadError::NotFound(path.to_path_buf()));
        }

        let bytes = fs::read(path)?;
        let lexicon = Self::from_bytes(&bytes)?;
        info!(
            "Loaded lexicon from {}: {} prefixes, {} compounds",
            path.display(),
            lexicon.prefix_count(),
            lexicon.compound_count()
        );
        Ok(lexicon)
    }

    /// Load the lexicon from the configured location
    ///
    /// See [`lexicon_path::resolve_lexicon_path`] for the lookup order.
    pub fn load_default() -> Result<Self, LoadError> {
        Self::load(lexicon_path::resolve_lexicon_path(None))
    }

    /// Serialize to the JSON source format, with sorted keys
    pub fn to_json_string(&self) -> Result<String, LoadError> {
        let view = LexiconFileRef {
            prefix_hyphen: self
                .prefixes
                .iter()
                .map(|(k, r)| (k.as_str(), (r.min, r.max)))
                .collect(),
            words_with_hyphen: self.compounds.iter().map(String::as_str).collect(),
        };
        Ok(serde_json::to_string(&view)?)
    }
}

/// Builder for assembling a Lexicon in memory
#[derive(Debug, Default)]
pub struct LexiconBuilder {
    lexicon: Lexicon,
}

impl LexiconBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        LexiconBuilder::default()
    }

    /// Register a prefix word with its extra-length range
    ///
    /// Keys are folded to lowercase. Re-adding a prefix replaces its range.
    pub fn add_prefix(&mut self, prefix: &str, min: usize, max: usize) -> Result<&mut Self, LoadError> {
        if prefix.is_empty() {
            return Err(LoadError::EmptyPrefix);
        }
        let range = PrefixRange::new(min, max).ok_or_else(|| LoadError::InvalidRange {
            prefix: prefix.to_string(),
            min,
            max,
        })?;

        let key = prefix.to_lowercase();
        if key != prefix {
            warn!("Prefix '{}' is not lowercase, stored as '{}'", prefix, key);
        }

        self.lexicon.prefixes.insert(key, range);
        Ok(self)
    }

    /// Check if a prefix is already registered, ignoring case
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.lexicon.prefixes.contains_key(&prefix.to_lowercase())
    }

    /// Register a full compound (folded to lowercase)
    pub fn add_compound(&mut self, compound: &str) -> &mut Self {
        if !compound.is_empty() {
            self.lexicon.compounds.insert(compound.to_lowercase());
        }
        self
    }

    /// Build and return the Lexicon
    pub fn build(self) -> Lexicon {
        self.lexicon
    }
}
