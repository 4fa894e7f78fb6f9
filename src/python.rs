//! Python bindings for rutokenizer-rs using PyO3
//!
//! This module provides Python-compatible wrappers around the Rust tokenizer.
//! The Python `Tokenizer` is created empty and must be loaded before use.

use std::path::Path;

use pyo3::exceptions::{PyIOError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::error::{LoadError, TokenizerError};
use crate::lexicon::Lexicon;
use crate::lexicon_path;
use crate::tokenizer::{SimpleTokenizer, Tokenizer as RustTokenizer};

fn to_py_err(err: TokenizerError) -> PyErr {
    match err {
        TokenizerError::NotLoaded => PyRuntimeError::new_err(err.to_string()),
        TokenizerError::Load(LoadError::NotFound(_)) | TokenizerError::Load(LoadError::Io(_)) => {
            PyIOError::new_err(err.to_string())
        }
        TokenizerError::Load(_) => PyValueError::new_err(err.to_string()),
    }
}

/// Tokenizer aware of hyphenated Russian compounds.
///
/// Example:
///     >>> from rutokenizer import Tokenizer
///     >>> t = Tokenizer()
///     >>> t.load()
///     >>> t.tokenize("Сделай что-либо!")
///     ['Сделай', 'что-либо', '!']
#[pyclass(name = "Tokenizer")]
pub struct PyTokenizer {
    inner: Option<RustTokenizer>,
}

impl PyTokenizer {
    fn loaded(&self) -> Result<&RustTokenizer, TokenizerError> {
        self.inner.as_ref().ok_or(TokenizerError::NotLoaded)
    }
}

#[pymethods]
impl PyTokenizer {
    #[new]
    fn new() -> Self {
        PyTokenizer { inner: None }
    }

    /// Load the lexicon.
    ///
    /// Args:
    ///     path: Lexicon file (default: $RUTOKENIZER_LEXICON or the data directory)
    #[pyo3(signature = (path=None))]
    fn load(&mut self, path: Option<&str>) -> PyResult<()> {
        let path = lexicon_path::resolve_lexicon_path(path.map(Path::new));
        let lexicon = Lexicon::load(path).map_err(|e| to_py_err(e.into()))?;
        self.inner = Some(RustTokenizer::new(lexicon));
        Ok(())
    }

    /// Load the lexicon from a JSON string
    fn load_json(&mut self, json: &str) -> PyResult<()> {
        let lexicon = Lexicon::from_json_str(json).map_err(|e| to_py_err(e.into()))?;
        self.inner = Some(RustTokenizer::new(lexicon));
        Ok(())
    }

    /// Whether a lexicon has been loaded
    fn is_loaded(&self) -> bool {
        self.inner.is_some()
    }

    /// Tokenize a string into a list of token strings
    fn tokenize(&self, text: &str) -> PyResult<Vec<String>> {
        let tokenizer = self.loaded().map_err(to_py_err)?;
        Ok(tokenizer.tokenize(text))
    }

    /// Tokenize a string into (token, start, end) tuples with character offsets
    fn tokenize2(&self, text: &str) -> PyResult<Vec<(String, usize, usize)>> {
        let tokenizer = self.loaded().map_err(to_py_err)?;
        Ok(tokenizer
            .tokenize_with_positions(text)
            .into_iter()
            .map(|t| (t.text, t.start, t.end))
            .collect())
    }

    fn __repr__(&self) -> String {
        match &self.inner {
            Some(t) => format!(
                "Tokenizer(prefixes={}, compounds={})",
                t.lexicon().prefix_count(),
                t.lexicon().compound_count()
            ),
            None => "Tokenizer(not loaded)".to_string(),
        }
    }
}

/// Split text into (token, start, end) tuples without merging compounds
#[pyfunction]
fn tokenize_simple(text: &str) -> Vec<(String, usize, usize)> {
    SimpleTokenizer::tokenize(text)
        .into_iter()
        .map(|t| (t.text, t.start, t.end))
        .collect()
}

/// Get the path the lexicon is loaded from by default
#[pyfunction]
fn default_lexicon_path() -> String {
    lexicon_path::resolve_lexicon_path(None)
        .to_string_lossy()
        .to_string()
}

/// Create the Python module
#[pymodule]
fn rutokenizer(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyTokenizer>()?;
    m.add_function(wrap_pyfunction!(tokenize_simple, m)?)?;
    m.add_function(wrap_pyfunction!(default_lexicon_path, m)?)?;

    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
