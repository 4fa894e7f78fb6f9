//! Locating the lexicon file.
//!
//! Lookup order: an explicit path, then the `RUTOKENIZER_LEXICON` environment
//! variable, then `<data dir>/rutokenizer/lexicon.json.gz`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use log::debug;

/// Environment variable overriding the default lexicon location
pub const LEXICON_ENV_VAR: &str = "RUTOKENIZER_LEXICON";

/// File name of the lexicon inside the base directory
pub const DEFAULT_LEXICON_FILE: &str = "lexicon.json.gz";

/// Get the default base path for lexicon data
/// Returns the platform data directory joined with `rutokenizer`
/// (e.g. ~/.local/share/rutokenizer/ on Linux)
pub fn default_base_path() -> PathBuf {
    #[cfg(feature = "data-dir")]
    {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rutokenizer")
    }
    #[cfg(not(feature = "data-dir"))]
    {
        PathBuf::from(".")
    }
}

/// Get the default lexicon file path
pub fn default_lexicon_path() -> PathBuf {
    default_base_path().join(DEFAULT_LEXICON_FILE)
}

/// Resolve where the lexicon should be loaded from
pub fn resolve_lexicon_path(explicit: Option<&Path>) -> PathBuf {
    resolve_with_env(explicit, std::env::var_os(LEXICON_ENV_VAR))
}

fn resolve_with_env(explicit: Option<&Path>, env_value: Option<OsString>) -> PathBuf {
    let path = match (explicit, env_value) {
        (Some(path), _) => path.to_path_buf(),
        (None, Some(value)) if !value.is_empty() => PathBuf::from(value),
        _ => default_lexicon_path(),
    };
    debug!("Resolved lexicon path: {}", path.display());
    path
}

/// Check if a lexicon file exists at the resolved location
pub fn lexicon_exists(explicit: Option<&Path>) -> bool {
    resolve_lexicon_path(explicit).is_file()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lexicon_path() {
        let path = default_lexicon_path();
        assert!(path.ends_with(DEFAULT_LEXICON_FILE));
        #[cfg(feature = "data-dir")]
        assert!(path.to_string_lossy().contains("rutokenizer"));
    }

    #[test]
    fn test_explicit_path_wins() {
        let path = resolve_with_env(
            Some(Path::new("/tmp/my.json")),
            Some(OsString::from("/tmp/env.json")),
        );
        assert_eq!(path, PathBuf::from("/tmp/my.json"));
    }

    #[test]
    fn test_env_then_default() {
        let path = resolve_with_env(None, Some(OsString::from("/tmp/env.json")));
        assert_eq!(path, PathBuf::from("/tmp/env.json"));

        let path = resolve_with_env(None, Some(OsString::new()));
        assert_eq!(path, default_lexicon_path());

        let path = resolve_with_env(None, None);
        assert_eq!(path, default_lexicon_path());
    }
}
