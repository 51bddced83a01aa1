//! Dictionary loading.
//!
//! Word lists are plain text, one word per line. Surrounding whitespace is
//! trimmed, blank lines and comment lines are skipped, and no other
//! normalization is applied.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::config::DictionaryConfig;
use crate::data_structures::trie::Trie;
use crate::error::LookupResult;

/// Words used when no dictionary file is configured.
pub const DEFAULT_WORDS: [&str; 8] = ["apple", "apply", "ape", "apt", "bat", "bath", "cat", "cap"];

/// Extracts the words from a word list.
pub fn parse_words<'a>(text: &'a str, comment_prefix: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    text.lines()
        .map(str::trim)
        .filter(move |line| !line.is_empty() && !line.starts_with(comment_prefix))
}

/// Reads the words of the file at `path`.
pub fn load_words<P: AsRef<Path>>(path: P, comment_prefix: &str) -> LookupResult<Vec<String>> {
    let text = fs::read_to_string(path.as_ref())?;
    Ok(parse_words(&text, comment_prefix)
        .map(str::to_string)
        .collect())
}

/// Builds a trie from the configured word list, or from [`DEFAULT_WORDS`]
/// when no file is configured.
pub fn build_trie(config: &DictionaryConfig) -> LookupResult<Trie> {
    let trie: Trie = match &config.path {
        Some(path) => load_words(path, &config.comment_prefix)?.into_iter().collect(),
        None => DEFAULT_WORDS.into_iter().collect(),
    };

    info!(
        source = %config.path.as_deref().map_or_else(|| "built-in".into(), |p| p.display().to_string()),
        words = trie.len(),
        "Dictionary loaded"
    );
    Ok(trie)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LookupError;
    use std::path::PathBuf;

    #[test]
    fn test_parse_words_skips_blanks_and_comments() {
        let text = "# fruit\napple\n\n  apply  \n#ape\nbat\n";
        let words: Vec<&str> = parse_words(text, "#").collect();
        assert_eq!(words, vec!["apple", "apply", "bat"]);
    }

    #[test]
    fn test_parse_words_custom_prefix() {
        let words: Vec<&str> = parse_words("// note\n#tag\n", "//").collect();
        assert_eq!(words, vec!["#tag"]);
    }

    #[test]
    fn test_build_trie_defaults() {
        let trie = build_trie(&DictionaryConfig::default()).unwrap();
        assert_eq!(trie.len(), DEFAULT_WORDS.len());
        assert!(DEFAULT_WORDS.iter().all(|w| trie.contains(w)));
    }

    #[test]
    fn test_build_trie_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "cat\ncap\ncat\n# comment\n").unwrap();

        let config = DictionaryConfig {
            path: Some(path),
            ..Default::default()
        };
        let trie = build_trie(&config).unwrap();
        assert_eq!(trie.words(), vec!["cap", "cat"]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let config = DictionaryConfig {
            path: Some(PathBuf::from("/definitely/not/here/words.txt")),
            ..Default::default()
        };
        assert!(matches!(build_trie(&config), Err(LookupError::Io(_))));
    }
}
