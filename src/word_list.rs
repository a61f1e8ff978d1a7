//! `word_list` — loads and normalizes the dictionary the trie is built from.
//!
//! Input is one source record per line. Many dictionary files carry a
//! slash-delimited annotation after the word (inflection markers, frequency
//! tags); everything from the first `/` on is dropped. What remains is
//! lowercased and reduced to the characters a word may contain (`a-z`,
//! hyphen, space); lines that end up empty or whitespace-only are skipped, so
//! the trie never sees an empty word.
//!
//! The string-based parser works on any in-memory contents;
//! [`WordList::load_from_path`] is the file-reading convenience around it.

use crate::errors::WordListError;
use fancy_regex::Regex;
use std::sync::LazyLock;

/// Everything a dictionary word may not contain.
static NON_WORD_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^a-z -]").expect("filter regex is valid"));

/// A normalized, ready-to-insert word list. Order is preserved and duplicates
/// are kept — the trie's merge rule deduplicates on insertion.
#[derive(Debug, Clone)]
pub struct WordList {
    pub words: Vec<String>,
}

impl WordList {
    /// Parse raw dictionary contents.
    ///
    /// Per line: strip the `/`-annotation, lowercase, delete every character
    /// outside `[a-z -]`, trim, and skip the line if nothing remains.
    pub fn parse_from_str(contents: &str) -> WordList {
        let words: Vec<String> = contents
            .lines()
            .filter_map(|line| {
                let entry = line.split_once('/').map_or(line, |(word, _annotation)| word);
                let entry = entry.to_lowercase();
                let entry = NON_WORD_CHARS.replace_all(&entry, "");
                let entry = entry.trim();
                if entry.is_empty() { None } else { Some(entry.to_string()) }
            })
            .collect();

        log::debug!("parsed {} words from word list", words.len());
        WordList { words }
    }

    /// Read and parse a word list file.
    ///
    /// # Errors
    ///
    /// Returns [`WordListError::Read`] if the file cannot be read.
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<WordList, WordListError> {
        let path_ref = path.as_ref();
        let contents = std::fs::read_to_string(path_ref).map_err(|source| WordListError::Read {
            path: path_ref.display().to_string(),
            source,
        })?;
        Ok(Self::parse_from_str(&contents))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let list = WordList::parse_from_str("cat\ndog\nbird");
        assert_eq!(list.words, vec!["cat", "dog", "bird"]);
    }

    #[test]
    fn test_parse_strips_annotations() {
        let list = WordList::parse_from_str("cat/S\ndog/DGS\nbird");
        assert_eq!(list.words, vec!["cat", "dog", "bird"]);
    }

    #[test]
    fn test_parse_lowercases() {
        let list = WordList::parse_from_str("Cat\nDOG");
        assert_eq!(list.words, vec!["cat", "dog"]);
    }

    #[test]
    fn test_parse_drops_forbidden_characters() {
        let list = WordList::parse_from_str("ca't!\nnumb3r");
        assert_eq!(list.words, vec!["cat", "numbr"]);
    }

    #[test]
    fn test_parse_keeps_hyphen_and_inner_space() {
        let list = WordList::parse_from_str("ice cream\nmother-in-law");
        assert_eq!(list.words, vec!["ice cream", "mother-in-law"]);
    }

    #[test]
    fn test_parse_skips_lines_that_normalize_to_nothing() {
        let list = WordList::parse_from_str("cat\n\n   \n123\ndog");
        assert_eq!(list.words, vec!["cat", "dog"]);
    }

    #[test]
    fn test_parse_keeps_duplicates() {
        let list = WordList::parse_from_str("cat\ncat");
        assert_eq!(list.words, vec!["cat", "cat"]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(WordList::parse_from_str("").words.is_empty());
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = WordList::load_from_path("definitely/not/here.txt").unwrap_err();
        assert!(err.to_string().contains("definitely/not/here.txt"));
    }
}
