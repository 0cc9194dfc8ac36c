//! `word_list` — Module to load the raw word list fed into the anagram index.
//!
//! This module is responsible for reading a word list, either from a file or
//! from an in-memory string (the latter keeps the parsing logic testable
//! without touching the filesystem).
//!
//! The format is one word per line. Parsing:
//! - Each line is trimmed of surrounding whitespace.
//! - Empty lines are skipped.
//! - Case, duplicates, and order are all preserved exactly as supplied: the
//!   index is what normalizes (via signatures) and sorts (at finalize), and
//!   duplicate source words are intentionally kept so they show up twice in
//!   query results.
//!
//! The public API provides:
//! - `parse_from_str(...)` — pure parsing over an in-memory string.
//! - `load_from_path(...)` — convenience method to read from a file path.

use crate::errors::WordListError;

/// A raw word list, ready to be handed to the index builder.
#[derive(Debug, Clone)]
pub struct WordList {
    /// Words in source order, case and duplicates intact.
    pub words: Vec<String>,
}

impl WordList {
    /// Parse a raw word list from an in-memory string, one word per line.
    ///
    /// Lines are trimmed; empty lines are skipped; everything else is kept
    /// verbatim. Mixed case and punctuation are valid — there is no "invalid
    /// word" concept.
    #[must_use]
    pub fn parse_from_str(contents: &str) -> WordList {
        let words = contents
            .lines()
            .filter_map(|raw_line| {
                let line = raw_line.trim();
                if line.is_empty() {
                    None
                } else {
                    Some(line.to_string())
                }
            })
            .collect();

        WordList { words }
    }

    /// Read a word list from a file path and parse it.
    ///
    /// # Errors
    ///
    /// Returns [`WordListError::SourceRead`] if the file cannot be opened or
    /// read. This is the only failure mode anywhere in the pipeline; it is
    /// propagated to the caller, never recovered internally.
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<WordList, WordListError> {
        let path_ref = path.as_ref();

        // read_to_string ensures UTF-8 decoding of the whole file up front.
        let data = std::fs::read_to_string(path_ref).map_err(|e| WordListError::SourceRead {
            path: path_ref.display().to_string(),
            source: e,
        })?;

        Ok(Self::parse_from_str(&data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let input = "cat\ndog\nbird";
        let word_list = WordList::parse_from_str(input);

        assert_eq!(word_list.words, vec!["cat", "dog", "bird"]);
    }

    #[test]
    fn test_parse_skips_empty_lines() {
        let input = "cat\n\n\ndog\n\n";
        let word_list = WordList::parse_from_str(input);

        assert_eq!(word_list.words, vec!["cat", "dog"]);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let input = "  cat  \n\tdog\t\n";
        let word_list = WordList::parse_from_str(input);

        assert_eq!(word_list.words, vec!["cat", "dog"]);
    }

    #[test]
    fn test_parse_preserves_case_duplicates_and_order() {
        let input = "Tea\neat\nTea\nATE";
        let word_list = WordList::parse_from_str(input);

        assert_eq!(word_list.words, vec!["Tea", "eat", "Tea", "ATE"]);
    }

    #[test]
    fn test_parse_empty_input() {
        let word_list = WordList::parse_from_str("");

        assert!(word_list.words.is_empty());
    }

    #[test]
    fn test_load_missing_file_is_source_read_error() {
        let err = WordList::load_from_path("no/such/file.txt").unwrap_err();

        let WordListError::SourceRead { path, .. } = err;
        assert_eq!(path, "no/such/file.txt");
    }
}
