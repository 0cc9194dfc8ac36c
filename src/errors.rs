//! Error types for word-list loading with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code for documentation lookup:
//!
//! - E001: `SourceRead` (word-list file could not be opened or read)
//!
//! The core index operations (canonicalization, trie insert/lookup, queries)
//! are total functions over strings and never fail, so the only error kind in
//! the crate lives at the I/O boundary. A query with no matches is a normal
//! empty result, not an error.

use std::io;

/// Custom error type for word-list loading.
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    /// The external word source could not be opened or read. Fatal to index
    /// construction; propagated to the caller, not recovered internally.
    #[error("failed to read word list from '{path}': {source}")]
    SourceRead {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl WordListError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            WordListError::SourceRead { .. } => "E001",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            WordListError::SourceRead { .. } => {
                Some("Check that the path exists and is readable; the word list is plain text with one word per line")
            }
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        let base_msg = self.to_string();
        let code = self.code();
        match self.help() {
            Some(help_text) => format!("{base_msg} ({code})\n{help_text}"),
            None => format!("{base_msg} ({code})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_error() -> WordListError {
        WordListError::SourceRead {
            path: "words.txt".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        }
    }

    #[test]
    fn test_error_code_format() {
        let code = sample_error().code();
        assert_eq!(code.len(), 4, "Error code '{}' should be 4 characters (E0XX)", code);
        assert!(code.starts_with("E0"), "Error code '{}' should start with 'E0'", code);
        assert!(code[1..].parse::<u16>().is_ok(), "Error code '{}' should end with a number", code);
    }

    #[test]
    fn test_display_detailed_includes_code_and_help() {
        let err = sample_error();
        let detailed = err.display_detailed();

        assert!(detailed.contains(err.code()), "Detailed display should include error code");
        assert!(detailed.contains(&err.to_string()), "Detailed display should include base error message");
        if let Some(help) = err.help() {
            assert!(detailed.contains(help), "Detailed display should include help text when available");
        }
    }

    #[test]
    fn test_error_message_names_the_path() {
        let detailed = sample_error().display_detailed();
        assert!(
            detailed.contains("words.txt"),
            "Error should include the path that failed to load"
        );
    }
}
