//! `index` — the composition root tying the canonicalizer to the trie.
//!
//! An [`AnagramIndex`] is built once from a sequence of raw words and is
//! immutable afterwards: the constructor runs the whole build phase (bulk
//! insert plus the single sort pass) before returning, so no caller can
//! observe a partially built or unsorted trie. Queries then run read-only for
//! the rest of the process lifetime.

use crate::signature::canonicalize;
use crate::trie::SignatureTrie;

/// A query-ready anagram index over a fixed set of words.
#[derive(Debug, Default)]
pub struct AnagramIndex {
    trie: SignatureTrie,
}

impl AnagramIndex {
    /// Build an index from an ordered sequence of raw words.
    ///
    /// Each word is inserted under its signature with the original spelling
    /// preserved; the raw sequence itself is not retained. Duplicate words in
    /// the input produce duplicate entries in query results — the index does
    /// not deduplicate.
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = SignatureTrie::new();
        let mut count = 0usize;
        for word in words {
            let word = word.as_ref();
            trie.insert(&canonicalize(word), word);
            count += 1;
        }
        trie.finalize();
        log::debug!("indexed {count} words");

        AnagramIndex { trie }
    }

    /// Every indexed anagram of `query`, ascending lexicographically.
    ///
    /// Matching is case-insensitive; results keep the case they were indexed
    /// with and include `query` itself when it was in the source list. An
    /// empty slice means no anagram exists — absence is a normal result, not
    /// an error.
    #[must_use]
    pub fn find(&self, query: &str) -> &[String] {
        self.trie.lookup(&canonicalize(query))
    }
}
