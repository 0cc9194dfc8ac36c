//! `signature` — canonical anagram keys.
//!
//! Two words are anagrams iff they contain the same multiset of letters, so
//! every word is reduced to a canonical *signature*: its characters
//! lowercase-folded and sorted ascending by code point. Signature equality is
//! then exactly anagram equality, which lets the trie key on signatures
//! character by character.

/// Compute the anagram signature of `word`.
///
/// Every character is lowercase-folded, then the characters are sorted
/// ascending by code point. Non-letter characters (digits, punctuation) are
/// not filtered out: they fold to themselves and participate in the sort, so
/// two inputs that differ only in where the punctuation sits still map to the
/// same signature.
///
/// Pure and total: any string is valid input, including the empty string
/// (whose signature is the empty string). No error conditions exist.
#[must_use]
pub fn canonicalize(word: &str) -> String {
    let mut chars: Vec<char> = word.to_lowercase().chars().collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}
