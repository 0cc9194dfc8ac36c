//! `trie` — the signature-indexed prefix tree.
//!
//! Each edge is labeled with one character of a signature; the path from the
//! root to a node spells a signature prefix, and a node whose depth equals the
//! length of some inserted signature holds the original words mapped to it.
//! The root sits at depth 0 and therefore owns the words whose signature is
//! the empty string.
//!
//! The tree goes through two phases: a build phase (`insert` calls followed by
//! exactly one `finalize`), after which it is queried read-only via `lookup`.
//! `finalize` sorts every node's word list so that query results are
//! deterministic regardless of insertion order or hash-map iteration order.
//!
//! Insertion and lookup walk the tree with a loop rather than recursing, and
//! `finalize` uses an explicit worklist, so no operation's stack depth grows
//! with signature length.

use std::collections::HashMap;

/// One position in the trie: child edges plus the words whose signature
/// terminates exactly here.
#[derive(Debug, Default)]
struct TrieNode {
    /// One owned child per distinct next character. Unordered; `finalize`
    /// makes output order deterministic anyway.
    children: HashMap<char, TrieNode>,

    /// Original words (case preserved, duplicates allowed) whose signature's
    /// path ends at this node. Empty for pure prefix nodes.
    words: Vec<String>,
}

/// A trie keyed character-by-character over canonical signatures.
#[derive(Debug, Default)]
pub struct SignatureTrie {
    root: TrieNode,
}

impl SignatureTrie {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `word` under `signature`, creating any missing nodes along the
    /// path.
    ///
    /// Appends only: inserting the same (signature, word) pair twice stores
    /// the word twice. Duplicates in the source list are deliberately kept,
    /// not collapsed.
    pub fn insert(&mut self, signature: &str, word: &str) {
        let mut node = &mut self.root;
        for c in signature.chars() {
            node = node.children.entry(c).or_default();
        }
        node.words.push(word.to_string());
    }

    /// The words stored under `signature`, or an empty slice if the path does
    /// not exist.
    ///
    /// A full path may end at a node with no words of its own (the signature
    /// exists only as a prefix of longer ones); that also yields an empty
    /// slice. Never mutates and never allocates.
    #[must_use]
    pub fn lookup(&self, signature: &str) -> &[String] {
        let mut node = &self.root;
        for c in signature.chars() {
            match node.children.get(&c) {
                Some(child) => node = child,
                None => return &[],
            }
        }
        &node.words
    }

    /// Sort every node's word list ascending lexicographically.
    ///
    /// Must run after the last `insert` and before the first `lookup`; running
    /// it again with no intervening inserts leaves the ordering unchanged.
    pub fn finalize(&mut self) {
        let mut pending = vec![&mut self.root];
        while let Some(node) = pending.pop() {
            node.words.sort();
            pending.extend(node.children.values_mut());
        }
    }
}
