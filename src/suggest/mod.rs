// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Suggestions: prefix completion plus two fuzzy walks, one heap.
//!
//! A query runs three walks in a fixed order and every walk feeds the same
//! bounded heap of size k:
//!
//! 1. **Prefix**: stored words that extend the query. Only runs when the
//!    query itself is a stored word.
//! 2. **Same length**: stored words of the query's length within two
//!    differences.
//! 3. **Differing length**: stored words one shorter, or one or two longer.
//!
//! The fuzzy walks do not care whether the query is stored; prefix
//! completion does. Results come back in heap storage order, which is not
//! sorted by importance.

mod candidates;
pub mod traversal;

pub use candidates::Candidates;

use crate::heap::Suggestion;
use crate::trie::{lowercase_chars, HashedTrie};

/// Answers suggestion queries against a borrowed trie.
#[derive(Debug, Clone, Copy)]
pub struct Suggester<'t> {
    trie: &'t HashedTrie,
}

impl<'t> Suggester<'t> {
    pub fn new(trie: &'t HashedTrie) -> Self {
        Self { trie }
    }

    /// Up to `k` suggestions for `word`, in heap storage order.
    ///
    /// ```
    /// use sherwood::{HashedTrie, Suggester};
    ///
    /// let mut trie = HashedTrie::new();
    /// for word in ["cat", "car", "cap", "dog"] {
    ///     trie.insert(word).unwrap();
    /// }
    /// let words: Vec<String> = Suggester::new(&trie)
    ///     .suggest("cat", 5)
    ///     .into_iter()
    ///     .map(|s| s.word)
    ///     .collect();
    /// assert_eq!(words.len(), 3);
    /// assert!(!words.contains(&"dog".to_string()));
    /// ```
    pub fn suggest(&self, word: &str, k: usize) -> Vec<Suggestion> {
        let query = lowercase_chars(word);
        let mut out = Candidates::new(k);
        if k == 0 || query.is_empty() {
            return out.into_suggestions();
        }

        let root = self.trie.root();
        let found = traversal::prefix(root, &query, &mut out);
        traversal::same_length(root, &query, &mut out);
        traversal::differing_length(root, &query, &mut out);

        tracing::debug!(
            query = %word,
            k,
            prefix = found,
            offered = out.offered(),
            kept = out.heap().len(),
            "suggest"
        );
        out.into_suggestions()
    }

    /// Prefix completions only, or `None` if `word` is not stored.
    pub fn completions(&self, word: &str, k: usize) -> Option<Vec<Suggestion>> {
        let query = lowercase_chars(word);
        let mut out = Candidates::new(k);
        traversal::prefix(self.trie.root(), &query, &mut out).then(|| out.into_suggestions())
    }
}

/// Up to `k` suggestions for `word` from `trie`.
pub fn suggest(trie: &HashedTrie, word: &str, k: usize) -> Vec<Suggestion> {
    Suggester::new(trie).suggest(word, k)
}
