// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::heap::Suggestion;
use crate::reference::ArrayTrie;
use crate::trie::HashedTrie;

/// Build a trie from `(word, importance)` pairs.
///
/// Panics if a word is rejected: fixtures are short lowercase words.
///
/// This is the canonical implementation used across all tests.
pub fn trie_with(entries: &[(&str, u32)]) -> HashedTrie {
    let mut trie = HashedTrie::new();
    for &(word, importance) in entries {
        trie.insert(word).expect("test word");
        for _ in 0..importance {
            trie.increment_importance(word);
        }
    }
    trie
}

/// Build a trie from words, all at importance 0.
pub fn trie_from_words(words: &[&str]) -> HashedTrie {
    let mut trie = HashedTrie::new();
    for word in words {
        trie.insert(word).expect("test word");
    }
    trie
}

/// The dictionary `{cat, car, cap, dog}` with `cat = 3` and `car = 1`.
pub fn sample_trie() -> HashedTrie {
    trie_with(&[("cat", 3), ("car", 1), ("cap", 0), ("dog", 0)])
}

/// Build the 26-way reference trie with the same contents.
pub fn array_trie_with(entries: &[(&str, u32)]) -> ArrayTrie {
    let mut trie = ArrayTrie::new();
    for &(word, importance) in entries {
        trie.insert(word);
        for _ in 0..importance {
            trie.increment_importance(word);
        }
    }
    trie
}

/// Words of a suggestion list, sorted, for order-independent comparison.
pub fn sorted_words(suggestions: &[Suggestion]) -> Vec<String> {
    let mut words: Vec<String> = suggestions.iter().map(|s| s.word.clone()).collect();
    words.sort();
    words
}
