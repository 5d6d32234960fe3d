// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The hashed trie: a root [`LevelTable`] and the words chained below it.
//!
//! All entry points lower-case their input and then delegate to the root
//! table at depth 0. Lookups of words that were never inserted come back as
//! `false` / `None` instead of a default importance.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::table::LevelTable;

/// Longest word the trie accepts. Recursion depth equals word length.
pub const MAX_WORD_LEN: usize = 64;

/// Bytes charged per table header by the memory estimate.
const TABLE_HEADER_BYTES: usize = 3 * 16;
/// Bytes charged per occupied entry of a table's slot array.
const TABLE_ENTRY_BYTES: usize = 4 * 16;
/// Bytes charged per slot object.
const SLOT_BYTES: usize = 16;

/// Trie whose nodes are Robin Hood hash tables.
#[derive(Debug, Default)]
pub struct HashedTrie {
    root: LevelTable,
    words: usize,
}

/// Shape of a trie, gathered in one walk.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrieStats {
    /// Level tables, root included.
    pub tables: usize,
    /// Occupied slots across all tables.
    pub slots: usize,
    /// Distinct words.
    pub words: usize,
    /// Longest path from the root, in characters.
    pub depth: usize,
    /// Largest probe length of any resident slot.
    pub max_probe_length: usize,
    /// Highest `size / capacity` of any table.
    pub peak_load_factor: f64,
    /// Estimated memory footprint in bytes.
    pub memory_bytes: usize,
}

impl HashedTrie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `word`. Returns `Ok(true)` if it was not stored before.
    ///
    /// The empty word is accepted and ignored.
    pub fn insert(&mut self, word: &str) -> Result<bool> {
        let chars = lowercase_chars(word);
        if chars.len() > MAX_WORD_LEN {
            return Err(Error::WordTooLong {
                len: chars.len(),
                max: MAX_WORD_LEN,
            });
        }
        if chars.is_empty() || self.root.contains(&chars, 0) {
            return Ok(false);
        }
        self.root.insert(&chars, 0);
        self.words += 1;
        Ok(true)
    }

    pub fn contains(&self, word: &str) -> bool {
        let chars = lowercase_chars(word);
        chars.len() <= MAX_WORD_LEN && self.root.contains(&chars, 0)
    }

    /// Importance of `word`, or `None` if it is not in the trie.
    pub fn importance(&self, word: &str) -> Option<u32> {
        let chars = lowercase_chars(word);
        if chars.len() > MAX_WORD_LEN {
            return None;
        }
        self.root.importance(&chars, 0)
    }

    /// Add one to the importance of `word`. Absent words are left alone and
    /// reported with `false`.
    pub fn increment_importance(&mut self, word: &str) -> bool {
        let chars = lowercase_chars(word);
        chars.len() <= MAX_WORD_LEN && self.root.increment_importance(&chars, 0)
    }

    #[inline]
    pub fn root(&self) -> &LevelTable {
        &self.root
    }

    /// Number of distinct words stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.words
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Every stored word with its importance, in slot-array order.
    pub fn words(&self) -> Vec<(String, u32)> {
        let mut out = Vec::with_capacity(self.words);
        let mut path = String::new();
        collect_words(&self.root, &mut path, &mut out);
        out
    }

    /// Walk every table once and summarize the structure.
    pub fn stats(&self) -> TrieStats {
        let mut stats = TrieStats {
            words: self.words,
            ..TrieStats::default()
        };

        let mut stack: Vec<(&LevelTable, usize)> = vec![(&self.root, 0)];
        while let Some((table, depth)) = stack.pop() {
            stats.tables += 1;
            stats.slots += table.len();
            stats.max_probe_length = stats.max_probe_length.max(table.max_probe_length());
            stats.peak_load_factor = stats.peak_load_factor.max(table.load_factor());
            stats.memory_bytes += TABLE_HEADER_BYTES + table.len() * TABLE_ENTRY_BYTES;

            for slot in table.slots() {
                stats.memory_bytes += SLOT_BYTES;
                stats.depth = stats.depth.max(depth + 1);
                if let Some(next) = slot.next() {
                    stack.push((next, depth + 1));
                }
            }
        }

        stats
    }

    /// Estimated memory footprint in bytes.
    pub fn memory_estimate(&self) -> usize {
        self.stats().memory_bytes
    }
}

fn collect_words(table: &LevelTable, path: &mut String, out: &mut Vec<(String, u32)>) {
    for slot in table.slots() {
        path.push(slot.key());
        if slot.ends_word_of_len(path.chars().count()) {
            out.push((path.clone(), slot.importance()));
        }
        if let Some(next) = slot.next() {
            collect_words(next, path, out);
        }
        path.pop();
    }
}

/// Lower-case `word` into the character sequence the tables are keyed by.
pub(crate) fn lowercase_chars(word: &str) -> Vec<char> {
    word.chars().flat_map(char::to_lowercase).collect()
}
