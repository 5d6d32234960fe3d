// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One occupied position of a level table.

use super::LevelTable;

/// A character at one trie node, plus everything hanging off it.
///
/// `word_end` doubles as the "a word ends here" flag and as a length guard:
/// it holds the full length of the word that ends on this character, or 0.
/// A slot at depth `d` can only ever carry `word_end == d + 1`, so comparing
/// against the queried length rejects words that merely share the path.
#[derive(Debug)]
pub struct Slot {
    pub(crate) key: char,
    pub(crate) probe_length: usize,
    pub(crate) next: Option<Box<LevelTable>>,
    pub(crate) word_end: usize,
    pub(crate) importance: u32,
}

impl Slot {
    pub(crate) fn new(key: char) -> Self {
        Self {
            key,
            probe_length: 0,
            next: None,
            word_end: 0,
            importance: 0,
        }
    }

    /// Character this slot stands for.
    #[inline]
    pub fn key(&self) -> char {
        self.key
    }

    /// Distance from the slot's ideal position to where it actually sits.
    #[inline]
    pub fn probe_length(&self) -> usize {
        self.probe_length
    }

    /// Table for the following character, if any word continues past this one.
    #[inline]
    pub fn next(&self) -> Option<&LevelTable> {
        self.next.as_deref()
    }

    /// Length of the word ending here, or 0.
    #[inline]
    pub fn word_end(&self) -> usize {
        self.word_end
    }

    /// True if a word of exactly `len` characters ends on this slot.
    #[inline]
    pub fn ends_word_of_len(&self, len: usize) -> bool {
        self.word_end != 0 && self.word_end == len
    }

    #[inline]
    pub fn importance(&self) -> u32 {
        self.importance
    }
}
