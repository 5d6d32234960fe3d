// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The per-query candidate pool.
//!
//! All three traversals feed the same bounded heap. A word can be reached by
//! more than one of them (a prefix completion one letter longer than the
//! query is also a length+1 fuzzy match), so the pool remembers what it has
//! already been offered.
//!
//! **Invariant**: a word enters the heap at most once per query.

use std::collections::HashSet;

use crate::heap::{Suggestion, TopKHeap};

/// Bounded heap plus the set of words already offered to it.
#[derive(Debug)]
pub struct Candidates {
    heap: TopKHeap,
    seen: HashSet<Vec<char>>,
}

impl Candidates {
    pub fn new(k: usize) -> Self {
        Self {
            heap: TopKHeap::new(k),
            seen: HashSet::new(),
        }
    }

    /// Offer a word spelled out as characters.
    ///
    /// Returns true if the heap kept it. Repeat offers are ignored.
    pub fn offer(&mut self, word: &[char], importance: u32) -> bool {
        if self.seen.contains(word) {
            return false;
        }
        self.seen.insert(word.to_vec());
        self.heap.insert(word.iter().collect::<String>(), importance)
    }

    /// Number of distinct words offered so far.
    pub fn offered(&self) -> usize {
        self.seen.len()
    }

    pub fn heap(&self) -> &TopKHeap {
        &self.heap
    }

    /// Retained suggestions in heap storage order.
    pub fn into_suggestions(self) -> Vec<Suggestion> {
        self.heap.into_vec()
    }
}
