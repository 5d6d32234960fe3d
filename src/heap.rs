// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fixed-capacity min-heap that keeps the k most important candidates.
//!
//! The root is always the least important of the retained entries, so a new
//! candidate only has to beat the root to get in. Equal importance does not
//! beat the root: among ties, whoever arrived first stays.
//!
//! Positions are 1-indexed (`parent = i / 2`, children `2i` and `2i + 1`);
//! position `i` lives at `entries[i - 1]`.
//!
//! `capacity` is a bound on what is retained, not a reservation: storage
//! grows with the entries actually kept.

use serde::Serialize;

use crate::verify::contracts;

/// A suggested word and the importance it was ranked by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub word: String,
    pub importance: u32,
}

impl Suggestion {
    pub fn new(word: impl Into<String>, importance: u32) -> Self {
        Self {
            word: word.into(),
            importance,
        }
    }
}

// Upper bound on the up-front allocation.
const INITIAL_RESERVE: usize = 64;

/// Bounded min-heap keyed by importance.
#[derive(Debug, Clone)]
pub struct TopKHeap {
    entries: Vec<Suggestion>,
    capacity: usize,
}

impl TopKHeap {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity.min(INITIAL_RESERVE)),
            capacity,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.entries.len() == self.capacity
    }

    /// Least important retained entry.
    pub fn peek_min(&self) -> Option<&Suggestion> {
        self.entries.first()
    }

    /// Offer a candidate.
    ///
    /// Below capacity it is always kept. At capacity it replaces the root only
    /// when strictly more important; otherwise it is dropped. Returns whether
    /// the candidate was kept.
    pub fn insert(&mut self, word: impl Into<String>, importance: u32) -> bool {
        let kept = if self.entries.len() < self.capacity {
            self.entries.push(Suggestion::new(word, importance));
            self.sift_up(self.entries.len());
            true
        } else {
            match self.entries.first() {
                Some(root) if importance > root.importance => {
                    self.entries[0] = Suggestion::new(word, importance);
                    self.sift_down(1);
                    true
                }
                _ => false,
            }
        };

        contracts::check_heap_order(&self.entries);
        kept
    }

    /// Remove and return the least important entry.
    pub fn extract_min(&mut self) -> Option<Suggestion> {
        if self.entries.is_empty() {
            return None;
        }
        let min = self.entries.swap_remove(0);
        if !self.entries.is_empty() {
            self.sift_down(1);
        }
        Some(min)
    }

    /// Retained entries in storage order. No ordering between them is implied.
    pub fn as_slice(&self) -> &[Suggestion] {
        &self.entries
    }

    /// Consume the heap, returning its entries in storage order.
    pub fn into_vec(self) -> Vec<Suggestion> {
        self.entries
    }

    /// Empty the heap, returning its entries in storage order.
    pub fn drain(&mut self) -> Vec<Suggestion> {
        std::mem::take(&mut self.entries)
    }

    #[inline]
    fn importance_at(&self, position: usize) -> u32 {
        self.entries[position - 1].importance
    }

    fn sift_up(&mut self, mut position: usize) {
        while position > 1 {
            let parent = position / 2;
            if self.importance_at(parent) <= self.importance_at(position) {
                break;
            }
            self.entries.swap(parent - 1, position - 1);
            position = parent;
        }
    }

    fn sift_down(&mut self, mut position: usize) {
        let len = self.entries.len();
        while position * 2 <= len {
            let mut child = position * 2;
            if child < len && self.importance_at(child + 1) < self.importance_at(child) {
                child += 1;
            }
            if self.importance_at(position) <= self.importance_at(child) {
                break;
            }
            self.entries.swap(position - 1, child - 1);
            position = child;
        }
    }
}
