// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Robin Hood hash table over characters: one trie node.
//!
//! Every node of the trie is a small open-addressed table keyed by the next
//! character. A slot that continues into longer words owns the table for the
//! following position, so the whole trie is a tree of these tables with one
//! owner per table.
//!
//! # Layout
//!
//! ```text
//!   capacity 5            ideal index = (c - 'a') mod capacity
//! ┌─────┬─────┬─────┬─────┬─────┐
//! │ p/0 │     │ r/0 │ h/1 │ t/0 │   key / probe length
//! └──┬──┴─────┴──┬──┴─────┴─────┘
//!    ▼           ▼
//!  next        next                 tables for the following character
//! ```
//!
//! # Robin Hood placement
//!
//! A new key walks forward from its ideal index. Whenever the resident has a
//! strictly shorter probe length than the walker, they trade places and the
//! evicted resident keeps walking. Ties leave the resident alone. No key is
//! ever removed, so an empty position ends every lookup.
//!
//! # Growth
//!
//! The table rehashes when `size / capacity` reaches 0.90. Capacities follow
//! 5 → 11 → 19 → 29 and double after that. Rehashing moves the existing
//! slots (and the subtrees they own) without rebuilding them.

mod slot;

pub use slot::Slot;

use crate::verify::contracts;

/// Capacity of a freshly created table.
pub const INITIAL_CAPACITY: usize = 5;

/// Capacities used before falling back to doubling.
const CAPACITY_SCHEDULE: [usize; 3] = [11, 19, 29];

/// Load factor threshold, as a fraction: rehash once `size / capacity >= 9 / 10`.
const LOAD_NUMERATOR: usize = 9;
const LOAD_DENOMINATOR: usize = 10;

/// Open-addressed table of [`Slot`]s keyed by character.
#[derive(Debug)]
pub struct LevelTable {
    pub(crate) slots: Vec<Option<Slot>>,
    pub(crate) size: usize,
    pub(crate) max_probe_length: usize,
}

impl Default for LevelTable {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelTable {
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: empty_slots(capacity.max(1)),
            size: 0,
            max_probe_length: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Largest probe length placed since the last rehash.
    #[inline]
    pub fn max_probe_length(&self) -> usize {
        self.max_probe_length
    }

    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.capacity() as f64
    }

    /// Occupied slots in array order.
    pub fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter().flatten()
    }

    /// Occupied slots with their array index.
    pub fn positions(&self) -> impl Iterator<Item = (usize, &Slot)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|s| (index, s)))
    }

    /// Slot stored at array position `index`.
    pub fn slot_at(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)?.as_ref()
    }

    /// Slot holding `key`, if this node has one.
    pub fn get(&self, key: char) -> Option<&Slot> {
        self.find_index(key).and_then(|i| self.slots[i].as_ref())
    }

    // ========================================================================
    // WORD OPERATIONS
    // ========================================================================

    /// Insert `word[depth..]` below this table.
    ///
    /// Characters already present are reused, missing ones are placed with
    /// Robin Hood displacement, and the last character's slot is marked as a
    /// word end. Next-level tables are created only when characters remain.
    pub fn insert(&mut self, word: &[char], depth: usize) {
        let Some(&key) = word.get(depth) else {
            return;
        };

        let index = match self.find_index(key) {
            Some(index) => index,
            None => self.place(Slot::new(key)),
        };

        if let Some(slot) = self.slots[index].as_mut() {
            if depth + 1 == word.len() {
                slot.word_end = word.len();
            } else {
                slot.next
                    .get_or_insert_with(|| Box::new(LevelTable::new()))
                    .insert(word, depth + 1);
            }
        }

        while self.is_overloaded() {
            self.rehash();
        }

        contracts::check_table_well_formed(self);
    }

    /// True if exactly `word` was inserted below this table.
    pub fn contains(&self, word: &[char], depth: usize) -> bool {
        self.terminal(word, depth).is_some()
    }

    /// Importance of `word`, or `None` if it was never inserted.
    pub fn importance(&self, word: &[char], depth: usize) -> Option<u32> {
        self.terminal(word, depth).map(Slot::importance)
    }

    /// Bump the importance of `word`. Returns false (and does nothing) if
    /// the word is absent.
    pub fn increment_importance(&mut self, word: &[char], depth: usize) -> bool {
        match self.terminal_mut(word, depth) {
            Some(slot) => {
                slot.importance = slot.importance.saturating_add(1);
                true
            }
            None => false,
        }
    }

    /// Table that follows the last character of `prefix`.
    ///
    /// `None` if the path does not exist or nothing continues past it.
    pub fn descend(&self, prefix: &[char]) -> Option<&LevelTable> {
        let mut table = self;
        for &key in prefix {
            table = table.get(key)?.next()?;
        }
        Some(table)
    }

    /// Slot where `word` ends, walking one table per character.
    fn terminal(&self, word: &[char], depth: usize) -> Option<&Slot> {
        let slot = self.get(*word.get(depth)?)?;
        if depth + 1 == word.len() {
            return slot.ends_word_of_len(word.len()).then_some(slot);
        }
        slot.next()?.terminal(word, depth + 1)
    }

    fn terminal_mut(&mut self, word: &[char], depth: usize) -> Option<&mut Slot> {
        let index = self.find_index(*word.get(depth)?)?;
        let slot = self.slots[index].as_mut()?;
        if depth + 1 == word.len() {
            return slot.ends_word_of_len(word.len()).then_some(slot);
        }
        slot.next.as_deref_mut()?.terminal_mut(word, depth + 1)
    }

    // ========================================================================
    // HASHING
    // ========================================================================

    /// Array index of `key`, probing no further than the largest probe length
    /// any resident has.
    fn find_index(&self, key: char) -> Option<usize> {
        let capacity = self.capacity();
        let start = ideal_index(key, capacity);
        let limit = self.max_probe_length.min(capacity - 1);

        for probe in 0..=limit {
            let index = (start + probe) % capacity;
            match &self.slots[index] {
                None => return None,
                Some(slot) if slot.key == key => return Some(index),
                Some(_) => {}
            }
        }
        None
    }

    /// Robin Hood placement of a slot that is not yet in the table.
    ///
    /// Returns the index where `incoming` came to rest. Slots it evicts on the
    /// way keep their subtrees and continue probing from where they stood.
    fn place(&mut self, incoming: Slot) -> usize {
        debug_assert!(self.size < self.capacity(), "placement into a full table");

        let capacity = self.capacity();
        let mut carried = incoming;
        let mut landed = None;

        loop {
            let index = (ideal_index(carried.key, capacity) + carried.probe_length) % capacity;

            if let Some(resident) = self.slots[index].as_mut() {
                if resident.probe_length < carried.probe_length {
                    self.max_probe_length = self.max_probe_length.max(carried.probe_length);
                    std::mem::swap(resident, &mut carried);
                    landed.get_or_insert(index);
                }
                carried.probe_length += 1;
                continue;
            }

            self.max_probe_length = self.max_probe_length.max(carried.probe_length);
            self.slots[index] = Some(carried);
            self.size += 1;
            return landed.unwrap_or(index);
        }
    }

    fn is_overloaded(&self) -> bool {
        self.size * LOAD_DENOMINATOR >= self.capacity() * LOAD_NUMERATOR
    }

    /// Grow to the next scheduled capacity and re-place every slot.
    pub(crate) fn rehash(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = next_capacity(old_capacity);
        let old_slots = std::mem::replace(&mut self.slots, empty_slots(new_capacity));

        self.size = 0;
        self.max_probe_length = 0;

        for mut slot in old_slots.into_iter().flatten() {
            slot.probe_length = 0;
            self.place(slot);
        }

        tracing::trace!(
            from = old_capacity,
            to = new_capacity,
            size = self.size,
            max_probe = self.max_probe_length,
            "rehashed level table"
        );
    }
}

/// Ideal position of `key`: its offset from `'a'`, modulo capacity.
///
/// Characters below `'a'` wrap around instead of going negative.
#[inline]
pub(crate) fn ideal_index(key: char, capacity: usize) -> usize {
    (u32::from(key).wrapping_sub(u32::from('a')) as usize) % capacity
}

/// Next capacity after `current`: the first scheduled prime above it, else double.
pub(crate) fn next_capacity(current: usize) -> usize {
    CAPACITY_SCHEDULE
        .iter()
        .copied()
        .find(|&prime| prime > current)
        .unwrap_or(current * 2)
}

fn empty_slots(capacity: usize) -> Vec<Option<Slot>> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}
