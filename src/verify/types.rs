// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Invariant errors and the checks that produce them.
//!
//! | Invariant                  | What is checked                                        |
//! |----------------------------|--------------------------------------------------------|
//! | load                       | `size / capacity < 0.90` after every insertion         |
//! | size                       | `size` equals the number of occupied positions         |
//! | unique keys                | no character occupies two slots of one table           |
//! | placement                  | a slot sits at `(ideal + probe_length) mod capacity`   |
//! | probe bound                | no probe length exceeds `max_probe_length`             |
//! | Robin Hood order           | every position a slot walked past holds a slot with a  |
//! |                            | probe length at least as long as the walk was there    |
//! | word ends                  | a non-zero word end equals the depth of its slot + 1   |
//! | no empty subtrees          | every next-level table has at least one slot           |
//! | word count                 | the trie's word count matches its word-ending slots    |

use std::collections::HashSet;
use std::fmt;

use crate::table::{ideal_index, LevelTable};
use crate::HashedTrie;

/// Error type for invariant violations.
///
/// `depth` is the position in the word that the offending table indexes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// Load factor reached the rehash threshold and the table did not grow.
    Overloaded {
        depth: usize,
        size: usize,
        capacity: usize,
    },
    /// Cached size differs from the occupied positions.
    SizeMismatch {
        depth: usize,
        claimed: usize,
        actual: usize,
    },
    /// Two slots of the same table hold the same character.
    DuplicateKey { depth: usize, key: char },
    /// Slot is not where its probe length says it should be.
    MisplacedSlot {
        depth: usize,
        index: usize,
        key: char,
        probe_length: usize,
    },
    /// Slot probe length exceeds the table's recorded maximum.
    ProbeExceedsMax {
        depth: usize,
        key: char,
        probe_length: usize,
        max: usize,
    },
    /// A slot walked past an empty position or a poorer resident.
    RobinHoodOrder {
        depth: usize,
        index: usize,
        key: char,
    },
    /// Word end does not match the length of the path to the slot.
    WrongWordEnd {
        depth: usize,
        key: char,
        word_end: usize,
    },
    /// A next-level table exists with nothing in it.
    EmptyNextTable { depth: usize, key: char },
    /// Trie word count differs from the word-ending slots.
    WordCountMismatch { claimed: usize, actual: usize },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::Overloaded {
                depth,
                size,
                capacity,
            } => {
                write!(
                    f,
                    "table at depth {} holds {} of {} slots, at or above the load threshold",
                    depth, size, capacity
                )
            }
            InvariantError::SizeMismatch {
                depth,
                claimed,
                actual,
            } => {
                write!(
                    f,
                    "table at depth {} claims size {} but has {} occupied slots",
                    depth, claimed, actual
                )
            }
            InvariantError::DuplicateKey { depth, key } => {
                write!(f, "key '{}' appears twice in table at depth {}", key, depth)
            }
            InvariantError::MisplacedSlot {
                depth,
                index,
                key,
                probe_length,
            } => {
                write!(
                    f,
                    "key '{}' at index {} (depth {}) does not match probe length {}",
                    key, index, depth, probe_length
                )
            }
            InvariantError::ProbeExceedsMax {
                depth,
                key,
                probe_length,
                max,
            } => {
                write!(
                    f,
                    "key '{}' at depth {} has probe length {} > max {}",
                    key, depth, probe_length, max
                )
            }
            InvariantError::RobinHoodOrder { depth, index, key } => {
                write!(
                    f,
                    "key '{}' at index {} (depth {}) skipped a poorer or empty position",
                    key, index, depth
                )
            }
            InvariantError::WrongWordEnd {
                depth,
                key,
                word_end,
            } => {
                write!(
                    f,
                    "key '{}' at depth {} marks a word of length {}",
                    key, depth, word_end
                )
            }
            InvariantError::EmptyNextTable { depth, key } => {
                write!(f, "key '{}' at depth {} owns an empty table", key, depth)
            }
            InvariantError::WordCountMismatch { claimed, actual } => {
                write!(
                    f,
                    "trie claims {} words but {} slots end a word",
                    claimed, actual
                )
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// Check every table of `trie` and its word count.
pub fn verify_trie(trie: &HashedTrie) -> Result<(), InvariantError> {
    let actual = verify_table(trie.root(), 0)?;
    if actual != trie.len() {
        return Err(InvariantError::WordCountMismatch {
            claimed: trie.len(),
            actual,
        });
    }
    Ok(())
}

/// Check `table` and every table below it. Returns the number of
/// word-ending slots found.
pub fn verify_table(table: &LevelTable, depth: usize) -> Result<usize, InvariantError> {
    verify_node(table, depth)?;

    let mut words = 0;
    for slot in table.slots() {
        if slot.word_end() != 0 {
            if slot.word_end() != depth + 1 {
                return Err(InvariantError::WrongWordEnd {
                    depth,
                    key: slot.key(),
                    word_end: slot.word_end(),
                });
            }
            words += 1;
        }
        if let Some(next) = slot.next() {
            if next.is_empty() {
                return Err(InvariantError::EmptyNextTable {
                    depth,
                    key: slot.key(),
                });
            }
            words += verify_table(next, depth + 1)?;
        }
    }
    Ok(words)
}

/// Check the hashing invariants of a single table, ignoring its subtrees.
pub fn verify_node(table: &LevelTable, depth: usize) -> Result<(), InvariantError> {
    let capacity = table.capacity();

    if table.len() * 10 >= capacity * 9 {
        return Err(InvariantError::Overloaded {
            depth,
            size: table.len(),
            capacity,
        });
    }

    let actual = table.slots().count();
    if actual != table.len() {
        return Err(InvariantError::SizeMismatch {
            depth,
            claimed: table.len(),
            actual,
        });
    }

    let mut keys = HashSet::with_capacity(actual);
    for (index, slot) in table.positions() {
        let key = slot.key();
        let probe_length = slot.probe_length();

        if !keys.insert(key) {
            return Err(InvariantError::DuplicateKey { depth, key });
        }

        let ideal = ideal_index(key, capacity);
        if (ideal + probe_length) % capacity != index {
            return Err(InvariantError::MisplacedSlot {
                depth,
                index,
                key,
                probe_length,
            });
        }

        if probe_length > table.max_probe_length() {
            return Err(InvariantError::ProbeExceedsMax {
                depth,
                key,
                probe_length,
                max: table.max_probe_length(),
            });
        }

        // Every position passed on the way here is occupied by a slot that
        // was at least as far from home as this one was at that point.
        for walked in 0..probe_length {
            let passed = table
                .slot_at((ideal + walked) % capacity)
                .is_some_and(|resident| resident.probe_length() >= walked);
            if !passed {
                return Err(InvariantError::RobinHoodOrder { depth, index, key });
            }
        }
    }

    Ok(())
}
