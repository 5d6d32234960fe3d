// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The three candidate walks over the hashed trie.
//!
//! Each walk carries a `path` buffer holding the characters on the way down
//! to the current table. A slot in that table turns `path + key` into a
//! candidate, and only slots that end a word of exactly that length are
//! offered. Tables are visited in slot-array order, which fixes the order
//! candidates reach the heap.
//!
//! | Walk              | Buffer length tested | Candidate length | Predicate            |
//! |-------------------|----------------------|------------------|----------------------|
//! | prefix            | any, below the query | > q              | none                 |
//! | same length       | q - 1                | q                | `is_similar`         |
//! | differing length  | q, q + 1             | q + 1, q + 2     | `is_similar`         |
//! | differing length  | q - 2                | q - 1            | `is_within_deletion` |
//!
//! A buffer of length q - 1 is never tested by the differing-length walk.
//!
//! The walks overlap: a prefix completion one letter longer than the query is
//! also a q + 1 match. They do not filter repeats themselves;
//! [`Candidates::offer`] drops a word it has already seen.

use crate::fuzzy::{is_similar_chars, is_within_deletion_chars};
use crate::table::LevelTable;

use super::candidates::Candidates;

type Predicate = fn(&[char], &[char]) -> bool;

/// Offer every word that extends `query`.
///
/// The query itself must be a stored word; otherwise nothing is offered and
/// `false` is returned. The query is not offered, only its extensions.
pub fn prefix(root: &LevelTable, query: &[char], out: &mut Candidates) -> bool {
    if !root.contains(query, 0) {
        let word: String = query.iter().collect();
        tracing::debug!(query = %word, "prefix walk skipped: word not found");
        return false;
    }

    if let Some(table) = root.descend(query) {
        let mut path = query.to_vec();
        completions(table, &mut path, out);
    }
    true
}

fn completions(table: &LevelTable, path: &mut Vec<char>, out: &mut Candidates) {
    for slot in table.slots() {
        path.push(slot.key());
        if slot.ends_word_of_len(path.len()) {
            out.offer(path, slot.importance());
        }
        if let Some(next) = slot.next() {
            completions(next, path, out);
        }
        path.pop();
    }
}

/// Offer stored words of the query's length that pass `is_similar`.
pub fn same_length(root: &LevelTable, query: &[char], out: &mut Candidates) {
    if query.is_empty() {
        return;
    }
    let mut path = Vec::with_capacity(query.len());
    same_length_walk(root, query, &mut path, out);
}

fn same_length_walk(
    table: &LevelTable,
    query: &[char],
    path: &mut Vec<char>,
    out: &mut Candidates,
) {
    if path.len() + 1 == query.len() {
        offer_matches(table, query, path, is_similar_chars, out);
        return;
    }

    for slot in table.slots() {
        if let Some(next) = slot.next() {
            path.push(slot.key());
            same_length_walk(next, query, path, out);
            path.pop();
        }
    }
}

/// Offer stored words one or two longer than the query (via `is_similar`)
/// and one shorter (via `is_within_deletion`).
pub fn differing_length(root: &LevelTable, query: &[char], out: &mut Candidates) {
    if query.is_empty() {
        return;
    }
    let mut path = Vec::with_capacity(query.len() + 2);
    differing_length_walk(root, query, &mut path, out);
}

fn differing_length_walk(
    table: &LevelTable,
    query: &[char],
    path: &mut Vec<char>,
    out: &mut Candidates,
) {
    let buffer = path.len();
    let predicate: Option<Predicate> = if buffer == query.len() || buffer == query.len() + 1 {
        Some(is_similar_chars)
    } else if buffer + 2 == query.len() {
        Some(is_within_deletion_chars)
    } else {
        None
    };

    if let Some(predicate) = predicate {
        offer_matches(table, query, path, predicate, out);
    }

    // No buffer longer than q + 1 is tested.
    if buffer > query.len() {
        return;
    }

    for slot in table.slots() {
        if let Some(next) = slot.next() {
            path.push(slot.key());
            differing_length_walk(next, query, path, out);
            path.pop();
        }
    }
}

/// Offer `path + key` for every word-ending slot of `table` that `predicate`
/// accepts against `query`.
fn offer_matches(
    table: &LevelTable,
    query: &[char],
    path: &mut Vec<char>,
    predicate: Predicate,
    out: &mut Candidates,
) {
    for slot in table.slots() {
        path.push(slot.key());
        if slot.ends_word_of_len(path.len()) && predicate(path, query) {
            out.offer(path, slot.importance());
        }
        path.pop();
    }
}
