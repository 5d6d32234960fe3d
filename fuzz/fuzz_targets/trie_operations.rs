// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for arbitrary sequences of trie operations.
//!
//! Runs the hashed trie and the array trie side by side, then checks the
//! structure and that suggestions stay within bounds.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sherwood::{suggest, verify_trie, ArrayTrie, HashedTrie};

#[derive(Debug, Arbitrary)]
enum Op {
    Insert(Vec<u8>),
    Increment(Vec<u8>),
    Suggest(Vec<u8>, u8),
}

/// Map arbitrary bytes onto a short lowercase word.
fn word(bytes: &[u8]) -> String {
    bytes
        .iter()
        .take(12)
        .map(|b| char::from(b'a' + b % 26))
        .collect()
}

fuzz_target!(|ops: Vec<Op>| {
    let mut hashed = HashedTrie::new();
    let mut array = ArrayTrie::new();

    for op in ops.iter().take(512) {
        match op {
            Op::Insert(bytes) => {
                let w = word(bytes);
                let added = hashed.insert(&w).unwrap_or(false);
                assert_eq!(added, array.insert(&w), "insert {:?}", w);
            }
            Op::Increment(bytes) => {
                let w = word(bytes);
                assert_eq!(
                    hashed.increment_importance(&w),
                    array.increment_importance(&w),
                    "increment {:?}",
                    w
                );
            }
            Op::Suggest(bytes, k) => {
                let w = word(bytes);
                let k = usize::from(*k % 16);
                let found = suggest(&hashed, &w, k);
                assert!(found.len() <= k);
                for s in &found {
                    assert_eq!(hashed.importance(&s.word), Some(s.importance));
                }
            }
        }
    }

    if let Err(e) = verify_trie(&hashed) {
        panic!("invariant broken: {}", e);
    }
    assert_eq!(hashed.len(), array.len());
});
