// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the similarity predicates.
//!
//! Both predicates index two cursors into two strings. Arbitrary Unicode on
//! either side must never panic, and a few algebraic facts must hold.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sherwood::{is_similar, is_within_deletion, MAX_DIFFERENCES};

#[derive(Debug, Arbitrary)]
struct PairInput {
    candidate: String,
    query: String,
}

fuzz_target!(|input: PairInput| {
    let candidate: String = input.candidate.chars().take(64).collect();
    let query: String = input.query.chars().take(64).collect();

    let similar = is_similar(&candidate, &query);
    let _ = is_within_deletion(&candidate, &query);

    // A word is always similar to itself
    assert!(is_similar(&candidate, &candidate));
    assert!(is_within_deletion(&query, &query));

    // Every candidate character beyond the query's length is a difference.
    // The reverse does not hold: query characters can be skipped for free.
    let candidate_len = candidate.chars().count();
    let query_len = query.chars().count();
    if candidate_len > query_len + MAX_DIFFERENCES {
        assert!(!similar, "{:?} accepted against shorter {:?}", candidate, query);
    }
});
