// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the trie's node tables and the suggestion heap.
//!
//! These contracts:
//!
//! 1. Are **zero-cost in release builds** (everything sits behind
//!    `cfg(debug_assertions)`)
//! 2. Fire on the mutation that broke the structure, not on a later query
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function          | Invariant                                      |
//! |----------------------------|------------------------------------------------|
//! | `check_table_well_formed`  | load below 0.90, Robin Hood placement          |
//! | `check_heap_order`         | every parent at most as important as children  |
//!
//! # Usage
//!
//! ```ignore
//! use sherwood::verify::contracts::*;
//!
//! // In debug builds, this panics if the table is malformed
//! check_table_well_formed(&table);
//!
//! // In release builds, this is a no-op
//! ```

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// The growth schedule must leave every table under the load threshold once
/// it rehashes: a table that just grew from capacity `c` to `c'` holds
/// `ceil(0.9 c)` slots, which has to stay below `0.9 c'`.
const _: () = {
    const SCHEDULE: [usize; 4] = [5, 11, 19, 29];
    let mut i = 0;
    while i + 1 < SCHEDULE.len() {
        let from = SCHEDULE[i];
        let to = SCHEDULE[i + 1];
        // size that triggers the rehash out of `from`
        let trigger = (from * 9).div_ceil(10);
        assert!(trigger * 10 < to * 9);
        i += 1;
    }
    // doubling past the schedule
    let trigger = (29 * 9usize).div_ceil(10);
    assert!(trigger * 10 < 58 * 9);
};

use crate::heap::Suggestion;
use crate::table::LevelTable;

// ============================================================================
// TABLE CONTRACTS
// ============================================================================

/// Check that a table satisfies the load bound and Robin Hood placement.
///
/// Only the table itself is checked. Its subtrees were checked when they
/// were last written to.
#[inline]
pub fn check_table_well_formed(table: &LevelTable) {
    if cfg!(debug_assertions) {
        if let Err(err) = super::verify_node(table, 0) {
            panic!("Contract violation: LevelTable.WellFormed - {}", err);
        }
    }
}

// ============================================================================
// HEAP CONTRACTS
// ============================================================================

/// Check the min-heap order over 1-based positions.
#[inline]
pub fn check_heap_order(entries: &[Suggestion]) {
    for position in 2..=entries.len() {
        let parent = position / 2;
        debug_assert!(
            entries[parent - 1].importance <= entries[position - 1].importance,
            "Contract violation: TopKHeap.Ordered - parent {} ({}) > child {} ({})",
            parent,
            entries[parent - 1].importance,
            position,
            entries[position - 1].importance
        );
    }
}
