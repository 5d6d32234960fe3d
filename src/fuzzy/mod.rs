// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: bounded near-miss predicates.
//!
//! These are not edit distances. Both walk the candidate and the query with
//! two cursors and count the mismatches a cheap alignment can't explain,
//! accepting at most two. They are deliberately order-sensitive: swapping the
//! arguments can change the answer.

mod similarity;

pub use similarity::*;
