// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Two-cursor similarity predicates.
//!
//! `is_similar` tolerates substitutions and small insertions: a candidate
//! character that never appears in the query costs one difference, while a
//! character that appears later in the query is treated as an alignment and
//! skips ahead in the query for free.
//!
//! `is_within_deletion` charges every mismatch and skips ahead in the query,
//! which suits candidates slightly shorter than what was typed.

/// Most differences either predicate accepts.
pub const MAX_DIFFERENCES: usize = 2;

/// Is `candidate` a near miss of `query`?
///
/// ```
/// use sherwood::is_similar;
///
/// assert!(is_similar("cat", "cats"));
/// assert!(is_similar("cast", "cats"));
/// assert!(!is_similar("dog", "cat"));
/// ```
pub fn is_similar(candidate: &str, query: &str) -> bool {
    let candidate: Vec<char> = candidate.chars().collect();
    let query: Vec<char> = query.chars().collect();
    is_similar_chars(&candidate, &query)
}

/// Does `candidate` line up with `query` once a few query characters are skipped?
///
/// When the query is exactly one character shorter than the candidate the
/// match has to be exact, which leftover characters always rule out.
///
/// ```
/// use sherwood::is_within_deletion;
///
/// assert!(is_within_deletion("ct", "cat"));
/// assert!(!is_within_deletion("xy", "cat"));
/// ```
pub fn is_within_deletion(candidate: &str, query: &str) -> bool {
    let candidate: Vec<char> = candidate.chars().collect();
    let query: Vec<char> = query.chars().collect();
    is_within_deletion_chars(&candidate, &query)
}

pub(crate) fn is_similar_chars(candidate: &[char], query: &[char]) -> bool {
    let mut matched: Vec<char> = Vec::with_capacity(candidate.len());
    let mut diff = 0;
    let (mut c, mut q) = (0, 0);

    while c < candidate.len() && q < query.len() {
        let ch = candidate[c];
        if ch == query[q] {
            matched.push(ch);
            c += 1;
            q += 1;
        } else if !query.contains(&ch) && !matched.contains(&ch) {
            diff += 1;
            if diff > MAX_DIFFERENCES {
                return false;
            }
            c += 1;
        } else {
            q += 1;
        }
    }

    diff += (candidate.len() - c) + (query.len() - q);
    diff <= MAX_DIFFERENCES
}

pub(crate) fn is_within_deletion_chars(candidate: &[char], query: &[char]) -> bool {
    let mut diff = 0;
    let (mut c, mut q) = (0, 0);

    while c < candidate.len() && q < query.len() {
        if candidate[c] == query[q] {
            c += 1;
        } else {
            diff += 1;
            if diff > MAX_DIFFERENCES {
                return false;
            }
        }
        q += 1;
    }

    diff += (candidate.len() - c) + (query.len() - q);
    if query.len() + 1 == candidate.len() {
        diff == 0
    } else {
        diff <= MAX_DIFFERENCES
    }
}
