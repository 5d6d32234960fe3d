// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: full structural checks and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Structural checks** ([`verify_trie`], [`verify_table`]) walk a trie
//!    and report the first broken invariant as an [`InvariantError`]. Tests
//!    and `sherwood stats` call these.
//!
//! 2. **Runtime contracts** that panic in debug builds when a single table or
//!    heap is left in a bad state. Zero-cost in release, but catch bugs the
//!    moment the mutation that caused them returns.
//!
//! The checks cover the whole tree. The contracts only look at the node that
//! was just touched.

pub mod contracts;
mod types;

pub use types::*;
