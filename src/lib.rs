// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word suggestions over a trie of Robin Hood hash tables.
//!
//! Each trie node is a small open-addressed table keyed by character. A
//! dictionary decides which words exist, a corpus gives them importance, and
//! a query returns the k most important words that either extend it or sit
//! within a couple of edits of it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  ingest.rs  │────▶│   trie.rs    │────▶│  suggest/    │
//! │ (filter,    │     │ (HashedTrie, │     │ (prefix,     │
//! │  loaders)   │     │  stats)      │     │  fuzzy walks)│
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                            │                │        │
//!                            ▼                ▼        ▼
//!                     ┌──────────────┐  ┌─────────┐ ┌─────────┐
//!                     │   table/     │  │ fuzzy/  │ │ heap.rs │
//!                     │ (LevelTable, │  │ (two-   │ │ (top-k) │
//!                     │  Robin Hood) │  │ cursor) │ │         │
//!                     └──────────────┘  └─────────┘ └─────────┘
//!                            │
//!                            ▼
//!                     ┌──────────────────────────────────────┐
//!                     │              verify/                 │
//!                     │ (structural checks, debug contracts) │
//!                     └──────────────────────────────────────┘
//! ```
//!
//! `reference.rs` holds a plain 26-way array trie used as a test oracle and
//! as the baseline in memory comparisons.
//!
//! # Usage
//!
//! ```
//! use std::io::Cursor;
//! use sherwood::{load_corpus, load_dictionary, HashedTrie, Suggester};
//!
//! let mut trie = HashedTrie::new();
//! load_dictionary(&mut trie, Cursor::new("cat car cap dog")).unwrap();
//! load_corpus(&mut trie, Cursor::new("the cat sat, the cat ran. cat! car")).unwrap();
//!
//! let mut found = Suggester::new(&trie).suggest("cat", 2);
//! found.sort_by(|a, b| b.importance.cmp(&a.importance));
//! assert_eq!(found[0].word, "cat");
//! assert_eq!(found[1].word, "car");
//! ```

// Module declarations
mod error;
pub mod fuzzy;
mod heap;
mod ingest;
pub mod reference;
pub mod suggest;
pub mod table;
mod trie;
pub mod verify;

pub mod testing;

// Re-exports for public API
pub use error::{Error, Result};
pub use fuzzy::{is_similar, is_within_deletion, MAX_DIFFERENCES};
pub use heap::{Suggestion, TopKHeap};
pub use ingest::{
    filter_word, load_corpus, load_corpus_file, load_dictionary, load_dictionary_file, tokens,
    IngestReport,
};
pub use reference::ArrayTrie;
pub use suggest::{suggest, Candidates, Suggester};
pub use table::{LevelTable, Slot};
pub use trie::{HashedTrie, TrieStats, MAX_WORD_LEN};
pub use verify::{verify_trie, InvariantError};
