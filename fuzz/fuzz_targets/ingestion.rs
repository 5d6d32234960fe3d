// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for dictionary and corpus ingestion.
//!
//! Arbitrary bytes (invalid UTF-8, odd whitespace, huge tokens) go through
//! the loaders. Nothing may panic, and every stored word must pass the filter.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sherwood::{filter_word, load_corpus, load_dictionary, verify_trie, HashedTrie};

#[derive(Debug, Arbitrary)]
struct IngestInput {
    dictionary: Vec<u8>,
    corpus: Vec<u8>,
}

fuzz_target!(|input: IngestInput| {
    let mut trie = HashedTrie::new();

    let dict = match load_dictionary(&mut trie, input.dictionary.as_slice()) {
        Ok(report) => report,
        Err(_) => return,
    };
    assert_eq!(dict.tokens, dict.accepted + dict.rejected);
    assert_eq!(dict.accepted, dict.matched + dict.ignored);

    if let Ok(corpus) = load_corpus(&mut trie, input.corpus.as_slice()) {
        assert_eq!(corpus.accepted, corpus.matched + corpus.ignored);
    }

    for (word, _) in trie.words() {
        assert_eq!(filter_word(&word).as_deref(), Some(word.as_str()));
    }
    assert!(verify_trie(&trie).is_ok());
});
