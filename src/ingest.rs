// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Dictionary and corpus ingestion.
//!
//! Both sources are plain text split on whitespace. Every token goes through
//! [`filter_word`]: lower-cased, trailing non-letters stripped, and dropped if
//! anything other than `a-z` remains. The dictionary decides which words
//! exist; the corpus only raises the importance of words the dictionary
//! already has.
//!
//! Unreadable files are the only error. Bad tokens are counted, not reported.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::trie::{HashedTrie, MAX_WORD_LEN};

/// What happened to the tokens of one source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    /// Whitespace-separated tokens read.
    pub tokens: usize,
    /// Tokens that survived the filter.
    pub accepted: usize,
    /// Tokens dropped by the filter or the length cap.
    pub rejected: usize,
    /// Dictionary: words added. Corpus: importance increments applied.
    pub matched: usize,
    /// Dictionary: repeats of known words. Corpus: words not in the dictionary.
    pub ignored: usize,
}

/// Normalize a raw token, or `None` if it is not a plain lowercase word.
///
/// ```
/// use sherwood::filter_word;
///
/// assert_eq!(filter_word("Dog!!").as_deref(), Some("dog"));
/// assert_eq!(filter_word("123"), None);
/// assert_eq!(filter_word("don't"), None);
/// ```
pub fn filter_word(token: &str) -> Option<String> {
    let lowered = token.to_lowercase();
    let word = lowered.trim_end_matches(|c: char| !c.is_ascii_lowercase());
    if word.is_empty() || !word.chars().all(|c| c.is_ascii_lowercase()) {
        return None;
    }
    Some(word.to_string())
}

/// Filtered words of `reader`, in order, along with the raw token count.
///
/// Lines are decoded lossily; replacement characters never survive the filter.
pub fn tokens<R: BufRead>(reader: R) -> Result<(Vec<String>, IngestReport)> {
    let mut words = Vec::new();
    let mut report = IngestReport::default();

    for line in reader.split(b'\n') {
        let line = line?;
        for token in String::from_utf8_lossy(&line).split_whitespace() {
            report.tokens += 1;
            match filter_word(token).filter(|w| w.len() <= MAX_WORD_LEN) {
                Some(word) => {
                    report.accepted += 1;
                    words.push(word);
                }
                None => {
                    tracing::trace!(token, "rejected token");
                    report.rejected += 1;
                }
            }
        }
    }

    Ok((words, report))
}

/// Insert every accepted token of `reader` into `trie`.
#[tracing::instrument(level = "debug", skip_all)]
pub fn load_dictionary<R: BufRead>(trie: &mut HashedTrie, reader: R) -> Result<IngestReport> {
    let (words, mut report) = tokens(reader)?;
    for word in words {
        if trie.insert(&word)? {
            report.matched += 1;
        } else {
            report.ignored += 1;
        }
    }
    tracing::debug!(?report, words = trie.len(), "dictionary loaded");
    Ok(report)
}

/// Raise the importance of every dictionary word seen in `reader`.
#[tracing::instrument(level = "debug", skip_all)]
pub fn load_corpus<R: BufRead>(trie: &mut HashedTrie, reader: R) -> Result<IngestReport> {
    let (words, mut report) = tokens(reader)?;
    for word in words {
        if trie.increment_importance(&word) {
            report.matched += 1;
        } else {
            report.ignored += 1;
        }
    }
    tracing::debug!(?report, "corpus applied");
    Ok(report)
}

pub fn load_dictionary_file(trie: &mut HashedTrie, path: impl AsRef<Path>) -> Result<IngestReport> {
    let reader = open(path.as_ref())?;
    load_dictionary(trie, reader)
}

pub fn load_corpus_file(trie: &mut HashedTrie, path: impl AsRef<Path>) -> Result<IngestReport> {
    let reader = open(path.as_ref())?;
    load_corpus(trie, reader)
}

fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path).map(BufReader::new).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
