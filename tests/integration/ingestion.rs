//! Loading dictionaries and corpora from files.

use sherwood::{load_corpus_file, load_dictionary_file, Error, HashedTrie};

use crate::common::{assert_trie_well_formed, temp_file, SAMPLE_CORPUS, SAMPLE_DICTIONARY};

#[test]
fn test_dictionary_file_round_trip() {
    let dictionary = temp_file("Apple banana, CHERRY!\n\ndate 42 e-mail\n");
    let mut trie = HashedTrie::new();
    let report = load_dictionary_file(&mut trie, dictionary.path()).unwrap();

    assert_eq!(report.tokens, 6);
    assert_eq!(report.accepted, 4);
    assert_eq!(report.rejected, 2);
    assert_eq!(report.matched, 4);
    for word in ["apple", "banana", "cherry", "date"] {
        assert!(trie.contains(word), "missing {}", word);
    }
    assert!(!trie.contains("e"));
    assert_trie_well_formed(&trie);
}

#[test]
fn test_corpus_only_ranks_known_words() {
    let dictionary = temp_file(SAMPLE_DICTIONARY);
    let corpus = temp_file(SAMPLE_CORPUS);
    let mut trie = HashedTrie::new();
    load_dictionary_file(&mut trie, dictionary.path()).unwrap();
    let report = load_corpus_file(&mut trie, corpus.path()).unwrap();

    // the, cat, sat, a, cat, a, car, cat, bird, bird
    assert_eq!(report.tokens, 10);
    assert_eq!(report.matched, 4);
    assert_eq!(report.ignored, 6);
    assert_eq!(trie.importance("cat"), Some(3));
    assert_eq!(trie.importance("car"), Some(1));
    assert_eq!(trie.importance("dog"), Some(0));
    assert!(!trie.contains("bird"));
}

#[test]
fn test_missing_dictionary_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");
    let mut trie = HashedTrie::new();

    let err = load_dictionary_file(&mut trie, &missing).unwrap_err();
    assert!(matches!(&err, Error::Io { path, .. } if path == &missing));
    assert!(err.to_string().contains("nope.txt"));
}

#[test]
fn test_missing_corpus_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let mut trie = HashedTrie::new();
    assert!(load_corpus_file(&mut trie, dir.path().join("gone.txt")).is_err());
}

#[test]
fn test_large_dictionary_stays_well_formed() {
    // every two-letter word plus a handful of longer ones
    let mut text = String::new();
    for a in 'a'..='z' {
        for b in 'a'..='z' {
            text.push(a);
            text.push(b);
            text.push(' ');
        }
    }
    text.push_str("\nzebra zealot zenith zephyr zero\n");

    let dictionary = temp_file(&text);
    let mut trie = HashedTrie::new();
    let report = load_dictionary_file(&mut trie, dictionary.path()).unwrap();

    assert_eq!(report.matched, 26 * 26 + 5);
    assert_eq!(trie.len(), 26 * 26 + 5);
    assert_eq!(trie.root().capacity(), 29);
    assert_trie_well_formed(&trie);
}
