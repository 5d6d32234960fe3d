//! The worked example and other end-to-end suggestion scenarios.

use sherwood::{load_corpus, load_dictionary, HashedTrie, Suggester, Suggestion};

use crate::common::{sample_trie, sorted_words, trie_with, SAMPLE_CORPUS, SAMPLE_DICTIONARY};

fn from_text(dictionary: &str, corpus: &str) -> HashedTrie {
    let mut trie = HashedTrie::new();
    load_dictionary(&mut trie, dictionary.as_bytes()).unwrap();
    load_corpus(&mut trie, corpus.as_bytes()).unwrap();
    trie
}

// ============================================================================
// WORKED EXAMPLE: {cat, car, cap, dog}, cat = 3, car = 1
// ============================================================================

#[test]
fn test_worked_example_exact_result() {
    let trie = from_text(SAMPLE_DICTIONARY, SAMPLE_CORPUS);
    let found = Suggester::new(&trie).suggest("cat", 2);
    // cap, car, cat arrive in slot order; cat pushes cap out
    assert_eq!(
        found,
        vec![Suggestion::new("car", 1), Suggestion::new("cat", 3)]
    );
}

#[test]
fn test_worked_example_with_room_for_everything() {
    let trie = sample_trie();
    let found = Suggester::new(&trie).suggest("cat", 10);
    assert_eq!(sorted_words(&found), vec!["cap", "car", "cat"]);
}

#[test]
fn test_unknown_query_still_gets_fuzzy_matches() {
    let trie = sample_trie();
    let found = Suggester::new(&trie).suggest("cas", 5);
    assert_eq!(sorted_words(&found), vec!["cap", "car", "cat"]);
}

// ============================================================================
// PREFIX COMPLETION
// ============================================================================

#[test]
fn test_completions_rank_by_corpus() {
    let trie = trie_with(&[
        ("the", 50),
        ("then", 9),
        ("there", 30),
        ("these", 12),
        ("theory", 1),
        ("thermal", 0),
    ]);
    let mut found = Suggester::new(&trie).completions("the", 3).unwrap();
    found.sort_by(|a, b| b.importance.cmp(&a.importance));
    let words: Vec<&str> = found.iter().map(|s| s.word.as_str()).collect();
    assert_eq!(words, vec!["there", "these", "then"]);
}

#[test]
fn test_completion_of_unknown_word_is_none() {
    let trie = trie_with(&[("there", 1)]);
    assert!(Suggester::new(&trie).completions("the", 3).is_none());
}

#[test]
fn test_query_is_lower_cased() {
    let trie = sample_trie();
    let suggester = Suggester::new(&trie);
    assert_eq!(suggester.suggest("CaT", 2), suggester.suggest("cat", 2));
}
