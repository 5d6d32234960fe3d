//! The three candidate walks, one at a time.

use sherwood::suggest::traversal::{differing_length, prefix, same_length};
use sherwood::{Candidates, LevelTable};

use crate::common::{sorted_words, trie_from_words};

fn chars(word: &str) -> Vec<char> {
    word.chars().collect()
}

type Walk = fn(&LevelTable, &[char], &mut Candidates);

fn walk(words: &[&str], query: &str, run: Walk) -> Vec<String> {
    let trie = trie_from_words(words);
    let mut out = Candidates::new(32);
    run(trie.root(), &chars(query), &mut out);
    sorted_words(&out.into_suggestions())
}

fn prefix_walk(table: &LevelTable, query: &[char], out: &mut Candidates) {
    prefix(table, query, out);
}

#[test]
fn test_prefix_walk_lists_every_extension() {
    let words = ["be", "bee", "beef", "been", "beer", "bet", "bed"];
    assert_eq!(
        walk(&words, "bee", prefix_walk),
        vec!["beef", "been", "beer"]
    );
}

#[test]
fn test_prefix_walk_needs_the_query_stored() {
    let words = ["beef", "been"];
    assert!(walk(&words, "bee", prefix_walk).is_empty());
}

#[test]
fn test_same_length_walk_only_offers_that_length() {
    let words = ["bed", "bet", "bee", "be", "beds", "bad", "zzz"];
    assert_eq!(
        walk(&words, "bed", same_length),
        vec!["bad", "bed", "bee", "bet"]
    );
}

#[test]
fn test_differing_length_candidate_lengths() {
    // Candidates one shorter than the query come only from the deletion
    // check; two shorter never appear, and neither do three longer.
    let words = ["s", "st", "sta", "star", "stars", "starsx", "starsxy"];
    assert_eq!(
        walk(&words, "star", differing_length),
        vec!["sta", "stars", "starsx"]
    );
}

#[test]
fn test_differing_length_applies_deletion_to_shorter_words() {
    // "sar" lines up with "star" after skipping 't'; "xyz" does not
    let words = ["sar", "xyz"];
    assert_eq!(walk(&words, "star", differing_length), vec!["sar"]);
}
