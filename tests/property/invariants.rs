//! Structural invariants under random insertion sequences.

use proptest::prelude::*;
use sherwood::{verify_trie, HashedTrie, LevelTable};

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,10}").unwrap()
}

fn words_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 0..120)
}

/// Every table in the trie, root first.
fn all_tables(trie: &HashedTrie) -> Vec<&LevelTable> {
    let mut tables = vec![trie.root()];
    let mut i = 0;
    while i < tables.len() {
        let table = tables[i];
        tables.extend(table.slots().filter_map(|slot| slot.next()));
        i += 1;
    }
    tables
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Every inserted word is found, and stays found as more words arrive.
    #[test]
    fn prop_insert_search_round_trip(first in words_strategy(), second in words_strategy()) {
        let mut trie = HashedTrie::new();
        for word in &first {
            trie.insert(word).unwrap();
            prop_assert!(trie.contains(word), "{} missing right after insert", word);
        }
        for word in &second {
            trie.insert(word).unwrap();
        }
        for word in &first {
            prop_assert!(trie.contains(word), "{} lost after later inserts", word);
        }
    }

    /// No table reaches the 0.90 load threshold.
    #[test]
    fn prop_load_factor_below_threshold(words in words_strategy()) {
        let mut trie = HashedTrie::new();
        for word in &words {
            trie.insert(word).unwrap();
        }
        for table in all_tables(&trie) {
            prop_assert!(
                table.len() * 10 < table.capacity() * 9,
                "table holds {} of {}",
                table.len(),
                table.capacity()
            );
        }
    }

    /// Placement, probe bound, Robin Hood order and word ends all hold.
    #[test]
    fn prop_structure_verifies(words in words_strategy()) {
        let mut trie = HashedTrie::new();
        for word in &words {
            trie.insert(word).unwrap();
        }
        prop_assert_eq!(verify_trie(&trie), Ok(()));
    }

    /// Importances survive any number of rehashes caused by later inserts.
    #[test]
    fn prop_rehash_preserves_importance(
        ranked in prop::collection::btree_map(word_strategy(), 1u32..6, 1..20),
        later in words_strategy(),
    ) {
        let mut trie = HashedTrie::new();
        for (word, &importance) in &ranked {
            trie.insert(word).unwrap();
            for _ in 0..importance {
                trie.increment_importance(word);
            }
        }
        for word in &later {
            trie.insert(word).unwrap();
        }
        for (word, &importance) in &ranked {
            prop_assert_eq!(trie.importance(word), Some(importance), "{}", word);
        }
    }

    /// Stats agree with a direct count of the tables.
    #[test]
    fn prop_stats_match_tables(words in words_strategy()) {
        let mut trie = HashedTrie::new();
        for word in &words {
            trie.insert(word).unwrap();
        }
        let tables = all_tables(&trie);
        let stats = trie.stats();
        prop_assert_eq!(stats.tables, tables.len());
        prop_assert_eq!(stats.slots, tables.iter().map(|t| t.len()).sum::<usize>());
        prop_assert_eq!(stats.words, trie.len());
    }
}
