//! Level table placement, growth and lookup through the public API.

use sherwood::table::INITIAL_CAPACITY;
use sherwood::{verify_trie, HashedTrie, LevelTable};

fn chars(word: &str) -> Vec<char> {
    word.chars().collect()
}

/// `(index, key, probe_length)` for every occupied position.
fn layout(table: &LevelTable) -> Vec<(usize, char, usize)> {
    table
        .positions()
        .map(|(index, slot)| (index, slot.key(), slot.probe_length()))
        .collect()
}

// ============================================================================
// PLACEMENT
// ============================================================================

#[test]
fn test_fresh_table_has_initial_capacity() {
    let table = LevelTable::new();
    assert_eq!(table.capacity(), INITIAL_CAPACITY);
    assert!(table.is_empty());
    assert_eq!(table.max_probe_length(), 0);
}

#[test]
fn test_keys_land_on_ideal_index_without_collisions() {
    let mut table = LevelTable::new();
    for key in ['c', 'a', 'd'] {
        table.insert(&[key], 0);
    }
    assert_eq!(layout(&table), vec![(0, 'a', 0), (2, 'c', 0), (3, 'd', 0)]);
}

#[test]
fn test_equal_probe_lengths_keep_the_resident() {
    // 'a' and 'f' share ideal index 0; 'f' walks to 1 with probe 1.
    // 'k' also starts at 0: ties at 0 and 1 leave 'a' and 'f' alone.
    let mut table = LevelTable::new();
    for key in ['a', 'f', 'k'] {
        table.insert(&[key], 0);
    }
    assert_eq!(layout(&table), vec![(0, 'a', 0), (1, 'f', 1), (2, 'k', 2)]);
    assert_eq!(table.max_probe_length(), 2);
}

#[test]
fn test_poorer_walker_evicts_richer_resident() {
    // 'c' sits at its ideal index 2 with probe 0. 'k' arrives at 2 with
    // probe 2, takes the position, and 'c' moves on to 3 with probe 1.
    let mut table = LevelTable::new();
    for key in ['a', 'f', 'c', 'k'] {
        table.insert(&[key], 0);
    }
    assert_eq!(
        layout(&table),
        vec![(0, 'a', 0), (1, 'f', 1), (2, 'k', 2), (3, 'c', 1)]
    );
}

#[test]
fn test_evicted_slot_keeps_its_words() {
    let mut trie = HashedTrie::new();
    for word in ["a", "f", "cat", "cow"] {
        trie.insert(word).unwrap();
    }
    // "k..." evicts the 'c' slot at the root
    trie.insert("kit").unwrap();
    for word in ["a", "f", "cat", "cow", "kit"] {
        assert!(trie.contains(word), "lost {}", word);
    }
    verify_trie(&trie).unwrap();
}

// ============================================================================
// GROWTH
// ============================================================================

#[test]
fn test_growth_follows_schedule() {
    let mut table = LevelTable::new();
    let mut capacities = vec![table.capacity()];
    for key in 'a'..='z' {
        table.insert(&[key], 0);
        if capacities.last() != Some(&table.capacity()) {
            capacities.push(table.capacity());
        }
    }
    assert_eq!(capacities, vec![5, 11, 19, 29]);
    assert_eq!(table.len(), 26);
}

#[test]
fn test_load_stays_below_threshold_after_every_insert() {
    let mut table = LevelTable::new();
    for key in 'a'..='z' {
        table.insert(&[key], 0);
        assert!(
            table.load_factor() < 0.9,
            "load {} after inserting '{}'",
            table.load_factor(),
            key
        );
    }
}

#[test]
fn test_rehash_preserves_importance() {
    let mut trie = HashedTrie::new();
    trie.insert("apple").unwrap();
    for _ in 0..7 {
        trie.increment_importance("apple");
    }
    // force several rehashes at the root
    for key in 'b'..='z' {
        trie.insert(&key.to_string()).unwrap();
    }
    assert_eq!(trie.root().capacity(), 29);
    assert_eq!(trie.importance("apple"), Some(7));
}

// ============================================================================
// LOOKUP
// ============================================================================

#[test]
fn test_word_end_guards_shared_paths() {
    let mut table = LevelTable::new();
    table.insert(&chars("card"), 0);
    assert!(table.contains(&chars("card"), 0));
    assert!(!table.contains(&chars("car"), 0));
    assert!(!table.contains(&chars("cards"), 0));

    table.insert(&chars("car"), 0);
    assert!(table.contains(&chars("car"), 0));
}

#[test]
fn test_descend_follows_prefix() {
    let mut table = LevelTable::new();
    table.insert(&chars("cart"), 0);
    table.insert(&chars("care"), 0);

    let after_car = table.descend(&chars("car")).unwrap();
    let mut keys: Vec<char> = after_car.slots().map(|s| s.key()).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!['e', 't']);

    assert!(table.descend(&chars("cat")).is_none());
    assert!(table.descend(&chars("cart")).is_none(), "leaf has no next table");
}

#[test]
fn test_slot_at_matches_positions() {
    let mut table = LevelTable::new();
    table.insert(&['b'], 0);
    assert_eq!(table.slot_at(1).map(|s| s.key()), Some('b'));
    assert!(table.slot_at(0).is_none());
    assert!(table.slot_at(99).is_none());
}
