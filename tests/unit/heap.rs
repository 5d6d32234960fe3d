//! Bounded top-k heap behavior.

use sherwood::{Suggestion, TopKHeap};

fn importances(heap: &TopKHeap) -> Vec<u32> {
    let mut values: Vec<u32> = heap.as_slice().iter().map(|s| s.importance).collect();
    values.sort_unstable();
    values
}

#[test]
fn test_keeps_k_largest_from_stream() {
    let mut heap = TopKHeap::new(3);
    for (i, importance) in [5, 1, 9, 3, 7, 2, 8].into_iter().enumerate() {
        heap.insert(format!("w{}", i), importance);
    }
    assert_eq!(importances(&heap), vec![7, 8, 9]);
    assert_eq!(heap.peek_min().map(|s| s.importance), Some(7));
}

#[test]
fn test_equal_importance_never_displaces_root() {
    let mut heap = TopKHeap::new(2);
    assert!(heap.insert("first", 4));
    assert!(heap.insert("second", 4));
    assert!(!heap.insert("third", 4));
    let mut words: Vec<&str> = heap.as_slice().iter().map(|s| s.word.as_str()).collect();
    words.sort_unstable();
    assert_eq!(words, vec!["first", "second"]);
}

#[test]
fn test_storage_order_is_not_sorted() {
    // root holds the minimum; a later child can be larger than its sibling
    let mut heap = TopKHeap::new(3);
    heap.insert("big", 9);
    heap.insert("small", 1);
    heap.insert("mid", 5);
    assert_eq!(
        heap.into_vec(),
        vec![
            Suggestion::new("small", 1),
            Suggestion::new("big", 9),
            Suggestion::new("mid", 5),
        ]
    );
}

#[test]
fn test_extract_min_drains_in_ascending_order() {
    let mut heap = TopKHeap::new(5);
    for (word, importance) in [("d", 4), ("a", 1), ("e", 5), ("c", 3), ("b", 2)] {
        heap.insert(word, importance);
    }
    let mut order = Vec::new();
    while let Some(s) = heap.extract_min() {
        order.push(s.importance);
    }
    assert_eq!(order, vec![1, 2, 3, 4, 5]);
    assert!(heap.is_empty());
}

#[test]
fn test_drain_then_reuse() {
    let mut heap = TopKHeap::new(2);
    heap.insert("a", 1);
    heap.insert("b", 2);
    assert!(heap.is_full());
    assert_eq!(heap.drain().len(), 2);
    assert!(heap.is_empty());
    assert!(heap.insert("c", 0), "drained heap accepts anything again");
}
