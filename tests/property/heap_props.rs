//! Top-k heap properties.

use proptest::prelude::*;
use sherwood::TopKHeap;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// The heap keeps exactly the k largest importances seen.
    #[test]
    fn prop_keeps_top_k_importances(
        importances in prop::collection::vec(0u32..50, 0..60),
        k in 0usize..10,
    ) {
        let mut heap = TopKHeap::new(k);
        for (i, &importance) in importances.iter().enumerate() {
            heap.insert(format!("w{}", i), importance);
        }

        let mut kept: Vec<u32> = heap.as_slice().iter().map(|s| s.importance).collect();
        kept.sort_unstable_by(|a, b| b.cmp(a));

        let mut expected = importances.clone();
        expected.sort_unstable_by(|a, b| b.cmp(a));
        expected.truncate(k);

        prop_assert_eq!(kept, expected);
    }

    /// With distinct importances the kept words are determined exactly.
    #[test]
    fn prop_distinct_importances_fix_the_words(
        importances in prop::collection::btree_set(0u32..1000, 0..40),
        k in 1usize..10,
    ) {
        let mut heap = TopKHeap::new(k);
        for &importance in importances.iter().rev() {
            heap.insert(format!("w{}", importance), importance);
        }
        // also feed them in ascending order into a second heap
        let mut ascending = TopKHeap::new(k);
        for &importance in &importances {
            ascending.insert(format!("w{}", importance), importance);
        }

        let mut a: Vec<String> = heap.drain().into_iter().map(|s| s.word).collect();
        let mut b: Vec<String> = ascending.drain().into_iter().map(|s| s.word).collect();
        a.sort();
        b.sort();
        prop_assert_eq!(a, b);
    }

    /// The root is always the minimum of what is kept.
    #[test]
    fn prop_root_is_minimum(importances in prop::collection::vec(0u32..50, 1..40), k in 1usize..8) {
        let mut heap = TopKHeap::new(k);
        for (i, &importance) in importances.iter().enumerate() {
            heap.insert(format!("w{}", i), importance);
            let min = heap.as_slice().iter().map(|s| s.importance).min();
            prop_assert_eq!(heap.peek_min().map(|s| s.importance), min);
        }
    }
}
