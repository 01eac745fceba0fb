//! Edge case tests
//!
//! These target the places where a min-max heap is most likely to go wrong:
//! - Empty heap contract violations
//! - One and two element heaps, where the maximum is found without comparing
//!   the root's children
//! - Partially filled grandchild rows at the bottom of the tree
//! - Runs of equal elements

use rust_minmax_heap::minmax::MinMaxHeap;
use rust_minmax_heap::DoubleEndedHeap;

// ============================================================================
// Empty Heap
// ============================================================================

fn peek_min_on_empty<H: DoubleEndedHeap<i32>>() {
    let heap = H::new();
    let _ = heap.peek_min();
}

fn pop_max_on_empty<H: DoubleEndedHeap<i32>>() {
    let mut heap = H::new();
    heap.push(1);
    heap.pop_max();
    heap.pop_max();
}

#[test]
#[should_panic(expected = "called on an empty MinMaxHeap")]
fn test_peek_min_on_empty_through_trait() {
    peek_min_on_empty::<MinMaxHeap<i32>>();
}

#[test]
#[should_panic(expected = "called on an empty MinMaxHeap")]
fn test_pop_max_after_drain_through_trait() {
    pop_max_on_empty::<MinMaxHeap<i32>>();
}

#[test]
#[should_panic(expected = "called on an empty MinMaxHeap")]
fn test_peek_after_clear() {
    let mut heap = MinMaxHeap::new();
    heap.push(3);
    heap.clear();
    heap.peek_max();
}

#[test]
fn test_empty_heap_queries() {
    let heap: MinMaxHeap<i32> = MinMaxHeap::new();
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert!(heap.is_valid());
    assert!(heap.as_slice().is_empty());
    assert!(heap.into_sorted_vec().is_empty());
}

// ============================================================================
// One and Two Element Heaps
// ============================================================================

#[test]
fn test_one_element_both_ends_agree() {
    for value in [-5, 0, 5] {
        let mut heap = MinMaxHeap::new();
        heap.push(value);
        assert_eq!(heap.peek_min(), heap.peek_max());

        let mut by_max = heap.clone();
        assert_eq!(by_max.pop_max(), value);
        assert!(by_max.is_empty());

        assert_eq!(heap.pop_min(), value);
        assert!(heap.is_empty());
    }
}

#[test]
fn test_two_elements_every_order() {
    for (a, b) in [(1, 2), (2, 1), (4, 4)] {
        let mut heap = MinMaxHeap::new();
        heap.push(a);
        heap.push(b);
        assert!(heap.is_valid());
        assert_eq!(*heap.peek_min(), a.min(b));
        assert_eq!(*heap.peek_max(), a.max(b));

        let mut by_max = heap.clone();
        assert_eq!(by_max.pop_max(), a.max(b));
        assert_eq!(by_max.pop_max(), a.min(b));

        assert_eq!(heap.pop_min(), a.min(b));
        assert_eq!(heap.pop_min(), a.max(b));
    }
}

#[test]
fn test_special_paths_match_general_path() {
    // Growing from 1 to 3 elements moves peek_max off the special cases;
    // the answer must stay the true maximum throughout.
    let mut heap = MinMaxHeap::new();
    let mut held = Vec::new();
    for value in [7, 3, 9, 1, 8] {
        heap.push(value);
        held.push(value);
        assert_eq!(heap.peek_max(), held.iter().max().unwrap());
        assert_eq!(heap.peek_min(), held.iter().min().unwrap());
    }

    // And shrinking back through 2 and 1 via pop_max
    let mut expected = held.clone();
    expected.sort_unstable();
    while let Some(top) = expected.pop() {
        assert_eq!(heap.pop_max(), top);
        assert!(heap.is_valid());
    }
}

#[test]
fn test_three_elements_tied_max_candidates() {
    let mut heap = MinMaxHeap::from(vec![5, 5, 1]);
    assert_eq!(heap.peek_max(), &5);
    assert_eq!(heap.pop_max(), 5);
    assert_eq!(heap.pop_max(), 5);
    assert_eq!(heap.pop_max(), 1);
}

// ============================================================================
// Bottom Row Boundaries
// ============================================================================

#[test]
fn test_pop_from_every_size_hits_each_grandchild_bound() {
    // Sizes 3..=70 cover a root with 0..=4 grandchildren and max-level nodes
    // whose grandchild rows are empty, partial, and full.
    for size in 3..=70 {
        for seed in 0..4u64 {
            let values: Vec<i64> = (0..size as i64)
                .map(|i| (i * 37 + seed as i64 * 11) % 53)
                .collect();
            let mut sorted = values.clone();
            sorted.sort_unstable();

            let mut heap = MinMaxHeap::new();
            for &v in &values {
                heap.push(v);
            }

            let mut by_max = heap.clone();
            assert_eq!(by_max.pop_max(), *sorted.last().unwrap());
            assert!(by_max.is_valid(), "pop_max broke size {size} seed {seed}");

            assert_eq!(heap.pop_min(), sorted[0]);
            assert!(heap.is_valid(), "pop_min broke size {size} seed {seed}");
        }
    }
}

#[test]
fn test_last_grandchild_is_extreme() {
    // The minimum sits at index 6, the fourth and last grandchild of the root.
    let mut heap = MinMaxHeap::from(vec![0, 90, 80, 10, 20, 30, 5]);
    assert!(heap.is_valid());
    assert_eq!(heap.pop_min(), 0);
    assert_eq!(heap.pop_min(), 5);
    assert_eq!(heap.pop_min(), 10);
    assert!(heap.is_valid());
}

#[test]
fn test_trickle_fixes_grandchild_parent_pair() {
    // Popping the maximum pulls the tail value (1) into a max-level slot,
    // exercising the swap between a grandchild and its min-level parent.
    let mut heap = MinMaxHeap::from((0..31).collect::<Vec<i32>>());
    for expected in (0..31).rev() {
        assert_eq!(heap.pop_max(), expected);
        assert!(heap.is_valid());
    }
}

// ============================================================================
// Repeated Values
// ============================================================================

#[test]
fn test_all_equal_elements() {
    let mut heap = MinMaxHeap::new();
    for _ in 0..100 {
        heap.push(7u8);
    }
    assert!(heap.is_valid());
    for remaining in (0..100).rev() {
        assert_eq!(heap.pop_max(), 7);
        assert_eq!(heap.len(), remaining);
    }
}

#[test]
fn test_repeated_push_pop_same_value() {
    let mut heap = MinMaxHeap::from(vec![1, 2, 3]);
    for _ in 0..50 {
        heap.push(2);
        assert_eq!(heap.pop_min(), 1);
        heap.push(1);
        assert_eq!(heap.pop_max(), 3);
        heap.push(3);
    }
    assert_eq!(heap.len(), 53);
    assert!(heap.is_valid());
}
