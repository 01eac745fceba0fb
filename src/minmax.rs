//! Min-Max Heap implementation
//!
//! A min-max heap is a complete binary tree stored in a flat vector whose
//! ordering alternates by depth: every node on an even level is no greater than
//! any of its descendants, and every node on an odd level is no smaller. The
//! root is therefore the minimum, and the maximum is one of the root's two
//! children.
//!
//! This makes the heap a double-ended priority queue: both extremes can be
//! inspected in O(1) and removed in O(log n), which is what a bounded search
//! frontier needs when it must expand the cheapest entry and occasionally evict
//! the most expensive one.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity         |
//! |------------|--------------------|
//! | `push`     | O(log n) amortized |
//! | `peek_min` | O(1)               |
//! | `peek_max` | O(1)               |
//! | `pop_min`  | O(log n)           |
//! | `pop_max`  | O(log n)           |
//! | `from`     | O(n)               |
//!
//! # Example
//!
//! ```rust
//! use rust_minmax_heap::minmax::MinMaxHeap;
//!
//! let mut heap = MinMaxHeap::new();
//! for value in [5, 3, 8, 1, 9, 2] {
//!     heap.push(value);
//! }
//!
//! assert_eq!(heap.peek_min(), &1);
//! assert_eq!(heap.peek_max(), &9);
//! assert_eq!(heap.pop_max(), 9);
//! assert_eq!(heap.pop_min(), 1);
//! assert_eq!(heap.into_sorted_vec(), vec![2, 3, 5, 8]);
//! ```

use crate::level::{self, children, first_child, grandchildren, grandparent, parent};
use crate::traits::DoubleEndedHeap;
use std::slice;

/// Which end of the order a level enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Min,
    Max,
}

impl Mode {
    #[inline]
    fn at(i: usize) -> Self {
        if level::is_min_level(i) {
            Mode::Min
        } else {
            Mode::Max
        }
    }

    #[inline]
    fn opposite(self) -> Self {
        match self {
            Mode::Min => Mode::Max,
            Mode::Max => Mode::Min,
        }
    }

    /// True when `a` lies strictly closer to this end of the order than `b`.
    #[inline]
    fn beats<T: Ord>(self, a: &T, b: &T) -> bool {
        match self {
            Mode::Min => a < b,
            Mode::Max => a > b,
        }
    }
}

/// A double-ended priority queue backed by a min-max heap
///
/// Elements are ordered by their [`Ord`] implementation. Equal elements come
/// out in unspecified order.
///
/// Peeking or popping an empty heap panics; check
/// [`is_empty`](MinMaxHeap::is_empty) first.
#[derive(Debug, Clone)]
pub struct MinMaxHeap<T> {
    /// Heap-ordered storage; index `i` has children `2i+1` and `2i+2`
    data: Vec<T>,
}

impl<T> MinMaxHeap<T> {
    /// Creates an empty heap
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates an empty heap with room for at least `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves capacity for at least `additional` more elements
    ///
    /// Only the allocation changes; the stored elements keep their positions.
    pub fn reserve(&mut self, additional: usize) {
        log::trace!(
            "reserving {} slots (len {}, capacity {})",
            additional,
            self.data.len(),
            self.data.capacity()
        );
        self.data.reserve(additional);
    }

    /// Releases spare capacity
    pub fn shrink_to_fit(&mut self) {
        log::trace!(
            "shrinking capacity {} to len {}",
            self.data.capacity(),
            self.data.len()
        );
        self.data.shrink_to_fit();
    }

    /// Removes every element, keeping the allocation
    pub fn clear(&mut self) {
        log::trace!("clearing {} elements", self.data.len());
        self.data.clear();
    }

    /// Returns the backing storage in heap order
    ///
    /// This is the raw layout, useful for diagnostics. It is not sorted.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over the elements in heap order (not sorted)
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the heap and returns the backing storage in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Clone> MinMaxHeap<T> {
    /// Returns a copy of the backing storage in heap order
    pub fn snapshot(&self) -> Vec<T> {
        self.data.clone()
    }
}

impl<T: Ord> MinMaxHeap<T> {
    /// Inserts an element
    pub fn push(&mut self, value: T) {
        self.data.push(value);
        self.bubble_up(self.data.len() - 1);
        self.check();
    }

    /// Returns the minimum element
    ///
    /// # Panics
    /// Panics if the heap is empty.
    #[track_caller]
    pub fn peek_min(&self) -> &T {
        self.assert_non_empty("peek_min");
        &self.data[0]
    }

    /// Returns the maximum element
    ///
    /// # Panics
    /// Panics if the heap is empty.
    #[track_caller]
    pub fn peek_max(&self) -> &T {
        self.assert_non_empty("peek_max");
        &self.data[self.max_index()]
    }

    /// Removes and returns the minimum element
    ///
    /// # Panics
    /// Panics if the heap is empty.
    #[track_caller]
    pub fn pop_min(&mut self) -> T {
        self.assert_non_empty("pop_min");
        self.remove_at(0)
    }

    /// Removes and returns the maximum element
    ///
    /// # Panics
    /// Panics if the heap is empty.
    #[track_caller]
    pub fn pop_max(&mut self) -> T {
        self.assert_non_empty("pop_max");
        let i = self.max_index();
        self.remove_at(i)
    }

    /// Consumes the heap and returns its elements in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while !self.data.is_empty() {
            sorted.push(self.pop_min());
        }
        sorted
    }

    /// Checks the level-alternation invariant over the whole heap
    ///
    /// Comparing every node against its parent and grandparent is enough:
    /// the remaining ancestor relations follow by transitivity. Logs the first
    /// violation found at `warn` level.
    pub fn is_valid(&self) -> bool {
        for i in 1..self.data.len() {
            let p = parent(i);
            if Mode::at(p).beats(&self.data[i], &self.data[p]) {
                log::warn!(
                    "min-max invariant violated between parent {} and child {}",
                    p,
                    i
                );
                return false;
            }
            if i > 2 {
                let gp = grandparent(i);
                if Mode::at(gp).beats(&self.data[i], &self.data[gp]) {
                    log::warn!(
                        "min-max invariant violated between grandparent {} and grandchild {}",
                        gp,
                        i
                    );
                    return false;
                }
            }
        }
        true
    }

    /// Index of the maximum: the root alone, the lone max-level node, or the
    /// larger of the two max-level nodes under the root.
    fn max_index(&self) -> usize {
        match self.data.len() {
            0 | 1 => 0,
            2 => 1,
            _ => {
                if self.data[1] > self.data[2] {
                    1
                } else {
                    2
                }
            }
        }
    }

    /// Moves the tail into slot `i`, shrinks, and restores order below `i`.
    fn remove_at(&mut self, i: usize) -> T {
        let removed = self.data.swap_remove(i);
        if i < self.data.len() {
            self.trickle_down(i);
        }
        self.check();
        removed
    }

    fn bubble_up(&mut self, i: usize) {
        let mode = Mode::at(i);
        if i > 0 {
            let p = parent(i);
            // The value belongs on the parent's side of the order: hop once
            // and keep climbing in the parent's mode.
            if mode.opposite().beats(&self.data[i], &self.data[p]) {
                self.data.swap(i, p);
                self.bubble_up_in(p, mode.opposite());
                return;
            }
        }
        self.bubble_up_in(i, mode);
    }

    fn bubble_up_in(&mut self, mut i: usize, mode: Mode) {
        while i > 2 {
            let gp = grandparent(i);
            if !mode.beats(&self.data[i], &self.data[gp]) {
                break;
            }
            self.data.swap(i, gp);
            i = gp;
        }
    }

    fn trickle_down(&mut self, mut i: usize) {
        let mode = Mode::at(i);
        let len = self.data.len();

        while first_child(i) < len {
            // Most extreme value among the children and grandchildren of i
            let mut m = first_child(i);
            let mut is_grandchild = false;
            for c in children(i, len).skip(1) {
                if mode.beats(&self.data[c], &self.data[m]) {
                    m = c;
                }
            }
            for g in grandchildren(i, len) {
                if mode.beats(&self.data[g], &self.data[m]) {
                    m = g;
                    is_grandchild = true;
                }
            }

            if !mode.beats(&self.data[m], &self.data[i]) {
                break;
            }
            self.data.swap(i, m);
            if !is_grandchild {
                // Swapping with a child settles the subtree
                break;
            }

            // The value pulled down from i may now be on the wrong side of
            // its new parent, which sits on the opposite level mode.
            let p = parent(m);
            if mode.opposite().beats(&self.data[m], &self.data[p]) {
                self.data.swap(m, p);
            }
            i = m;
        }
    }

    /// Restores the invariant over arbitrary storage, bottom-up.
    fn rebuild(&mut self) {
        let len = self.data.len();
        log::debug!("heapifying {} elements", len);
        for i in (0..len / 2).rev() {
            self.trickle_down(i);
        }
        self.check();
    }

    #[track_caller]
    fn assert_non_empty(&self, operation: &str) {
        assert!(
            !self.data.is_empty(),
            "{operation} called on an empty MinMaxHeap"
        );
    }

    #[inline]
    fn check(&self) {
        #[cfg(feature = "validate")]
        debug_assert!(self.is_valid(), "min-max invariant broken");
    }
}

impl<T> Default for MinMaxHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> DoubleEndedHeap<T> for MinMaxHeap<T> {
    fn new() -> Self {
        MinMaxHeap::new()
    }

    fn len(&self) -> usize {
        MinMaxHeap::len(self)
    }

    fn is_empty(&self) -> bool {
        MinMaxHeap::is_empty(self)
    }

    fn clear(&mut self) {
        MinMaxHeap::clear(self)
    }

    fn reserve(&mut self, additional: usize) {
        MinMaxHeap::reserve(self, additional)
    }

    fn push(&mut self, value: T) {
        MinMaxHeap::push(self, value)
    }

    #[track_caller]
    fn peek_min(&self) -> &T {
        MinMaxHeap::peek_min(self)
    }

    #[track_caller]
    fn peek_max(&self) -> &T {
        MinMaxHeap::peek_max(self)
    }

    #[track_caller]
    fn pop_min(&mut self) -> T {
        MinMaxHeap::pop_min(self)
    }

    #[track_caller]
    fn pop_max(&mut self) -> T {
        MinMaxHeap::pop_max(self)
    }
}

impl<T: Ord> From<Vec<T>> for MinMaxHeap<T> {
    /// Builds a heap from arbitrary storage in O(n)
    fn from(data: Vec<T>) -> Self {
        let mut heap = Self { data };
        heap.rebuild();
        heap
    }
}

impl<T: Ord> FromIterator<T> for MinMaxHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: Ord> Extend<T> for MinMaxHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a MinMaxHeap<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T> IntoIterator for MinMaxHeap<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    /// Yields the elements in heap order (not sorted)
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
