//! Common traits for double-ended priority queues
//!
//! [`DoubleEndedHeap`] captures the container contract shared by every
//! double-ended queue in this crate: push, inspect and remove at either end.
//! Tests and benchmarks are written against the trait so they exercise the
//! contract rather than a particular layout.
//!
//! # Contract
//!
//! | Operation    | Precondition | Postcondition                          |
//! |--------------|--------------|----------------------------------------|
//! | `push(v)`    | none         | `len` grows by one                     |
//! | `peek_min()` | non-empty    | current minimum, no mutation           |
//! | `peek_max()` | non-empty    | current maximum, no mutation           |
//! | `pop_min()`  | non-empty    | removes and returns the minimum        |
//! | `pop_max()`  | non-empty    | removes and returns the maximum        |
//!
//! Calling a peek or pop on an empty queue is a bug in the caller, not a
//! runtime condition, so implementations panic instead of returning `Option`.
//! Search loops must terminate on [`is_empty`](DoubleEndedHeap::is_empty).

/// Base trait for double-ended priority queues
///
/// # Example
///
/// ```rust
/// use rust_minmax_heap::DoubleEndedHeap;
/// use rust_minmax_heap::minmax::MinMaxHeap;
///
/// let mut heap = MinMaxHeap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.peek_min(), &1);
/// assert_eq!(heap.peek_max(), &3);
/// assert_eq!(heap.pop_max(), 3);
/// assert_eq!(heap.pop_min(), 1);
/// assert_eq!(heap.len(), 1);
/// ```
pub trait DoubleEndedHeap<T: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every element
    fn clear(&mut self);

    /// Reserves capacity for at least `additional` more elements
    fn reserve(&mut self, additional: usize);

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n) amortized (the backing vector may grow).
    fn push(&mut self, value: T);

    /// Returns the minimum element without removing it
    ///
    /// # Panics
    /// Panics if the heap is empty.
    fn peek_min(&self) -> &T;

    /// Returns the maximum element without removing it
    ///
    /// # Panics
    /// Panics if the heap is empty.
    fn peek_max(&self) -> &T;

    /// Removes and returns the minimum element
    ///
    /// # Panics
    /// Panics if the heap is empty.
    fn pop_min(&mut self) -> T;

    /// Removes and returns the maximum element
    ///
    /// # Panics
    /// Panics if the heap is empty.
    fn pop_max(&mut self) -> T;
}
