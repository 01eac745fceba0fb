//! Min-Max Heap for Graph Search Frontiers
//!
//! This crate provides a double-ended priority queue implemented as a
//! min-max heap, together with the record types that Dijkstra and A* searches
//! keep on their open list.
//!
//! # Features
//!
//! - **Min-Max Heap**: O(1) access to both minimum and maximum; O(log n) insert,
//!   pop-min and pop-max; O(n) construction from a vector
//! - **Frontier records**: [`AstarRecord`] ordered by f-score then g-score,
//!   [`DijkstraRecord`] ordered by weight then node
//!
//! Peeking or popping an empty heap is a caller bug and panics. Search loops
//! should stop on `is_empty()`.
//!
//! # Cargo features
//!
//! - `validate`: re-check the heap invariant after every mutation (debug builds)
//!
//! # Example
//!
//! ```rust
//! use rust_minmax_heap::minmax::MinMaxHeap;
//! use rust_minmax_heap::DijkstraRecord;
//!
//! let mut frontier = MinMaxHeap::new();
//! frontier.push(DijkstraRecord::new(4.0, 2));
//! frontier.push(DijkstraRecord::new(1.5, 7));
//! frontier.push(DijkstraRecord::new(4.0, 1));
//!
//! assert_eq!(frontier.pop_min().node, 7);
//! assert_eq!(frontier.pop_min().node, 1);
//! assert_eq!(frontier.peek_max().node, 2);
//! ```

mod level;
pub mod minmax;
pub mod records;
pub mod traits;

// Re-export the main types for convenience
pub use minmax::MinMaxHeap;
pub use records::{AstarRecord, DijkstraRecord, NO_PARENT};
pub use traits::DoubleEndedHeap;
