//! Index arithmetic for the implicit min-max tree
//!
//! The heap is stored as a flat slice where index `i` has children `2i+1` and
//! `2i+2`. Depth in the tree decides which ordering a node enforces: nodes on
//! even levels are no greater than anything below them, nodes on odd levels
//! are no smaller.
//!
//! ```text
//! level 0 (min)              0
//! level 1 (max)        1           2
//! level 2 (min)     3     4     5     6
//! level 3 (max)    7 8   9 10 11 12 13 14
//! ```
//!
//! All helpers work on `usize` and never round through floating point.

use std::ops::Range;

/// Depth of index `i`: `floor(log2(i + 1))`.
#[inline]
pub(crate) fn level(i: usize) -> u32 {
    (i + 1).ilog2()
}

/// True when `i` sits on a min level (even depth).
#[inline]
pub(crate) fn is_min_level(i: usize) -> bool {
    level(i) % 2 == 0
}

/// Parent index. `i` must not be the root.
#[inline]
pub(crate) fn parent(i: usize) -> usize {
    debug_assert!(i > 0, "the root has no parent");
    (i - 1) / 2
}

/// Grandparent index, i.e. the nearest ancestor on the same level mode.
/// `i` must be at depth two or more.
#[inline]
pub(crate) fn grandparent(i: usize) -> usize {
    debug_assert!(i > 2, "index {i} has no grandparent");
    (i - 3) / 4
}

/// Index of the first child of `i`.
#[inline]
pub(crate) fn first_child(i: usize) -> usize {
    2 * i + 1
}

/// Indices of the children of `i` that exist in a heap of `len` elements.
#[inline]
pub(crate) fn children(i: usize, len: usize) -> Range<usize> {
    let start = first_child(i);
    start.min(len)..(start + 2).min(len)
}

/// Indices of the grandchildren of `i` that exist in a heap of `len` elements.
///
/// The four grandchildren are `4i+3 ..= 4i+6`; the range end is exclusive.
#[inline]
pub(crate) fn grandchildren(i: usize, len: usize) -> Range<usize> {
    let start = 4 * i + 3;
    start.min(len)..(start + 4).min(len)
}
