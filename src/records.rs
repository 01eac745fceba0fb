//! Frontier records for Dijkstra and A* searches
//!
//! A search pushes one of these records per discovered node and expands
//! whatever [`MinMaxHeap::pop_min`](crate::minmax::MinMaxHeap::pop_min)
//! returns. Costs are `f64`; node identifiers are `i32` so that
//! [`NO_PARENT`] (`-1`) can mark the search source.
//!
//! Both records implement a total order built on [`f64::total_cmp`], so every
//! comparison operator is derived from a single [`Ord::cmp`] and `<` and `>`
//! can never disagree. Costs are compared with the sign of zero dropped, so
//! `-0.0` and `0.0` tie exactly as they do under IEEE `==`. NaN costs are not
//! meaningful search input, but `total_cmp` still gives them a fixed place so
//! they cannot break the heap.

use std::cmp::Ordering;

/// Total order on costs that agrees with IEEE `<` and `==` on finite values
///
/// Adding `0.0` turns `-0.0` into `0.0` and leaves every other value alone.
#[inline]
fn cost_cmp(a: f64, b: f64) -> Ordering {
    (a + 0.0).total_cmp(&(b + 0.0))
}

/// Parent identifier of a record that has no parent (the search source)
pub const NO_PARENT: i32 = -1;

/// A* frontier entry
///
/// Ordered by `augment` (f-score) ascending, then by `dist` (g-score)
/// ascending so that among equally promising entries the one reached more
/// cheaply is expanded first. Node identifiers do not take part in the order:
/// two records with the same costs compare equal whichever nodes they name.
#[derive(Debug, Clone, Copy)]
pub struct AstarRecord {
    /// Cost so far plus heuristic estimate to the target (f-score)
    pub augment: f64,
    /// Cost so far from the source (g-score)
    pub dist: f64,
    /// Node this entry would expand
    pub current_node: i32,
    /// Node this entry was reached from, or [`NO_PARENT`]
    pub parent_node: i32,
}

impl AstarRecord {
    /// Creates a frontier entry
    pub fn new(augment: f64, dist: f64, current_node: i32, parent_node: i32) -> Self {
        Self {
            augment,
            dist,
            current_node,
            parent_node,
        }
    }

    /// The seed entry of a search: zero cost so far, no parent.
    pub fn source(node: i32, heuristic: f64) -> Self {
        Self::new(heuristic, 0.0, node, NO_PARENT)
    }

    /// False for the search source, whose parent is [`NO_PARENT`]
    pub fn has_parent(&self) -> bool {
        self.parent_node != NO_PARENT
    }
}

impl PartialEq for AstarRecord {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for AstarRecord {}

impl PartialOrd for AstarRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AstarRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        cost_cmp(self.augment, other.augment)
            .then_with(|| cost_cmp(self.dist, other.dist))
    }
}

/// Dijkstra frontier entry
///
/// Ordered by `weight` ascending, then by `node` ascending, which makes the
/// expansion order deterministic among entries of equal weight.
#[derive(Debug, Clone, Copy)]
pub struct DijkstraRecord {
    /// Accumulated cost from the source
    pub weight: f64,
    /// Node this entry would expand
    pub node: i32,
}

impl DijkstraRecord {
    /// Creates a frontier entry
    pub fn new(weight: f64, node: i32) -> Self {
        Self { weight, node }
    }
}

impl PartialEq for DijkstraRecord {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DijkstraRecord {}

impl PartialOrd for DijkstraRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DijkstraRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        cost_cmp(self.weight, other.weight)
            .then_with(|| self.node.cmp(&other.node))
    }
}
