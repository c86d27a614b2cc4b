//! Per-node ranking of all nodes by decreasing shortest distance.

use std::cmp::Ordering;

use super::floyd_warshall::DistanceMatrix;
use super::weight::Weight;

/// `n` permutations of `0..n`; row `i` lists nodes farthest-first from `i`.
///
/// Ties keep index order, so the table is reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceOrder {
    num_nodes: usize,
    order: Vec<usize>,
}

impl DistanceOrder {
    /// Sort every row of `d` in non-increasing order.
    ///
    /// Time: O(V^2 log V)
    pub fn new<W: Weight>(d: &DistanceMatrix<W>) -> Self {
        let n = d.num_nodes();
        let mut order = Vec::with_capacity(n * n);
        for i in 0..n {
            let row = d.row(i);
            let mut nodes: Vec<usize> = (0..n).collect();
            // Stable sort: equal distances stay in index order.
            nodes.sort_by(|&a, &b| row[b].partial_cmp(&row[a]).unwrap_or(Ordering::Equal));
            order.extend(nodes);
        }
        Self {
            num_nodes: n,
            order,
        }
    }

    pub fn row(&self, i: usize) -> &[usize] {
        &self.order[i * self.num_nodes..(i + 1) * self.num_nodes]
    }

    /// Node farthest from `i` (smallest index among ties).
    #[inline]
    pub fn farthest(&self, i: usize) -> usize {
        self.order[i * self.num_nodes]
    }
}
