//! Floyd-Warshall all-pairs shortest paths over the doubled-weight matrix.
//!
//! Scalar triple loop. Only finite entries are ever added, so the infinity
//! sentinel never takes part in arithmetic.

use crate::graph::error::{GraphError, GraphResult};

use super::doubled_graph::DoubledGraph;
use super::weight::Weight;

/// Dense shortest-distance matrix, doubled scale, row-major `[n * n]`.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix<W> {
    num_nodes: usize,
    data: Vec<W>,
    infinity: W,
}

impl<W: Weight> DistanceMatrix<W> {
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> W {
        self.data[i * self.num_nodes + j]
    }

    pub fn row(&self, i: usize) -> &[W] {
        &self.data[i * self.num_nodes..(i + 1) * self.num_nodes]
    }

    /// Largest distance from node `i` to any node.
    pub fn eccentricity(&self, i: usize) -> W {
        self.row(i)
            .iter()
            .copied()
            .fold(W::ZERO, |acc, d| if d > acc { d } else { acc })
    }

    /// Fail with [`GraphError::Disconnected`] if any pair is still at infinity.
    pub fn ensure_connected(&self) -> GraphResult<()> {
        let n = self.num_nodes;
        match self.data.iter().position(|&d| !(d < self.infinity)) {
            Some(idx) => Err(GraphError::Disconnected {
                from: idx / n,
                to: idx % n,
            }),
            None => Ok(()),
        }
    }
}

/// Floyd-Warshall all-pairs shortest paths.
///
/// Time: O(V^3), Memory: O(V^2)
pub fn floyd_warshall<W: Weight>(graph: &DoubledGraph<W>) -> DistanceMatrix<W> {
    let n = graph.num_nodes();
    let inf = graph.infinity();
    let mut d = graph.adjacency().to_vec();

    // D[i,j] = min(D[i,j], D[i,k] + D[k,j])
    for k in 0..n {
        for i in 0..n {
            let d_ik = d[i * n + k];
            if !(d_ik < inf) {
                continue;
            }
            for j in 0..n {
                let d_kj = d[k * n + j];
                if d_kj < inf {
                    let through_k = d_ik + d_kj;
                    if through_k < d[i * n + j] {
                        d[i * n + j] = through_k;
                    }
                }
            }
        }
    }

    DistanceMatrix {
        num_nodes: n,
        data: d,
        infinity: inf,
    }
}
