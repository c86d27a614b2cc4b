//! Doubled-weight dense adjacency built from an edge list.
//!
//! Every weight is multiplied by 2 on the way in. Offsets of the absolute
//! center are half of a sum of two doubled distances, so with integral input
//! weights every later value stays an exact integer.

use std::collections::HashMap;

use log::debug;

use crate::graph::error::{GraphError, GraphResult};
use crate::graph::traits::types::Edge;

use super::weight::Weight;

/// Dense `n x n` adjacency in doubled-weight scale.
#[derive(Debug, Clone)]
pub struct DoubledGraph<W> {
    num_nodes: usize,
    /// Deduplicated edges, first-appearance order, doubled weights.
    edges: Vec<Edge<W>>,
    /// Row-major `[n * n]`; `infinity` where no edge exists, 0 on the diagonal.
    adjacency: Vec<W>,
    infinity: W,
}

impl<W: Weight> DoubledGraph<W> {
    /// Validate and ingest an undirected edge list.
    ///
    /// Rejects empty graphs, out-of-range endpoints, self-loops and
    /// non-positive or non-finite weights. Parallel edges keep the minimum
    /// weight. Also proves that `infinity` exceeds every feasible path length
    /// and that two such lengths can be added without overflow.
    pub fn from_edges(num_nodes: usize, edges: &[Edge<W>], infinity: W) -> GraphResult<Self> {
        if num_nodes == 0 {
            return Err(GraphError::EmptyGraph);
        }

        let mut unique: Vec<Edge<W>> = Vec::with_capacity(edges.len());
        let mut index: HashMap<(usize, usize), usize> = HashMap::with_capacity(edges.len());

        for edge in edges {
            let Edge { u, v, w } = *edge;
            for node in [u, v] {
                if node >= num_nodes {
                    return Err(GraphError::NodeOutOfBounds { node, num_nodes });
                }
            }
            if u == v {
                return Err(GraphError::SelfLoop { node: u });
            }
            if !w.is_finite() || !(w > W::ZERO) {
                return Err(GraphError::InvalidWeight {
                    u,
                    v,
                    weight: w.to_string(),
                });
            }
            let w = w.doubled().ok_or_else(|| GraphError::WeightOverflow {
                context: format!("doubling weight of edge ({}, {})", u, v),
            })?;

            let key = (u.min(v), u.max(v));
            match index.get(&key) {
                Some(&i) => {
                    if w < unique[i].w {
                        unique[i].w = w;
                    }
                }
                None => {
                    index.insert(key, unique.len());
                    unique.push(Edge::new(u, v, w));
                }
            }
        }

        // Every shortest path uses each edge at most once, so the sum of all
        // doubled weights bounds every finite distance.
        let mut bound = W::ZERO;
        for edge in &unique {
            bound = bound
                .checked_add(edge.w)
                .ok_or_else(|| GraphError::WeightOverflow {
                    context: "summing doubled edge weights".to_string(),
                })?;
        }
        if bound.doubled().is_none() {
            return Err(GraphError::WeightOverflow {
                context: "adding two path lengths".to_string(),
            });
        }
        if !(infinity > bound) {
            return Err(GraphError::InfinityTooSmall {
                infinity: infinity.to_string(),
                bound: bound.to_string(),
            });
        }

        let mut adjacency = vec![infinity; num_nodes * num_nodes];
        for i in 0..num_nodes {
            adjacency[i * num_nodes + i] = W::ZERO;
        }
        for edge in &unique {
            adjacency[edge.u * num_nodes + edge.v] = edge.w;
            adjacency[edge.v * num_nodes + edge.u] = edge.w;
        }

        debug!(
            "ingested {} nodes, {} edges ({} after merging parallel edges)",
            num_nodes,
            edges.len(),
            unique.len()
        );

        Ok(Self {
            num_nodes,
            edges: unique,
            adjacency,
            infinity,
        })
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    pub fn infinity(&self) -> W {
        self.infinity
    }

    /// Doubled weight of the edge `(i, j)`, or `None` if there is none.
    pub fn weight(&self, i: usize, j: usize) -> Option<W> {
        let w = self.adjacency[i * self.num_nodes + j];
        if i != j && w < self.infinity {
            Some(w)
        } else {
            None
        }
    }

    /// Raw row-major adjacency, diagonal 0, missing edges at `infinity`.
    pub fn adjacency(&self) -> &[W] {
        &self.adjacency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_are_doubled() {
        let g = DoubledGraph::from_edges(3, &[Edge::new(0, 1, 3i64), Edge::new(1, 2, 5)], 1000)
            .unwrap();
        assert_eq!(g.weight(0, 1), Some(6));
        assert_eq!(g.weight(2, 1), Some(10));
        assert_eq!(g.weight(0, 2), None);
        assert_eq!(g.weight(1, 1), None);
        assert_eq!(g.adjacency()[4], 0);
    }

    #[test]
    fn test_parallel_edges_keep_minimum() {
        let edges = [
            Edge::new(0, 1, 7i64),
            Edge::new(1, 2, 1),
            Edge::new(1, 0, 2),
            Edge::new(0, 1, 9),
        ];
        let g = DoubledGraph::from_edges(3, &edges, 1000).unwrap();
        assert_eq!(g.edges().len(), 2);
        assert_eq!(g.edges()[0], Edge::new(0, 1, 4));
        assert_eq!(g.weight(1, 0), Some(4));
    }

    #[test]
    fn test_rejects_malformed_input() {
        assert_eq!(
            DoubledGraph::<i64>::from_edges(0, &[], 10).unwrap_err(),
            GraphError::EmptyGraph
        );
        assert_eq!(
            DoubledGraph::from_edges(2, &[Edge::new(1, 1, 1i64)], 10).unwrap_err(),
            GraphError::SelfLoop { node: 1 }
        );
        assert_eq!(
            DoubledGraph::from_edges(2, &[Edge::new(0, 2, 1i64)], 10).unwrap_err(),
            GraphError::NodeOutOfBounds {
                node: 2,
                num_nodes: 2
            }
        );
        assert!(matches!(
            DoubledGraph::from_edges(2, &[Edge::new(0, 1, 0i64)], 10),
            Err(GraphError::InvalidWeight { u: 0, v: 1, .. })
        ));
        assert!(matches!(
            DoubledGraph::from_edges(2, &[Edge::new(0, 1, -2.0f64)], f64::INFINITY),
            Err(GraphError::InvalidWeight { .. })
        ));
        assert!(matches!(
            DoubledGraph::from_edges(2, &[Edge::new(0, 1, f64::NAN)], f64::INFINITY),
            Err(GraphError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn test_rejects_small_infinity_and_overflow() {
        assert!(matches!(
            DoubledGraph::from_edges(3, &[Edge::new(0, 1, 3i64), Edge::new(1, 2, 3)], 12),
            Err(GraphError::InfinityTooSmall { .. })
        ));
        assert!(matches!(
            DoubledGraph::from_edges(2, &[Edge::new(0, 1, i32::MAX / 3)], i32::MAX),
            Err(GraphError::WeightOverflow { .. })
        ));
    }
}
