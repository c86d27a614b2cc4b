//! Shortest-path tree rooted at an absolute center.
//!
//! Built breadth-first from the endpoint(s) of the central edge with an
//! explicit work queue. A node is attached the first time some attached node
//! `p` reaches it along a graph edge with `r[p] + w(p, i) == r[i]`.

use std::collections::VecDeque;

use crate::graph::error::{GraphError, GraphResult};
use crate::graph::traits::types::{AbsoluteCenter, Edge};

use super::doubled_graph::DoubledGraph;
use super::floyd_warshall::DistanceMatrix;
use super::weight::Weight;

/// Distance from the center point to every node.
///
/// `r[i] = min(d[u][i] + offset, d[v][i] + w - offset)`
pub fn center_radii<W: Weight>(d: &DistanceMatrix<W>, center: &AbsoluteCenter<W>) -> Vec<W> {
    let Edge { u, v, w } = center.edge;
    let offset = center.offset;
    (0..d.num_nodes())
        .map(|i| {
            let via_u = d.get(u, i) + offset;
            let via_v = d.get(v, i) + (w - offset);
            if via_v < via_u { via_v } else { via_u }
        })
        .collect()
}

/// Shortest-path tree edges as `(parent, child)` pairs plus their weights.
///
/// A center at offset 0 roots the tree at `edge.u`; an interior center
/// roots it at both endpoints joined by the central edge.
///
/// Time: O(V^2)
pub fn build_shortest_path_tree<W: Weight>(
    graph: &DoubledGraph<W>,
    radii: &[W],
    center: &AbsoluteCenter<W>,
    tolerance: f64,
) -> GraphResult<(Vec<(usize, usize)>, Vec<W>)> {
    let n = graph.num_nodes();
    let Edge { u, v, w } = center.edge;

    let mut attached = vec![false; n];
    let mut queue = VecDeque::with_capacity(n);
    let mut tree = Vec::with_capacity(n.saturating_sub(1));
    let mut weights = Vec::with_capacity(n.saturating_sub(1));

    attached[u] = true;
    queue.push_back(u);
    if center.offset != W::ZERO {
        attached[v] = true;
        queue.push_back(v);
        tree.push((u, v));
        weights.push(w);
    }

    while let Some(p) = queue.pop_front() {
        for i in 0..n {
            if attached[i] {
                continue;
            }
            if let Some(w_pi) = graph.weight(p, i)
                && (radii[p] + w_pi).approx_eq(radii[i], tolerance)
            {
                attached[i] = true;
                tree.push((p, i));
                weights.push(w_pi);
                queue.push_back(i);
            }
        }
    }

    if tree.len() + 1 != n {
        return Err(GraphError::NumericalError {
            message: format!(
                "shortest-path tree reached {} of {} nodes; raise the tolerance",
                tree.len() + 1,
                n
            ),
        });
    }

    Ok((tree, weights))
}

/// Weighted diameter of a tree given as an edge list over `n` nodes.
///
/// Two farthest-node sweeps. Time: O(V)
pub fn tree_diameter<W: Weight>(n: usize, tree: &[(usize, usize)], weights: &[W]) -> W {
    if n == 0 {
        return W::ZERO;
    }
    let mut neighbors: Vec<Vec<(usize, W)>> = vec![Vec::new(); n];
    for (&(a, b), &w) in tree.iter().zip(weights) {
        neighbors[a].push((b, w));
        neighbors[b].push((a, w));
    }

    let farthest_from = |source: usize| -> (usize, W) {
        let mut dist: Vec<Option<W>> = vec![None; n];
        dist[source] = Some(W::ZERO);
        let mut stack = vec![source];
        let mut best = (source, W::ZERO);
        while let Some(a) = stack.pop() {
            let da = dist[a].unwrap_or(W::ZERO);
            if da > best.1 {
                best = (a, da);
            }
            for &(b, w) in &neighbors[a] {
                if dist[b].is_none() {
                    dist[b] = Some(da + w);
                    stack.push(b);
                }
            }
        }
        best
    };

    let (end, _) = farthest_from(0);
    farthest_from(end).1
}
