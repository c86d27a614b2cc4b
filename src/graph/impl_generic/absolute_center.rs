//! Absolute center of a graph (Kariv-Hakimi sweep with the Halpern bound).
//!
//! For a point at offset `x` on edge `(u, v, w)`, the distance to node `i` is
//! `min(d[u][i] + x, d[v][i] + w - x)` and the eccentricity is the maximum of
//! that over all `i`. Walking the nodes of `u` farthest-first, the envelope
//! only changes shape when a node raises the best `d[v][.]` seen so far; the
//! local minima sit at those crossings, so one pass per edge is exact.

use log::{debug, trace};

use crate::graph::traits::types::{AbsoluteCenter, Edge};

use super::doubled_graph::DoubledGraph;
use super::floyd_warshall::DistanceMatrix;
use super::ranking::DistanceOrder;
use super::weight::Weight;

#[inline]
fn min_of<W: Weight>(a: W, b: W) -> W {
    if b < a { b } else { a }
}

/// Eccentricity of the point at `offset` from `edge.u` along `edge`.
///
/// Time: O(V)
pub fn eccentricity_at<W: Weight>(edge: Edge<W>, offset: W, d: &DistanceMatrix<W>) -> W {
    let Edge { u, v, w } = edge;
    (0..d.num_nodes())
        .map(|i| min_of(d.get(u, i) + offset, d.get(v, i) + (w - offset)))
        .fold(W::ZERO, |acc, dist| if dist > acc { dist } else { acc })
}

/// Best point on a single edge, as `(offset, eccentricity)`.
///
/// Returns `None` when the Halpern bound shows the edge cannot beat `best`
/// (the eccentricity of the best center found so far).
///
/// Time: O(V)
pub fn edge_center<W: Weight>(
    edge: Edge<W>,
    d: &DistanceMatrix<W>,
    ord: &DistanceOrder,
    best: Option<W>,
) -> Option<(W, W)> {
    let Edge { u, v, w } = edge;
    let far_u = ord.farthest(u);
    let far_v = ord.farthest(v);

    if let Some(best) = best
        && d.get(u, far_v) + d.get(v, far_u) > best + best
    {
        trace!("edge ({}, {}) pruned by Halpern bound", u, v);
        return None;
    }

    // Point at u.
    let mut x = W::ZERO;
    let mut y = min_of(d.get(u, far_u), d.get(v, far_u) + w);

    // A shared farthest node bounds every interior point below by the
    // smaller endpoint eccentricity, so only the endpoints matter.
    if far_u != far_v {
        let co = ord.row(u);
        let mut k = co[0];
        for &i in &co[1..] {
            if d.get(v, k) < d.get(v, i) {
                // Crossing of d[u][i] + x with d[v][k] + w - x.
                let xi = (d.get(v, k) - d.get(u, i) + w).halve();
                let yi = xi + d.get(u, i);
                if yi < y {
                    y = yi;
                    x = xi;
                }
                k = i;
            }
        }
    }

    // Point at v.
    let at_v = min_of(d.get(v, far_v), d.get(u, far_v) + w);
    if at_v < y {
        y = at_v;
        x = w;
    }

    Some((x, y))
}

/// Express a vertex center as offset 0 from that vertex.
fn normalize<W: Weight>(edge: Edge<W>, offset: W, eccentricity: W) -> AbsoluteCenter<W> {
    if offset == edge.w {
        AbsoluteCenter {
            edge: edge.reversed(),
            offset: W::ZERO,
            eccentricity,
        }
    } else {
        AbsoluteCenter {
            edge,
            offset,
            eccentricity,
        }
    }
}

/// Scan every edge of `graph` and keep the point of least eccentricity.
///
/// Edges are scanned in order and only a strictly better candidate replaces
/// the current one, so the result is deterministic. Returns `None` only when
/// the graph has no edges.
///
/// Time: O(E * V)
pub fn locate_absolute_center<W: Weight>(
    graph: &DoubledGraph<W>,
    d: &DistanceMatrix<W>,
    ord: &DistanceOrder,
) -> Option<AbsoluteCenter<W>> {
    graph
        .edges()
        .iter()
        .fold(None, |best: Option<AbsoluteCenter<W>>, &edge| {
            match edge_center(edge, d, ord, best.map(|c| c.eccentricity)) {
                Some((offset, eccentricity))
                    if best.is_none_or(|c| eccentricity < c.eccentricity) =>
                {
                    debug!(
                        "new absolute center on edge ({}, {}) at offset {} (eccentricity {})",
                        edge.u, edge.v, offset, eccentricity
                    );
                    Some(normalize(edge, offset, eccentricity))
                }
                _ => best,
            }
        })
}
