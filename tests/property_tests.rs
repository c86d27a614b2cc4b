//! Property-based tests for the absolute center and minimum diameter spanning tree.
//!
//! # Invariants Tested
//!
//! ## Distances
//! - d(i, i) = 0, d(i, j) = d(j, i)
//! - d(i, j) <= d(i, k) + d(k, j)
//!
//! ## Center
//! - Eccentricity equals a brute-force minimum over every integral offset of
//!   every edge (exact in doubled scale for integral weights)
//! - 0 <= offset <= w
//!
//! ## Tree
//! - Exactly n - 1 edges, no cycles, every edge is a graph edge
//! - Tree diameter equals the reported diameter, also for sub-unit f64 and
//!   for f32 weights under their default tolerance
//! - Repeated runs return the same result

use mdst::graph::impl_generic::{
    DoubledGraph, eccentricity_at, floyd_warshall, tree_diameter,
};
use mdst::{DiameterTreeOptions, Edge, GraphError, minimum_diameter_spanning_tree};
use proptest::prelude::*;

const INF: i64 = i64::MAX / 4;

// ============================================================================
// Generators
// ============================================================================

/// Connected graph: a random spanning tree plus random extra edges
/// (parallel edges included).
fn connected_graph() -> impl Strategy<Value = (usize, Vec<Edge<i64>>)> {
    (2usize..9)
        .prop_flat_map(|n| {
            let tree = prop::collection::vec((any::<prop::sample::Index>(), 1i64..=10), n - 1);
            let extra = prop::collection::vec((0..n, 0..n, 1i64..=10), 0..12);
            (Just(n), tree, extra)
        })
        .prop_map(|(n, tree, extra)| {
            let mut edges = Vec::new();
            for (i, (parent, w)) in tree.into_iter().enumerate() {
                let child = i + 1;
                edges.push(Edge::new(parent.index(child), child, w));
            }
            for (u, v, w) in extra {
                if u != v {
                    edges.push(Edge::new(u, v, w));
                }
            }
            (n, edges)
        })
}

// ============================================================================
// Helpers
// ============================================================================

struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.find(self.parent[x]);
        }
        self.parent[x]
    }

    /// False if `x` and `y` were already joined.
    fn union(&mut self, x: usize, y: usize) -> bool {
        let (px, py) = (self.find(x), self.find(y));
        if px == py {
            return false;
        }
        self.parent[px] = py;
        true
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_distances_form_a_metric((n, edges) in connected_graph()) {
        let graph = DoubledGraph::from_edges(n, &edges, INF).unwrap();
        let d = floyd_warshall(&graph);
        prop_assert!(d.ensure_connected().is_ok());
        for i in 0..n {
            prop_assert_eq!(d.get(i, i), 0);
            for j in 0..n {
                prop_assert_eq!(d.get(i, j), d.get(j, i));
                for k in 0..n {
                    prop_assert!(d.get(i, j) <= d.get(i, k) + d.get(k, j));
                }
            }
        }
    }

    #[test]
    fn prop_center_matches_brute_force((n, edges) in connected_graph()) {
        let result = minimum_diameter_spanning_tree(n, &edges, &DiameterTreeOptions::default()).unwrap();
        let center = result.center.unwrap();
        prop_assert!(center.offset >= 0 && center.offset <= center.edge.w);

        let graph = DoubledGraph::from_edges(n, &edges, INF).unwrap();
        let d = floyd_warshall(&graph);
        let brute = graph
            .edges()
            .iter()
            .flat_map(|&e| (0..=e.w).map(move |t| (e, t)))
            .map(|(e, t)| eccentricity_at(e, t, &d))
            .min()
            .unwrap();

        prop_assert_eq!(center.eccentricity, brute);
        prop_assert_eq!(eccentricity_at(center.edge, center.offset, &d), brute);
        prop_assert_eq!(result.diameter, 2 * brute);
    }

    #[test]
    fn prop_tree_is_spanning_and_acyclic((n, edges) in connected_graph()) {
        let result = minimum_diameter_spanning_tree(n, &edges, &DiameterTreeOptions::default()).unwrap();
        prop_assert_eq!(result.tree.len(), n - 1);
        prop_assert_eq!(result.tree_weights.len(), n - 1);

        let graph = DoubledGraph::from_edges(n, &edges, INF).unwrap();
        let mut uf = UnionFind::new(n);
        for (&(a, b), &w) in result.tree.iter().zip(&result.tree_weights) {
            prop_assert!(uf.union(a, b), "cycle through ({}, {})", a, b);
            prop_assert_eq!(graph.weight(a, b), Some(w));
        }
    }

    #[test]
    fn prop_tree_diameter_is_reported_diameter((n, edges) in connected_graph()) {
        let result = minimum_diameter_spanning_tree(n, &edges, &DiameterTreeOptions::default()).unwrap();
        prop_assert_eq!(tree_diameter(n, &result.tree, &result.tree_weights), result.diameter);
        let max_radius = result.radii.iter().copied().max().unwrap();
        prop_assert_eq!(max_radius, result.center.unwrap().eccentricity);
    }

    #[test]
    fn prop_repeated_runs_agree((n, edges) in connected_graph()) {
        let options = DiameterTreeOptions::default();
        let a = minimum_diameter_spanning_tree(n, &edges, &options).unwrap();
        let b = minimum_diameter_spanning_tree(n, &edges, &options).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_float_weights_agree_with_integers((n, edges) in connected_graph()) {
        let float_edges: Vec<Edge<f64>> = edges.iter().map(|e| Edge::new(e.u, e.v, e.w as f64)).collect();
        let a = minimum_diameter_spanning_tree(n, &edges, &DiameterTreeOptions::default()).unwrap();
        let b = minimum_diameter_spanning_tree(n, &float_edges, &DiameterTreeOptions::default()).unwrap();
        prop_assert_eq!(a.diameter as f64, b.diameter);
        prop_assert_eq!(b.tree.len(), n - 1);
    }

    #[test]
    fn prop_sub_unit_f64_weights_keep_tree_diameter((n, edges) in connected_graph()) {
        let tiny: Vec<Edge<f64>> = edges
            .iter()
            .map(|e| Edge::new(e.u, e.v, e.w as f64 * 1e-14))
            .collect();
        let options = DiameterTreeOptions::default();
        let exact = minimum_diameter_spanning_tree(n, &edges, &DiameterTreeOptions::default()).unwrap();
        let result = minimum_diameter_spanning_tree(n, &tiny, &options).unwrap();

        prop_assert_eq!(result.tree.len(), n - 1);
        let built = tree_diameter(n, &result.tree, &result.tree_weights);
        prop_assert!((built - result.diameter).abs() <= 1e-9 * result.diameter);
        let expected = exact.diameter as f64 * 1e-14;
        prop_assert!((result.diameter - expected).abs() <= 1e-9 * expected);
    }

    #[test]
    fn prop_f32_weights_build_full_tree((n, edges) in connected_graph()) {
        // Hundredths: 0.01 to 0.10, so distinct path sums never nearly tie.
        let hundredths: Vec<Edge<f32>> = edges
            .iter()
            .map(|e| Edge::new(e.u, e.v, e.w as f32 / 100.0))
            .collect();
        let options = DiameterTreeOptions::default();
        let exact = minimum_diameter_spanning_tree(n, &edges, &DiameterTreeOptions::default()).unwrap();
        let result = minimum_diameter_spanning_tree(n, &hundredths, &options).unwrap();

        prop_assert_eq!(result.tree.len(), n - 1);
        let built = tree_diameter(n, &result.tree, &result.tree_weights);
        prop_assert!((built - result.diameter).abs() <= 1e-4 * result.diameter);
        let expected = exact.diameter as f32 / 100.0;
        prop_assert!((result.diameter - expected).abs() <= 1e-4 * expected);
    }

    #[test]
    fn prop_two_components_are_rejected(
        (n, edges) in connected_graph(),
        (m, other) in connected_graph(),
    ) {
        let mut all = edges;
        all.extend(other.iter().map(|e| Edge::new(e.u + n, e.v + n, e.w)));
        let result = minimum_diameter_spanning_tree(n + m, &all, &DiameterTreeOptions::default());
        let is_disconnected = matches!(result, Err(GraphError::Disconnected { .. }));
        prop_assert!(is_disconnected);
    }
}

// ============================================================================
// Reference graphs
// ============================================================================

#[test]
fn star_graph_center_is_hub() {
    for k in 1..6 {
        let edges: Vec<Edge<i64>> = (1..=k).map(|leaf| Edge::new(0, leaf, 5)).collect();
        let result = minimum_diameter_spanning_tree(k + 1, &edges, &DiameterTreeOptions::default()).unwrap();
        let center = result.center.unwrap();
        if k > 1 {
            assert_eq!(center.edge.u, 0);
            assert_eq!(center.offset, 0);
            assert_eq!(result.diameter, 20);
        } else {
            // A single edge is centered at its midpoint.
            assert_eq!(center.offset, 5);
            assert_eq!(result.diameter, 10);
        }
    }
}

#[test]
fn path_graph_center_is_middle_node() {
    let edges = [Edge::new(0, 1, 1i64), Edge::new(1, 2, 1)];
    let result = minimum_diameter_spanning_tree(3, &edges, &DiameterTreeOptions::default()).unwrap();
    let center = result.center.unwrap();
    assert_eq!((center.edge.u, center.offset), (1, 0));
    assert_eq!(result.diameter, 4);
    assert_eq!(result.true_diameter(), 2);
}

#[test]
fn single_node_graph_is_trivial() {
    let result = minimum_diameter_spanning_tree::<i64>(1, &[], &DiameterTreeOptions::default()).unwrap();
    assert!(result.center.is_none());
    assert_eq!(result.diameter, 0);
    assert!(result.tree.is_empty());
}

#[test]
fn real_valued_weights() {
    // Path 0 -0.3- 1 -0.9- 2: center 0.6 from node 0, true diameter 1.2.
    let edges = [Edge::new(0, 1, 0.3f64), Edge::new(1, 2, 0.9)];
    let result = minimum_diameter_spanning_tree(3, &edges, &DiameterTreeOptions::default()).unwrap();
    assert!((result.true_diameter() - 1.2).abs() < 1e-12);
    assert_eq!(result.tree.len(), 2);
}
