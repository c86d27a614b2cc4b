//! Minimum diameter spanning tree traits.

use numr::runtime::Runtime;

use crate::graph::error::GraphResult;

use super::types::{AbsoluteCenter, DiameterTreeOptions, GraphData, MDSTResult};

/// Absolute center and minimum diameter spanning tree algorithms.
///
/// Only meaningful for connected, undirected graphs with positive weights.
/// All returned distances are in doubled-weight scale: every edge weight is
/// multiplied by 2 on input, so halve the diameter for caller-scale values.
pub trait DiameterTreeAlgorithms<R: Runtime> {
    /// Compute the minimum diameter spanning tree.
    ///
    /// Finds the absolute center (a vertex or a point inside an edge that
    /// minimizes the largest distance to any node) and returns the
    /// shortest-path tree rooted there. Sequential algorithm.
    ///
    /// # Complexity
    /// O(V^3) for all-pairs shortest paths, O(E * V) for the center scan.
    ///
    /// # Errors
    /// Returns error if the graph is directed, has self-loops or non-positive
    /// weights, or is disconnected.
    fn minimum_diameter_spanning_tree(&self, graph: &GraphData<R>) -> GraphResult<MDSTResult<R>>;

    /// Same as [`minimum_diameter_spanning_tree`](Self::minimum_diameter_spanning_tree)
    /// with explicit infinity sentinel and tolerance.
    fn minimum_diameter_spanning_tree_with_options(
        &self,
        graph: &GraphData<R>,
        options: &DiameterTreeOptions<f64>,
    ) -> GraphResult<MDSTResult<R>>;

    /// Locate the absolute center without building the tree.
    ///
    /// Returns `None` for a single-node graph.
    fn absolute_center(&self, graph: &GraphData<R>) -> GraphResult<Option<AbsoluteCenter<f64>>>;
}
