//! Minimum diameter spanning tree via the absolute center.
//!
//! Pipeline: ingest (doubled weights) -> Floyd-Warshall -> connectivity check
//! -> farthest-first ranking -> absolute center -> shortest-path tree.
//! Implemented sequentially at API boundary.

use log::debug;
use numr::runtime::{Runtime, RuntimeClient};

use crate::graph::error::{GraphError, GraphResult};
use crate::graph::traits::types::{
    AbsoluteCenter, DiameterTree, DiameterTreeOptions, Edge, GraphData, MDSTResult,
};

use super::absolute_center::locate_absolute_center;
use super::doubled_graph::DoubledGraph;
use super::floyd_warshall::{DistanceMatrix, floyd_warshall};
use super::helpers::{graph_device, undirected_edges, vec_tensor};
use super::ranking::DistanceOrder;
use super::shortest_path_tree::{build_shortest_path_tree, center_radii};
use super::weight::Weight;

/// Validated graph with its distance matrix, ready for center queries.
struct Prepared<W> {
    graph: DoubledGraph<W>,
    distances: DistanceMatrix<W>,
}

fn prepare<W: Weight>(
    num_nodes: usize,
    edges: &[Edge<W>],
    options: &DiameterTreeOptions<W>,
) -> GraphResult<Prepared<W>> {
    options.validate()?;
    let graph = DoubledGraph::from_edges(num_nodes, edges, options.infinity())?;
    let distances = floyd_warshall(&graph);
    distances.ensure_connected()?;
    Ok(Prepared { graph, distances })
}

fn locate<W: Weight>(prepared: &Prepared<W>) -> GraphResult<Option<AbsoluteCenter<W>>> {
    if prepared.graph.num_nodes() == 1 {
        return Ok(None);
    }
    let ord = DistanceOrder::new(&prepared.distances);
    locate_absolute_center(&prepared.graph, &prepared.distances, &ord)
        .map(Some)
        .ok_or_else(|| GraphError::NumericalError {
            message: "no candidate center on a connected graph".to_string(),
        })
}

/// Absolute center of a connected, undirected, positively weighted graph.
///
/// Returns `None` for a single-node graph. All values are in doubled scale.
///
/// Time: O(V^3)
pub fn absolute_center<W: Weight>(
    num_nodes: usize,
    edges: &[Edge<W>],
    options: &DiameterTreeOptions<W>,
) -> GraphResult<Option<AbsoluteCenter<W>>> {
    let prepared = prepare(num_nodes, edges, options)?;
    locate(&prepared)
}

/// Minimum diameter spanning tree: the shortest-path tree rooted at the
/// absolute center.
///
/// # Errors
/// Malformed input is rejected before any O(V^3) work. A disconnected graph
/// is reported as [`GraphError::Disconnected`] right after all-pairs
/// shortest paths.
///
/// Time: O(V^3)
pub fn minimum_diameter_spanning_tree<W: Weight>(
    num_nodes: usize,
    edges: &[Edge<W>],
    options: &DiameterTreeOptions<W>,
) -> GraphResult<DiameterTree<W>> {
    let prepared = prepare(num_nodes, edges, options)?;

    let Some(center) = locate(&prepared)? else {
        return Ok(DiameterTree {
            center: None,
            diameter: W::ZERO,
            radii: vec![W::ZERO],
            tree: Vec::new(),
            tree_weights: Vec::new(),
        });
    };

    let radii = center_radii(&prepared.distances, &center);
    let (tree, tree_weights) =
        build_shortest_path_tree(&prepared.graph, &radii, &center, options.tolerance)?;

    debug!(
        "minimum diameter spanning tree: {} edges, diameter {}",
        tree.len(),
        center.diameter()
    );

    Ok(DiameterTree {
        center: Some(center),
        diameter: center.diameter(),
        radii,
        tree,
        tree_weights,
    })
}

/// Minimum diameter spanning tree of an undirected [`GraphData`].
///
/// Reads the CSR adjacency once at the API boundary and returns tensors on
/// the graph's device.
pub fn minimum_diameter_spanning_tree_impl<R, C>(
    _client: &C,
    graph: &GraphData<R>,
    options: &DiameterTreeOptions<f64>,
) -> GraphResult<MDSTResult<R>>
where
    R: Runtime,
    C: RuntimeClient<R>,
{
    let (n, edges) = undirected_edges(graph)?;
    let device = graph_device(graph)?;

    let result = minimum_diameter_spanning_tree(n, &edges, options)?;

    let sources: Vec<i64> = result.tree.iter().map(|&(p, _)| p as i64).collect();
    let targets: Vec<i64> = result.tree.iter().map(|&(_, c)| c as i64).collect();

    Ok(MDSTResult {
        sources: vec_tensor::<R, i64>(&sources, &device),
        targets: vec_tensor::<R, i64>(&targets, &device),
        weights: vec_tensor::<R, f64>(&result.tree_weights, &device),
        radii: vec_tensor::<R, f64>(&result.radii, &device),
        center: result.center,
        diameter: result.diameter,
    })
}

/// Absolute center of an undirected [`GraphData`], without building the tree.
pub fn absolute_center_impl<R, C>(
    _client: &C,
    graph: &GraphData<R>,
    options: &DiameterTreeOptions<f64>,
) -> GraphResult<Option<AbsoluteCenter<f64>>>
where
    R: Runtime,
    C: RuntimeClient<R>,
{
    let (n, edges) = undirected_edges(graph)?;
    absolute_center(n, &edges, options)
}
