//! Backend-independent implementations.
//!
//! The scalar core is generic over [`Weight`]; the `*_impl` functions adapt it
//! to `GraphData` tensors.

pub mod absolute_center;
pub mod doubled_graph;
pub mod floyd_warshall;
pub mod helpers;
pub mod mdst;
pub mod ranking;
pub mod shortest_path_tree;
pub mod weight;

pub use absolute_center::{eccentricity_at, edge_center, locate_absolute_center};
pub use doubled_graph::DoubledGraph;
pub use floyd_warshall::{DistanceMatrix, floyd_warshall};
pub use mdst::{
    absolute_center, absolute_center_impl, minimum_diameter_spanning_tree,
    minimum_diameter_spanning_tree_impl,
};
pub use ranking::DistanceOrder;
pub use shortest_path_tree::{build_shortest_path_tree, center_radii, tree_diameter};
pub use weight::Weight;
