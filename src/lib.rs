//! mdst - Minimum Diameter Spanning Trees
//!
//! Computes the spanning tree of a connected, undirected, positively weighted
//! graph that minimizes the largest distance between any two of its nodes.
//! That tree is the shortest-path tree rooted at the graph's *absolute
//! center*: the point (a vertex, or a point inside an edge) whose farthest
//! node is as close as possible.
//!
//! # Pipeline
//!
//! ```text
//! edge list ──► doubled-weight matrix ──► Floyd-Warshall ──► farthest-first ranking
//!                                                                   │
//!                      shortest-path tree ◄── absolute center ◄─────┘
//! ```
//!
//! # Doubled Scale
//!
//! Every input weight is multiplied by 2. The center offset is half a sum of
//! two distances, so with integral weights every value stays an exact
//! integer and no tolerance is needed. All distances, offsets, radii and
//! diameters are reported in this doubled scale: a path `0 - 1 - 2` with unit
//! weights has diameter 4. Use `true_diameter()` for caller-scale values.
//!
//! # Backend Support
//!
//! The tensor-facing trait [`DiameterTreeAlgorithms`] is implemented for
//! numr's CPU client, and for CUDA / WebGPU behind feature flags. The
//! algorithm itself is sequential and runs on the host at the API boundary.
//!
//! | Feature | Description | Dependencies |
//! |---------|-------------|--------------|
//! | `cuda`  | Enable CUDA GPU acceleration | CUDA 12.x, numr/cuda |
//! | `wgpu`  | Enable WebGPU cross-platform GPU | numr/wgpu |
//!
//! # Example
//!
//! ```
//! use mdst::{DiameterTreeOptions, Edge, minimum_diameter_spanning_tree};
//!
//! // Star: hub 0 with three leaves of weight 5.
//! let edges = [Edge::new(0, 1, 5i64), Edge::new(0, 2, 5), Edge::new(0, 3, 5)];
//! let result = minimum_diameter_spanning_tree(4, &edges, &DiameterTreeOptions::default()).unwrap();
//!
//! assert_eq!(result.diameter, 20);
//! assert_eq!(result.true_diameter(), 10);
//! assert_eq!(result.tree.len(), 3);
//! ```
//!
//! ```ignore
//! use mdst::DiameterTreeAlgorithms;
//! use mdst::graph::GraphData;
//! use numr::runtime::cpu::{CpuClient, CpuDevice};
//!
//! let device = CpuDevice::new();
//! let client = CpuClient::new(device.clone());
//! let graph = GraphData::from_edge_list::<f64>(&[0, 1], &[1, 2], Some(&[1.0, 1.0]), 3, false, &device)?;
//! let result = client.minimum_diameter_spanning_tree(&graph)?;
//! ```

pub mod graph;

// Re-export main types for convenience
pub use graph::{
    AbsoluteCenter, DiameterTree, DiameterTreeAlgorithms, DiameterTreeOptions, DistanceMatrix,
    DistanceOrder, Edge, GraphData, GraphError, GraphResult, MDSTResult, Weight,
    absolute_center, minimum_diameter_spanning_tree,
};

// Re-export numr types that users will commonly need
pub use numr::runtime::{Runtime, RuntimeClient};
pub use numr::tensor::Tensor;
