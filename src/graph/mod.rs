//! Minimum diameter spanning trees.
//!
//! This module provides:
//! - Doubled-weight ingestion and Floyd-Warshall all-pairs shortest paths
//! - Farthest-first distance ranking
//! - Absolute center location (Kariv-Hakimi sweep, Halpern bound)
//! - Shortest-path tree construction from the center

mod cpu;
pub mod error;
pub mod impl_generic;
pub mod traits;

#[cfg(feature = "cuda")]
mod cuda;

#[cfg(feature = "wgpu")]
mod wgpu;

pub use error::{GraphError, GraphResult};
pub use impl_generic::{
    DistanceMatrix, DistanceOrder, Weight, absolute_center, minimum_diameter_spanning_tree,
};
pub use traits::*;
