//! Error types for graph center and spanning tree operations.

use std::fmt;

/// Result type for graph center operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors that can occur while locating the absolute center of a graph.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// The graph has no nodes.
    EmptyGraph,

    /// An edge endpoint is not a valid node index.
    NodeOutOfBounds { node: usize, num_nodes: usize },

    /// An edge connects a node to itself.
    SelfLoop { node: usize },

    /// An edge weight is zero, negative, or not a finite number.
    InvalidWeight { u: usize, v: usize, weight: String },

    /// Doubled weights (or their path sums) do not fit the weight type.
    WeightOverflow { context: String },

    /// The infinity sentinel is not larger than every feasible path length.
    InfinityTooSmall { infinity: String, bound: String },

    /// Two nodes have no path between them.
    Disconnected { from: usize, to: usize },

    /// The algorithm only accepts undirected graphs.
    DirectedGraph,

    /// Numerical computation failed.
    NumericalError { message: String },

    /// Invalid option value.
    InvalidParameter { parameter: String, message: String },

    /// Error from underlying numr operation.
    NumrError(String),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGraph => write!(f, "Graph has no nodes"),
            Self::NodeOutOfBounds { node, num_nodes } => {
                write!(f, "Node {} out of bounds for graph with {} nodes", node, num_nodes)
            }
            Self::SelfLoop { node } => write!(f, "Self-loop on node {}", node),
            Self::InvalidWeight { u, v, weight } => {
                write!(
                    f,
                    "Invalid weight {} on edge ({}, {}): weights must be positive and finite",
                    weight, u, v
                )
            }
            Self::WeightOverflow { context } => {
                write!(f, "Weight overflow in {}", context)
            }
            Self::InfinityTooSmall { infinity, bound } => {
                write!(
                    f,
                    "Infinity sentinel {} must exceed the longest feasible path bound {}",
                    infinity, bound
                )
            }
            Self::Disconnected { from, to } => {
                write!(f, "Graph is disconnected: no path from node {} to node {}", from, to)
            }
            Self::DirectedGraph => {
                write!(f, "Minimum diameter spanning tree requires an undirected graph")
            }
            Self::NumericalError { message } => {
                write!(f, "Numerical error: {}", message)
            }
            Self::InvalidParameter { parameter, message } => {
                write!(f, "Invalid parameter '{}': {}", parameter, message)
            }
            Self::NumrError(msg) => write!(f, "numr error: {}", msg),
        }
    }
}

impl std::error::Error for GraphError {}

impl From<numr::error::Error> for GraphError {
    fn from(err: numr::error::Error) -> Self {
        Self::NumrError(err.to_string())
    }
}
