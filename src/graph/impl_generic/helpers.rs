//! Shared helper functions for the tensor boundary.

use numr::error::{Error, Result};
use numr::runtime::Runtime;
use numr::sparse::SparseTensor;
use numr::tensor::Tensor;

use crate::graph::error::{GraphError, GraphResult};
use crate::graph::traits::types::{Edge, GraphData};

pub type CsrArrays = (Vec<i64>, Vec<i64>, Vec<f64>, usize);

/// Extract CSR arrays from a GraphData for sequential algorithms.
///
/// Returns (row_ptrs, col_indices, values, num_nodes) as CPU vecs.
pub fn extract_csr_arrays<R: Runtime>(graph: &GraphData<R>) -> Result<CsrArrays> {
    let csr = match &graph.adjacency {
        SparseTensor::Csr(csr) => csr,
        _ => {
            return Err(Error::InvalidArgument {
                arg: "graph",
                reason: "Graph adjacency must be in CSR format. Call to_csr() first.".to_string(),
            });
        }
    };

    let row_ptrs: Vec<i64> = csr.row_ptrs().to_vec();
    let col_indices: Vec<i64> = csr.col_indices().to_vec();
    let values: Vec<f64> = csr.values().to_vec();
    let n = graph.num_nodes;

    Ok((row_ptrs, col_indices, values, n))
}

/// Device holding the graph's adjacency values.
pub fn graph_device<R: Runtime>(graph: &GraphData<R>) -> Result<R::Device> {
    match &graph.adjacency {
        SparseTensor::Csr(csr) => Ok(csr.values().device().clone()),
        _ => Err(Error::InvalidArgument {
            arg: "graph",
            reason: "Graph adjacency must be in CSR format. Call to_csr() first.".to_string(),
        }),
    }
}

/// Undirected edge list of a CSR graph.
///
/// Both triangles are read, so an adjacency that stores only one direction
/// of a pair, or different weights in the two directions, still yields the
/// edge; ingestion keeps the smaller weight. Diagonal entries are self-loops
/// and are rejected, as are directed graphs.
pub fn undirected_edges<R: Runtime>(
    graph: &GraphData<R>,
) -> GraphResult<(usize, Vec<Edge<f64>>)> {
    if graph.directed {
        return Err(GraphError::DirectedGraph);
    }

    let (row_ptrs, col_indices, values, n) = extract_csr_arrays(graph)?;

    let mut edges = Vec::new();
    for u in 0..n {
        let start = row_ptrs[u] as usize;
        let end = row_ptrs[u + 1] as usize;
        for idx in start..end {
            let v = col_indices[idx] as usize;
            if v == u {
                return Err(GraphError::SelfLoop { node: u });
            }
            edges.push(Edge::new(u.min(v), u.max(v), values[idx]));
        }
    }

    Ok((n, edges))
}

/// 1-D tensor from a slice, including the empty case.
pub fn vec_tensor<R: Runtime, T: numr::dtype::Element>(
    data: &[T],
    device: &R::Device,
) -> Tensor<R> {
    Tensor::<R>::from_slice(data, &[data.len()], device)
}
