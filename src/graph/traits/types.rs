//! Graph data types and result structures.

use numr::error::Result;
use numr::runtime::Runtime;
use numr::sparse::SparseTensor;
use numr::tensor::Tensor;

use crate::graph::error::{GraphError, GraphResult};
use crate::graph::impl_generic::weight::Weight;

/// Graph representation using sparse adjacency matrix.
///
/// Wraps a CSR sparse adjacency matrix with metadata for type safety.
/// Weights are stored as values in the sparse matrix.
///
/// # Construction
///
/// ```ignore
/// use mdst::graph::GraphData;
///
/// let graph = GraphData::from_edge_list(&rows, &cols, Some(&weights), num_nodes, false, &device)?;
/// ```
#[derive(Debug, Clone)]
pub struct GraphData<R: Runtime> {
    /// CSR sparse adjacency matrix [n, n], weights as values
    pub adjacency: SparseTensor<R>,
    /// Number of nodes in the graph
    pub num_nodes: usize,
    /// Whether the graph is directed
    pub directed: bool,
}

impl<R: Runtime> GraphData<R> {
    /// Create a graph from a sparse adjacency matrix.
    pub fn new(adjacency: SparseTensor<R>, directed: bool) -> Self {
        let num_nodes = adjacency.nrows();
        Self {
            adjacency,
            num_nodes,
            directed,
        }
    }

    /// Create a graph from an edge list.
    ///
    /// Undirected graphs store both directions. Parallel edges stay separate
    /// entries and are merged by minimum weight when the graph is solved.
    ///
    /// # Arguments
    ///
    /// * `sources` - Source node indices
    /// * `targets` - Target node indices
    /// * `weights` - Optional edge weights. If None, uses 1 for all edges.
    /// * `num_nodes` - Number of nodes in the graph
    /// * `directed` - Whether the graph is directed
    /// * `device` - Device to create tensors on
    pub fn from_edge_list<T: numr::dtype::Element>(
        sources: &[i64],
        targets: &[i64],
        weights: Option<&[T]>,
        num_nodes: usize,
        directed: bool,
        device: &R::Device,
    ) -> Result<Self> {
        let weight_at = |i: usize| weights.map_or(T::one(), |w| w[i]);

        let (rows, cols, vals) = if directed {
            let vals: Vec<T> = (0..sources.len()).map(weight_at).collect();
            (sources.to_vec(), targets.to_vec(), vals)
        } else {
            let mut rows = Vec::with_capacity(sources.len() * 2);
            let mut cols = Vec::with_capacity(sources.len() * 2);
            let mut vals = Vec::with_capacity(sources.len() * 2);
            for (i, (&s, &t)) in sources.iter().zip(targets).enumerate() {
                let w = weight_at(i);
                rows.extend([s, t]);
                cols.extend([t, s]);
                vals.extend([w, w]);
            }
            (rows, cols, vals)
        };

        let adjacency = SparseTensor::<R>::from_coo_slices(
            &rows,
            &cols,
            &vals,
            [num_nodes, num_nodes],
            device,
        )?;
        Ok(Self::new(adjacency.to_csr()?, directed))
    }
}

/// Undirected weighted edge `(u, v, w)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<W> {
    pub u: usize,
    pub v: usize,
    pub w: W,
}

impl<W: Weight> Edge<W> {
    pub fn new(u: usize, v: usize, w: W) -> Self {
        Self { u, v, w }
    }

    /// The same edge walked from `v` to `u`.
    pub fn reversed(self) -> Self {
        Self {
            u: self.v,
            v: self.u,
            w: self.w,
        }
    }
}

/// Absolute center of a graph, in doubled-weight scale.
///
/// The center lies on `edge` at distance `offset` from `edge.u`
/// (`0 <= offset <= edge.w`). A center that coincides with a vertex is always
/// reported with `offset == 0` on an edge whose `u` is that vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AbsoluteCenter<W> {
    /// Central edge, with its doubled weight.
    pub edge: Edge<W>,
    /// Distance from `edge.u` to the center point.
    pub offset: W,
    /// Largest distance from the center point to any node.
    pub eccentricity: W,
}

impl<W: Weight> AbsoluteCenter<W> {
    /// Diameter of the shortest-path tree rooted at this center
    /// (`2 * eccentricity`, doubled scale).
    pub fn diameter(&self) -> W {
        self.eccentricity + self.eccentricity
    }

    /// True if the center is a graph vertex rather than an interior edge point.
    pub fn is_vertex(&self) -> bool {
        self.offset == W::ZERO || self.offset == self.edge.w
    }

    /// Diameter in caller (undoubled) scale. Exact for integral weights.
    pub fn true_diameter(&self) -> W {
        self.eccentricity
    }
}

/// Minimum diameter spanning tree rooted at the absolute center.
///
/// All distances are in doubled-weight scale.
#[derive(Debug, Clone, PartialEq)]
pub struct DiameterTree<W> {
    /// Absolute center. `None` only for a single-node graph.
    pub center: Option<AbsoluteCenter<W>>,
    /// Diameter of `tree` (doubled scale).
    pub diameter: W,
    /// Distance from the center to each node [n].
    pub radii: Vec<W>,
    /// Tree edges as `(parent, child)` pairs, `n - 1` of them.
    pub tree: Vec<(usize, usize)>,
    /// Doubled weight of each tree edge, parallel to `tree`.
    pub tree_weights: Vec<W>,
}

impl<W: Weight> DiameterTree<W> {
    /// Diameter in caller (undoubled) scale.
    pub fn true_diameter(&self) -> W {
        self.diameter.halve()
    }
}

/// Result of the minimum diameter spanning tree at the tensor boundary.
#[derive(Debug, Clone)]
pub struct MDSTResult<R: Runtime> {
    /// Edge sources (parents) in the tree [n - 1].
    pub sources: Tensor<R>,
    /// Edge targets (children) in the tree [n - 1].
    pub targets: Tensor<R>,
    /// Doubled edge weights in the tree [n - 1].
    pub weights: Tensor<R>,
    /// Doubled distance from the absolute center to each node [n].
    pub radii: Tensor<R>,
    /// Absolute center. `None` only for a single-node graph.
    pub center: Option<AbsoluteCenter<f64>>,
    /// Tree diameter (doubled scale).
    pub diameter: f64,
}

/// Options for the minimum diameter spanning tree.
#[derive(Debug, Clone, PartialEq)]
pub struct DiameterTreeOptions<W> {
    /// Sentinel strictly larger than any feasible path length in doubled
    /// scale. If None, uses [`Weight::default_infinity`].
    pub infinity: Option<W>,
    /// Relative tolerance for comparing floating distances. Ignored for
    /// integral weights. Defaults to [`Weight::default_tolerance`].
    pub tolerance: f64,
}

impl<W: Weight> Default for DiameterTreeOptions<W> {
    fn default() -> Self {
        Self {
            infinity: None,
            tolerance: W::default_tolerance(),
        }
    }
}

impl<W: Weight> DiameterTreeOptions<W> {
    /// Check option values before any work is done.
    pub fn validate(&self) -> GraphResult<()> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(GraphError::InvalidParameter {
                parameter: "tolerance".to_string(),
                message: format!("must be finite and non-negative, got {}", self.tolerance),
            });
        }
        if let Some(inf) = self.infinity
            && !(inf > W::ZERO)
        {
            return Err(GraphError::InvalidParameter {
                parameter: "infinity".to_string(),
                message: format!("must be positive, got {}", inf),
            });
        }
        Ok(())
    }

    pub(crate) fn infinity(&self) -> W {
        self.infinity.unwrap_or_else(W::default_infinity)
    }
}
