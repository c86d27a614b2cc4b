//! CUDA implementation of minimum diameter spanning tree algorithms.

use crate::graph::error::GraphResult;
use crate::graph::impl_generic::{absolute_center_impl, minimum_diameter_spanning_tree_impl};
use crate::graph::traits::diameter::DiameterTreeAlgorithms;
use crate::graph::traits::types::{AbsoluteCenter, DiameterTreeOptions, GraphData, MDSTResult};
use numr::runtime::cuda::{CudaClient, CudaRuntime};

impl DiameterTreeAlgorithms<CudaRuntime> for CudaClient {
    fn minimum_diameter_spanning_tree(
        &self,
        graph: &GraphData<CudaRuntime>,
    ) -> GraphResult<MDSTResult<CudaRuntime>> {
        minimum_diameter_spanning_tree_impl(self, graph, &DiameterTreeOptions::default())
    }

    fn minimum_diameter_spanning_tree_with_options(
        &self,
        graph: &GraphData<CudaRuntime>,
        options: &DiameterTreeOptions<f64>,
    ) -> GraphResult<MDSTResult<CudaRuntime>> {
        minimum_diameter_spanning_tree_impl(self, graph, options)
    }

    fn absolute_center(
        &self,
        graph: &GraphData<CudaRuntime>,
    ) -> GraphResult<Option<AbsoluteCenter<f64>>> {
        absolute_center_impl(self, graph, &DiameterTreeOptions::default())
    }
}
