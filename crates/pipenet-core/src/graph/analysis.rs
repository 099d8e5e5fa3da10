//! End-to-end network analysis: MST, then shortest paths within it

use std::time::Instant;

use serde::Serialize;

use crate::error::Result;
use crate::graph::adjacency::Adjacency;
use crate::graph::algos::shortest_paths;
use crate::graph::mst::build_mst;
use crate::graph::types::{Edge, Farthest, MstResult, NodeId, ShortestPaths};
use crate::trace_time;

/// Everything the presentation layer needs from one analysis run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkAnalysis {
    pub node_count: usize,
    pub mst: MstResult,
    pub shortest_paths: ShortestPaths,
    pub farthest: Farthest,
    /// Path from the source to the farthest node
    pub path: Vec<NodeId>,
}

impl NetworkAnalysis {
    pub fn source(&self) -> NodeId {
        self.shortest_paths.source
    }

    /// True when the MST reaches every node
    pub fn is_connected(&self) -> bool {
        self.mst.is_spanning_tree(self.node_count)
    }
}

/// Build the MST of `edges`, then run shortest paths from `source` over it
/// and locate the farthest reachable node
#[tracing::instrument(skip(edges), fields(edge_count = edges.len()))]
pub fn analyze(node_count: usize, edges: &[Edge], source: NodeId) -> Result<NetworkAnalysis> {
    let start = Instant::now();

    let mst = build_mst(node_count, edges)?;
    trace_time!(start, "build_mst", accepted = mst.edges.len());

    let adjacency = Adjacency::from_edges(node_count, &mst.edges);
    let paths = shortest_paths(&adjacency, source)?;
    trace_time!(start, "shortest_paths");

    let farthest = paths.farthest();
    let path = paths.path_to(farthest.node);

    tracing::debug!(
        farthest = farthest.node,
        distance = farthest.distance,
        hops = path.len().saturating_sub(1),
        "analysis_done"
    );

    Ok(NetworkAnalysis {
        node_count,
        mst,
        shortest_paths: paths,
        farthest,
        path,
    })
}
