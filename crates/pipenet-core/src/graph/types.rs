use serde::Serialize;

use crate::graph::path::{farthest_node, reconstruct_path};

/// Dense node identifier in `[0, node_count)`
pub type NodeId = usize;

/// Undirected weighted edge; `(u, v, w)` and `(v, u, w)` are the same edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    pub u: NodeId,
    pub v: NodeId,
    pub weight: f64,
}

impl Edge {
    pub fn new(u: NodeId, v: NodeId, weight: f64) -> Self {
        Self { u, v, weight }
    }

    pub fn is_self_loop(&self) -> bool {
        self.u == self.v
    }

    /// True when both edges join the same pair of nodes, in either direction
    pub fn connects(&self, a: NodeId, b: NodeId) -> bool {
        (self.u == a && self.v == b) || (self.u == b && self.v == a)
    }
}

/// Output of the MST builder: a spanning tree, or a spanning forest when
/// the input graph is disconnected
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MstResult {
    /// Accepted edges in acceptance order (ascending weight)
    pub edges: Vec<Edge>,
    /// Sum of accepted edge weights
    pub total_weight: f64,
}

impl MstResult {
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of trees in the forest, counting isolated nodes as trees
    pub fn component_count(&self, node_count: usize) -> usize {
        node_count.saturating_sub(self.edges.len())
    }

    /// True when the edges span all `node_count` nodes
    pub fn is_spanning_tree(&self, node_count: usize) -> bool {
        node_count > 0 && self.edges.len() == node_count - 1
    }
}

/// Distance and predecessor maps from a single shortest-path run
///
/// `dist[v]` is `f64::INFINITY` for nodes the source cannot reach, and
/// `prev[v]` is `None` for the source and for unreached nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPaths {
    pub source: NodeId,
    pub dist: Vec<f64>,
    pub prev: Vec<Option<NodeId>>,
}

impl ShortestPaths {
    pub fn node_count(&self) -> usize {
        self.dist.len()
    }

    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.dist.get(node).is_some_and(|d| d.is_finite())
    }

    /// Finite distance to `node`, or `None` when unreachable or out of range
    pub fn distance(&self, node: NodeId) -> Option<f64> {
        self.dist.get(node).copied().filter(|d| d.is_finite())
    }

    /// Count of reachable nodes, the source included
    pub fn reachable_count(&self) -> usize {
        self.dist.iter().filter(|d| d.is_finite()).count()
    }

    /// Node sequence from the source to `target`; empty when `target` is
    /// out of range or unreachable
    pub fn path_to(&self, target: NodeId) -> Vec<NodeId> {
        if !self.is_reachable(target) {
            return Vec::new();
        }
        reconstruct_path(&self.prev, target)
    }

    pub fn farthest(&self) -> Farthest {
        farthest_node(&self.dist, self.source)
    }
}

/// The reachable node with the greatest distance from the source
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Farthest {
    pub node: NodeId,
    pub distance: f64,
}
