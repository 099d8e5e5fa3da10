//! Adjacency lists built from an undirected edge list

use super::types::{Edge, NodeId};

/// Per-node `(neighbor, weight)` lists; every edge appears once in each
/// endpoint's list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Adjacency {
    neighbors: Vec<Vec<(NodeId, f64)>>,
}

impl Adjacency {
    /// Build adjacency for `node_count` nodes
    ///
    /// Self-loops are dropped. Edges with an endpoint outside
    /// `[0, node_count)` are skipped with a warning; validated edge lists
    /// never contain them.
    pub fn from_edges(node_count: usize, edges: &[Edge]) -> Self {
        let mut neighbors = vec![Vec::new(); node_count];
        for edge in edges {
            if edge.is_self_loop() {
                continue;
            }
            if edge.u >= node_count || edge.v >= node_count {
                tracing::warn!(u = edge.u, v = edge.v, node_count, "skipping out-of-range edge");
                continue;
            }
            neighbors[edge.u].push((edge.v, edge.weight));
            neighbors[edge.v].push((edge.u, edge.weight));
        }
        Self { neighbors }
    }

    pub fn node_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Neighbors of `node`; empty for out-of-range ids
    pub fn neighbors(&self, node: NodeId) -> &[(NodeId, f64)] {
        self.neighbors.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of undirected edges stored
    pub fn edge_count(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Weight of the edge joining `a` and `b`, if one exists
    pub fn weight_between(&self, a: NodeId, b: NodeId) -> Option<f64> {
        self.neighbors(a)
            .iter()
            .find(|(n, _)| *n == b)
            .map(|(_, w)| *w)
    }
}

/// Convenience wrapper over [`Adjacency::from_edges`]
pub fn build_adjacency(node_count: usize, edges: &[Edge]) -> Adjacency {
    Adjacency::from_edges(node_count, edges)
}
