//! Minimum spanning tree construction via Kruskal's algorithm
//!
//! Edges are processed in ascending weight order. Equal weights keep their
//! input order (the sort is stable), so repeated runs over the same edge
//! list always pick the same tree.

use std::time::Instant;

use crate::error::{PipenetError, Result};
use crate::graph::types::{Edge, MstResult};
use crate::graph::union_find::UnionFind;
use crate::trace_time;

/// Check every edge against `[0, node_count)` and the weight domain
///
/// Reports the first violation by edge index.
pub fn validate_edges(node_count: usize, edges: &[Edge]) -> Result<()> {
    for (edge_index, edge) in edges.iter().enumerate() {
        for node in [edge.u, edge.v] {
            if node >= node_count {
                return Err(PipenetError::NodeOutOfRange {
                    edge_index,
                    node,
                    node_count,
                });
            }
        }
        if !edge.weight.is_finite() || edge.weight < 0.0 {
            return Err(PipenetError::InvalidWeight {
                edge_index,
                weight: edge.weight,
            });
        }
    }
    Ok(())
}

/// Build the minimum spanning tree (or forest) of an undirected graph
///
/// Self-loops are never accepted. A disconnected graph yields a forest
/// with `node_count - components` edges; that is a valid result.
#[tracing::instrument(skip(edges), fields(edge_count = edges.len()))]
pub fn build_mst(node_count: usize, edges: &[Edge]) -> Result<MstResult> {
    validate_edges(node_count, edges)?;

    let start = Instant::now();
    // `+ 0.0` turns -0.0 into 0.0 so zero weights tie in input order
    let mut sorted: Vec<Edge> = edges
        .iter()
        .map(|edge| Edge::new(edge.u, edge.v, edge.weight + 0.0))
        .collect();
    sorted.sort_by(|a, b| a.weight.total_cmp(&b.weight));
    trace_time!(start, "sort_edges");

    let target = node_count.saturating_sub(1);
    let mut uf = UnionFind::new(node_count);
    let mut mst = MstResult::default();

    for edge in sorted {
        if mst.edges.len() == target {
            break;
        }
        if uf.union(edge.u, edge.v) {
            mst.total_weight += edge.weight;
            mst.edges.push(edge);
        }
    }

    tracing::debug!(
        accepted = mst.edges.len(),
        components = uf.set_count(),
        total_weight = mst.total_weight,
        "mst_built"
    );
    if mst.edges.len() < target {
        tracing::debug!(
            missing = target - mst.edges.len(),
            "graph is disconnected, returning spanning forest"
        );
    }

    Ok(mst)
}
