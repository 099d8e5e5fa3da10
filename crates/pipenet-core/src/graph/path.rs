//! Path reconstruction and farthest-node selection over predecessor maps

use super::types::{Farthest, NodeId};

/// Walk `prev` back from `target` and return the path in source-to-target
/// order
///
/// Returns an empty path when `target` is out of range. For the source (or
/// any node with no predecessor) the path is just `[target]`. The walk is
/// bounded by `prev.len()` steps so a malformed map cannot loop forever.
pub fn reconstruct_path(prev: &[Option<NodeId>], target: NodeId) -> Vec<NodeId> {
    if target >= prev.len() {
        return Vec::new();
    }

    let mut path = vec![target];
    let mut current = target;
    while let Some(pred) = prev.get(current).copied().flatten() {
        if path.len() > prev.len() {
            tracing::warn!(target, "predecessor map contains a cycle");
            return Vec::new();
        }
        path.push(pred);
        current = pred;
    }

    path.reverse();
    path
}

/// Node with the strictly greatest finite distance
///
/// Scans in ascending id order, so ties go to the lowest id. When nothing
/// but the source is reachable the source itself is returned at distance 0.
pub fn farthest_node(dist: &[f64], source: NodeId) -> Farthest {
    let mut best = Farthest {
        node: source,
        distance: 0.0,
    };
    let mut found = false;

    for (node, &d) in dist.iter().enumerate() {
        if !d.is_finite() {
            continue;
        }
        if !found || d > best.distance {
            best = Farthest { node, distance: d };
            found = true;
        }
    }

    best
}
