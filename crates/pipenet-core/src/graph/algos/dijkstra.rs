use crate::error::{PipenetError, Result};
use crate::graph::adjacency::Adjacency;
use crate::graph::types::{NodeId, ShortestPaths};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Frontier entry ordered by tentative distance, then node id
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry {
    pub node: NodeId,
    pub distance: f64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// State tracked during a Dijkstra run
struct DijkstraState {
    dist: Vec<f64>,
    prev: Vec<Option<NodeId>>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
    stale_pops: usize,
}

impl DijkstraState {
    fn new(node_count: usize, source: NodeId) -> Self {
        let mut dist = vec![f64::INFINITY; node_count];
        dist[source] = 0.0;
        let mut heap = BinaryHeap::new();
        heap.push(Reverse(HeapEntry {
            node: source,
            distance: 0.0,
        }));
        Self {
            dist,
            prev: vec![None; node_count],
            heap,
            stale_pops: 0,
        }
    }

    /// Relax every edge out of `node`, which was settled at `distance`
    fn relax(&mut self, adjacency: &Adjacency, node: NodeId, distance: f64) {
        for &(neighbor, weight) in adjacency.neighbors(node) {
            let candidate = distance + weight;
            if candidate < self.dist[neighbor] {
                self.dist[neighbor] = candidate;
                self.prev[neighbor] = Some(node);
                self.heap.push(Reverse(HeapEntry {
                    node: neighbor,
                    distance: candidate,
                }));
            }
        }
    }
}

/// Single-source shortest paths over non-negative weights
///
/// Uses a binary-heap frontier with lazy deletion: a popped entry whose
/// distance exceeds the recorded `dist` is stale and skipped. Nodes the
/// source cannot reach keep `f64::INFINITY` and no predecessor.
#[tracing::instrument(skip(adjacency), fields(nodes = adjacency.node_count()))]
pub fn shortest_paths(adjacency: &Adjacency, source: NodeId) -> Result<ShortestPaths> {
    let node_count = adjacency.node_count();
    if source >= node_count {
        return Err(PipenetError::InvalidSource {
            node: source,
            node_count,
        });
    }

    let mut state = DijkstraState::new(node_count, source);

    while let Some(Reverse(HeapEntry { node, distance })) = state.heap.pop() {
        if distance > state.dist[node] {
            state.stale_pops += 1;
            continue;
        }
        state.relax(adjacency, node, distance);
    }

    let result = ShortestPaths {
        source,
        dist: state.dist,
        prev: state.prev,
    };

    tracing::debug!(
        reachable = result.reachable_count(),
        stale_pops = state.stale_pops,
        "shortest_paths_done"
    );

    Ok(result)
}

#[cfg(test)]
mod tests;
