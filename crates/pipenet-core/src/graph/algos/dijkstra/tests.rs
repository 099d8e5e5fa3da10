use super::*;
use crate::graph::adjacency::build_adjacency;
use crate::graph::types::Edge;

fn adjacency(node_count: usize, list: &[(usize, usize, f64)]) -> Adjacency {
    let edges: Vec<Edge> = list.iter().map(|&(u, v, w)| Edge::new(u, v, w)).collect();
    build_adjacency(node_count, &edges)
}

/// Test HeapEntry comparison ordering
#[test]
fn test_heap_entry_ordering() {
    let entry1 = HeapEntry {
        node: 0,
        distance: 1.0,
    };
    let entry2 = HeapEntry {
        node: 1,
        distance: 2.0,
    };
    let entry3 = HeapEntry {
        node: 2,
        distance: 1.0,
    };

    assert_eq!(entry1.cmp(&entry2), Ordering::Less);
    assert_eq!(entry2.cmp(&entry1), Ordering::Greater);

    // Equal distances fall back to node id
    assert_eq!(entry1.cmp(&entry3), Ordering::Less);

    assert_eq!(entry1, entry1);
    assert_ne!(entry1, entry2);
}

#[test]
fn test_reversed_heap_pops_minimum() {
    let mut heap = BinaryHeap::new();
    for (node, distance) in [(0, 5.0), (1, 0.5), (2, 3.0), (3, 0.5)] {
        heap.push(Reverse(HeapEntry { node, distance }));
    }
    let order: Vec<NodeId> = std::iter::from_fn(|| heap.pop().map(|Reverse(e)| e.node)).collect();
    assert_eq!(order, vec![1, 3, 2, 0]);
}

#[test]
fn test_chain_distances() {
    let adj = adjacency(4, &[(0, 1, 1.0), (1, 2, 2.0), (2, 3, 1.0)]);
    let paths = shortest_paths(&adj, 0).unwrap();
    assert_eq!(paths.dist, vec![0.0, 1.0, 3.0, 4.0]);
    assert_eq!(paths.prev, vec![None, Some(0), Some(1), Some(2)]);
}

#[test]
fn test_source_in_middle() {
    let adj = adjacency(4, &[(0, 1, 1.0), (1, 2, 2.0), (2, 3, 1.0)]);
    let paths = shortest_paths(&adj, 2).unwrap();
    assert_eq!(paths.dist, vec![3.0, 2.0, 0.0, 1.0]);
    assert_eq!(paths.prev[2], None);
    assert_eq!(paths.prev[0], Some(1));
}

#[test]
fn test_unreachable_nodes_stay_infinite() {
    let adj = adjacency(6, &[(0, 1, 1.0), (0, 2, 1.0), (3, 4, 1.0), (3, 5, 1.0)]);
    let paths = shortest_paths(&adj, 0).unwrap();
    for v in 3..6 {
        assert!(paths.dist[v].is_infinite());
        assert_eq!(paths.prev[v], None);
    }
    assert_eq!(paths.reachable_count(), 3);
}

#[test]
fn test_non_tree_graph_uses_cheaper_route() {
    // Direct edge 0-3 costs 10, the detour costs 3
    let adj = adjacency(4, &[(0, 3, 10.0), (0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0)]);
    let paths = shortest_paths(&adj, 0).unwrap();
    assert_eq!(paths.dist[3], 3.0);
    assert_eq!(paths.prev[3], Some(2));
    assert_eq!(paths.path_to(3), vec![0, 1, 2, 3]);
}

#[test]
fn test_stale_entries_are_skipped() {
    // Node 2 is pushed at 5.0 and again at 2.0; the later, stale pop must
    // not overwrite the settled distance of its neighbor
    let adj = adjacency(
        4,
        &[(0, 2, 5.0), (0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0)],
    );
    let paths = shortest_paths(&adj, 0).unwrap();
    assert_eq!(paths.dist, vec![0.0, 1.0, 2.0, 3.0]);
    assert_eq!(paths.prev[3], Some(2));
}

#[test]
fn test_zero_weight_edges() {
    let adj = adjacency(3, &[(0, 1, 0.0), (1, 2, 0.0)]);
    let paths = shortest_paths(&adj, 0).unwrap();
    assert_eq!(paths.dist, vec![0.0, 0.0, 0.0]);
    assert_eq!(paths.path_to(2), vec![0, 1, 2]);
}

#[test]
fn test_isolated_source() {
    let adj = adjacency(3, &[(1, 2, 4.0)]);
    let paths = shortest_paths(&adj, 0).unwrap();
    assert_eq!(paths.reachable_count(), 1);
    assert_eq!(paths.farthest().node, 0);
    assert_eq!(paths.farthest().distance, 0.0);
}

#[test]
fn test_invalid_source() {
    let adj = adjacency(3, &[(0, 1, 1.0)]);
    let err = shortest_paths(&adj, 3).unwrap_err();
    assert!(err.is_invalid_input());
    assert!(matches!(
        err,
        PipenetError::InvalidSource {
            node: 3,
            node_count: 3
        }
    ));

    let empty = adjacency(0, &[]);
    assert!(shortest_paths(&empty, 0).is_err());
}

#[test]
fn test_predecessor_consistency() {
    let adj = adjacency(
        6,
        &[
            (0, 1, 2.5),
            (1, 2, 0.75),
            (1, 3, 4.0),
            (3, 4, 1.5),
            (0, 5, 9.0),
        ],
    );
    let paths = shortest_paths(&adj, 0).unwrap();
    for v in 0..6 {
        if let Some(p) = paths.prev[v] {
            let w = adj.weight_between(p, v).unwrap();
            assert_eq!(paths.dist[v], paths.dist[p] + w);
        }
    }
}
