//! Property checks over generated graphs, plus end-to-end scenarios
//! from edge-list text to analysis.

use pipenet_core::graph::{
    analyze, build_mst, reconstruct_path, shortest_paths, Adjacency, Edge, UnionFind,
};
use pipenet_core::ingest::{parse_edge_list, EdgeListOptions};

/// Small deterministic generator so every run sees the same graphs
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn below(&mut self, bound: usize) -> usize {
        (self.next() % bound as u64) as usize
    }
}

/// Graphs of 1..=8 nodes with small integer weights, so ties are common
fn random_graphs(count: usize) -> Vec<(usize, Vec<Edge>)> {
    let mut rng = Lcg(0x5eed);
    (0..count)
        .map(|_| {
            let n = 1 + rng.below(8);
            let m = rng.below(14);
            let edges = (0..m)
                .map(|_| Edge::new(rng.below(n), rng.below(n), rng.below(6) as f64))
                .collect();
            (n, edges)
        })
        .collect()
}

fn component_count(n: usize, edges: &[Edge]) -> usize {
    let mut uf = UnionFind::new(n);
    for edge in edges {
        uf.union(edge.u, edge.v);
    }
    uf.set_count()
}

#[test]
fn test_forest_has_n_minus_k_edges() {
    for (n, edges) in random_graphs(300) {
        let mst = build_mst(n, &edges).unwrap();
        let k = component_count(n, &edges);
        assert_eq!(mst.edges.len(), n - k, "n={} edges={:?}", n, edges);
        assert_eq!(mst.component_count(n), k);
    }
}

#[test]
fn test_total_weight_is_sum_of_edges() {
    for (n, edges) in random_graphs(200) {
        let mst = build_mst(n, &edges).unwrap();
        let sum: f64 = mst.edges.iter().map(|e| e.weight).sum();
        assert_eq!(mst.total_weight, sum);
    }
}

#[test]
fn test_mst_never_contains_self_loops() {
    for (n, edges) in random_graphs(200) {
        let mst = build_mst(n, &edges).unwrap();
        assert!(mst.edges.iter().all(|e| !e.is_self_loop()));
    }
}

#[test]
fn test_adding_self_loops_changes_nothing() {
    for (n, edges) in random_graphs(100) {
        let mut with_loops = edges.clone();
        for node in 0..n {
            with_loops.push(Edge::new(node, node, 0.0));
        }
        assert_eq!(
            build_mst(n, &edges).unwrap(),
            build_mst(n, &with_loops).unwrap()
        );
    }
}

#[test]
fn test_analysis_is_deterministic() {
    for (n, edges) in random_graphs(100) {
        let first = analyze(n, &edges, 0).unwrap();
        let second = analyze(n, &edges, 0).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_distances_agree_with_predecessors() {
    for (n, edges) in random_graphs(200) {
        let mst = build_mst(n, &edges).unwrap();
        let adjacency = Adjacency::from_edges(n, &mst.edges);
        let source = n - 1;
        let paths = shortest_paths(&adjacency, source).unwrap();

        assert_eq!(paths.dist[source], 0.0);
        assert_eq!(paths.prev[source], None);

        for v in 0..n {
            match paths.prev[v] {
                Some(p) => {
                    let w = adjacency.weight_between(p, v).unwrap();
                    assert_eq!(paths.dist[v], paths.dist[p] + w);
                }
                None if v != source => assert!(paths.dist[v].is_infinite()),
                None => {}
            }
        }
    }
}

#[test]
fn test_paths_follow_mst_edges() {
    for (n, edges) in random_graphs(200) {
        let analysis = analyze(n, &edges, 0).unwrap();
        let mut uf = UnionFind::new(n);
        for edge in &edges {
            uf.union(edge.u, edge.v);
        }

        for target in 0..n {
            let path = reconstruct_path(&analysis.shortest_paths.prev, target);
            if !uf.connected(0, target) {
                assert!(!analysis.shortest_paths.is_reachable(target));
                assert!(analysis.shortest_paths.path_to(target).is_empty());
                continue;
            }

            assert_eq!(path.first(), Some(&0));
            assert_eq!(path.last(), Some(&target));
            for pair in path.windows(2) {
                assert!(
                    analysis.mst.edges.iter().any(|e| e.connects(pair[0], pair[1])),
                    "{:?} is not an MST edge",
                    pair
                );
            }

            let along: f64 = path
                .windows(2)
                .map(|pair| {
                    analysis
                        .mst
                        .edges
                        .iter()
                        .find(|e| e.connects(pair[0], pair[1]))
                        .map(|e| e.weight)
                        .unwrap()
                })
                .sum();
            assert_eq!(analysis.shortest_paths.dist[target], along);
        }
    }
}

#[test]
fn test_farthest_is_maximal_and_lowest_id() {
    for (n, edges) in random_graphs(200) {
        let analysis = analyze(n, &edges, 0).unwrap();
        let dist = &analysis.shortest_paths.dist;
        let far = analysis.farthest;

        for (v, d) in dist.iter().enumerate().filter(|(_, d)| d.is_finite()) {
            assert!(*d <= far.distance);
            if *d == far.distance {
                assert!(far.node <= v);
            }
        }
        assert_eq!(analysis.path, analysis.shortest_paths.path_to(far.node));
    }
}

#[test]
fn test_scenario_from_text() {
    let content = "node_u,node_v,latency\nR,P1,1\nP1,P2,2\nR,P2,2\nP2,Tap,1\nP2,P2,5\n";
    let list = parse_edge_list(content, &EdgeListOptions::default()).unwrap();
    assert_eq!(list.node_count(), 4);
    assert_eq!(list.edge_count(), 5);

    let source = list.resolve_source(Some("R")).unwrap();
    let analysis = analyze(list.node_count(), &list.edges, source).unwrap();

    assert_eq!(analysis.mst.total_weight, 4.0);
    assert_eq!(analysis.mst.edges.len(), 3);
    assert_eq!(list.node_map.label(analysis.farthest.node), Some("Tap"));
    assert_eq!(analysis.farthest.distance, 4.0);

    let labels: Vec<_> = analysis
        .path
        .iter()
        .map(|&id| list.node_map.label_or_unknown(id))
        .collect();
    assert_eq!(labels, ["R", "P1", "P2", "Tap"]);
}

#[test]
fn test_negative_weight_from_text_names_edge_index() {
    let content = "u,v,w\nA,B,1\nB,C,-3\n";
    let list = parse_edge_list(content, &EdgeListOptions::default()).unwrap();

    let err = analyze(list.node_count(), &list.edges, 0).unwrap_err();
    assert!(err.is_invalid_input());
    assert!(err.to_string().contains("edge 1"));
}
