//! Graph algorithms for pipe network analysis
//!
//! Provides the computation pipeline over a dense-id weighted graph:
//! - Union-find for component tracking
//! - Kruskal MST construction
//! - Adjacency lists built from an edge list
//! - Dijkstra shortest paths with path reconstruction

pub mod adjacency;
pub mod algos;
pub mod analysis;
pub mod mst;
pub mod path;
pub mod types;
pub mod union_find;

pub use adjacency::{build_adjacency, Adjacency};
pub use algos::shortest_paths;
pub use analysis::{analyze, NetworkAnalysis};
pub use mst::{build_mst, validate_edges};
pub use path::{farthest_node, reconstruct_path};
pub use types::{Edge, Farthest, MstResult, NodeId, ShortestPaths};
pub use union_find::UnionFind;
