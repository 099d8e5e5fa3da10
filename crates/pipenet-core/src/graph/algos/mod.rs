//! Graph algorithm implementations
//!
//! - `dijkstra`: single-source shortest paths with a lazy-deletion frontier

pub mod dijkstra;

pub use dijkstra::shortest_paths;
