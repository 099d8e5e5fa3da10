//! Pipenet Core Library
//!
//! Minimum spanning tree construction and shortest-path analysis for
//! undirected weighted graphs, plus the edge-list ingestion that feeds them.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod ingest;
pub mod logging;
