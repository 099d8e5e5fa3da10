//! Edge-list ingestion
//!
//! Turns delimited text into dense-id edges plus the label map needed to
//! translate results back. Weights are parsed but not range-checked here;
//! negative or non-finite values are rejected by the MST builder with the
//! offending edge index.

pub mod columns;
pub mod csv;
pub mod node_map;

use std::fs;
use std::path::Path;

use crate::error::{PipenetError, Result};
use crate::graph::{Edge, NodeId};

pub use columns::{detect_columns, ColumnOverrides, ColumnSelection};
pub use node_map::NodeMap;

/// How to read an edge list
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeListOptions {
    pub u_column: Option<String>,
    pub v_column: Option<String>,
    pub w_column: Option<String>,
    pub delimiter: char,
}

impl Default for EdgeListOptions {
    fn default() -> Self {
        Self {
            u_column: None,
            v_column: None,
            w_column: None,
            delimiter: ',',
        }
    }
}

impl EdgeListOptions {
    fn overrides(&self) -> ColumnOverrides<'_> {
        ColumnOverrides {
            u: self.u_column.as_deref(),
            v: self.v_column.as_deref(),
            w: self.w_column.as_deref(),
        }
    }
}

/// Ingested graph: edges over dense ids plus the label map
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeList {
    pub node_map: NodeMap,
    pub edges: Vec<Edge>,
}

impl EdgeList {
    /// Number of distinct labels seen
    pub fn node_count(&self) -> usize {
        self.node_map.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Resolve the source node; `None` picks id 0
    pub fn resolve_source(&self, label: Option<&str>) -> Result<NodeId> {
        match label {
            None => Ok(0),
            Some(label) => self
                .node_map
                .id(label)
                .ok_or_else(|| PipenetError::SourceNotFound {
                    label: label.to_string(),
                }),
        }
    }

    /// Resolve any node label to its id
    pub fn resolve_label(&self, label: &str) -> Result<NodeId> {
        self.node_map
            .id(label)
            .ok_or_else(|| PipenetError::NodeNotFound {
                label: label.to_string(),
            })
    }
}

/// Parse an edge list from delimited text
#[tracing::instrument(skip(content, options), fields(bytes = content.len()))]
pub fn parse_edge_list(content: &str, options: &EdgeListOptions) -> Result<EdgeList> {
    let table = csv::parse_records(content, options.delimiter)?;
    let columns = detect_columns(&table.headers, options.overrides())?;
    let min_fields = columns.min_fields();

    let mut list = EdgeList::default();
    for row in &table.rows {
        if row.fields.len() < min_fields {
            return Err(PipenetError::malformed_row(
                row.line,
                format!(
                    "expected at least {} fields, found {}",
                    min_fields,
                    row.fields.len()
                ),
            ));
        }

        let raw_weight = &row.fields[columns.w];
        let weight: f64 = raw_weight.trim().parse().map_err(|_| {
            PipenetError::malformed_row(row.line, format!("invalid weight {:?}", raw_weight))
        })?;

        let u = list.node_map.get_or_insert(&row.fields[columns.u]);
        let v = list.node_map.get_or_insert(&row.fields[columns.v]);
        list.edges.push(Edge::new(u, v, weight));
    }

    tracing::debug!(
        nodes = list.node_count(),
        edges = list.edge_count(),
        "edge_list_loaded"
    );

    Ok(list)
}

/// Read and parse an edge list file
pub fn load_edge_list(path: &Path, options: &EdgeListOptions) -> Result<EdgeList> {
    if !path.exists() {
        return Err(PipenetError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("file not found: {}", path.display()),
        )));
    }
    let content = fs::read_to_string(path)?;
    parse_edge_list(&content, options)
}
