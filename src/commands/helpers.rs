//! Settings resolution and shared output helpers for commands

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::{Cli, InputArgs, OutputFormat};
use pipenet_core::config::{parse_delimiter, PipenetConfig, MAX_PRECISION};
use pipenet_core::error::Result;
use pipenet_core::format::csv_field;
use pipenet_core::graph::MstResult;
use pipenet_core::ingest::{load_edge_list, EdgeList, EdgeListOptions, NodeMap};
use pipenet_core::{bail_invalid, bail_usage};

/// Effective settings for one run: flags over config over defaults
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub options: EdgeListOptions,
    pub source: Option<String>,
    pub precision: usize,
    pub mst_path: Option<PathBuf>,
}

impl RunSettings {
    pub fn resolve(
        config: &PipenetConfig,
        input: &InputArgs,
        source: Option<&str>,
        mst_out: Option<&Path>,
        precision: Option<usize>,
    ) -> Result<Self> {
        let delimiter = match &input.delimiter {
            Some(value) => parse_delimiter(value)?,
            None => config.input.delimiter_char()?,
        };

        let precision = precision.unwrap_or(config.output.precision);
        if precision > MAX_PRECISION {
            bail_invalid!("precision", precision);
        }

        let mst_path = mst_out
            .map(Path::to_path_buf)
            .or_else(|| config.output.mst_path.clone());
        if mst_path.as_deref() == Some(input.file.as_path()) {
            bail_usage!("refusing to write the MST over the input file");
        }

        Ok(Self {
            options: EdgeListOptions {
                u_column: input.u_col.clone().or_else(|| config.input.u_column.clone()),
                v_column: input.v_col.clone().or_else(|| config.input.v_column.clone()),
                w_column: input.w_col.clone().or_else(|| config.input.w_column.clone()),
                delimiter,
            },
            source: source
                .map(str::to_string)
                .or_else(|| config.analysis.source.clone()),
            precision,
            mst_path,
        })
    }

    /// Read the edge list named by `input`
    pub fn load(&self, input: &InputArgs) -> Result<EdgeList> {
        load_edge_list(&input.file, &self.options)
    }
}

/// Write MST edges as `u,v,weight` with node labels
pub fn write_mst_csv(path: &Path, mst: &MstResult, node_map: &NodeMap) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut content = String::from("u,v,weight\n");
    for edge in &mst.edges {
        content.push_str(&format!(
            "{},{},{}\n",
            csv_field(node_map.label_or_unknown(edge.u), ','),
            csv_field(node_map.label_or_unknown(edge.v), ','),
            edge.weight
        ));
    }
    fs::write(path, content)?;

    tracing::info!(path = %path.display(), edges = mst.edges.len(), "mst_written");
    Ok(())
}

/// Write the MST artifact if one was requested and tell a human about it
pub fn maybe_write_mst(
    cli: &Cli,
    settings: &RunSettings,
    mst: &MstResult,
    graph: &EdgeList,
) -> Result<()> {
    if let Some(path) = &settings.mst_path {
        write_mst_csv(path, mst, &graph.node_map)?;
        if cli.format == OutputFormat::Human && !cli.quiet {
            eprintln!("MST edge list written to {}", path.display());
        }
    }
    Ok(())
}

/// MST edges as JSON objects with labels
pub fn mst_edges_json(mst: &MstResult, node_map: &NodeMap) -> Vec<serde_json::Value> {
    mst.edges
        .iter()
        .map(|edge| {
            serde_json::json!({
                "u": node_map.label_or_unknown(edge.u),
                "v": node_map.label_or_unknown(edge.v),
                "weight": edge.weight,
            })
        })
        .collect()
}

/// Labels for a node-id path
pub fn path_labels<'a>(path: &[usize], node_map: &'a NodeMap) -> Vec<&'a str> {
    path.iter().map(|&id| node_map.label_or_unknown(id)).collect()
}
