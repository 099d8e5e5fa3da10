//! `pipenet mst` command

use std::path::Path;

use crate::cli::{InputArgs, OutputFormat};
use crate::commands::dispatch::command::CommandContext;
use crate::commands::helpers::{maybe_write_mst, mst_edges_json, RunSettings};
use pipenet_core::error::Result;
use pipenet_core::format::{escape_quotes, format_distance};
use pipenet_core::graph::build_mst;

/// Execute the mst command
pub fn execute(
    ctx: &CommandContext,
    input: &InputArgs,
    mst_out: Option<&Path>,
    precision: Option<usize>,
) -> Result<()> {
    let cli = ctx.cli;
    let settings = RunSettings::resolve(&ctx.config, input, None, mst_out, precision)?;
    let graph = settings.load(input)?;
    let node_count = graph.node_count();

    let mst = build_mst(node_count, &graph.edges)?;
    maybe_write_mst(cli, &settings, &mst, &graph)?;

    let labels = &graph.node_map;
    let precision = settings.precision;

    match cli.format {
        OutputFormat::Human => {
            for edge in &mst.edges {
                println!(
                    "{} -- {}  {}",
                    labels.label_or_unknown(edge.u),
                    labels.label_or_unknown(edge.v),
                    format_distance(edge.weight, precision)
                );
            }
            if !cli.quiet {
                println!();
                println!(
                    "{} edge(s), total cost {}",
                    mst.edge_count(),
                    format_distance(mst.total_weight, precision)
                );
                if !mst.is_spanning_tree(node_count) && node_count > 0 {
                    println!(
                        "Network is disconnected: {} components",
                        mst.component_count(node_count)
                    );
                }
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "nodes": node_count,
                "edges": graph.edge_count(),
                "total_weight": mst.total_weight,
                "connected": mst.is_spanning_tree(node_count),
                "components": mst.component_count(node_count),
                "mst": mst_edges_json(&mst, labels),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!(
                "H pipenet=1 records=1 mode=mst nodes={} mst_edges={} total={}",
                node_count,
                mst.edge_count(),
                format_distance(mst.total_weight, precision)
            );
            for edge in &mst.edges {
                println!(
                    "E \"{}\" \"{}\" {}",
                    escape_quotes(labels.label_or_unknown(edge.u)),
                    escape_quotes(labels.label_or_unknown(edge.v)),
                    format_distance(edge.weight, precision)
                );
            }
        }
    }

    Ok(())
}
