//! `pipenet path` command
//!
//! Shows the route within the MST from the source to one target node.

use crate::cli::{InputArgs, OutputFormat};
use crate::commands::dispatch::command::CommandContext;
use crate::commands::helpers::{path_labels, RunSettings};
use pipenet_core::error::{PipenetError, Result};
use pipenet_core::format::{escape_quotes, format_distance, format_path};
use pipenet_core::graph::{build_mst, shortest_paths, Adjacency};

/// Execute the path command
pub fn execute(
    ctx: &CommandContext,
    input: &InputArgs,
    target: &str,
    source: Option<&str>,
    precision: Option<usize>,
) -> Result<()> {
    let cli = ctx.cli;
    let settings = RunSettings::resolve(&ctx.config, input, source, None, precision)?;
    let graph = settings.load(input)?;
    if graph.node_count() == 0 {
        return Err(PipenetError::EmptyInput);
    }

    let source_id = graph.resolve_source(settings.source.as_deref())?;
    let target_id = graph.resolve_label(target)?;

    let mst = build_mst(graph.node_count(), &graph.edges)?;
    let adjacency = Adjacency::from_edges(graph.node_count(), &mst.edges);
    let paths = shortest_paths(&adjacency, source_id)?;

    let labels = &graph.node_map;
    let route = paths.path_to(target_id);
    let distance = paths.distance(target_id);
    let precision = settings.precision;

    match cli.format {
        OutputFormat::Human => {
            if route.is_empty() {
                println!(
                    "{} is unreachable from {}",
                    labels.label_or_unknown(target_id),
                    labels.label_or_unknown(source_id)
                );
            } else {
                println!("Path: {}", format_path(&path_labels(&route, labels)));
                if let Some(distance) = distance {
                    println!("Latency: {}", format_distance(distance, precision));
                }
                if !cli.quiet {
                    println!("Hops: {}", route.len() - 1);
                }
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "source": labels.label_or_unknown(source_id),
                "target": labels.label_or_unknown(target_id),
                "reachable": !route.is_empty(),
                "distance": distance,
                "path": path_labels(&route, labels),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!(
                "H pipenet=1 records=1 mode=path source=\"{}\" target=\"{}\" reachable={}",
                escape_quotes(labels.label_or_unknown(source_id)),
                escape_quotes(labels.label_or_unknown(target_id)),
                !route.is_empty()
            );
            if let Some(distance) = distance {
                let path: Vec<String> = path_labels(&route, labels)
                    .into_iter()
                    .map(|label| format!("\"{}\"", escape_quotes(label)))
                    .collect();
                println!("P {} {}", format_distance(distance, precision), path.join(" "));
            }
        }
    }

    Ok(())
}
