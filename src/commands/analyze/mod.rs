//! `pipenet analyze` command
//!
//! Builds the MST, runs shortest paths from the source over it and reports
//! the farthest reachable node together with the path to it.

mod human;
mod json;
mod records;

use std::path::Path;
use std::time::Instant;

use tracing::debug;

use crate::cli::{InputArgs, OutputFormat};
use crate::commands::dispatch::command::CommandContext;
use crate::commands::helpers::{maybe_write_mst, RunSettings};
use pipenet_core::error::{PipenetError, Result};
use pipenet_core::graph::analyze;

/// Execute the analyze command
pub fn execute(
    ctx: &CommandContext,
    input: &InputArgs,
    source: Option<&str>,
    mst_out: Option<&Path>,
    precision: Option<usize>,
) -> Result<()> {
    let start = Instant::now();
    let cli = ctx.cli;

    let settings = RunSettings::resolve(&ctx.config, input, source, mst_out, precision)?;
    let graph = settings.load(input)?;
    if graph.node_count() == 0 {
        return Err(PipenetError::EmptyInput);
    }

    if cli.verbose {
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            elapsed = ?start.elapsed(),
            "load_input"
        );
    }

    let source_id = graph.resolve_source(settings.source.as_deref())?;
    let analysis = analyze(graph.node_count(), &graph.edges, source_id)?;

    if cli.verbose {
        debug!(elapsed = ?start.elapsed(), "analyze");
    }

    maybe_write_mst(cli, &settings, &analysis.mst, &graph)?;

    match cli.format {
        OutputFormat::Human => human::output_human(cli, &graph, &analysis, settings.precision),
        OutputFormat::Json => json::output_json(&graph, &analysis)?,
        OutputFormat::Records => records::output_records(&graph, &analysis, settings.precision),
    }

    Ok(())
}
