use crate::cli::Cli;
use crate::commands::helpers::path_labels;
use pipenet_core::format::{format_distance, format_path};
use pipenet_core::graph::NetworkAnalysis;
use pipenet_core::ingest::EdgeList;

pub fn output_human(cli: &Cli, graph: &EdgeList, analysis: &NetworkAnalysis, precision: usize) {
    let labels = &graph.node_map;
    let source = analysis.source();
    let farthest = analysis.farthest;

    println!("Nodes: {}, edges: {}", graph.node_count(), graph.edge_count());
    println!(
        "MST total cost: {}",
        format_distance(analysis.mst.total_weight, precision)
    );
    println!("Source: {} ({})", source, labels.label_or_unknown(source));
    println!(
        "Farthest node: {} ({})",
        farthest.node,
        labels.label_or_unknown(farthest.node)
    );
    println!(
        "Farthest latency: {}",
        format_distance(farthest.distance, precision)
    );
    println!("Path: {}", format_path(&path_labels(&analysis.path, labels)));

    if !analysis.is_connected() && !cli.quiet {
        let unreachable = analysis.node_count - analysis.shortest_paths.reachable_count();
        println!();
        println!(
            "Network is disconnected: {} components, {} node(s) unreachable from the source",
            analysis.mst.component_count(analysis.node_count),
            unreachable
        );
    }
}
