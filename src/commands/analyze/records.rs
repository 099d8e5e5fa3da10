use crate::commands::helpers::path_labels;
use pipenet_core::format::{escape_quotes, format_distance};
use pipenet_core::graph::NetworkAnalysis;
use pipenet_core::ingest::EdgeList;

/// Line-oriented output: one `H` header, `E` per MST edge, then `F` and `P`
pub fn output_records(graph: &EdgeList, analysis: &NetworkAnalysis, precision: usize) {
    let labels = &graph.node_map;
    let farthest = analysis.farthest;

    println!(
        "H pipenet=1 records=1 mode=analyze nodes={} edges={} mst_edges={} total={} connected={}",
        graph.node_count(),
        graph.edge_count(),
        analysis.mst.edge_count(),
        format_distance(analysis.mst.total_weight, precision),
        analysis.is_connected()
    );

    for edge in &analysis.mst.edges {
        println!(
            "E \"{}\" \"{}\" {}",
            escape_quotes(labels.label_or_unknown(edge.u)),
            escape_quotes(labels.label_or_unknown(edge.v)),
            format_distance(edge.weight, precision)
        );
    }

    println!(
        "F \"{}\" \"{}\" {}",
        escape_quotes(labels.label_or_unknown(analysis.source())),
        escape_quotes(labels.label_or_unknown(farthest.node)),
        format_distance(farthest.distance, precision)
    );

    let path: Vec<String> = path_labels(&analysis.path, labels)
        .into_iter()
        .map(|label| format!("\"{}\"", escape_quotes(label)))
        .collect();
    println!("P {}", path.join(" "));
}
