use crate::commands::helpers::{mst_edges_json, path_labels};
use pipenet_core::error::Result;
use pipenet_core::graph::NetworkAnalysis;
use pipenet_core::ingest::EdgeList;

pub fn output_json(graph: &EdgeList, analysis: &NetworkAnalysis) -> Result<()> {
    let labels = &graph.node_map;
    let source = analysis.source();
    let farthest = analysis.farthest;

    let unreachable: Vec<&str> = (0..analysis.node_count)
        .filter(|&node| !analysis.shortest_paths.is_reachable(node))
        .map(|node| labels.label_or_unknown(node))
        .collect();

    let output = serde_json::json!({
        "nodes": graph.node_count(),
        "edges": graph.edge_count(),
        "mst": {
            "total_weight": analysis.mst.total_weight,
            "edges": mst_edges_json(&analysis.mst, labels),
            "connected": analysis.is_connected(),
            "components": analysis.mst.component_count(analysis.node_count),
        },
        "source": {
            "id": source,
            "label": labels.label_or_unknown(source),
        },
        "farthest": {
            "id": farthest.node,
            "label": labels.label_or_unknown(farthest.node),
            "distance": farthest.distance,
        },
        "path": path_labels(&analysis.path, labels),
        "unreachable": unreachable,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
