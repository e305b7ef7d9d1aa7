use crate::Result;

use super::disjoint_set::DisjointSet;
use super::{Graph, MinimumSpanningTree};

/// Builds a minimum spanning tree with Kruskal's algorithm: consider
/// edges in ascending weight order and keep every edge that joins two
/// components.
///
/// The sort is stable, so equal-weight edges are considered in
/// insertion order. On a disconnected graph the loop runs out of edges
/// before collecting |V| - 1 of them and the result is the maximal
/// spanning forest.
pub fn minimum_spanning_tree(graph: &Graph) -> Result<MinimumSpanningTree> {
    if graph.vertex_count() == 0 {
        return Ok(MinimumSpanningTree {
            edges: Vec::new(),
            total_weight: 0.0,
            vertices_reached: 0,
        });
    }

    let mut edge_ids: Vec<_> = graph.edge_ids().collect();
    edge_ids.sort_by(|&a, &b| graph.edge(a).weight.total_cmp(&graph.edge(b).weight));

    let mut sets = DisjointSet::new(graph.vertex_count());
    let mut edges = Vec::new();
    let mut total_weight = 0.0;

    for edge_id in edge_ids {
        let edge = graph.edge(edge_id);
        if sets.union(edge.u, edge.v) {
            edges.push(edge_id);
            total_weight += edge.weight;
            if edges.len() == graph.vertex_count() - 1 {
                break;
            }
        }
    }

    Ok(MinimumSpanningTree {
        edges,
        total_weight,
        vertices_reached: graph.vertex_count(),
    })
}
