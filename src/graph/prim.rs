use crate::error::Error;
use crate::min_heap::MinHeap;
use crate::Result;

use super::{EdgeId, Graph, MinimumSpanningTree, VertexId};

/// Builds a minimum spanning tree with Prim's algorithm, growing the
/// tree from `start` one minimum-weight crossing edge at a time.
///
/// The candidate queue holds one entry per crossing edge. Entries whose
/// far endpoint has been absorbed in the meantime are stale and get
/// skipped on pop. If the graph is disconnected, the result only covers
/// the component of `start`; `MinimumSpanningTree::spans` exposes that.
pub fn minimum_spanning_tree(graph: &Graph, start: Option<&str>) -> Result<MinimumSpanningTree> {
    if graph.vertex_count() == 0 {
        return Ok(MinimumSpanningTree {
            edges: Vec::new(),
            total_weight: 0.0,
            vertices_reached: 0,
        });
    }
    let start = resolve_start_vertex(graph, start)?;

    let mut in_tree = vec![false; graph.vertex_count()];
    let mut candidates: MinHeap<(VertexId, Option<EdgeId>)> = MinHeap::new();
    let mut edges = Vec::new();
    let mut total_weight = 0.0;
    let mut vertices_reached = 0;

    candidates.push(0.0, (start, None));
    while !candidates.is_empty() && vertices_reached < graph.vertex_count() {
        let (weight, (vertex, via_edge)) = candidates.pop_min()?;
        if in_tree[vertex] {
            continue;
        }
        in_tree[vertex] = true;
        vertices_reached += 1;
        if let Some(edge_id) = via_edge {
            edges.push(edge_id);
            total_weight += weight;
        }
        for (neighbor, edge_weight, edge_id) in graph.neighbors(vertex) {
            if !in_tree[neighbor] {
                candidates.push(edge_weight, (neighbor, Some(edge_id)));
            }
        }
    }

    Ok(MinimumSpanningTree {
        edges,
        total_weight,
        vertices_reached,
    })
}

fn resolve_start_vertex(graph: &Graph, start: Option<&str>) -> Result<VertexId> {
    match start {
        Some(label) => graph
            .vertex_id(label)
            .ok_or_else(|| Error::UnknownVertex(label.to_owned())),
        // first inserted vertex
        None => Ok(0),
    }
}

#[cfg(test)]
mod tests {
    use super::minimum_spanning_tree;
    use crate::error::Error;
    use crate::graph::Graph;

    fn fixture_graph() -> Graph {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 4.0).unwrap();
        graph.add_edge("A", "C", 2.0).unwrap();
        graph.add_edge("B", "C", 1.0).unwrap();
        graph.add_edge("B", "D", 5.0).unwrap();
        graph.add_edge("C", "D", 8.0).unwrap();
        graph.add_edge("C", "E", 10.0).unwrap();
        graph.add_edge("D", "E", 2.0).unwrap();
        graph.add_edge("D", "F", 6.0).unwrap();
        graph.add_edge("E", "F", 3.0).unwrap();
        graph
    }

    #[test]
    fn fixture_tree_has_total_weight_thirteen() {
        let graph = fixture_graph();
        let tree = minimum_spanning_tree(&graph, None).unwrap();
        assert_eq!(tree.edges.len(), graph.vertex_count() - 1);
        assert_eq!(tree.total_weight, 13.0);
        assert!(tree.spans(&graph));
    }

    #[test]
    fn result_contains_no_cycle() {
        let graph = fixture_graph();
        let tree = minimum_spanning_tree(&graph, None).unwrap();
        let mut sets = crate::graph::disjoint_set::DisjointSet::new(graph.vertex_count());
        for &edge_id in &tree.edges {
            let edge = graph.edge(edge_id);
            assert!(sets.union(edge.u, edge.v), "tree edges must not close a cycle");
        }
    }

    #[test]
    fn disconnected_graph_yields_partial_tree() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 1.0).unwrap();
        graph.add_edge("C", "D", 1.0).unwrap();
        let tree = minimum_spanning_tree(&graph, Some("A")).unwrap();
        assert_eq!(tree.edges.len(), 1);
        assert_eq!(tree.vertices_reached, 2);
        assert!(!tree.spans(&graph));
    }

    #[test]
    fn empty_graph_yields_empty_tree() {
        let graph = Graph::new();
        let tree = minimum_spanning_tree(&graph, None).unwrap();
        assert!(tree.edges.is_empty());
        assert_eq!(tree.total_weight, 0.0);
        assert!(tree.spans(&graph));
    }

    #[test]
    fn unknown_start_vertex_is_rejected() {
        let graph = fixture_graph();
        let result = minimum_spanning_tree(&graph, Some("Z"));
        assert!(matches!(result, Err(Error::UnknownVertex(_))));
    }

    #[test]
    fn equal_weight_candidates_resolve_by_insertion_order() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 1.0).unwrap();
        graph.add_edge("A", "C", 1.0).unwrap();
        graph.add_edge("B", "C", 1.0).unwrap();
        let tree = minimum_spanning_tree(&graph, None).unwrap();
        // A--B was pushed before A--C, so it wins the first tie.
        assert_eq!(tree.edges, vec![0, 1]);
    }
}
