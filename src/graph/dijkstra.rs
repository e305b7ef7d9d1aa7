use crate::error::Error;
use crate::min_heap::MinHeap;
use crate::Result;

use super::{Graph, VertexId};

/// Distances and predecessors computed by a single Dijkstra run.
///
/// Vertices never reached keep an infinite distance and no
/// predecessor. Walking the predecessor chain from any reached vertex
/// ends at the source.
#[derive(Debug)]
pub struct ShortestPaths {
    pub source: VertexId,
    pub distance: Vec<f64>,
    pub predecessor: Vec<Option<VertexId>>,
}

impl ShortestPaths {
    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.distance[vertex].is_finite()
    }

    /// Reconstructs the path from the source to `vertex` by walking
    /// predecessors, or None if the vertex was never reached.
    pub fn path_to(&self, vertex: VertexId) -> Option<Vec<VertexId>> {
        if !self.is_reachable(vertex) {
            return None;
        }
        let mut path = vec![vertex];
        let mut current = vertex;
        while let Some(previous) = self.predecessor[current] {
            path.push(previous);
            current = previous;
        }
        path.reverse();
        Some(path)
    }
}

/// Computes single-source shortest paths with Dijkstra's algorithm.
///
/// All edge weights must be non-negative; the whole edge list is
/// checked before the first pop because correctness cannot be
/// guaranteed otherwise. Stale queue entries left behind by relaxations
/// are skipped via the finalized mask (lazy deletion).
pub fn shortest_paths(graph: &Graph, source: &str) -> Result<ShortestPaths> {
    for edge_id in graph.edge_ids() {
        let edge = graph.edge(edge_id);
        if edge.weight < 0.0 {
            return Err(Error::NegativeEdgeWeight(
                graph.label(edge.u).to_owned(),
                graph.label(edge.v).to_owned(),
                edge.weight,
            ));
        }
    }
    let source = graph
        .vertex_id(source)
        .ok_or_else(|| Error::UnknownVertex(source.to_owned()))?;

    let mut distance = vec![f64::INFINITY; graph.vertex_count()];
    let mut predecessor = vec![None; graph.vertex_count()];
    let mut finalized = vec![false; graph.vertex_count()];
    distance[source] = 0.0;

    let mut queue = MinHeap::new();
    queue.push(0.0, source);
    while !queue.is_empty() {
        let (vertex_distance, vertex) = queue.pop_min()?;
        if finalized[vertex] {
            continue;
        }
        finalized[vertex] = true;
        for (neighbor, weight, _) in graph.neighbors(vertex) {
            if finalized[neighbor] {
                continue;
            }
            let candidate = vertex_distance + weight;
            if candidate < distance[neighbor] {
                distance[neighbor] = candidate;
                predecessor[neighbor] = Some(vertex);
                queue.push(candidate, neighbor);
            }
        }
    }

    Ok(ShortestPaths {
        source,
        distance,
        predecessor,
    })
}

#[cfg(test)]
mod tests {
    use super::shortest_paths;
    use crate::error::Error;
    use crate::graph::{Edge, Graph};

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
    fn source_distance_is_zero_with_no_predecessor() {
        let graph = fixture_graph();
        let paths = shortest_paths(&graph, "A").unwrap();
        assert_eq!(paths.distance[paths.source], 0.0);
        assert_eq!(paths.predecessor[paths.source], None);
    }

    #[test]
    fn fixture_distances_match_reference_computation() {
        let graph = fixture_graph();
        let paths = shortest_paths(&graph, "A").unwrap();
        let distance_to = |label: &str| paths.distance[graph.vertex_id(label).unwrap()];
        assert_eq!(distance_to("B"), 3.0);
        assert_eq!(distance_to("C"), 2.0);
        assert_eq!(distance_to("D"), 8.0);
        assert_eq!(distance_to("E"), 10.0);
        assert_eq!(distance_to("F"), 13.0);
    }

    #[test]
    fn predecessor_chain_reproduces_distances() {
        let graph = fixture_graph();
        let paths = shortest_paths(&graph, "A").unwrap();
        for vertex in 0..graph.vertex_count() {
            let path = paths.path_to(vertex).expect("fixture graph is connected");
            let mut walked = 0.0;
            for pair in path.windows(2) {
                let weight = graph
                    .neighbors(pair[0])
                    .filter(|&(neighbor, _, _)| neighbor == pair[1])
                    .map(|(_, weight, _)| weight)
                    .fold(f64::INFINITY, f64::min);
                walked += weight;
            }
            assert_eq!(walked, paths.distance[vertex]);
        }
    }

    #[test]
    fn unreachable_vertices_keep_infinite_distance() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 1.0).unwrap();
        graph.add_vertex("Z");
        let paths = shortest_paths(&graph, "A").unwrap();
        let z = graph.vertex_id("Z").unwrap();
        assert!(!paths.is_reachable(z));
        assert_eq!(paths.predecessor[z], None);
        assert_eq!(paths.path_to(z), None);
    }

    #[test]
    fn negative_edge_weight_is_rejected() {
        // Simulates a graph handed over by a collaborator that does not
        // validate weights on construction.
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 1.0).unwrap();
        graph.add_edge("B", "C", 2.0).unwrap();
        graph.edges[1] = Edge {
            weight: -2.0,
            ..graph.edges[1]
        };
        let result = shortest_paths(&graph, "A");
        assert!(matches!(result, Err(Error::NegativeEdgeWeight(_, _, _))));
    }

    #[test]
    fn unknown_source_vertex_is_rejected() {
        let graph = fixture_graph();
        let result = shortest_paths(&graph, "Z");
        assert!(matches!(result, Err(Error::UnknownVertex(_))));
    }
}
