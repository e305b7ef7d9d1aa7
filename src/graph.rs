use std::collections::HashMap;

use crate::error::Error;
use crate::Result;

pub mod csv_parser;
pub mod dijkstra;
pub mod disjoint_set;
pub mod kruskal;
pub mod prim;

pub type VertexId = usize;
pub type EdgeId = usize;

/// An undirected weighted edge between two vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub u: VertexId,
    pub v: VertexId,
    pub weight: f64,
}

impl Edge {
    /// Given one endpoint of the edge, returns the other one.
    pub fn opposite(&self, vertex: VertexId) -> VertexId {
        if vertex == self.u {
            self.v
        } else {
            self.u
        }
    }
}

/// An undirected weighted graph.
///
/// Vertex labels are interned to dense ids in first-insertion order,
/// which makes every traversal order deterministic. Edges keep their
/// insertion order as well; parallel edges are allowed and treated
/// independently.
#[derive(Debug, Default)]
pub struct Graph {
    labels: Vec<String>,
    ids_by_label: HashMap<String, VertexId>,
    pub(crate) edges: Vec<Edge>,
    adjacency: Vec<Vec<EdgeId>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a vertex and returns its id. Inserting an already known
    /// label is a no-op that returns the existing id.
    pub fn add_vertex(&mut self, label: &str) -> VertexId {
        if let Some(&id) = self.ids_by_label.get(label) {
            return id;
        }
        let id = self.labels.len();
        self.labels.push(label.to_owned());
        self.ids_by_label.insert(label.to_owned(), id);
        self.adjacency.push(Vec::new());
        id
    }

    /// Inserts an undirected edge, creating unknown endpoints on the fly.
    ///
    /// Self-loops and negative or non-finite weights are rejected.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64) -> Result<EdgeId> {
        if from == to {
            return Err(Error::SelfLoopEdge(from.to_owned()));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::InvalidEdgeWeight(
                from.to_owned(),
                to.to_owned(),
                weight,
            ));
        }
        let u = self.add_vertex(from);
        let v = self.add_vertex(to);
        let edge_id = self.edges.len();
        self.edges.push(Edge { u, v, weight });
        self.adjacency[u].push(edge_id);
        self.adjacency[v].push(edge_id);
        Ok(edge_id)
    }

    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn label(&self, vertex: VertexId) -> &str {
        &self.labels[vertex]
    }

    pub fn vertex_id(&self, label: &str) -> Option<VertexId> {
        self.ids_by_label.get(label).copied()
    }

    pub fn edge(&self, edge_id: EdgeId) -> &Edge {
        &self.edges[edge_id]
    }

    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> {
        0..self.edges.len()
    }

    /// Iterates over the neighbors of a vertex in edge-insertion order,
    /// yielding the adjacent vertex, the edge weight and the edge id.
    pub fn neighbors(&self, vertex: VertexId) -> impl Iterator<Item = (VertexId, f64, EdgeId)> + '_ {
        self.adjacency[vertex].iter().map(move |&edge_id| {
            let edge = &self.edges[edge_id];
            (edge.opposite(vertex), edge.weight, edge_id)
        })
    }
}

/// Result of an MST construction.
///
/// For a disconnected graph this holds the maximal acyclic forest the
/// builder could reach. Callers that require a full spanning tree
/// check `spans` before using the result.
#[derive(Debug)]
pub struct MinimumSpanningTree {
    pub edges: Vec<EdgeId>,
    pub total_weight: f64,
    pub vertices_reached: usize,
}

impl MinimumSpanningTree {
    /// Whether the result is a spanning tree of the whole graph.
    /// A tree over |V| vertices always has |V| - 1 edges.
    pub fn spans(&self, graph: &Graph) -> bool {
        graph.vertex_count() == 0 || self.edges.len() == graph.vertex_count() - 1
    }
}
