//! Undirected weighted graph used as read-only input by both MST engines.
//!
//! The graph keeps two views of the same edges:
//! 1. **Master list**: every edge in insertion order, consumed by Kruskal.
//! 2. **Adjacency lists**: per-vertex incident edges, consumed by Prim.
//!
//! Each added edge is stored once in the master list and once in each
//! endpoint's adjacency list, so it appears exactly twice across adjacency
//! (a self-loop appears twice in its single vertex's list).
//!
//! There is no validation of vertex ids here. Callers hand in trusted input;
//! see [`crate::dataset`] for the validating loader.
use crate::edge::{Edge, VertexId};

/// A weighted undirected multigraph over the vertices `0..vertices()`.
///
/// Built once through [`Graph::add_edge`] and then shared read-only. The type
/// holds no interior mutability, so `&Graph` can be sent to several threads
/// running engines at the same time.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// Creates a graph with `vertex_count` isolated vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    /// Returns the fixed vertex count.
    pub fn vertices(&self) -> usize {
        self.vertex_count
    }

    /// Returns the number of edges added so far.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Appends `e` to the edge list and to both endpoints' adjacency lists.
    ///
    /// # Panics
    ///
    /// Panics with an index fault if either endpoint is `>= vertices()`.
    /// Out-of-range ids are a caller logic error.
    pub fn add_edge(&mut self, e: Edge) {
        self.adjacency[e.u].push(e);
        self.adjacency[e.v].push(e);
        self.edges.push(e);
    }

    /// Returns every edge in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the edges incident to `v`, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `v >= vertices()`.
    pub fn adj(&self, v: VertexId) -> &[Edge] {
        &self.adjacency[v]
    }

    /// Returns the sum of all edge weights.
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(|e| e.w).sum()
    }
}
