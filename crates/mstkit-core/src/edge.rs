//! Weighted undirected edge.
use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Vertex identifier: a dense ordinal in `[0, vertex_count)`.
pub type VertexId = usize;

/// An undirected weighted edge between `u` and `v`.
///
/// Endpoint order carries no meaning; use [`Edge::other`] to walk from one
/// endpoint to the other. Edges are plain values (`Copy`) and are never
/// mutated after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// First endpoint.
    pub u: VertexId,
    /// Second endpoint.
    pub v: VertexId,
    /// Edge weight.
    pub w: f64,
}

impl Edge {
    /// Creates an edge `u -- v` with weight `w`.
    pub fn new(u: VertexId, v: VertexId, w: f64) -> Self {
        Self { u, v, w }
    }

    /// Returns the endpoint opposite to `vertex`.
    ///
    /// Returns `v` when `vertex == u` and `u` otherwise, so the result is only
    /// meaningful when `vertex` is one of the two endpoints.
    pub fn other(&self, vertex: VertexId) -> VertexId {
        if vertex == self.u { self.v } else { self.u }
    }

    /// Total order on weights, used by Kruskal's sort.
    ///
    /// Uses [`f64::total_cmp`], so NaN weights sort after every finite weight
    /// instead of poisoning the comparison.
    pub fn cmp_weight(&self, other: &Self) -> Ordering {
        self.w.total_cmp(&other.w)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {:.2}", self.u, self.v, self.w)
    }
}
