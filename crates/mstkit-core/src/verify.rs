//! Structural checks on selected edge sets.
//!
//! These back the correctness properties of both engines: a selected set
//! must never close a cycle, and on a connected input it must touch every
//! vertex in a single component.
use crate::edge::Edge;
use crate::graph::Graph;
use crate::union_find::UnionFind;

/// Returns `true` if `edges` contain a cycle over the vertices `0..vertices`.
///
/// A set with `vertices` or more edges always has one. Self-loops and
/// repeated endpoint pairs count as cycles.
///
/// # Panics
///
/// Panics if an endpoint is `>= vertices`.
pub fn has_cycle(edges: &[Edge], vertices: usize) -> bool {
    if !edges.is_empty() && edges.len() >= vertices {
        return true;
    }
    let mut uf = UnionFind::new(vertices);
    edges.iter().any(|e| !uf.union(e.u, e.v))
}

/// Returns `true` if `edges` form a single spanning tree over
/// `0..vertices`: exactly `vertices - 1` edges, no cycle.
///
/// `n - 1` acyclic edges over `n` vertices always connect them, so no
/// separate traversal is needed.
pub fn is_spanning_tree(edges: &[Edge], vertices: usize) -> bool {
    match vertices.checked_sub(1) {
        Some(expected) => edges.len() == expected && !has_cycle(edges, vertices),
        None => false,
    }
}

/// Returns the number of connected components of `graph` (isolated vertices
/// included).
pub fn component_count(graph: &Graph) -> usize {
    let mut uf = UnionFind::new(graph.vertices());
    for e in graph.edges() {
        uf.union(e.u, e.v);
    }
    uf.set_count()
}

/// Returns `true` if `graph` has at most one connected component.
pub fn is_connected(graph: &Graph) -> bool {
    component_count(graph) <= 1
}

/// Returns the number of components in the forest spanned by `edges`
/// over `0..vertices`.
pub fn forest_components(edges: &[Edge], vertices: usize) -> usize {
    let mut uf = UnionFind::new(vertices);
    for e in edges {
        uf.union(e.u, e.v);
    }
    uf.set_count()
}
