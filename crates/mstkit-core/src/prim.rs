//! Prim's minimum spanning tree engine.
//!
//! The tree grows from a start vertex. `key[v]` holds the weight of the
//! cheapest known edge linking `v` to the tree and `parent_edge[v]` that edge.
//! The priority structure is a [`BinaryHeap`] with lazy deletion: lowering a
//! key pushes a fresh entry, and popped entries whose key no longer matches
//! `key[v]` (or whose vertex already joined the tree) are dropped uncounted.
//!
//! When the cheapest live entry still has an infinite key, every remaining
//! vertex is unreachable from the start vertex and the engine stops with a
//! partial tree. Disconnection is not an error.
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Instant;

use tracing::debug;

use crate::edge::{Edge, VertexId};
use crate::graph::Graph;
use crate::result::{COMPARISONS, DECREASE_KEYS, EXTRACTS, MstResult, OperationCounters};

/// Heap entry ordered so that [`BinaryHeap`] pops the smallest key first.
///
/// Equal keys pop the lower vertex id first, which keeps runs deterministic.
#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    key: f64,
    vertex: VertexId,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .total_cmp(&self.key)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Runs Prim's algorithm on `graph`, growing the tree from `start`.
///
/// Counters: `comparisons` (incident edges examined towards vertices outside
/// the tree), `extracts` (live heap extractions, including the final one
/// that detects an unreachable remainder), `decreaseKeys` (key updates).
///
/// Equal-weight alternatives never replace an already recorded parent edge:
/// the first minimal edge discovered wins.
///
/// # Panics
///
/// Panics with an index fault if `start >= graph.vertices()` on a non-empty
/// graph. A zero-vertex graph has no valid start and yields an empty result.
pub fn run(graph: &Graph, start: VertexId) -> MstResult {
    let span = tracing::debug_span!(
        "prim",
        vertices = graph.vertices(),
        edges = graph.edge_count(),
        start
    );
    let _guard = span.enter();

    let started = Instant::now();
    let n = graph.vertices();

    let mut key = vec![f64::INFINITY; n];
    let mut in_tree = vec![false; n];
    let mut parent_edge: Vec<Option<Edge>> = vec![None; n];
    let mut selected: Vec<Edge> = Vec::with_capacity(n.saturating_sub(1));

    let mut comparisons: u64 = 0;
    let mut extracts: u64 = 0;
    let mut decrease_keys: u64 = 0;
    let mut reached: usize = 0;

    if n > 0 {
        key[start] = 0.0;
    }

    let mut heap: BinaryHeap<HeapEntry> = (0..n)
        .map(|vertex| HeapEntry {
            key: key[vertex],
            vertex,
        })
        .collect();

    while let Some(HeapEntry { key: popped, vertex: u }) = heap.pop() {
        if in_tree[u] || popped.total_cmp(&key[u]) != Ordering::Equal {
            continue;
        }
        extracts += 1;

        if key[u] == f64::INFINITY {
            debug!(reached, unreachable = n - reached, "prim stopped at unreachable vertices");
            break;
        }

        in_tree[u] = true;
        reached += 1;
        if let Some(e) = parent_edge[u] {
            selected.push(e);
        }

        for e in graph.adj(u) {
            let v = e.other(u);
            if in_tree[v] {
                continue;
            }
            comparisons += 1;
            if e.w < key[v] {
                key[v] = e.w;
                parent_edge[v] = Some(*e);
                heap.push(HeapEntry { key: e.w, vertex: v });
                decrease_keys += 1;
            }
        }
    }

    let elapsed = started.elapsed();
    let operations: OperationCounters = [
        (COMPARISONS, comparisons),
        (EXTRACTS, extracts),
        (DECREASE_KEYS, decrease_keys),
    ]
    .into_iter()
    .collect();

    let result = MstResult::new(selected, elapsed, operations);
    debug!(
        selected = result.edge_count(),
        total_cost = result.total_cost,
        elapsed_us = elapsed.as_micros() as u64,
        comparisons,
        extracts,
        decrease_keys,
        "prim finished"
    );
    result
}
