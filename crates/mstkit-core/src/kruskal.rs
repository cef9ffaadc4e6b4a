//! Kruskal's minimum spanning tree engine.
//!
//! Edges are copied and stable-sorted by weight, then accepted greedily
//! whenever their endpoints lie in different union-find sets. The loop stops
//! as soon as `vertices - 1` edges have been accepted. Edges are processed in
//! one global order, so on a disconnected graph the engine keeps collecting
//! edges from every component and returns a spanning forest.
use std::time::Instant;

use tracing::debug;

use crate::edge::Edge;
use crate::graph::Graph;
use crate::result::{COMPARISONS, FINDS, MstResult, OperationCounters, UNIONS};
use crate::union_find::UnionFind;

/// Runs Kruskal's algorithm on `graph`.
///
/// Counters: `comparisons` (edges examined), `finds` (union-find find steps,
/// see [`UnionFind::find`]), `unions` (union calls).
///
/// Never fails. A zero-vertex graph yields an empty result; a disconnected
/// graph yields fewer than `vertices - 1` edges.
pub fn run(graph: &Graph) -> MstResult {
    let span = tracing::debug_span!(
        "kruskal",
        vertices = graph.vertices(),
        edges = graph.edge_count()
    );
    let _guard = span.enter();

    let started = Instant::now();

    let mut sorted: Vec<Edge> = graph.edges().to_vec();
    sorted.sort_by(Edge::cmp_weight);

    let target = graph.vertices().checked_sub(1);
    let mut uf = UnionFind::new(graph.vertices());
    let mut selected: Vec<Edge> = Vec::with_capacity(target.unwrap_or(0));
    let mut comparisons: u64 = 0;

    for e in sorted {
        comparisons += 1;
        if uf.find(e.u) == uf.find(e.v) {
            continue;
        }
        if uf.union(e.u, e.v) {
            selected.push(e);
            if Some(selected.len()) == target {
                break;
            }
        }
    }

    let elapsed = started.elapsed();
    let operations: OperationCounters = [
        (COMPARISONS, comparisons),
        (FINDS, uf.finds()),
        (UNIONS, uf.unions()),
    ]
    .into_iter()
    .collect();

    let result = MstResult::new(selected, elapsed, operations);
    debug!(
        selected = result.edge_count(),
        total_cost = result.total_cost,
        elapsed_us = elapsed.as_micros() as u64,
        comparisons,
        finds = uf.finds(),
        unions = uf.unions(),
        "kruskal finished"
    );
    result
}
