//! Output shape shared by both MST engines.
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::edge::{Edge, VertexId};
use crate::graph::Graph;
use crate::{kruskal, prim};

/// Absolute tolerance used when comparing spanning tree costs.
pub const COST_TOLERANCE: f64 = 1e-3;

/// Counter key: edges examined (both engines).
pub const COMPARISONS: &str = "comparisons";
/// Counter key: union-find find steps (Kruskal).
pub const FINDS: &str = "finds";
/// Counter key: union-find union calls (Kruskal).
pub const UNIONS: &str = "unions";
/// Counter key: live priority-queue extractions (Prim).
pub const EXTRACTS: &str = "extracts";
/// Counter key: key decreases / reinsertions (Prim).
pub const DECREASE_KEYS: &str = "decreaseKeys";

/// Returns `true` when two costs agree within [`COST_TOLERANCE`].
pub fn costs_match(a: f64, b: f64) -> bool {
    (a - b).abs() < COST_TOLERANCE
}

/// Named operation counters reported by an engine run.
///
/// Keys are ordered, so serialized output and `Display` are stable across
/// runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperationCounters(BTreeMap<String, u64>);

impl OperationCounters {
    /// Creates an empty counter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, replacing any previous value.
    pub fn insert(&mut self, key: &str, value: u64) {
        self.0.insert(key.to_owned(), value);
    }

    /// Returns the value recorded under `key`, if any.
    pub fn get(&self, key: &str) -> Option<u64> {
        self.0.get(key).copied()
    }

    /// Sum of all counters.
    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    /// Iterates `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of distinct counters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no counter has been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, u64)> for OperationCounters {
    fn from_iter<I: IntoIterator<Item = (&'a str, u64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.to_owned(), v)).collect())
    }
}

impl fmt::Display for OperationCounters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}={value}")?;
        }
        f.write_str("}")
    }
}

/// The result of one MST engine invocation.
///
/// Produced fresh by every call and owned by the caller. `total_cost` is
/// always the sum of `selected_edges` weights.
#[derive(Debug, Clone, PartialEq)]
pub struct MstResult {
    /// Selected edges in the order the engine accepted them.
    pub selected_edges: Vec<Edge>,
    /// Sum of the selected edge weights.
    pub total_cost: f64,
    /// Wall-clock time spent inside the algorithm body.
    pub elapsed: Duration,
    /// Engine-specific operation counters.
    pub operations: OperationCounters,
}

impl MstResult {
    /// Builds a result from the selected edges, summing their weights.
    pub fn new(selected_edges: Vec<Edge>, elapsed: Duration, operations: OperationCounters) -> Self {
        let total_cost = selected_edges.iter().map(|e| e.w).sum();
        Self {
            selected_edges,
            total_cost,
            elapsed,
            operations,
        }
    }

    /// Number of selected edges.
    pub fn edge_count(&self) -> usize {
        self.selected_edges.len()
    }

    /// Elapsed time in fractional milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    /// Returns `true` when the result has exactly `vertices - 1` edges.
    ///
    /// This is the size check callers use to detect a disconnected input; it
    /// does not re-verify acyclicity (see [`crate::verify`]).
    pub fn is_spanning_tree(&self, vertices: usize) -> bool {
        vertices.checked_sub(1) == Some(self.selected_edges.len())
    }
}

/// The two engines, selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Prim's algorithm, grown from a start vertex.
    Prim,
    /// Kruskal's algorithm over globally sorted edges.
    Kruskal,
}

impl Algorithm {
    /// Both engines, in report order.
    pub const ALL: [Algorithm; 2] = [Algorithm::Prim, Algorithm::Kruskal];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Prim => "Prim",
            Algorithm::Kruskal => "Kruskal",
        }
    }

    /// Runs this engine on `graph`. Kruskal ignores `start`.
    pub fn run(self, graph: &Graph, start: VertexId) -> MstResult {
        match self {
            Algorithm::Prim => prim::run(graph, start),
            Algorithm::Kruskal => kruskal::run(graph),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
