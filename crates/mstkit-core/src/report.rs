//! Side-by-side comparison records and their JSON / CSV serializations.
//!
//! One [`ComparisonRecord`] per graph holds a condensed [`AlgorithmSummary`]
//! for each engine. Records serialize to a `{"results": [...]}` JSON document
//! with camelCase keys and to a flat CSV table with one row per graph.
use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::edge::VertexId;
use crate::graph::Graph;
use crate::result::{MstResult, OperationCounters, costs_match};
use crate::{kruskal, prim};

/// Errors raised while writing a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The CSV encoder failed.
    #[error("failed to write CSV report: {0}")]
    Csv(#[from] csv::Error),
    /// JSON serialization failed.
    #[error("failed to write JSON report: {0}")]
    Json(#[from] serde_json::Error),
    /// The underlying writer failed.
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// CSV header, one column per field of a [`ComparisonRecord`] row.
pub const CSV_HEADER: [&str; 12] = [
    "Graph Name",
    "Vertices",
    "Edges",
    "Prim Total Cost",
    "Prim Time (ms)",
    "Prim Total Operations",
    "Kruskal Total Cost",
    "Kruskal Time (ms)",
    "Kruskal Total Operations",
    "Costs Match",
    "Faster Algorithm",
    "Time Difference (ms)",
];

/// Condensed view of one engine run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmSummary {
    /// Sum of selected edge weights.
    pub total_cost: f64,
    /// Elapsed time in milliseconds.
    pub time_ms: f64,
    /// Number of selected edges.
    pub mst_edges: usize,
    /// Engine-specific operation counters.
    pub operations: OperationCounters,
}

impl AlgorithmSummary {
    /// Sum of all operation counters.
    pub fn total_operations(&self) -> u64 {
        self.operations.total()
    }
}

impl From<&MstResult> for AlgorithmSummary {
    fn from(r: &MstResult) -> Self {
        Self {
            total_cost: r.total_cost,
            time_ms: r.elapsed_ms(),
            mst_edges: r.edge_count(),
            operations: r.operations.clone(),
        }
    }
}

/// Which engine ran faster on a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Faster {
    /// Prim took less time.
    Prim,
    /// Kruskal took less time.
    Kruskal,
    /// Both took exactly the same time.
    Equal,
}

impl Faster {
    /// Label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Faster::Prim => "Prim",
            Faster::Kruskal => "Kruskal",
            Faster::Equal => "Equal",
        }
    }
}

/// Prim and Kruskal results for one named graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRecord {
    /// Graph name from the dataset.
    pub graph_name: String,
    /// Vertex count.
    pub vertices: usize,
    /// Edge count.
    pub edges: usize,
    /// Prim summary.
    pub prim: AlgorithmSummary,
    /// Kruskal summary.
    pub kruskal: AlgorithmSummary,
}

impl ComparisonRecord {
    /// Assembles a record from two finished runs.
    pub fn new(name: impl Into<String>, graph: &Graph, prim: &MstResult, kruskal: &MstResult) -> Self {
        Self {
            graph_name: name.into(),
            vertices: graph.vertices(),
            edges: graph.edge_count(),
            prim: prim.into(),
            kruskal: kruskal.into(),
        }
    }

    /// Returns `true` when both costs agree within the cost tolerance.
    pub fn costs_match(&self) -> bool {
        costs_match(self.prim.total_cost, self.kruskal.total_cost)
    }

    /// Returns `true` when both engines selected exactly `vertices - 1`
    /// edges.
    pub fn edge_counts_spanning(&self) -> bool {
        let expected = self.vertices.checked_sub(1);
        expected == Some(self.prim.mst_edges) && expected == Some(self.kruskal.mst_edges)
    }

    /// The engine with the smaller elapsed time.
    pub fn faster(&self) -> Faster {
        match self.prim.time_ms.total_cmp(&self.kruskal.time_ms) {
            std::cmp::Ordering::Less => Faster::Prim,
            std::cmp::Ordering::Greater => Faster::Kruskal,
            std::cmp::Ordering::Equal => Faster::Equal,
        }
    }

    /// Absolute difference between the two elapsed times, in milliseconds.
    pub fn time_difference_ms(&self) -> f64 {
        (self.prim.time_ms - self.kruskal.time_ms).abs()
    }

    fn csv_row(&self) -> [String; 12] {
        [
            self.graph_name.clone(),
            self.vertices.to_string(),
            self.edges.to_string(),
            format!("{:.2}", self.prim.total_cost),
            format!("{:.3}", self.prim.time_ms),
            self.prim.total_operations().to_string(),
            format!("{:.2}", self.kruskal.total_cost),
            format!("{:.3}", self.kruskal.time_ms),
            self.kruskal.total_operations().to_string(),
            if self.costs_match() { "Yes" } else { "No" }.to_owned(),
            self.faster().label().to_owned(),
            format!("{:.3}", self.time_difference_ms()),
        ]
    }
}

/// Runs both engines on `graph` and condenses the outcome.
///
/// Prim starts from `start`. The two runs share nothing but the read-only
/// graph.
pub fn compare(name: &str, graph: &Graph, start: VertexId) -> ComparisonRecord {
    let prim_result = prim::run(graph, start);
    let kruskal_result = kruskal::run(graph);
    ComparisonRecord::new(name, graph, &prim_result, &kruskal_result)
}

#[derive(Serialize)]
struct ReportDocument<'a> {
    results: &'a [ComparisonRecord],
}

/// Serializes `records` as a pretty-printed `{"results": [...]}` document.
///
/// # Errors
///
/// Returns [`ReportError`] if serialization or the writer fails.
pub fn write_json<W: Write>(writer: &mut W, records: &[ComparisonRecord]) -> Result<(), ReportError> {
    serde_json::to_writer_pretty(&mut *writer, &ReportDocument { results: records })?;
    writeln!(writer)?;
    Ok(())
}

/// Writes `records` as CSV with [`CSV_HEADER`] as the first row.
///
/// Costs carry two decimals, times three.
///
/// # Errors
///
/// Returns [`ReportError`] if encoding or the writer fails.
pub fn write_csv<W: Write>(writer: W, records: &[ComparisonRecord]) -> Result<(), ReportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADER)?;
    for record in records {
        csv_writer.write_record(record.csv_row())?;
    }
    csv_writer.flush()?;
    Ok(())
}
