#![deny(clippy::print_stdout, clippy::print_stderr)]

//! Minimum spanning tree engines over undirected weighted graphs.
//!
//! [`kruskal::run`] and [`prim::run`] both take a read-only [`Graph`] and
//! return a fresh [`MstResult`] with the selected edges, their total cost,
//! the elapsed time and engine-specific operation counters. On disconnected
//! input Kruskal returns a minimum spanning forest and Prim a tree over the
//! start vertex's component only.

pub mod dataset;
pub mod edge;
pub mod graph;
pub mod kruskal;
pub mod prim;
pub mod report;
pub mod result;
pub mod union_find;
pub mod verify;

pub use dataset::{DatasetError, EdgeSpec, GraphDataset, GraphSpec, parse_dataset};
pub use edge::{Edge, VertexId};
pub use graph::Graph;
pub use report::{
    AlgorithmSummary, CSV_HEADER, ComparisonRecord, Faster, ReportError, compare, write_csv,
    write_json,
};
pub use result::{
    Algorithm, COMPARISONS, COST_TOLERANCE, DECREASE_KEYS, EXTRACTS, FINDS, MstResult,
    OperationCounters, UNIONS, costs_match,
};
pub use union_find::UnionFind;
pub use verify::{component_count, forest_components, has_cycle, is_connected, is_spanning_tree};

/// Returns the current version of the mstkit-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn version_is_semver() {
        let v = version();
        let parts: Vec<&str> = v.split('.').collect();
        assert_eq!(parts.len(), 3, "version should have 3 parts: {v}");
        for part in parts {
            part.parse::<u32>().expect("each part should be a number");
        }
    }
}
