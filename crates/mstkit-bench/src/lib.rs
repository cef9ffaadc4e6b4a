//! Random graph generator and benchmark utilities for mstkit.
//!
//! This crate provides deterministic generation of weighted graphs and
//! datasets for benchmarking and property-based testing of `mstkit-core`.

use std::path::PathBuf;

pub mod correctness;
pub mod generator;

pub use generator::{GeneratorConfig, SizeTier, generate_dataset, generate_graph};

/// Returns the path of a generated dataset fixture for `tier`.
///
/// Fixtures live under `target/bench-fixtures/` so they are gitignored and
/// shared between the `gen-datasets` binary and the benchmark harness.
pub fn dataset_fixture_path(tier: SizeTier) -> PathBuf {
    fixtures_dir().join(format!("{}.json", tier.name()))
}

/// Directory holding generated benchmark fixtures.
pub fn fixtures_dir() -> PathBuf {
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest
        .join("..")
        .join("..")
        .join("target")
        .join("bench-fixtures")
}
