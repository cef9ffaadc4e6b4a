//! Random weighted graph generator.
//!
//! Produces valid [`GraphSpec`] instances whose component structure is known
//! up front, for benchmarking and for checking the engines against each
//! other.

pub mod topology;

use mstkit_core::{GraphDataset, GraphSpec};
use rand::SeedableRng;
use rand::rngs::StdRng;

use topology::build_graph_spec;

/// Configuration for the graph generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of vertices.
    pub vertices: usize,
    /// Extra edges per vertex on top of the spanning trees.
    pub extra_edge_factor: f64,
    /// Smallest edge weight.
    pub min_weight: f64,
    /// Largest edge weight.
    pub max_weight: f64,
    /// Number of connected components (clamped to `1..=vertices`).
    pub components: usize,
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 50 vertices, ~150 edges
    Small,
    /// 500 vertices, ~2000 edges
    Medium,
    /// 2000 vertices, ~10000 edges
    Large,
    /// 10000 vertices, ~60000 edges
    XLarge,
}

impl SizeTier {
    /// All tiers, smallest first.
    pub const ALL: [SizeTier; 4] = [
        SizeTier::Small,
        SizeTier::Medium,
        SizeTier::Large,
        SizeTier::XLarge,
    ];

    /// Lowercase tier name, used for fixture files and graph names.
    pub fn name(self) -> &'static str {
        match self {
            SizeTier::Small => "small",
            SizeTier::Medium => "medium",
            SizeTier::Large => "large",
            SizeTier::XLarge => "xlarge",
        }
    }

    /// Returns the default `GeneratorConfig` for this size tier.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        let (vertices, extra_edge_factor) = match self {
            SizeTier::Small => (50, 2.0),
            SizeTier::Medium => (500, 3.0),
            SizeTier::Large => (2_000, 4.0),
            SizeTier::XLarge => (10_000, 5.0),
        };
        GeneratorConfig {
            seed,
            vertices,
            extra_edge_factor,
            min_weight: 1.0,
            max_weight: 100.0,
            components: 1,
        }
    }
}

/// Generates a single graph from the given configuration.
///
/// All randomness is deterministic, seeded from `config.seed`.
pub fn generate_graph(config: &GeneratorConfig) -> GraphSpec {
    let mut rng = StdRng::seed_from_u64(config.seed);
    build_graph_spec(config, &mut rng)
}

/// Generates `count` connected graphs of one tier, named `<tier>-<i>`.
///
/// Graph `i` is seeded with `seed + i`.
pub fn generate_dataset(tier: SizeTier, count: usize, seed: u64) -> GraphDataset {
    let graphs = (0..count)
        .map(|i| {
            let mut spec = generate_graph(&tier.config(seed.wrapping_add(i as u64)));
            spec.name = format!("{}-{i}", tier.name());
            spec
        })
        .collect();
    GraphDataset { graphs }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use mstkit_core::component_count;

    use super::*;

    #[test]
    fn same_seed_same_graph() {
        let a = generate_graph(&SizeTier::Small.config(7));
        let b = generate_graph(&SizeTier::Small.config(7));
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        let a = generate_graph(&SizeTier::Small.config(7));
        let b = generate_graph(&SizeTier::Small.config(8));
        assert_ne!(a.edges, b.edges);
    }

    #[test]
    fn dataset_names_follow_tier() {
        let ds = generate_dataset(SizeTier::Small, 3, 1);
        let names: Vec<&str> = ds.graphs.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["small-0", "small-1", "small-2"]);
    }

    #[test]
    fn requested_components_are_produced() {
        let config = GeneratorConfig {
            components: 4,
            ..SizeTier::Small.config(3)
        };
        let spec = generate_graph(&config);
        let graph = spec.build().expect("generated graph is valid");
        assert_eq!(component_count(&graph), 4);
    }
}
