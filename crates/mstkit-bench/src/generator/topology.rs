//! Topology strategy: a random recursive spanning tree per component, plus
//! extra edges drawn inside components so the component count stays exact.

use mstkit_core::{EdgeSpec, GraphSpec};
use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::GeneratorConfig;

/// Builds a complete `GraphSpec` from the generator configuration.
pub fn build_graph_spec(config: &GeneratorConfig, rng: &mut StdRng) -> GraphSpec {
    let n = config.vertices;
    let name = format!("random-{}", config.seed);
    if n == 0 {
        return GraphSpec {
            name,
            vertices: 0,
            edges: Vec::new(),
        };
    }

    // Vertex labels are shuffled so components are not contiguous ranges.
    let mut labels: Vec<usize> = (0..n).collect();
    labels.shuffle(rng);

    let blocks = component_blocks(n, config.components.clamp(1, n));
    let extra = (n as f64 * config.extra_edge_factor.max(0.0)).round() as usize;
    let mut edges: Vec<EdgeSpec> = Vec::with_capacity(n + extra);

    for &(start, len) in &blocks {
        for i in 1..len {
            let parent = rng.gen_range(0..i);
            edges.push(EdgeSpec {
                u: labels[start + parent],
                v: labels[start + i],
                w: random_weight(config, rng),
            });
        }
    }

    let multi: Vec<(usize, usize)> = blocks.iter().copied().filter(|&(_, len)| len > 1).collect();
    if !multi.is_empty() {
        for _ in 0..extra {
            let (start, len) = multi[rng.gen_range(0..multi.len())];
            let a = rng.gen_range(0..len);
            let b = (a + rng.gen_range(1..len)) % len;
            edges.push(EdgeSpec {
                u: labels[start + a],
                v: labels[start + b],
                w: random_weight(config, rng),
            });
        }
    }

    edges.shuffle(rng);
    GraphSpec {
        name,
        vertices: n,
        edges,
    }
}

/// Splits `n` positions into `k` contiguous `(start, len)` blocks whose
/// lengths differ by at most one.
fn component_blocks(n: usize, k: usize) -> Vec<(usize, usize)> {
    let base = n / k;
    let rem = n % k;
    let mut start = 0;
    (0..k)
        .map(|i| {
            let len = base + usize::from(i < rem);
            let block = (start, len);
            start += len;
            block
        })
        .collect()
}

/// Draws a weight in `[min_weight, max_weight]`, rounded to two decimals.
fn random_weight(config: &GeneratorConfig, rng: &mut StdRng) -> f64 {
    let (lo, hi) = if config.min_weight <= config.max_weight {
        (config.min_weight, config.max_weight)
    } else {
        (config.max_weight, config.min_weight)
    };
    let w = if lo < hi { rng.gen_range(lo..=hi) } else { lo };
    (w * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn blocks_cover_all_positions() {
        let blocks = component_blocks(10, 3);
        assert_eq!(blocks, vec![(0, 4), (4, 3), (7, 3)]);
    }

    #[test]
    fn single_vertex_has_no_edges() {
        let config = GeneratorConfig {
            seed: 1,
            vertices: 1,
            extra_edge_factor: 3.0,
            min_weight: 1.0,
            max_weight: 2.0,
            components: 1,
        };
        let mut rng = StdRng::seed_from_u64(1);
        let spec = build_graph_spec(&config, &mut rng);
        assert_eq!(spec.vertices, 1);
        assert!(spec.edges.is_empty());
    }

    #[test]
    fn weights_are_rounded_and_in_range() {
        let config = GeneratorConfig {
            seed: 9,
            vertices: 40,
            extra_edge_factor: 1.5,
            min_weight: 0.5,
            max_weight: 3.0,
            components: 2,
        };
        let mut rng = StdRng::seed_from_u64(9);
        let spec = build_graph_spec(&config, &mut rng);
        assert_eq!(spec.edges.len(), 38 + 60);
        for e in &spec.edges {
            assert!((0.5..=3.0).contains(&e.w), "weight {}", e.w);
            assert!(((e.w * 100.0).round() - e.w * 100.0).abs() < 1e-9);
            assert_ne!(e.u, e.v);
        }
    }
}
