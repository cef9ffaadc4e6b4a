//! Post-run invariant tests using generated data.
#![allow(clippy::expect_used, clippy::panic)]

use mstkit_bench::correctness;
use mstkit_bench::{GeneratorConfig, SizeTier, generate_graph};
use mstkit_core::{Algorithm, Edge, Graph, MstResult, OperationCounters, kruskal, prim};

fn medium_graph() -> Graph {
    generate_graph(&SizeTier::Medium.config(42))
        .build()
        .expect("builds")
}

fn forest_graph(components: usize) -> Graph {
    generate_graph(&GeneratorConfig {
        components,
        ..SizeTier::Small.config(11)
    })
    .build()
    .expect("builds")
}

#[test]
fn kruskal_is_spanning_forest() {
    let g = medium_graph();
    let r = kruskal::run(&g);
    correctness::check_spanning_forest(&g, &r).expect("spanning forest");
    assert_eq!(r.edge_count(), g.vertices() - 1);
}

#[test]
fn prim_is_spanning_tree_on_connected_graph() {
    let g = medium_graph();
    let r = prim::run(&g, 0);
    correctness::check_spanning_forest(&g, &r).expect("spanning tree");
    correctness::check_start_component(&g, 0, &r).expect("start component");
}

#[test]
fn engines_agree_with_each_other_and_reference() {
    for seed in [1, 2, 3, 42] {
        let g = generate_graph(&SizeTier::Small.config(seed))
            .build()
            .expect("builds");
        let p = prim::run(&g, 0);
        let k = kruskal::run(&g);
        correctness::check_costs_agree(&p, &k).expect("costs agree");
        correctness::check_reference_cost(&g, &k).expect("kruskal matches reference");
        correctness::check_reference_cost(&g, &p).expect("prim matches reference");
    }
}

#[test]
fn kruskal_covers_every_component() {
    let g = forest_graph(5);
    let r = kruskal::run(&g);
    correctness::check_spanning_forest(&g, &r).expect("spanning forest");
    correctness::check_reference_cost(&g, &r).expect("reference cost");
    assert_eq!(r.edge_count(), g.vertices() - 5);
}

#[test]
fn prim_covers_only_start_component() {
    let g = forest_graph(5);
    let r = prim::run(&g, 3);
    correctness::check_start_component(&g, 3, &r).expect("start component");
    assert!(correctness::check_spanning_forest(&g, &r).is_err());
    assert!(correctness::check_costs_agree(&r, &kruskal::run(&g)).is_err());
}

#[test]
fn counter_bounds_hold() {
    for components in [1, 3] {
        let g = forest_graph(components);
        for algorithm in Algorithm::ALL {
            let r = algorithm.run(&g, 0);
            correctness::check_counter_bounds(algorithm, &g, &r)
                .unwrap_or_else(|e| panic!("{} on {components} components: {e}", algorithm.name()));
        }
    }
}

#[test]
fn checker_rejects_cycle() {
    let mut g = Graph::new(3);
    g.add_edge(Edge::new(0, 1, 1.0));
    g.add_edge(Edge::new(1, 2, 1.0));
    g.add_edge(Edge::new(0, 2, 1.0));
    let bogus = MstResult::new(
        g.edges().to_vec(),
        std::time::Duration::ZERO,
        OperationCounters::new(),
    );
    let err = correctness::check_spanning_forest(&g, &bogus).expect_err("cycle");
    assert!(err.contains("cycle"), "{err}");
}

#[test]
fn checker_rejects_foreign_edge() {
    let mut g = Graph::new(3);
    g.add_edge(Edge::new(0, 1, 1.0));
    g.add_edge(Edge::new(1, 2, 1.0));
    let bogus = MstResult::new(
        vec![Edge::new(0, 1, 1.0), Edge::new(0, 2, 0.5)],
        std::time::Duration::ZERO,
        OperationCounters::new(),
    );
    let err = correctness::check_spanning_forest(&g, &bogus).expect_err("foreign edge");
    assert!(err.contains("not in the graph"), "{err}");
}

#[test]
fn checker_reports_missing_counter() {
    let g = Graph::new(2);
    let bare = MstResult::new(Vec::new(), std::time::Duration::ZERO, OperationCounters::new());
    let err = correctness::check_counter_bounds(Algorithm::Kruskal, &g, &bare)
        .expect_err("missing counters");
    assert!(err.contains("comparisons"), "{err}");
}

#[test]
fn reference_cost_of_known_graph() {
    let mut g = Graph::new(4);
    g.add_edge(Edge::new(0, 1, 1.0));
    g.add_edge(Edge::new(1, 2, 2.0));
    g.add_edge(Edge::new(2, 3, 3.0));
    g.add_edge(Edge::new(0, 3, 4.0));
    g.add_edge(Edge::new(0, 2, 5.0));
    assert!((correctness::reference_cost(&g) - 6.0).abs() < 1e-9);
}
