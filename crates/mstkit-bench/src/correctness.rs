//! Post-run invariant checkers for correctness validation.

use mstkit_core::{
    Algorithm, COMPARISONS, DECREASE_KEYS, EXTRACTS, FINDS, Graph, MstResult, UNIONS,
    component_count, costs_match, forest_components, has_cycle,
};
use petgraph::data::Element;
use petgraph::graph::UnGraph;

/// Verifies that `result` is a spanning forest of `graph`: acyclic, built
/// from edges of the graph, and with one tree per component.
pub fn check_spanning_forest(graph: &Graph, result: &MstResult) -> Result<(), String> {
    let n = graph.vertices();
    if has_cycle(&result.selected_edges, n) {
        return Err("selected edges contain a cycle".to_owned());
    }
    for e in &result.selected_edges {
        if !graph.adj(e.u).iter().any(|g| g == e) {
            return Err(format!("selected edge {}-{} ({}) is not in the graph", e.u, e.v, e.w));
        }
    }
    let expected = component_count(graph);
    let actual = forest_components(&result.selected_edges, n);
    if actual != expected {
        return Err(format!("forest has {actual} components, graph has {expected}"));
    }
    Ok(())
}

/// Verifies that `result` spans only the component containing `start`:
/// acyclic and with exactly `component size - 1` edges.
pub fn check_start_component(
    graph: &Graph,
    start: usize,
    result: &MstResult,
) -> Result<(), String> {
    let n = graph.vertices();
    if n == 0 {
        return if result.selected_edges.is_empty() {
            Ok(())
        } else {
            Err("empty graph produced edges".to_owned())
        };
    }
    if has_cycle(&result.selected_edges, n) {
        return Err("selected edges contain a cycle".to_owned());
    }
    let size = component_size(graph, start);
    if result.edge_count() + 1 != size {
        return Err(format!(
            "tree has {} edges, component of {start} has {size} vertices",
            result.edge_count()
        ));
    }
    Ok(())
}

/// Verifies that two results agree on total cost within tolerance.
pub fn check_costs_agree(prim: &MstResult, kruskal: &MstResult) -> Result<(), String> {
    if !costs_match(prim.total_cost, kruskal.total_cost) {
        return Err(format!(
            "cost mismatch: prim={:.4}, kruskal={:.4}",
            prim.total_cost, kruskal.total_cost
        ));
    }
    Ok(())
}

/// Minimum spanning forest cost computed independently with petgraph.
pub fn reference_cost(graph: &Graph) -> f64 {
    let mut pg: UnGraph<(), f64> = UnGraph::with_capacity(graph.vertices(), graph.edge_count());
    let nodes: Vec<_> = (0..graph.vertices()).map(|_| pg.add_node(())).collect();
    for e in graph.edges() {
        pg.add_edge(nodes[e.u], nodes[e.v], e.w);
    }
    petgraph::algo::min_spanning_tree(&pg)
        .filter_map(|el| match el {
            Element::Edge { weight, .. } => Some(weight),
            Element::Node { .. } => None,
        })
        .sum()
}

/// Verifies `result.total_cost` against [`reference_cost`].
pub fn check_reference_cost(graph: &Graph, result: &MstResult) -> Result<(), String> {
    let expected = reference_cost(graph);
    if !costs_match(result.total_cost, expected) {
        return Err(format!(
            "cost {:.4} differs from reference {expected:.4}",
            result.total_cost
        ));
    }
    Ok(())
}

/// Verifies the operation counters of `result` against bounds that follow
/// from the algorithm and the graph size.
pub fn check_counter_bounds(
    algorithm: Algorithm,
    graph: &Graph,
    result: &MstResult,
) -> Result<(), String> {
    let counter = |key: &str| {
        result
            .operations
            .get(key)
            .ok_or_else(|| format!("{} result has no `{key}` counter", algorithm.name()))
    };
    let edges = graph.edge_count() as u64;
    let selected = result.edge_count() as u64;

    match algorithm {
        Algorithm::Kruskal => {
            let comparisons = counter(COMPARISONS)?;
            let finds = counter(FINDS)?;
            let unions = counter(UNIONS)?;
            if comparisons > edges {
                return Err(format!("comparisons {comparisons} exceed edge count {edges}"));
            }
            if unions != selected {
                return Err(format!("unions {unions} != selected edges {selected}"));
            }
            if finds < 2 * comparisons {
                return Err(format!("finds {finds} < 2 * comparisons {comparisons}"));
            }
        }
        Algorithm::Prim => {
            let comparisons = counter(COMPARISONS)?;
            let extracts = counter(EXTRACTS)?;
            let decrease_keys = counter(DECREASE_KEYS)?;
            if comparisons > edges {
                return Err(format!("comparisons {comparisons} exceed edge count {edges}"));
            }
            if extracts > graph.vertices() as u64 {
                return Err(format!("extracts {extracts} exceed vertex count"));
            }
            if decrease_keys > comparisons {
                return Err(format!(
                    "decrease-keys {decrease_keys} exceed comparisons {comparisons}"
                ));
            }
            if decrease_keys < selected {
                return Err(format!(
                    "decrease-keys {decrease_keys} < selected edges {selected}"
                ));
            }
        }
    }
    Ok(())
}

fn component_size(graph: &Graph, start: usize) -> usize {
    let mut seen = vec![false; graph.vertices()];
    let mut stack = vec![start];
    seen[start] = true;
    let mut size = 0;
    while let Some(u) = stack.pop() {
        size += 1;
        for e in graph.adj(u) {
            let v = e.other(u);
            if !seen[v] {
                seen[v] = true;
                stack.push(v);
            }
        }
    }
    size
}
