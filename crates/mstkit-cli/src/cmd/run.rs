//! Implementation of `mstkit run <FILE> --algorithm prim|kruskal`.
//!
//! Runs one engine on one graph (the first graph, or the one named by
//! `--graph`) and prints the selected edges with cost, time and counters.
//!
//! Exit codes: 0 = success, 1 = graph not found, 2 = unreadable or invalid
//! input.
use std::io::Write as _;

use mstkit_core::{Algorithm, GraphSpec, MstResult};

use crate::OutputFormat;
use crate::PathOrStdin;
use crate::cmd::stdout_error;
use crate::error::CliError;
use crate::format::{FormatterConfig, write_mst_human};
use crate::io::load_dataset;

/// Runs the `run` command.
///
/// # Errors
///
/// See the module docs for the exit code mapping.
pub fn run(
    file: &PathOrStdin,
    algorithm: Algorithm,
    graph_name: Option<&str>,
    start: usize,
    format: OutputFormat,
    config: &FormatterConfig,
    max_file_size: u64,
) -> Result<(), CliError> {
    let dataset = load_dataset(file, max_file_size)?;
    let label = file.to_string();

    let spec = select_graph(&dataset.graphs, graph_name).ok_or_else(|| CliError::GraphNotFound {
        name: graph_name.map(str::to_owned),
        source: label.clone(),
    })?;

    if algorithm == Algorithm::Prim {
        spec.check_start(start)
            .map_err(|e| CliError::from_dataset(&label, &e))?;
    }
    let graph = spec
        .build()
        .map_err(|e| CliError::from_dataset(&label, &e))?;
    let result = algorithm.run(&graph, start);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => {
            write_mst_human(&mut out, &spec.name, spec.vertices, algorithm, &result, config)
                .map_err(stdout_error)?;
        }
        OutputFormat::Json => {
            let doc = result_json(spec, algorithm, &result);
            serde_json::to_writer_pretty(&mut out, &doc).map_err(stdout_error)?;
            writeln!(out).map_err(stdout_error)?;
        }
    }
    out.flush().map_err(stdout_error)
}

/// Picks the graph named `name`, or the first graph when no name is given.
fn select_graph<'a>(graphs: &'a [GraphSpec], name: Option<&str>) -> Option<&'a GraphSpec> {
    match name {
        Some(name) => graphs.iter().find(|g| g.name == name),
        None => graphs.first(),
    }
}

fn result_json(spec: &GraphSpec, algorithm: Algorithm, result: &MstResult) -> serde_json::Value {
    serde_json::json!({
        "graphName": spec.name,
        "algorithm": algorithm,
        "vertices": spec.vertices,
        "edges": spec.edges.len(),
        "totalCost": result.total_cost,
        "timeMs": result.elapsed_ms(),
        "mstEdges": result.edge_count(),
        "spanning": result.is_spanning_tree(spec.vertices),
        "selectedEdges": result.selected_edges,
        "operations": result.operations,
    })
}
