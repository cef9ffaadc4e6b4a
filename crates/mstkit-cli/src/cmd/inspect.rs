//! Implementation of `mstkit inspect <file>`.
//!
//! Validates every graph in a dataset and prints per-graph statistics to
//! stdout: vertex and edge counts, connected components, self-loops, and
//! the total and range of edge weights.
//!
//! Exit codes: 0 = success, 2 = unreadable or invalid input.
use std::io::Write as _;

use mstkit_core::{Graph, component_count, is_connected};

use crate::OutputFormat;
use crate::PathOrStdin;
use crate::cmd::stdout_error;
use crate::error::CliError;
use crate::io::load_dataset;

/// Statistics gathered from one validated graph.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphStats {
    /// Graph name.
    pub name: String,
    /// Vertex count.
    pub vertices: usize,
    /// Edge count, parallel edges and self-loops included.
    pub edges: usize,
    /// Connected components, isolated vertices included.
    pub components: usize,
    /// At most one component.
    pub connected: bool,
    /// Edges whose endpoints coincide.
    pub self_loops: usize,
    /// Sum of all edge weights.
    pub total_weight: f64,
    /// Smallest and largest edge weight, or `None` without edges.
    pub weight_range: Option<(f64, f64)>,
}

impl GraphStats {
    /// Computes statistics for `graph`.
    pub fn from_graph(name: &str, graph: &Graph) -> Self {
        let weight_range = graph.edges().iter().fold(None, |range, e| match range {
            None => Some((e.w, e.w)),
            Some((lo, hi)) => Some((f64::min(lo, e.w), f64::max(hi, e.w))),
        });
        Self {
            name: name.to_owned(),
            vertices: graph.vertices(),
            edges: graph.edge_count(),
            components: component_count(graph),
            connected: is_connected(graph),
            self_loops: graph.edges().iter().filter(|e| e.u == e.v).count(),
            total_weight: graph.total_weight(),
            weight_range,
        }
    }
}

/// Runs the `inspect` command.
///
/// # Errors
///
/// Returns an exit-code-2 [`CliError`] if the dataset cannot be read or any
/// graph fails validation.
pub fn run(file: &PathOrStdin, format: OutputFormat, max_file_size: u64) -> Result<(), CliError> {
    let dataset = load_dataset(file, max_file_size)?;
    let label = file.to_string();

    let stats = dataset
        .graphs
        .iter()
        .map(|spec| {
            spec.build()
                .map(|g| GraphStats::from_graph(&spec.name, &g))
                .map_err(|e| CliError::from_dataset(&label, &e))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => print_human(&mut out, &stats),
        OutputFormat::Json => print_json(&mut out, &stats),
    }
    .map_err(stdout_error)?;
    out.flush().map_err(stdout_error)
}

fn print_human<W: std::io::Write>(w: &mut W, stats: &[GraphStats]) -> std::io::Result<()> {
    writeln!(w, "graphs:         {}", stats.len())?;
    for s in stats {
        writeln!(w)?;
        writeln!(w, "graph:          {}", s.name)?;
        writeln!(w, "  vertices:     {}", s.vertices)?;
        writeln!(w, "  edges:        {}", s.edges)?;
        writeln!(w, "  components:   {}", s.components)?;
        writeln!(w, "  connected:    {}", if s.connected { "yes" } else { "no" })?;
        writeln!(w, "  self_loops:   {}", s.self_loops)?;
        writeln!(w, "  total_weight: {:.2}", s.total_weight)?;
        if let Some((lo, hi)) = s.weight_range {
            writeln!(w, "  weights:      {lo:.2} .. {hi:.2}")?;
        }
    }
    Ok(())
}

fn print_json<W: std::io::Write>(w: &mut W, stats: &[GraphStats]) -> std::io::Result<()> {
    let graphs: Vec<serde_json::Value> = stats
        .iter()
        .map(|s| {
            serde_json::json!({
                "name": s.name,
                "vertices": s.vertices,
                "edges": s.edges,
                "components": s.components,
                "connected": s.connected,
                "selfLoops": s.self_loops,
                "totalWeight": s.total_weight,
                "minWeight": s.weight_range.map(|(lo, _)| lo),
                "maxWeight": s.weight_range.map(|(_, hi)| hi),
            })
        })
        .collect();
    let json = serde_json::to_string_pretty(&serde_json::json!({ "graphs": graphs }))
        .map_err(std::io::Error::other)?;
    writeln!(w, "{json}")
}
