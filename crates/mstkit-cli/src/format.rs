//! Human-readable rendering of comparison records and single runs.
//!
//! Human output goes to stdout as aligned text blocks and a summary table.
//! Status marks (`OK` / `MISMATCH` / `PARTIAL`) are colored when colors are
//! enabled: stdout is a TTY and `--no-color` is off (clap also sets the
//! flag from `NO_COLOR`).
//!
//! Notices and timing lines go to whatever writer the caller passes
//! (stderr in practice) and honour `--quiet` / `--verbose`.
use std::io::{IsTerminal as _, Write};
use std::time::Duration;

use mstkit_core::{Algorithm, ComparisonRecord, MstResult};

/// Returns `true` if ANSI color codes should be emitted.
pub fn colors_enabled(no_color_flag: bool) -> bool {
    !no_color_flag && std::io::stdout().is_terminal()
}

const ANSI_RED: &str = "\x1b[31m";
const ANSI_GREEN: &str = "\x1b[32m";
const ANSI_YELLOW: &str = "\x1b[33m";
const ANSI_RESET: &str = "\x1b[0m";

/// Width of the summary table separator line.
const TABLE_WIDTH: usize = 101;

/// Formatter settings derived from the global CLI flags.
#[derive(Debug, Clone)]
pub struct FormatterConfig {
    /// Whether ANSI colors are enabled.
    pub colors: bool,
    /// Suppress notices.
    pub quiet: bool,
    /// Emit timing lines.
    pub verbose: bool,
}

impl FormatterConfig {
    /// Constructs a [`FormatterConfig`] from the raw CLI flags.
    pub fn from_flags(no_color_flag: bool, quiet: bool, verbose: bool) -> Self {
        Self {
            colors: colors_enabled(no_color_flag),
            quiet,
            verbose,
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.colors {
            format!("{color}{text}{ANSI_RESET}")
        } else {
            text.to_owned()
        }
    }
}

/// Writes the per-graph detail block for one comparison.
///
/// ```text
/// Graph: G1
///   Vertices: 5
///   Edges: 7
///
///   Prim's Algorithm:
///     Total Cost: 16.00
///     ...
///
///   OK costs match (16.00)
///   OK both trees have 4 edges (V-1)
/// ```
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_record_human<W: Write>(
    writer: &mut W,
    record: &ComparisonRecord,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    writeln!(writer, "Graph: {}", record.graph_name)?;
    writeln!(writer, "  Vertices: {}", record.vertices)?;
    writeln!(writer, "  Edges: {}", record.edges)?;

    for (algorithm, summary) in [
        (Algorithm::Prim, &record.prim),
        (Algorithm::Kruskal, &record.kruskal),
    ] {
        writeln!(writer)?;
        writeln!(writer, "  {algorithm}'s Algorithm:")?;
        writeln!(writer, "    Total Cost: {:.2}", summary.total_cost)?;
        writeln!(writer, "    Time: {:.3} ms", summary.time_ms)?;
        writeln!(writer, "    Operations: {}", summary.operations)?;
        writeln!(writer, "    MST Edges: {}", summary.mst_edges)?;
    }

    writeln!(writer)?;
    if record.costs_match() {
        writeln!(
            writer,
            "  {} costs match ({:.2})",
            config.paint("OK", ANSI_GREEN),
            record.prim.total_cost
        )?;
    } else {
        writeln!(
            writer,
            "  {} costs differ: Prim {:.2}, Kruskal {:.2}",
            config.paint("MISMATCH", ANSI_RED),
            record.prim.total_cost,
            record.kruskal.total_cost
        )?;
    }

    let expected = record.vertices.saturating_sub(1);
    if record.vertices == 0 || record.edge_counts_spanning() {
        writeln!(
            writer,
            "  {} both trees have {expected} {} (V-1)",
            config.paint("OK", ANSI_GREEN),
            pluralize(expected, "edge", "edges"),
        )?;
    } else {
        writeln!(
            writer,
            "  {} expected {expected} {}, Prim selected {}, Kruskal selected {} (graph is not connected)",
            config.paint("PARTIAL", ANSI_YELLOW),
            pluralize(expected, "edge", "edges"),
            record.prim.mst_edges,
            record.kruskal.mst_edges,
        )?;
    }
    writeln!(writer)
}

/// Writes the summary table over all compared graphs, followed by a one-line
/// tally of graphs and cost mismatches.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_summary_table<W: Write>(
    writer: &mut W,
    records: &[ComparisonRecord],
    config: &FormatterConfig,
) -> std::io::Result<()> {
    writeln!(writer, "=== SUMMARY ===")?;
    writeln!(writer)?;
    writeln!(
        writer,
        "{:<20} {:>8} {:>8} | {:>12} {:>10} | {:>12} {:>10} | {:<8}",
        "Graph", "Vertices", "Edges", "Prim(ms)", "Cost", "Kruskal(ms)", "Cost", "Faster"
    )?;
    writeln!(writer, "{}", "-".repeat(TABLE_WIDTH))?;
    for r in records {
        writeln!(
            writer,
            "{:<20} {:>8} {:>8} | {:>12.3} {:>10.2} | {:>12.3} {:>10.2} | {:<8}",
            r.graph_name,
            r.vertices,
            r.edges,
            r.prim.time_ms,
            r.prim.total_cost,
            r.kruskal.time_ms,
            r.kruskal.total_cost,
            r.faster().label(),
        )?;
    }
    writeln!(writer)?;

    let mismatches = records.iter().filter(|r| !r.costs_match()).count();
    let tally = format!(
        "{} {} compared, {mismatches} cost {}",
        records.len(),
        pluralize(records.len(), "graph", "graphs"),
        pluralize(mismatches, "mismatch", "mismatches"),
    );
    if mismatches == 0 {
        writeln!(writer, "{}", config.paint(&tally, ANSI_GREEN))
    } else {
        writeln!(writer, "{}", config.paint(&tally, ANSI_RED))
    }
}

/// Writes a single engine run: header, selected edges, cost, time and
/// counters.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_mst_human<W: Write>(
    writer: &mut W,
    graph_name: &str,
    vertices: usize,
    algorithm: Algorithm,
    result: &MstResult,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    writeln!(writer, "{algorithm} on {graph_name} ({vertices} vertices)")?;
    writeln!(writer, "Selected edges:")?;
    for e in &result.selected_edges {
        writeln!(writer, "  {e}")?;
    }
    writeln!(writer, "Total cost: {:.2}", result.total_cost)?;
    writeln!(writer, "Time: {:.3} ms", result.elapsed_ms())?;
    writeln!(writer, "Operations: {}", result.operations)?;
    if vertices > 0 && !result.is_spanning_tree(vertices) {
        writeln!(
            writer,
            "{} {} of {} tree edges selected (graph is not connected)",
            config.paint("PARTIAL", ANSI_YELLOW),
            result.edge_count(),
            vertices.saturating_sub(1),
        )?;
    }
    Ok(())
}

/// Writes a status notice such as "wrote results.csv". No-op in quiet mode.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_notice<W: Write>(
    writer: &mut W,
    message: &str,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.quiet {
        return Ok(());
    }
    writeln!(writer, "{message}")
}

/// Writes timing information in verbose mode; a no-op otherwise.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_timing_human<W: Write>(
    writer: &mut W,
    label: &str,
    duration: Duration,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if !config.verbose {
        return Ok(());
    }
    writeln!(
        writer,
        "{label} in {:.3}ms",
        duration.as_secs_f64() * 1000.0
    )
}

fn pluralize<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}
