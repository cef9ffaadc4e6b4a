//! Implementation of `mstkit compare <FILE>...`.
//!
//! Loads every dataset, runs Prim and Kruskal on each graph in file order,
//! and prints either per-graph detail blocks plus a summary table (human
//! mode) or the `{"results": [...]}` report document (JSON mode) to stdout.
//! `--json-out` / `--csv-out` additionally write the report to files.
//!
//! Exit codes: 0 = success, 1 = costs disagree under `--strict` or a report
//! file could not be written, 2 = unreadable or invalid input.
use std::io::Write as _;
use std::path::Path;
use std::time::Instant;

use mstkit_core::{ComparisonRecord, ReportError, compare, write_csv, write_json};

use crate::OutputFormat;
use crate::PathOrStdin;
use crate::cmd::{ensure_single_stdin, stderr_error, stdout_error};
use crate::error::CliError;
use crate::format::{
    FormatterConfig, write_notice, write_record_human, write_summary_table, write_timing_human,
};
use crate::io::{create_output, load_dataset};

/// Per-invocation options of the `compare` subcommand.
#[derive(Debug, Clone, Default)]
pub struct CompareOptions<'a> {
    /// Prim start vertex, applied to every graph.
    pub start: usize,
    /// Optional JSON report path.
    pub json_out: Option<&'a Path>,
    /// Optional CSV report path.
    pub csv_out: Option<&'a Path>,
    /// Turn a cost mismatch into a failure.
    pub strict: bool,
}

/// Runs the `compare` command.
///
/// # Errors
///
/// See the module docs for the exit code mapping.
pub fn run(
    files: &[PathOrStdin],
    options: &CompareOptions<'_>,
    format: OutputFormat,
    config: &FormatterConfig,
    max_file_size: u64,
) -> Result<(), CliError> {
    ensure_single_stdin(files)?;

    let started = Instant::now();
    let records = compare_files(files, options.start, max_file_size)?;
    let elapsed = started.elapsed();

    {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        match format {
            OutputFormat::Human => {
                for record in &records {
                    write_record_human(&mut out, record, config).map_err(stdout_error)?;
                }
                write_summary_table(&mut out, &records, config).map_err(stdout_error)?;
            }
            OutputFormat::Json => write_json(&mut out, &records).map_err(stdout_error)?,
        }
        out.flush().map_err(stdout_error)?;
    }

    let stderr = std::io::stderr();
    let mut err = stderr.lock();
    write_timing_human(
        &mut err,
        &format!("compared {} graph(s)", records.len()),
        elapsed,
        config,
    )
    .map_err(stderr_error)?;

    if let Some(path) = options.json_out {
        write_report(path, |w| write_json(w, &records))?;
        write_notice(&mut err, &format!("wrote {}", path.display()), config)
            .map_err(stderr_error)?;
    }
    if let Some(path) = options.csv_out {
        write_report(path, |w| write_csv(w, &records))?;
        write_notice(&mut err, &format!("wrote {}", path.display()), config)
            .map_err(stderr_error)?;
    }

    let mismatched: Vec<String> = records
        .iter()
        .filter(|r| !r.costs_match())
        .map(|r| r.graph_name.clone())
        .collect();
    for name in &mismatched {
        tracing::warn!(graph = %name, "Prim and Kruskal costs differ");
    }
    if options.strict && !mismatched.is_empty() {
        return Err(CliError::CostMismatch { graphs: mismatched });
    }
    Ok(())
}

/// Loads every dataset in `files` and compares both engines on each graph,
/// in file order then graph order.
///
/// # Errors
///
/// Returns the first load, validation or start-vertex error.
pub fn compare_files(
    files: &[PathOrStdin],
    start: usize,
    max_file_size: u64,
) -> Result<Vec<ComparisonRecord>, CliError> {
    let mut records = Vec::new();
    for source in files {
        let dataset = load_dataset(source, max_file_size)?;
        let label = source.to_string();
        for spec in &dataset.graphs {
            spec.check_start(start)
                .map_err(|e| CliError::from_dataset(&label, &e))?;
            let graph = spec
                .build()
                .map_err(|e| CliError::from_dataset(&label, &e))?;
            let record = compare(&spec.name, &graph, start);
            tracing::info!(
                graph = %record.graph_name,
                vertices = record.vertices,
                edges = record.edges,
                prim_cost = record.prim.total_cost,
                kruskal_cost = record.kruskal.total_cost,
                "compared"
            );
            records.push(record);
        }
    }
    Ok(records)
}

fn write_report<F>(path: &Path, write: F) -> Result<(), CliError>
where
    F: FnOnce(&mut std::io::BufWriter<std::fs::File>) -> Result<(), ReportError>,
{
    let failed = |detail: String| CliError::OutputWriteFailed {
        path: path.to_path_buf(),
        detail,
    };
    let mut writer = create_output(path)?;
    write(&mut writer).map_err(|e| failed(e.to_string()))?;
    writer.flush().map_err(|e| failed(e.to_string()))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]
    #![allow(clippy::wildcard_enum_match_arm)]

    use std::io::Write as _;

    use super::*;

    fn dataset_file(json: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().expect("temp file");
        f.write_all(json.as_bytes()).expect("write");
        f
    }

    const TWO_GRAPHS: &str = r#"{"graphs":[
        {"name":"tri","vertices":3,"edges":[{"u":0,"v":1,"w":1},{"u":1,"v":2,"w":2},{"u":0,"v":2,"w":3}]},
        {"name":"pair","vertices":2,"edges":[{"u":0,"v":1,"w":4.5}]}
    ]}"#;

    #[test]
    fn compare_files_keeps_file_and_graph_order() {
        let a = dataset_file(TWO_GRAPHS);
        let b = dataset_file(r#"{"graphs":[{"name":"solo","vertices":1}]}"#);
        let files = [
            PathOrStdin::Path(a.path().to_path_buf()),
            PathOrStdin::Path(b.path().to_path_buf()),
        ];
        let records = compare_files(&files, 0, 1 << 20).expect("compare");
        let names: Vec<&str> = records.iter().map(|r| r.graph_name.as_str()).collect();
        assert_eq!(names, ["tri", "pair", "solo"]);
        assert!(records.iter().all(ComparisonRecord::costs_match));
    }

    #[test]
    fn start_beyond_a_graph_is_an_argument_error() {
        let a = dataset_file(TWO_GRAPHS);
        let files = [PathOrStdin::Path(a.path().to_path_buf())];
        match compare_files(&files, 2, 1 << 20).expect_err("pair has only 2 vertices") {
            CliError::InvalidArgument { detail } => assert!(detail.contains("pair"), "{detail}"),
            other => panic!("expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn invalid_graph_stops_the_run() {
        let a = dataset_file(r#"{"graphs":[{"name":"bad","vertices":2,"edges":[{"u":0,"v":5,"w":1}]}]}"#);
        let files = [PathOrStdin::Path(a.path().to_path_buf())];
        let err = compare_files(&files, 0, 1 << 20).expect_err("should fail");
        assert_eq!(err.exit_code(), 2);
        assert!(matches!(err, CliError::DatasetInvalid { .. }));
    }

    #[test]
    fn write_report_creates_csv() {
        let a = dataset_file(TWO_GRAPHS);
        let files = [PathOrStdin::Path(a.path().to_path_buf())];
        let records = compare_files(&files, 0, 1 << 20).expect("compare");
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("results.csv");
        write_report(&path, |w| write_csv(w, &records)).expect("write");
        let text = std::fs::read_to_string(&path).expect("read");
        assert_eq!(text.lines().count(), 3);
        assert!(text.lines().nth(2).is_some_and(|l| l.starts_with("pair,2,1,4.50,")));
    }
}
