//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::fmt;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use mstkit_core::Algorithm;

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

impl fmt::Display for PathOrStdin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathOrStdin::Stdin => f.write_str("-"),
            PathOrStdin::Path(p) => write!(f, "{}", p.display()),
        }
    }
}

/// Output format for CLI commands.
///
/// `Human` prints aligned text blocks and tables to stdout. `Json` prints a
/// single JSON document to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, optionally colored output (default).
    Human,
    /// Structured JSON output.
    Json,
}

/// MST engine selection for the `run` subcommand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    /// Prim's algorithm, grown from `--start`.
    Prim,
    /// Kruskal's algorithm.
    Kruskal,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Prim => Algorithm::Prim,
            AlgorithmArg::Kruskal => Algorithm::Kruskal,
        }
    }
}

/// All top-level subcommands exposed by the `mstkit` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Run Prim and Kruskal on every graph and compare cost, time and
    /// operation counts.
    Compare {
        /// Dataset files, or `-` for stdin (at most one may be `-`).
        #[arg(value_name = "FILE", num_args = 1.., required = true)]
        files: Vec<PathOrStdin>,
        /// Start vertex for Prim.
        #[arg(long, default_value = "0")]
        start: usize,
        /// Also write the JSON report to this path.
        #[arg(long, value_name = "PATH")]
        json_out: Option<PathBuf>,
        /// Also write the CSV report to this path.
        #[arg(long, value_name = "PATH")]
        csv_out: Option<PathBuf>,
        /// Exit with code 1 when the two engines disagree on any cost.
        #[arg(long)]
        strict: bool,
    },

    /// Run a single engine on one graph and list the selected edges.
    Run {
        /// Dataset file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Engine to run.
        #[arg(long, short = 'a', value_enum)]
        algorithm: AlgorithmArg,
        /// Graph name within the dataset (default: the first graph).
        #[arg(long, value_name = "NAME")]
        graph: Option<String>,
        /// Start vertex for Prim (ignored by Kruskal).
        #[arg(long, default_value = "0")]
        start: usize,
    },

    /// Print per-graph statistics for a dataset.
    Inspect {
        /// Dataset file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },
}

/// Root CLI struct for the `mstkit` binary.
///
/// All global flags are defined here and marked `global = true` so that clap
/// propagates them to every subcommand.
#[derive(Parser)]
#[command(
    name = "mstkit",
    version,
    about = "Minimum spanning tree comparison toolkit",
    long_about = "Runs Prim's and Kruskal's minimum spanning tree algorithms over\n\
                  JSON graph datasets and reports cost, timing and operation counts."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Suppress all stderr output except errors (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Increase stderr verbosity: timing and debug logs
    /// (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum input file size in bytes.
    ///
    /// Can also be set via the `MSTKIT_MAX_FILE_SIZE` environment variable.
    /// Default: 268435456 (256 MB).
    #[arg(
        long,
        global = true,
        env = "MSTKIT_MAX_FILE_SIZE",
        default_value = "268435456"
    )]
    pub max_file_size: u64,

    /// Disable ANSI color codes in human output.
    ///
    /// Also set by any non-empty `NO_COLOR` environment variable other than
    /// a falsey value (`0`, `false`, `no`, `off`).
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,
}

#[cfg(test)]
mod tests;
