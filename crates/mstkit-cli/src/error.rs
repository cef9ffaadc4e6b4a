//! CLI error types with associated exit codes.
//!
//! [`CliError`] is the top-level error type for the `mstkit` binary. Every
//! variant maps to a stable exit code via [`CliError::exit_code`]:
//!
//! - Exit code **2**: input failure. The tool could not read, parse or
//!   validate its input, or an argument does not fit the input.
//! - Exit code **1**: logical failure. The input was fine but the run ended
//!   in a well-defined failure (unknown graph name, costs disagree under
//!   `--strict`, a report file could not be written).
use std::fmt;
use std::path::PathBuf;

use mstkit_core::DatasetError;

/// All error conditions that the `mstkit` CLI can produce.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// A file argument could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read a file.
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The input exceeds the configured `--max-file-size` limit.
    FileTooLarge {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The configured size limit in bytes.
        limit: u64,
        /// The actual size in bytes; `None` for stdin.
        actual: Option<u64>,
    },

    /// The input bytes are not valid UTF-8.
    InvalidUtf8 {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The byte offset of the first invalid byte sequence.
        byte_offset: usize,
    },

    /// An I/O error occurred while reading from stdin.
    StdinReadError {
        /// The underlying I/O error message.
        detail: String,
    },

    /// Any other read failure.
    IoError {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// The dataset is malformed or one of its graphs fails validation.
    DatasetInvalid {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The loader's message.
        detail: String,
    },

    /// An argument is not usable with the given input.
    InvalidArgument {
        /// What is wrong.
        detail: String,
    },

    // --- Exit code 1: logical failures ---
    /// `--graph` named a graph the dataset does not contain, or the dataset
    /// holds no graph at all.
    GraphNotFound {
        /// The requested name, or `None` when the first graph was wanted.
        name: Option<String>,
        /// `"-"` for stdin, or the filesystem path.
        source: String,
    },

    /// Prim and Kruskal disagreed on the cost of one or more graphs under
    /// `--strict`.
    CostMismatch {
        /// Names of the disagreeing graphs, in report order.
        graphs: Vec<String>,
    },

    /// A report file could not be created or written.
    OutputWriteFailed {
        /// The output path.
        path: PathBuf,
        /// The underlying error message.
        detail: String,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::DatasetInvalid { .. }
            | Self::InvalidArgument { .. } => 2,

            Self::GraphNotFound { .. }
            | Self::CostMismatch { .. }
            | Self::OutputWriteFailed { .. } => 1,
        }
    }

    /// Maps a loader error for `source` to the matching CLI error.
    ///
    /// A bad start vertex is an argument problem; everything else is an
    /// invalid dataset.
    pub fn from_dataset(source: &str, err: &DatasetError) -> Self {
        match err {
            DatasetError::StartOutOfRange { .. } => Self::InvalidArgument {
                detail: err.to_string(),
            },
            DatasetError::Malformed { .. }
            | DatasetError::EndpointOutOfRange { .. }
            | DatasetError::NonFiniteWeight { .. } => Self::DatasetInvalid {
                source: source.to_owned(),
                detail: err.to_string(),
            },
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("error: permission denied: {}", path.display())
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: Some(actual),
            } => {
                format!("error: file too large: {source} is {actual} bytes, limit is {limit} bytes")
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: None,
            } => {
                format!("error: file too large: {source} exceeded limit of {limit} bytes")
            }
            Self::InvalidUtf8 {
                source,
                byte_offset,
            } => {
                format!(
                    "error: invalid UTF-8 in {source}: first invalid byte at offset {byte_offset}"
                )
            }
            Self::StdinReadError { detail } => {
                format!("error: failed to read stdin: {detail}")
            }
            Self::IoError { source, detail } => {
                format!("error: I/O error reading {source}: {detail}")
            }
            Self::DatasetInvalid { source, detail } => {
                format!("error: invalid dataset {source}: {detail}")
            }
            Self::InvalidArgument { detail } => format!("error: {detail}"),
            Self::GraphNotFound {
                name: Some(name),
                source,
            } => {
                format!("error: no graph named {name:?} in {source}")
            }
            Self::GraphNotFound { name: None, source } => {
                format!("error: {source} contains no graphs")
            }
            Self::CostMismatch { graphs } => {
                format!(
                    "error: Prim and Kruskal costs differ for {} graph(s): {}",
                    graphs.len(),
                    graphs.join(", ")
                )
            }
            Self::OutputWriteFailed { path, detail } => {
                format!("error: failed to write {}: {detail}", path.display())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}
