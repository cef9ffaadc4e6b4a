//! Input and output plumbing for the `mstkit` binary.
//!
//! `mstkit-core` never touches the filesystem; every read of a dataset and
//! every report file write goes through here.
//!
//! - Disk files are size-checked via `std::fs::metadata` before any read.
//! - Stdin is read through a `Read::take` cap so the allocation is bounded.
//! - Bytes are UTF-8 checked with the offset of the first bad sequence.
use std::fs::File;
use std::io::{BufWriter, ErrorKind, Read as _};
use std::path::Path;

use mstkit_core::{GraphDataset, parse_dataset};

use crate::PathOrStdin;
use crate::error::CliError;

/// Reads the entire contents of `source` into a `String`.
///
/// # Errors
///
/// Returns an exit-code-2 [`CliError`] when the file is missing, unreadable,
/// over `max_size`, or not UTF-8.
pub fn read_input(source: &PathOrStdin, max_size: u64) -> Result<String, CliError> {
    match source {
        PathOrStdin::Path(path) => read_file(path, max_size),
        PathOrStdin::Stdin => read_stdin(max_size),
    }
}

/// Reads and parses a dataset document.
///
/// Only the document shape is checked; graphs are validated when built.
///
/// # Errors
///
/// Returns the errors of [`read_input`], or [`CliError::DatasetInvalid`] if
/// the document does not parse.
pub fn load_dataset(source: &PathOrStdin, max_size: u64) -> Result<GraphDataset, CliError> {
    let content = read_input(source, max_size)?;
    let dataset =
        parse_dataset(&content).map_err(|e| CliError::from_dataset(&source.to_string(), &e))?;
    tracing::debug!(%source, graphs = dataset.len(), bytes = content.len(), "dataset loaded");
    Ok(dataset)
}

/// Creates (or truncates) a report file and returns a buffered writer.
///
/// # Errors
///
/// Returns [`CliError::OutputWriteFailed`] if the file cannot be created.
pub fn create_output(path: &Path) -> Result<BufWriter<File>, CliError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| CliError::OutputWriteFailed {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })
}

fn read_file(path: &Path, max_size: u64) -> Result<String, CliError> {
    let file_size = std::fs::metadata(path)
        .map_err(|e| read_error(&e, path))?
        .len();

    if file_size > max_size {
        return Err(CliError::FileTooLarge {
            source: path.display().to_string(),
            limit: max_size,
            actual: Some(file_size),
        });
    }

    let bytes = std::fs::read(path).map_err(|e| read_error(&e, path))?;
    bytes_to_string(bytes, &path.display().to_string())
}

fn read_error(e: &std::io::Error, path: &Path) -> CliError {
    let kind = e.kind();
    if kind == ErrorKind::NotFound {
        CliError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else if kind == ErrorKind::PermissionDenied {
        CliError::PermissionDenied {
            path: path.to_path_buf(),
        }
    } else {
        CliError::IoError {
            source: path.display().to_string(),
            detail: e.to_string(),
        }
    }
}

/// Reads stdin up to `max_size` bytes. A stream that still has data after
/// the cap is rejected as too large.
fn read_stdin(max_size: u64) -> Result<String, CliError> {
    let mut handle = std::io::stdin().lock();
    let mut buf: Vec<u8> = Vec::new();

    (&mut handle)
        .take(max_size)
        .read_to_end(&mut buf)
        .map_err(|e| CliError::StdinReadError {
            detail: e.to_string(),
        })?;

    if buf.len() as u64 == max_size {
        let mut probe = [0u8; 1];
        let extra = handle
            .read(&mut probe)
            .map_err(|e| CliError::StdinReadError {
                detail: e.to_string(),
            })?;
        if extra > 0 {
            return Err(CliError::FileTooLarge {
                source: "-".to_owned(),
                limit: max_size,
                actual: None,
            });
        }
    }

    bytes_to_string(buf, "-")
}

fn bytes_to_string(bytes: Vec<u8>, source_label: &str) -> Result<String, CliError> {
    String::from_utf8(bytes).map_err(|e| CliError::InvalidUtf8 {
        source: source_label.to_owned(),
        byte_offset: e.utf8_error().valid_up_to(),
    })
}
