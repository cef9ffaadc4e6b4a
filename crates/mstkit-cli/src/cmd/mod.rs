//! Command modules for the `mstkit` CLI.
//!
//! Each submodule implements one subcommand. Its `run` function takes the
//! parsed arguments and returns `Ok(())` on success or a
//! [`crate::error::CliError`] on failure.
pub mod compare;
pub mod inspect;
pub mod run;

use crate::PathOrStdin;
use crate::error::CliError;

/// Rejects argument lists that name stdin more than once; the stream can
/// only be consumed a single time.
pub fn ensure_single_stdin(sources: &[PathOrStdin]) -> Result<(), CliError> {
    let stdin_count = sources
        .iter()
        .filter(|s| matches!(s, PathOrStdin::Stdin))
        .count();
    if stdin_count > 1 {
        return Err(CliError::InvalidArgument {
            detail: format!("stdin (`-`) given {stdin_count} times; it can be read only once"),
        });
    }
    Ok(())
}

/// Maps a failed write to stdout.
pub fn stdout_error(e: impl std::fmt::Display) -> CliError {
    CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    }
}

/// Maps a failed write to stderr.
pub fn stderr_error(e: impl std::fmt::Display) -> CliError {
    CliError::IoError {
        source: "stderr".to_owned(),
        detail: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn single_stdin_is_accepted() {
        let sources = [
            PathOrStdin::Stdin,
            PathOrStdin::Path(PathBuf::from("a.json")),
        ];
        assert!(ensure_single_stdin(&sources).is_ok());
        assert!(ensure_single_stdin(&[]).is_ok());
    }

    #[test]
    fn repeated_stdin_is_rejected() {
        let sources = [PathOrStdin::Stdin, PathOrStdin::Stdin];
        let err = ensure_single_stdin(&sources).err();
        assert!(matches!(err, Some(CliError::InvalidArgument { .. })));
    }
}
