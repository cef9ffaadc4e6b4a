mod cli;
mod cmd;
mod error;
mod format;
mod io;

use std::io::IsTerminal as _;

use clap::Parser;
use tracing_subscriber::EnvFilter;

pub use cli::{Cli, Command, OutputFormat, PathOrStdin};

use crate::cmd::compare::CompareOptions;
use crate::error::CliError;
use crate::format::FormatterConfig;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose, cli.no_color);

    let code = match dispatch(&cli) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{e}");
            e.exit_code()
        }
    };
    std::process::exit(code);
}

/// Installs the stderr log subscriber. `RUST_LOG` wins when set; otherwise
/// the level follows `--verbose` / `--quiet`. ANSI styling needs a terminal
/// on stderr and no `--no-color`.
fn init_tracing(quiet: bool, verbose: bool, no_color: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal() && !no_color)
        .init();
}

fn dispatch(cli: &Cli) -> Result<(), CliError> {
    let config = FormatterConfig::from_flags(cli.no_color, cli.quiet, cli.verbose);
    match &cli.command {
        Command::Compare {
            files,
            start,
            json_out,
            csv_out,
            strict,
        } => {
            let options = CompareOptions {
                start: *start,
                json_out: json_out.as_deref(),
                csv_out: csv_out.as_deref(),
                strict: *strict,
            };
            cmd::compare::run(files, &options, cli.format, &config, cli.max_file_size)
        }
        Command::Run {
            file,
            algorithm,
            graph,
            start,
        } => cmd::run::run(
            file,
            (*algorithm).into(),
            graph.as_deref(),
            *start,
            cli.format,
            &config,
            cli.max_file_size,
        ),
        Command::Inspect { file } => cmd::inspect::run(file, cli.format, cli.max_file_size),
    }
}
