#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::wildcard_enum_match_arm)]

use clap::CommandFactory;

use super::*;

/// The root help output must contain all top-level subcommand names.
#[test]
fn test_root_help_lists_all_subcommands() {
    let mut cmd = Cli::command();
    let help = format!("{}", cmd.render_help());

    for name in ["compare", "run", "inspect"] {
        assert!(
            help.contains(name),
            "root help should mention subcommand '{name}'"
        );
    }
}

/// The root help output must describe every global flag.
#[test]
fn test_root_help_lists_global_flags() {
    let mut cmd = Cli::command();
    let help = format!("{}", cmd.render_help());

    let expected_flags = [
        "--format",
        "--quiet",
        "--verbose",
        "--max-file-size",
        "--no-color",
        "--help",
        "--version",
    ];
    for flag in &expected_flags {
        assert!(
            help.contains(flag),
            "root help should mention flag '{flag}'"
        );
    }
}

/// `mstkit compare --help` must mention the report and strict flags.
#[test]
fn test_compare_help() {
    let mut cmd = Cli::command();
    let sub = cmd
        .find_subcommand_mut("compare")
        .expect("compare subcommand should exist");
    let help = format!("{}", sub.render_help());
    for flag in ["--start", "--json-out", "--csv-out", "--strict", "FILE"] {
        assert!(help.contains(flag), "compare help should mention {flag}");
    }
}

/// `mstkit run --help` must mention `--algorithm` and `--graph`.
#[test]
fn test_run_help() {
    let mut cmd = Cli::command();
    let sub = cmd
        .find_subcommand_mut("run")
        .expect("run subcommand should exist");
    let help = format!("{}", sub.render_help());
    assert!(help.contains("--algorithm"), "run help should mention --algorithm");
    assert!(help.contains("--graph"), "run help should mention --graph");
}

#[test]
fn test_compare_defaults() {
    let cli = Cli::try_parse_from(["mstkit", "compare", "small.json"]).expect("should parse");
    match cli.command {
        Command::Compare {
            files,
            start,
            json_out,
            csv_out,
            strict,
        } => {
            assert_eq!(files, vec![PathOrStdin::Path(PathBuf::from("small.json"))]);
            assert_eq!(start, 0);
            assert!(json_out.is_none());
            assert!(csv_out.is_none());
            assert!(!strict);
        }
        _ => panic!("expected Compare subcommand"),
    }
}

#[test]
fn test_compare_accepts_many_files_and_outputs() {
    let cli = Cli::try_parse_from([
        "mstkit",
        "compare",
        "a.json",
        "-",
        "--start",
        "3",
        "--json-out",
        "out.json",
        "--csv-out",
        "out.csv",
        "--strict",
    ])
    .expect("should parse");
    match cli.command {
        Command::Compare {
            files,
            start,
            json_out,
            csv_out,
            strict,
        } => {
            assert_eq!(files.len(), 2);
            assert_eq!(files[1], PathOrStdin::Stdin);
            assert_eq!(start, 3);
            assert_eq!(json_out, Some(PathBuf::from("out.json")));
            assert_eq!(csv_out, Some(PathBuf::from("out.csv")));
            assert!(strict);
        }
        _ => panic!("expected Compare subcommand"),
    }
}

#[test]
fn test_compare_requires_a_file() {
    assert!(Cli::try_parse_from(["mstkit", "compare"]).is_err());
}

#[test]
fn test_run_algorithm_values() {
    let cli = Cli::try_parse_from([
        "mstkit",
        "run",
        "g.json",
        "--algorithm",
        "kruskal",
        "--graph",
        "G2",
    ])
    .expect("should parse");
    match cli.command {
        Command::Run {
            algorithm, graph, ..
        } => {
            assert_eq!(Algorithm::from(algorithm), Algorithm::Kruskal);
            assert_eq!(graph.as_deref(), Some("G2"));
        }
        _ => panic!("expected Run subcommand"),
    }

    assert!(
        Cli::try_parse_from(["mstkit", "run", "g.json", "--algorithm", "boruvka"]).is_err(),
        "unknown algorithm should be rejected"
    );
    assert!(
        Cli::try_parse_from(["mstkit", "run", "g.json"]).is_err(),
        "--algorithm is required"
    );
}

#[test]
fn test_quiet_and_verbose_conflict() {
    let result = Cli::try_parse_from(["mstkit", "--quiet", "--verbose", "inspect", "-"]);
    assert!(result.is_err(), "--quiet and --verbose should conflict");
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["mstkit", "inspect", "-", "-f", "json", "--max-file-size", "1024"])
        .expect("should parse");
    assert_eq!(cli.format, OutputFormat::Json);
    assert_eq!(cli.max_file_size, 1024);
    match cli.command {
        Command::Inspect { file } => assert_eq!(file, PathOrStdin::Stdin),
        _ => panic!("expected Inspect subcommand"),
    }
}

#[test]
fn test_path_or_stdin_display() {
    assert_eq!(PathOrStdin::Stdin.to_string(), "-");
    assert_eq!(
        PathOrStdin::Path(PathBuf::from("data/small.json")).to_string(),
        "data/small.json"
    );
}

#[test]
fn test_no_color_flag_takes_no_value() {
    let cli = Cli::try_parse_from(["mstkit", "inspect", "-", "--no-color"]).expect("should parse");
    assert!(cli.no_color);
}
