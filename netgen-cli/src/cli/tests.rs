//! Unit tests for the CLI commands.

use super::commands::{read_input, run_command, write_instance};
use super::test_helpers::{run_command_expecting_error, temp_dir, to_directory, write_records};
use super::{
    Cli, CliError, Command, Destination, ExecutionSummary, GenerateCommand, render_summary,
    run_cli,
};

use std::fs;

use clap::Parser;
use netgen_core::{DimacsFormat, GenerationParams, Instance, NetgenError, generate};
use netgen_test_support::fixtures::{
    ASSIGNMENT, MAX_FLOW, MIN_COST_FLOW, REFERENCE_SEED, TRANSSHIPMENT, record,
};
use netgen_test_support::tracing::capture;
use rstest::rstest;
use tracing::Level;

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[test]
fn parses_generate_arguments() {
    let cli = Cli::try_parse_from(["netgen", "generate", "in.txt", "--output-dir", "out"])
        .expect("arguments are valid");
    let Command::Generate(command) = cli.command;
    assert_eq!(command.input.as_deref(), Some("in.txt".as_ref()));
    assert_eq!(command.output_dir.as_deref(), Some("out".as_ref()));
    assert!(!command.stdout);
}

#[test]
fn stdout_conflicts_with_output_dir() {
    let err = Cli::try_parse_from(["netgen", "generate", "--stdout", "--output-dir", "out"])
        .expect_err("flags are exclusive");
    assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
}

#[rstest]
#[case::min_cost_flow(MIN_COST_FLOW, DimacsFormat::MinCostFlow)]
#[case::max_flow(MAX_FLOW, DimacsFormat::MaxFlow)]
#[case::assignment(ASSIGNMENT, DimacsFormat::Assignment)]
fn writes_one_file_per_problem(
    #[case] parms: [i64; 13],
    #[case] format: DimacsFormat,
) -> TestResult {
    let dir = temp_dir();
    let input = write_records(&dir, &[record(REFERENCE_SEED, 7, &parms)])?;
    let output = dir.path().join("out");

    let summary = run_cli(Cli {
        command: Command::Generate(to_directory(input, &output)),
    })?;
    assert_eq!(summary.problems.len(), 1);
    let problem = &summary.problems[0];
    assert_eq!(problem.problem, 7);
    assert_eq!(problem.format, format);
    assert_eq!(problem.destination, Destination::File(output.join("7")));

    let text = fs::read_to_string(output.join("7"))?;
    let expected = format!(
        "p {} {} {}",
        format.designator(),
        parms[0],
        problem.arcs
    );
    assert!(text.lines().any(|line| line == expected));
    assert!(text.contains(&format!("c   Random seed:          {REFERENCE_SEED:>10}")));
    Ok(())
}

#[test]
fn output_matches_library_rendering() -> TestResult {
    let dir = temp_dir();
    let input = write_records(
        &dir,
        &[
            record(REFERENCE_SEED, 1, &MIN_COST_FLOW),
            record(5, 2, &TRANSSHIPMENT),
        ],
    )?;
    run_command(to_directory(input, dir.path()))?;

    for (seed, problem, parms) in [
        (REFERENCE_SEED, 1, MIN_COST_FLOW),
        (5, 2, TRANSSHIPMENT),
    ] {
        let params = GenerationParams::from_array(parms);
        let network = generate(seed, &params)?;
        let expected = Instance::new(seed, problem, params, network).to_string();
        assert_eq!(fs::read_to_string(dir.path().join(problem.to_string()))?, expected);
    }
    Ok(())
}

#[test]
fn stdout_mode_renders_dimacs_text() -> TestResult {
    let dir = temp_dir();
    let input = write_records(&dir, &[record(REFERENCE_SEED, 3, &MIN_COST_FLOW)])?;
    let summary = run_command(GenerateCommand {
        input: Some(input),
        output_dir: None,
        stdout: true,
    })?;

    let mut buffer = Vec::new();
    render_summary(&summary, &mut buffer)?;
    let text = String::from_utf8(buffer)?;
    assert!(text.starts_with("c NETGEN flow network generator (C version)\n"));
    assert!(text.contains("c  Problem  3 input parameters\n"));
    assert!(!dir.path().join("3").exists());
    Ok(())
}

#[test]
fn file_mode_renders_one_line_per_problem() -> TestResult {
    let dir = temp_dir();
    let input = write_records(
        &dir,
        &[
            record(1, 10, &MIN_COST_FLOW),
            record(2, 11, &ASSIGNMENT),
        ],
    )?;
    let summary = run_command(to_directory(input, dir.path()))?;

    let mut buffer = Vec::new();
    render_summary(&summary, &mut buffer)?;
    let text = String::from_utf8(buffer)?;
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("problem 10: min, 10 nodes, "));
    assert!(lines[1].starts_with("problem 11: asn, 20 nodes, "));
    Ok(())
}

#[test]
fn empty_summary_renders_nothing() -> TestResult {
    let mut buffer = Vec::new();
    render_summary(&ExecutionSummary::default(), &mut buffer)?;
    assert!(buffer.is_empty());
    Ok(())
}

#[test]
fn generation_failure_names_the_problem() -> TestResult {
    let dir = temp_dir();
    // Sources exceed nodes in the second record.
    let input = write_records(
        &dir,
        &[
            record(1, 1, &MIN_COST_FLOW),
            record(1, 2, &[5, 10, 2, 15, 1, 9, 50, 0, 0, 0, 0, 1, 1]),
        ],
    )?;
    let err = run_command_expecting_error(
        to_directory(input, dir.path()),
        "inconsistent parameters must fail",
    );
    match err {
        CliError::Core { problem, source } => {
            assert_eq!(problem, 2);
            assert_eq!(source.status(), -3);
            assert!(matches!(source, NetgenError::BadParms { .. }));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    // Records before the failure are kept.
    assert!(dir.path().join("1").exists());
    assert!(!dir.path().join("2").exists());
    Ok(())
}

#[rstest]
#[case::bad_seed(record(0, 1, &MIN_COST_FLOW))]
#[case::partial("17 1 10 2 2".to_owned())]
#[case::not_a_number("17 one".to_owned())]
#[case::empty(String::new())]
fn malformed_input_is_rejected_before_generation(#[case] contents: String) -> TestResult {
    let dir = temp_dir();
    let input = write_records(&dir, &[contents])?;
    let out = dir.path().join("out");
    let err = run_command_expecting_error(to_directory(input, &out), "input is malformed");
    assert!(matches!(
        err,
        CliError::InvalidRecord { .. }
            | CliError::IncompleteRecord { .. }
            | CliError::Parse { .. }
            | CliError::EmptyInput
    ));
    assert!(!out.exists());
    Ok(())
}

#[test]
fn missing_input_reports_path() {
    let dir = temp_dir();
    let missing = dir.path().join("missing.txt");
    let err = read_input(&missing).expect_err("file does not exist");
    match err {
        CliError::Io { path, .. } => assert_eq!(path, missing),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn write_instance_creates_nested_directories() -> TestResult {
    let dir = temp_dir();
    let params = GenerationParams::from_array(MIN_COST_FLOW);
    let instance = Instance::new(
        REFERENCE_SEED,
        12,
        params,
        generate(REFERENCE_SEED, &params)?,
    );
    let nested = dir.path().join("a").join("b");
    let path = write_instance(&nested, &instance)?;
    assert_eq!(path, nested.join("12"));
    assert_eq!(fs::read_to_string(path)?, instance.to_string());
    Ok(())
}

#[test]
fn command_records_tracing() -> TestResult {
    let dir = temp_dir();
    let input = write_records(&dir, &[record(REFERENCE_SEED, 4, &MIN_COST_FLOW)])?;
    let (result, layer) = capture(|| run_command(to_directory(input, dir.path())));
    let summary = result?;

    let span = layer
        .span_named("cli.generate")
        .expect("cli.generate span must exist");
    assert_eq!(span.field("records"), Some("1"));
    assert!(span.field("input").is_some_and(|value| value.ends_with("records.txt")));

    let record_span = layer
        .span_named("cli.generate_record")
        .expect("cli.generate_record span must exist");
    assert_eq!(record_span.field("problem"), Some("4"));
    assert!(layer.span_named("core.generate").is_some());

    assert!(layer.events().iter().any(|event| {
        event.level == Level::INFO
            && event.message() == Some("problem generated")
            && event.fields.get("arcs") == Some(&summary.problems[0].arcs.to_string())
    }));
    assert!(layer.has_event(Level::INFO, "command completed"));
    Ok(())
}
